//! Warehouse service.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::ClientInner;
use crate::models::OrderId;
use crate::plan::{chunk, join_ids, ChunkBy, MAX_RANGE_WINDOW};
use crate::{Error, Result};

/// Which goods-note direction to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoodsNoteDirection {
    /// Goods-in notes (receipts).
    In,
    /// Goods-out notes (despatches).
    Out,
}

impl GoodsNoteDirection {
    fn as_str(&self) -> &'static str {
        match self {
            GoodsNoteDirection::In => "in",
            GoodsNoteDirection::Out => "out",
        }
    }
}

/// Service for warehouse operations (goods notes, stock levels).
///
/// The warehouse endpoints are addressed by comma-joined order lists
/// rather than OPTIONS discovery, so large requests are chunked locally.
///
/// # Example
///
/// ```no_run
/// use brightpearl_rs::api::GoodsNoteDirection;
/// use brightpearl_rs::OrderId;
///
/// # async fn example(client: brightpearl_rs::BrightpearlClient) -> brightpearl_rs::Result<()> {
/// let orders: Vec<OrderId> = (500500..500520).map(OrderId::new).collect();
/// let notes = client
///     .warehouse()
///     .goods_notes(&orders, GoodsNoteDirection::In)
///     .await?;
/// println!("{} goods-in notes", notes.len());
/// # Ok(())
/// # }
/// ```
pub struct WarehouseService {
    inner: Arc<ClientInner>,
}

impl WarehouseService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the goods notes for a list of orders, merged into one keyed
    /// mapping.
    ///
    /// The order list is split into windows of at most 200 identifiers
    /// (the remote's per-request cap) and one request is issued per
    /// window, in order.
    pub async fn goods_notes(
        &self,
        orders: &[OrderId],
        direction: GoodsNoteDirection,
    ) -> Result<Map<String, Value>> {
        let windows = chunk(orders, ChunkBy::Size(MAX_RANGE_WINDOW as usize))?;

        let mut notes = Map::new();
        for window in &windows {
            let uri = format!(
                "{}warehouse-service/order/{}/goods-note/goods-{}/",
                self.inner.config.base_uri(),
                join_ids(window),
                direction.as_str()
            );
            let chunk_notes: Value = self.inner.get_enveloped(&uri).await?;
            let entries = chunk_notes
                .as_object()
                .ok_or_else(|| Error::malformed(format!("{uri}: expected a goods-note mapping")))?;
            for (key, value) in entries {
                notes.insert(key.clone(), value.clone());
            }
        }

        Ok(notes)
    }

    /// Fetch stock levels for a product range.
    pub async fn stock_levels(&self, range: &str) -> Result<Value> {
        let uri = format!(
            "{}warehouse-service/product-availability/{}",
            self.inner.config.base_uri(),
            range
        );
        self.inner.get_enveloped(&uri).await
    }

    /// Create a goods-out note for an order. The response carries the
    /// new note's reference.
    pub async fn create_goods_out<B: Serialize>(&self, order: OrderId, body: &B) -> Result<Value> {
        let uri = format!(
            "{}warehouse-service/order/{}/goods-note/goods-out",
            self.inner.config.base_uri(),
            order
        );
        let body = serde_json::to_value(body)?;
        let value = self
            .inner
            .send(reqwest::Method::POST, &uri, Some(&body))
            .await?;

        value
            .get("response")
            .and_then(|r| r.as_array())
            .and_then(|refs| refs.first())
            .cloned()
            .ok_or_else(|| Error::malformed(format!("{uri}: expected a note reference list")))
    }
}
