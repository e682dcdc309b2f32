//! Orders service.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{OrderId, Service};
use crate::Result;

/// Service for order operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: brightpearl_rs::BrightpearlClient) -> brightpearl_rs::Result<()> {
/// // Fetch every order in a range; the remote decides the sub-requests.
/// let orders = client.orders().fetch_range("500500-500570").await?;
/// for order in &orders {
///     println!("{:?}", order.get("id"));
/// }
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch all orders in an identifier range and merge the per-chunk
    /// responses into one ordered sequence.
    ///
    /// The range spec is `"N"` for a single order or `"N-M"` for an
    /// inclusive span. Sub-requests follow the remote's OPTIONS
    /// suggestions where available and locally planned 200-wide windows
    /// otherwise.
    pub async fn fetch_range(&self, range: &str) -> Result<Vec<Value>> {
        self.inner
            .fetch_and_merge(Service::Order, range, "response", None)
            .await
    }

    /// Fetch a single order.
    pub async fn get(&self, id: OrderId) -> Result<Vec<Value>> {
        let uri = self.inner.resource_uri(Service::Order, Some(&id.to_string()));
        self.inner.get_enveloped(&uri).await
    }

    /// Create an order. The response envelope carries the new order id.
    pub async fn create<B: Serialize>(&self, body: &B) -> Result<Value> {
        let uri = format!(
            "{}{}-service/{}",
            self.inner.config.base_uri(),
            Service::Order.family(),
            Service::Order.resource()
        );
        let body = serde_json::to_value(body)?;
        self.inner
            .send(reqwest::Method::POST, &uri, Some(&body))
            .await
    }
}
