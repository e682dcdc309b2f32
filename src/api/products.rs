//! Products service.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::client::ClientInner;
use crate::models::Service;
use crate::{Error, Result};

/// Service for product operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: brightpearl_rs::BrightpearlClient) -> brightpearl_rs::Result<()> {
/// // Plain product rows
/// let products = client.products().fetch_range("1-450").await?;
///
/// // With custom fields included
/// let detailed = client.products().fetch_range_with_custom_fields("1-450").await?;
/// # Ok(())
/// # }
/// ```
pub struct ProductsService {
    inner: Arc<ClientInner>,
}

impl ProductsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch all products in an identifier range and merge the per-chunk
    /// responses into one ordered sequence.
    pub async fn fetch_range(&self, range: &str) -> Result<Vec<Value>> {
        self.inner
            .fetch_and_merge(Service::Product, range, "response", None)
            .await
    }

    /// Fetch a product range with the optional custom-field set included
    /// on every row.
    pub async fn fetch_range_with_custom_fields(&self, range: &str) -> Result<Vec<Value>> {
        self.inner
            .fetch_and_merge(
                Service::Product,
                range,
                "response",
                Some("?includeOptional=customFields"),
            )
            .await
    }

    /// Fetch the supplier mapping for a product range.
    ///
    /// Each sub-request's `/supplier` response is a keyed object; the
    /// per-chunk objects are folded into one mapping.
    pub async fn suppliers(&self, range: &str) -> Result<Map<String, Value>> {
        let uris = self.inner.sub_request_uris(Service::Product, range).await?;

        let mut suppliers = Map::new();
        for uri in &uris {
            let uri = format!("{uri}/supplier");
            let chunk: Value = self.inner.get_enveloped(&uri).await?;
            let entries = chunk
                .as_object()
                .ok_or_else(|| Error::malformed(format!("{uri}: expected a supplier mapping")))?;
            for (key, value) in entries {
                suppliers.insert(key.clone(), value.clone());
            }
        }

        Ok(suppliers)
    }
}
