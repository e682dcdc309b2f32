//! Search service.
//!
//! Brightpearl search endpoints answer in a compact positional-array
//! form. SKU and EAN lookups flatten the positions into a
//! [`ProductSearchRecord`]; every other method returns the raw rows.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{ProductSearchRecord, Service};
use crate::{Error, Result};

/// Service for search and lookup operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: brightpearl_rs::BrightpearlClient) -> brightpearl_rs::Result<()> {
/// let record = client.search().product_by_sku("MAST-001").await?;
/// println!("{} -> {}", record.sku, record.product_id);
/// # Ok(())
/// # }
/// ```
pub struct SearchService {
    inner: Arc<ClientInner>,
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    results: Vec<Vec<Value>>,
}

impl SearchService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Run a filtered search against a service family and return the raw
    /// positional result rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the search yields zero rows.
    pub async fn lookup(
        &self,
        service: Service,
        field: &str,
        value: &str,
    ) -> Result<Vec<Vec<Value>>> {
        let uri = format!(
            "{}{}-service/{}-search",
            self.inner.config.base_uri(),
            service.family(),
            service.family()
        );

        let results: SearchResults = self
            .inner
            .get_enveloped_with_query(&uri, &[(field, value)])
            .await?;

        if results.results.is_empty() {
            return Err(Error::NotFound(format!(
                "search on {field}={value} returned no rows"
            )));
        }

        Ok(results.results)
    }

    /// Look a product up by SKU, flattening the first result row into
    /// named fields.
    pub async fn product_by_sku(&self, sku: &str) -> Result<ProductSearchRecord> {
        self.product_lookup("sku", sku).await
    }

    /// Look a product up by EAN, flattening the first result row into
    /// named fields.
    pub async fn product_by_ean(&self, ean: &str) -> Result<ProductSearchRecord> {
        self.product_lookup("ean", ean).await
    }

    async fn product_lookup(&self, field: &str, value: &str) -> Result<ProductSearchRecord> {
        let rows = self.lookup(Service::Product, field, value).await?;
        // lookup() guarantees at least one row
        ProductSearchRecord::from_row(&rows[0])
    }
}
