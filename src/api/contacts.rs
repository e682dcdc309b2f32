//! Contacts service.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::Service;
use crate::Result;

/// Service for contact operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: brightpearl_rs::BrightpearlClient) -> brightpearl_rs::Result<()> {
/// let contacts = client.contacts().fetch_range("200-320").await?;
/// println!("fetched {} contacts", contacts.len());
/// # Ok(())
/// # }
/// ```
pub struct ContactsService {
    inner: Arc<ClientInner>,
}

impl ContactsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch all contacts in an identifier range and merge the per-chunk
    /// responses into one ordered sequence.
    pub async fn fetch_range(&self, range: &str) -> Result<Vec<Value>> {
        self.inner
            .fetch_and_merge(Service::Contact, range, "response", None)
            .await
    }

    /// Fetch the postal addresses in an identifier range.
    pub async fn postal_addresses(&self, range: &str) -> Result<Vec<Value>> {
        self.inner
            .fetch_and_merge(Service::PostalAddress, range, "response", None)
            .await
    }
}
