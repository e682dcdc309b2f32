//! # brightpearl-rs
//!
//! A Rust client for the Brightpearl e-commerce/ERP REST API.
//!
//! This crate wraps the Brightpearl order, contact, product, pricing and
//! warehouse services: it builds request URIs from configuration,
//! attaches the Brightpearl authentication headers, issues
//! GET/PUT/POST/OPTIONS calls, and reshapes the JSON responses where the
//! remote's conventions call for it.
//!
//! ## Features
//!
//! - **Range aggregation**: large identifier ranges are split into the
//!   sub-requests the remote suggests via OPTIONS discovery, falling
//!   back to locally planned 200-wide windows, and the per-chunk
//!   responses are merged back into one result set
//! - **Authentication**: account tokens and staff-token exchange, held
//!   as an immutable credential value
//! - **Typed seams**: newtyped identifiers, a closed service
//!   enumeration, and positional search rows flattened into named fields
//! - **Async-first**: built on Tokio; multi-chunk fetches are strictly
//!   sequential, each response fully consumed before the next request
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use brightpearl_rs::{BrightpearlClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> brightpearl_rs::Result<()> {
//!     let config = ClientConfig::new("eu1", "2.0.0", "acme", "acme_app")?
//!         .with_account_token("f4dtgpjl89z0aftgpj89z0a");
//!     let client = BrightpearlClient::new(config)?;
//!
//!     // Fetch a span of orders; sub-requests and merging are handled
//!     // by the client.
//!     let orders = client.orders().fetch_range("500500-500570").await?;
//!     println!("fetched {} orders", orders.len());
//!
//!     // Price lookup across price lists
//!     let book = client.prices().product_prices("10001-10002").await?;
//!     for (product, lists) in &book {
//!         println!("product {product}: {} price lists", lists.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Staff authentication
//!
//! ```rust,no_run
//! use brightpearl_rs::{BrightpearlClient, ClientConfig};
//!
//! # async fn example() -> brightpearl_rs::Result<()> {
//! let config = ClientConfig::new("eu1", "2.0.0", "acme", "acme_app")?;
//! let client = BrightpearlClient::new(config)?;
//!
//! // Exchange staff credentials; the staff token replaces the account
//! // token on every subsequent request.
//! client.acquire_staff_token("user@acme.example", "hunter2").await?;
//!
//! let record = client.search().product_by_sku("MAST-001").await?;
//! println!("{} is product {}", record.sku, record.product_id);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod plan;

// Re-export primary types at crate root for convenience
pub use auth::{Credential, Session};
pub use client::{BrightpearlClient, ClientConfig};
pub use error::{Error, Result};
pub use models::{
    AccountCode, ApiVersion, AppRef, Datacentre, OrderId, PriceBook, PriceListId, ProductId,
    ProductSearchRecord, Service,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use brightpearl_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ContactsService, GoodsNoteDirection, OrdersService, PricesService, ProductsService,
        SearchService, WarehouseService,
    };
    pub use crate::auth::{Credential, Session};
    pub use crate::client::{BrightpearlClient, ClientConfig};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        AccountCode, ApiVersion, AppRef, Datacentre, OrderId, PriceBook, PriceListId,
        ProductId, ProductSearchRecord, Service,
    };
    pub use crate::plan::{chunk, join_ids, plan_ranges, ChunkBy, RangeSpec, MAX_RANGE_WINDOW};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_uris() {
        let config = ClientConfig::new("eu1", "2.0.0", "testcompany", "app").unwrap();
        assert_eq!(
            config.base_uri(),
            "https://ws-eu1.brightpearl.com/2.0.0/testcompany/"
        );
        assert_eq!(
            config.authorise_uri(),
            "https://ws-eu1.brightpearl.com/testcompany/authorise"
        );
    }

    #[test]
    fn test_plan_ranges_examples() {
        assert_eq!(
            plan::plan_ranges("500500-500570").unwrap(),
            vec!["500500-500570"]
        );
        assert_eq!(
            plan::plan_ranges("1-450").unwrap(),
            vec!["1-200", "201-400", "401-450"]
        );
    }

    #[test]
    fn test_service_lookup() {
        assert_eq!(Service::from_name("order").unwrap(), Service::Order);
        assert!(Service::from_name("nonsense").is_err());
    }
}
