//! Data models for the Brightpearl API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Core newtypes like [`Datacentre`], [`ProductId`], etc.
//! - [`service`] - The closed set of addressable service endpoints
//! - [`price`] - Product price rows and the aggregated [`PriceBook`]
//! - [`search`] - Positional search rows flattened into named fields

pub mod price;
pub mod primitives;
pub mod search;
pub mod service;

// Re-export commonly used types
pub use price::{PriceBook, PriceListEntry, ProductPrice};
pub use primitives::{
    AccountCode, ApiVersion, AppRef, Datacentre, OrderId, PriceListId, ProductId,
};
pub use search::ProductSearchRecord;
pub use service::Service;
