//! HTTP client and service layer for the Brightpearl API.
//!
//! This module provides the main entry point [`BrightpearlClient`] and
//! its configuration.
//!
//! # Example
//!
//! ```no_run
//! use brightpearl_rs::{BrightpearlClient, ClientConfig};
//!
//! # async fn example() -> brightpearl_rs::Result<()> {
//! let config = ClientConfig::new("eu1", "2.0.0", "acme", "acme_app")?
//!     .with_account_token("f4dtgpjl89z0aftgpj89z0a");
//! let client = BrightpearlClient::new(config)?;
//!
//! let products = client.products().fetch_range("1-450").await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::ClientConfig;
pub use http::BrightpearlClient;
pub(crate) use http::ClientInner;
