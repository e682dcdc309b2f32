//! Authentication for the Brightpearl API.
//!
//! Brightpearl authenticates requests with two headers: the developer
//! app reference (`brightpearl-app-ref`, always sent) and one token
//! header, either an account token issued when the app was installed or
//! a staff token obtained by exchanging a staff member's credentials.
//!
//! The [`Credential`] in force is an immutable value held by a
//! [`Session`]; the staff exchange replaces it wholesale.
//!
//! ```no_run
//! use brightpearl_rs::{BrightpearlClient, ClientConfig};
//!
//! # async fn example() -> brightpearl_rs::Result<()> {
//! let config = ClientConfig::new("eu1", "2.0.0", "acme", "acme_app")?
//!     .with_account_token("f4dtgpjl89z0aftgpj89z0a");
//! let client = BrightpearlClient::new(config)?;
//!
//! // Swap the account token for a staff token
//! client.acquire_staff_token("user@acme.example", "hunter2").await?;
//! # Ok(())
//! # }
//! ```

mod session;

pub use session::{Credential, Session};
