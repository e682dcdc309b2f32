//! Error types for the Brightpearl API client.
//!
//! This module provides a single error type covering every failure mode the
//! crate can surface, from transport errors to malformed response shapes.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Brightpearl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Brightpearl API operations.
///
/// Transport failures and JSON decode failures pass through unwrapped; the
/// crate never retries. Everything else is classified so callers can
/// distinguish "remote had no data" from "client indexed into the wrong
/// shape".
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed (connection, TLS, timeout). Passed through from
    /// the transport unmodified.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a non-2xx response
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// Staff token exchange failed
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Bad caller input (unknown service name, zero chunk size, invalid
    /// configuration value)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed identifier range spec (not `"N"` or `"N-M"`, or N > M)
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Capability discovery (OPTIONS) failed or returned an unexpected shape
    #[error("Discovery failed: {0}")]
    Discovery(String),

    /// Response JSON was missing an expected key or had the wrong shape
    #[error("Malformed response: {context}")]
    MalformedResponse {
        /// Which key or shape was expected, and where
        context: String,
    },

    /// Search yielded zero rows
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::Config(_) | Error::InvalidRange(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if a search or lookup found no matching rows.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Shorthand for a [`Error::MalformedResponse`] with the given context.
    pub(crate) fn malformed(context: impl Into<String>) -> Self {
        Error::MalformedResponse {
            context: context.into(),
        }
    }

    /// Create an API error from a non-2xx response body.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let message = body
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|errs| errs.first())
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            status,
            message,
            body,
        }
    }
}
