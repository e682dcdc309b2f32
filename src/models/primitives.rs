//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around the string and
//! numeric identifiers used by the Brightpearl API so they cannot be
//! mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Brightpearl datacentre code (e.g. `"eu1"`, `"use"`).
///
/// The datacentre determines which regional host the client talks to:
/// `https://ws-<datacentre>.brightpearl.com`.
///
/// # Example
///
/// ```
/// use brightpearl_rs::Datacentre;
///
/// let dc = Datacentre::new("eu1").expect("valid datacentre");
/// assert_eq!(dc.as_str(), "eu1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Datacentre(String);

impl Datacentre {
    /// Create a new datacentre code, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is empty or contains characters that
    /// cannot appear in a hostname label.
    pub fn new(code: impl Into<String>) -> crate::Result<Self> {
        let code = code.into();
        if code.is_empty() {
            return Err(crate::Error::Config(
                "datacentre code must not be empty".to_string(),
            ));
        }
        if !code
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(crate::Error::Config(format!(
                "invalid datacentre code: {code}"
            )));
        }
        Ok(Self(code))
    }

    /// Get the datacentre code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Datacentre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Datacentre {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A Brightpearl account code (the per-customer URI segment).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountCode(String);

impl AccountCode {
    /// Create a new account code.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the account code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A Brightpearl developer app reference, sent as the
/// `brightpearl-app-ref` header on every request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppRef(String);

impl AppRef {
    /// Create a new app reference.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the app reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AppRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AppRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// API version segment of the request URI (e.g. `"2.0.0"`).
///
/// # Example
///
/// ```
/// use brightpearl_rs::ApiVersion;
///
/// let version = ApiVersion::new("2.0.0").expect("valid version");
/// assert_eq!(version.as_str(), "2.0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Create a new API version, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the version is empty or is not a dotted
    /// sequence of numbers.
    pub fn new(version: &str) -> crate::Result<Self> {
        if version.is_empty() {
            return Err(crate::Error::Config(
                "API version must not be empty".to_string(),
            ));
        }
        let numeric_dotted = version
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
        if !numeric_dotted {
            return Err(crate::Error::Config(format!(
                "invalid API version: {version}. Expected e.g. 2.0.0"
            )));
        }
        Ok(Self(version.to_string()))
    }

    /// Get the version as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A numeric Brightpearl product identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    /// Create a new product id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw numeric id.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A numeric Brightpearl price-list identifier.
///
/// Each product may carry a price under several price lists (retail,
/// trade, cost, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PriceListId(pub i64);

impl PriceListId {
    /// Create a new price-list id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw numeric id.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PriceListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PriceListId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A numeric Brightpearl order identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl OrderId {
    /// Create a new order id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw numeric id.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datacentre_valid() {
        let dc = Datacentre::new("eu1").unwrap();
        assert_eq!(dc.as_str(), "eu1");
        assert_eq!(dc.to_string(), "eu1");
    }

    #[test]
    fn test_datacentre_invalid() {
        assert!(Datacentre::new("").is_err());
        assert!(Datacentre::new("EU1").is_err());
        assert!(Datacentre::new("eu1/evil").is_err());
    }

    #[test]
    fn test_api_version_valid() {
        assert!(ApiVersion::new("2.0.0").is_ok());
        assert!(ApiVersion::new("2").is_ok());
    }

    #[test]
    fn test_api_version_invalid() {
        assert!(ApiVersion::new("").is_err());
        assert!(ApiVersion::new("v2").is_err());
        assert!(ApiVersion::new("2..0").is_err());
    }

    #[test]
    fn test_numeric_ids_display() {
        assert_eq!(ProductId::new(1001).to_string(), "1001");
        assert_eq!(PriceListId::new(0).to_string(), "0");
        assert_eq!(OrderId::new(500500).to_string(), "500500");
    }
}
