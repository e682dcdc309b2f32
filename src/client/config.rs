//! Client configuration options.

use secrecy::SecretString;
use std::time::Duration;

use crate::models::{AccountCode, ApiVersion, AppRef, Datacentre};
use crate::Result;

/// Configuration for the Brightpearl client.
///
/// The four required pieces (datacentre, API version, account code, app
/// reference) determine every URI the client issues:
///
/// - base URI: `https://ws-<datacentre>.brightpearl.com/<api_version>/<account_code>/`
/// - authorisation URI: `https://ws-<datacentre>.brightpearl.com/<account_code>/authorise`
///
/// # Example
///
/// ```
/// use brightpearl_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("eu1", "2.0.0", "acme", "acme_app")
///     .expect("valid config")
///     .with_account_token("f4dtgpjl89z0aftgpj89z0a")
///     .with_timeout(Duration::from_secs(60));
///
/// assert_eq!(
///     config.base_uri(),
///     "https://ws-eu1.brightpearl.com/2.0.0/acme/"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Regional datacentre the account lives in.
    pub datacentre: Datacentre,
    /// API version segment of the request URI.
    pub api_version: ApiVersion,
    /// Per-customer account code.
    pub account_code: AccountCode,
    /// Developer app reference, sent on every request.
    pub app_ref: AppRef,
    /// Account token to authenticate with, if one was issued.
    pub account_token: Option<SecretString>,
    /// Request timeout.
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
    /// Override for the scheme-and-host part of every URI. Intended for
    /// tests and proxies; `None` derives it from the datacentre.
    pub api_root: Option<String>,
}

impl ClientConfig {
    /// Create a configuration, validating each part.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) when the
    /// datacentre or API version is malformed.
    pub fn new(
        datacentre: impl Into<String>,
        api_version: &str,
        account_code: impl Into<String>,
        app_ref: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            datacentre: Datacentre::new(datacentre)?,
            api_version: ApiVersion::new(api_version)?,
            account_code: AccountCode::new(account_code),
            app_ref: AppRef::new(app_ref),
            account_token: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("brightpearl-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            api_root: None,
        })
    }

    /// Set the account token issued when the app was installed.
    pub fn with_account_token(mut self, token: impl Into<String>) -> Self {
        self.account_token = Some(SecretString::from(token.into()));
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the scheme-and-host part of every URI.
    ///
    /// Trailing slashes are trimmed. Use this to point the client at a
    /// local mock server or a forwarding proxy.
    pub fn with_api_root(mut self, root: impl Into<String>) -> Self {
        let root = root.into();
        self.api_root = Some(root.trim_end_matches('/').to_string());
        self
    }

    /// The scheme-and-host every URI starts with.
    pub fn api_root(&self) -> String {
        match &self.api_root {
            Some(root) => root.clone(),
            None => format!("https://ws-{}.brightpearl.com", self.datacentre),
        }
    }

    /// The base URI all service resources hang off, with trailing slash.
    pub fn base_uri(&self) -> String {
        format!(
            "{}/{}/{}/",
            self.api_root(),
            self.api_version,
            self.account_code
        )
    }

    /// The staff-token authorisation URI (no API version segment).
    pub fn authorise_uri(&self) -> String {
        format!("{}/{}/authorise", self.api_root(), self.account_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ClientConfig {
        ClientConfig::new("eu1", "2.0.0", "testcompany", "testcompany_testapp").unwrap()
    }

    #[test]
    fn test_base_uri() {
        assert_eq!(
            test_config().base_uri(),
            "https://ws-eu1.brightpearl.com/2.0.0/testcompany/"
        );
    }

    #[test]
    fn test_authorise_uri() {
        assert_eq!(
            test_config().authorise_uri(),
            "https://ws-eu1.brightpearl.com/testcompany/authorise"
        );
    }

    #[test]
    fn test_api_root_override() {
        let config = test_config().with_api_root("http://127.0.0.1:9999/");
        assert_eq!(
            config.base_uri(),
            "http://127.0.0.1:9999/2.0.0/testcompany/"
        );
        assert_eq!(
            config.authorise_uri(),
            "http://127.0.0.1:9999/testcompany/authorise"
        );
    }

    #[test]
    fn test_invalid_parts_rejected() {
        assert!(ClientConfig::new("EU1", "2.0.0", "acme", "app").is_err());
        assert!(ClientConfig::new("eu1", "v2", "acme", "app").is_err());
    }
}
