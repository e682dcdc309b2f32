//! Credential management for the Brightpearl API.

use secrecy::SecretString;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::AppRef;
use crate::{Error, Result};

/// An immutable credential value injected into request headers.
///
/// Exactly one of the two token kinds is in force at a time; the staff
/// exchange replaces the whole value, never individual fields.
#[derive(Clone)]
pub enum Credential {
    /// No token; only the app reference header is sent. Useful for the
    /// authorisation call itself.
    Anonymous,
    /// A long-lived account token (`brightpearl-account-token` header).
    AccountToken(SecretString),
    /// A staff token obtained by exchanging staff credentials
    /// (`brightpearl-staff-token` header).
    StaffToken(SecretString),
}

impl Credential {
    /// Create an account-token credential.
    pub fn account_token(token: impl Into<String>) -> Self {
        Credential::AccountToken(SecretString::from(token.into()))
    }

    /// Create a staff-token credential.
    pub fn staff_token(token: impl Into<String>) -> Self {
        Credential::StaffToken(SecretString::from(token.into()))
    }

    /// The header name and token this credential contributes, if any.
    pub(crate) fn header(&self) -> Option<(&'static str, &SecretString)> {
        match self {
            Credential::Anonymous => None,
            Credential::AccountToken(token) => Some(("brightpearl-account-token", token)),
            Credential::StaffToken(token) => Some(("brightpearl-staff-token", token)),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::Anonymous => write!(f, "Credential::Anonymous"),
            Credential::AccountToken(_) => write!(f, "Credential::AccountToken([REDACTED])"),
            Credential::StaffToken(_) => write!(f, "Credential::StaffToken([REDACTED])"),
        }
    }
}

/// The client's current-credential handle.
///
/// The credential is set at construction (or [`Credential::Anonymous`] if
/// the configuration carries no account token) and replaced wholesale by
/// the staff-token exchange. Request issuance only ever reads it.
#[derive(Clone)]
pub struct Session {
    inner: Arc<RwLock<Credential>>,
}

impl Session {
    /// Create a session holding the given credential.
    pub fn new(credential: Credential) -> Self {
        Self {
            inner: Arc::new(RwLock::new(credential)),
        }
    }

    /// Create a session with no token.
    pub fn anonymous() -> Self {
        Self::new(Credential::Anonymous)
    }

    /// Create a session from an account token.
    pub fn from_account_token(token: impl Into<String>) -> Self {
        Self::new(Credential::account_token(token))
    }

    /// Read the current credential.
    pub async fn credential(&self) -> Credential {
        self.inner.read().await.clone()
    }

    /// Replace the current credential wholesale.
    pub async fn replace(&self, credential: Credential) {
        *self.inner.write().await = credential;
    }

    /// Exchange staff credentials for a staff token and install it as the
    /// current credential.
    ///
    /// The exchange posts
    /// `{"apiAccountCredentials": {"emailAddress": ..., "password": ...}}`
    /// to the account's authorisation endpoint, authenticated by the app
    /// reference alone. On success the prior credential (account token or
    /// otherwise) is replaced by the staff token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] when the remote rejects the
    /// credentials or the response envelope carries no token.
    pub(crate) async fn exchange_staff_token(
        &self,
        http: &reqwest::Client,
        authorise_url: &str,
        app_ref: &AppRef,
        email: &str,
        password: &str,
    ) -> Result<()> {
        let body = serde_json::json!({
            "apiAccountCredentials": {
                "emailAddress": email,
                "password": password,
            }
        });

        let response = http
            .post(authorise_url)
            .header("brightpearl-app-ref", app_ref.as_str())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "staff token exchange failed ({status}): {body:?}"
            )));
        }

        let envelope: AuthEnvelope = response.json().await?;
        let token = envelope
            .response
            .ok_or_else(|| Error::Authentication("authorise response carried no token".into()))?;

        self.replace(Credential::staff_token(token)).await;
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("credential", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct AuthEnvelope {
    response: Option<String>,
}
