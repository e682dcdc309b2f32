//! HTTP client implementation for the Brightpearl API.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::api::{
    ContactsService, OrdersService, PricesService, ProductsService, SearchService,
    WarehouseService,
};
use crate::auth::{Credential, Session};
use crate::models::Service;
use crate::plan::RangeSpec;
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the Brightpearl API.
///
/// The client provides access to the service families through method
/// calls that return service structs. It manages header construction,
/// request issuance, and the OPTIONS-driven range aggregation.
///
/// # Example
///
/// ```no_run
/// use brightpearl_rs::{BrightpearlClient, ClientConfig};
///
/// # async fn example() -> brightpearl_rs::Result<()> {
/// let config = ClientConfig::new("eu1", "2.0.0", "acme", "acme_app")?
///     .with_account_token("f4dtgpjl89z0aftgpj89z0a");
/// let client = BrightpearlClient::new(config)?;
///
/// // Fetch a large order range; the client splits it into the
/// // sub-requests the remote suggests and merges the responses.
/// let orders = client.orders().fetch_range("500500-500570").await?;
/// println!("fetched {} orders", orders.len());
/// # Ok(())
/// # }
/// ```
pub struct BrightpearlClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
}

impl BrightpearlClient {
    /// Create a new client from a configuration.
    ///
    /// When the configuration carries an account token the client
    /// authenticates with it; otherwise only the app reference header is
    /// sent until a staff token is acquired.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let session = match &config.account_token {
            Some(token) => Session::new(Credential::AccountToken(token.clone())),
            None => Session::anonymous(),
        };
        Self::with_session(session, config)
    }

    /// Create a new client with an existing session.
    pub fn with_session(session: Session, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                session,
                config,
            }),
        })
    }

    /// Exchange a staff member's credentials for a staff token.
    ///
    /// On success the staff token replaces the current credential
    /// wholesale; subsequent requests send `brightpearl-staff-token`
    /// instead of `brightpearl-account-token`.
    pub async fn acquire_staff_token(&self, email: &str, password: &str) -> Result<()> {
        self.inner
            .session
            .exchange_staff_token(
                &self.inner.http,
                &self.inner.config.authorise_uri(),
                &self.inner.config.app_ref,
                email,
                password,
            )
            .await
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the contacts service.
    pub fn contacts(&self) -> ContactsService {
        ContactsService::new(self.inner.clone())
    }

    /// Get the products service.
    pub fn products(&self) -> ProductsService {
        ProductsService::new(self.inner.clone())
    }

    /// Get the prices service.
    pub fn prices(&self) -> PricesService {
        PricesService::new(self.inner.clone())
    }

    /// Get the warehouse service.
    pub fn warehouse(&self) -> WarehouseService {
        WarehouseService::new(self.inner.clone())
    }

    /// Get the search service.
    pub fn search(&self) -> SearchService {
        SearchService::new(self.inner.clone())
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Build the URI for a service resource, optionally addressing an
    /// identifier range.
    ///
    /// ```
    /// use brightpearl_rs::{BrightpearlClient, ClientConfig, Service};
    ///
    /// # fn example() -> brightpearl_rs::Result<()> {
    /// let config = ClientConfig::new("eu1", "2.0.0", "testcompany", "app")?;
    /// let client = BrightpearlClient::new(config)?;
    /// assert_eq!(
    ///     client.resource_uri(Service::Order, Some("500500-500570")),
    ///     "https://ws-eu1.brightpearl.com/2.0.0/testcompany/order-service/order/500500-500570"
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn resource_uri(&self, service: Service, range: Option<&str>) -> String {
        self.inner.resource_uri(service, range)
    }

    /// Ask the remote which sub-resource URIs satisfy an identifier
    /// range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Discovery`] when the remote rejects the OPTIONS
    /// call or answers with an unexpected shape, so the caller can
    /// decide whether to fall back to [`plan_ranges`](crate::plan::plan_ranges).
    pub async fn discover_sub_uris(&self, service: Service, range: &str) -> Result<Vec<String>> {
        self.inner.discover_sub_uris(service, range).await
    }

    /// Fetch every sub-request for an identifier range and merge the
    /// `item_key`-keyed list from each response into one ordered
    /// sequence.
    ///
    /// Sub-requests follow the remote's OPTIONS suggestions where
    /// available, and locally planned 200-wide windows otherwise. The
    /// per-service wrappers ([`orders()`](Self::orders),
    /// [`products()`](Self::products), ...) cover the common cases;
    /// this entry point is for envelopes keyed by something other than
    /// `"response"`.
    pub async fn fetch_and_merge(
        &self,
        service: Service,
        range: &str,
        item_key: &str,
    ) -> Result<Vec<Value>> {
        self.inner.fetch_and_merge(service, range, item_key, None).await
    }

    /// Issue a GET against a caller-built URI and return the decoded
    /// JSON body.
    pub async fn get_raw(&self, uri: &str) -> Result<Value> {
        self.inner.send(Method::GET, uri, None).await
    }

    /// Issue a PUT against a caller-built URI.
    pub async fn put_raw<B: Serialize>(&self, uri: &str, body: &B) -> Result<Value> {
        let body = serde_json::to_value(body)?;
        self.inner.send(Method::PUT, uri, Some(&body)).await
    }

    /// Issue a POST against a caller-built URI.
    pub async fn post_raw<B: Serialize>(&self, uri: &str, body: &B) -> Result<Value> {
        let body = serde_json::to_value(body)?;
        self.inner.send(Method::POST, uri, Some(&body)).await
    }

    /// Issue an OPTIONS against a caller-built URI and return the decoded
    /// JSON body.
    pub async fn options_raw(&self, uri: &str) -> Result<Value> {
        self.inner.send(Method::OPTIONS, uri, None).await
    }
}

impl ClientInner {
    /// URI stub for a service family: `{base}{family}-service`.
    pub(crate) fn service_stub(&self, service: Service) -> String {
        format!("{}{}-service", self.config.base_uri(), service.family())
    }

    /// URI for a service resource; without a range the URI keeps its
    /// trailing slash, matching the remote's collection form.
    pub(crate) fn resource_uri(&self, service: Service, range: Option<&str>) -> String {
        let stub = format!("{}/{}/", self.service_stub(service), service.resource());
        match range {
            Some(range) => format!("{stub}{range}"),
            None => stub,
        }
    }

    /// Build request headers from the app reference and the current
    /// credential.
    pub(crate) async fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            "brightpearl-app-ref",
            HeaderValue::from_str(self.config.app_ref.as_str())
                .map_err(|_| Error::Config("app reference is not a valid header value".into()))?,
        );

        if let Some((name, token)) = self.session.credential().await.header() {
            headers.insert(
                name,
                HeaderValue::from_str(token.expose_secret())
                    .map_err(|_| Error::Config("token is not a valid header value".into()))?,
            );
        }

        Ok(headers)
    }

    /// Issue one request and decode the body as JSON.
    ///
    /// Non-2xx statuses surface as [`Error::Api`]; the crate never
    /// retries. A 2xx body that is not valid JSON surfaces as
    /// [`Error::MalformedResponse`].
    pub(crate) async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        let headers = self.build_headers().await?;

        tracing::debug!(%method, %uri, "issuing request");

        let mut request = self.http.request(method, uri).headers(headers);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::trace!(%uri, status = status.as_u16(), "response received");

        if status.is_success() {
            let text = response.text().await?;
            serde_json::from_str(&text)
                .map_err(|err| Error::malformed(format!("invalid JSON from {uri}: {err}")))
        } else {
            let body = response.json().await.unwrap_or_default();
            Err(Error::from_api_response(status.as_u16(), body))
        }
    }

    /// GET a URI and extract the typed `response` envelope field.
    pub(crate) async fn get_enveloped<T: DeserializeOwned>(&self, uri: &str) -> Result<T> {
        let value = self.send(Method::GET, uri, None).await?;
        envelope_field(value, "response", uri)
    }

    /// GET a URI with query parameters and extract the typed `response`
    /// envelope field.
    pub(crate) async fn get_enveloped_with_query<T, Q>(&self, uri: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let headers = self.build_headers().await?;

        tracing::debug!(%uri, "issuing request");

        let response = self
            .http
            .get(uri)
            .headers(headers)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        tracing::trace!(%uri, status = status.as_u16(), "response received");

        if !status.is_success() {
            let body = response.json().await.unwrap_or_default();
            return Err(Error::from_api_response(status.as_u16(), body));
        }

        let text = response.text().await?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|err| Error::malformed(format!("invalid JSON from {uri}: {err}")))?;
        envelope_field(value, "response", uri)
    }

    /// Ask the remote which sub-resource URIs satisfy an identifier
    /// range (capability discovery).
    ///
    /// The OPTIONS response is expected to carry
    /// `{"response": {"getUris": [...]}}`; each suffix is joined onto the
    /// service stub. A rejected OPTIONS call or an unexpected shape
    /// surfaces as [`Error::Discovery`] so callers can decide whether to
    /// fall back to locally planned windows. Connection-level failures
    /// still propagate unmodified.
    pub(crate) async fn discover_sub_uris(
        &self,
        service: Service,
        range: &str,
    ) -> Result<Vec<String>> {
        let stub = self.service_stub(service);
        let options_uri = format!("{}/{}/{}", stub, service.resource(), range);

        let value = match self.send(Method::OPTIONS, &options_uri, None).await {
            Ok(value) => value,
            Err(Error::Api { status, .. }) => {
                return Err(Error::Discovery(format!(
                    "OPTIONS {options_uri} rejected with status {status}"
                )))
            }
            Err(err) => return Err(err),
        };

        let suffixes: Vec<String> = value
            .get("response")
            .and_then(|r| r.get("getUris"))
            .and_then(|u| u.as_array())
            .map(|uris| {
                uris.iter()
                    .filter_map(|u| u.as_str().map(str::to_string))
                    .collect()
            })
            .ok_or_else(|| {
                Error::Discovery(format!(
                    "OPTIONS {options_uri} response carried no getUris list"
                ))
            })?;

        if suffixes.is_empty() {
            return Err(Error::Discovery(format!(
                "OPTIONS {options_uri} returned an empty getUris list"
            )));
        }

        Ok(suffixes
            .into_iter()
            .map(|suffix| format!("{stub}{suffix}"))
            .collect())
    }

    /// The sub-request URIs for a range: server-suggested when discovery
    /// succeeds, locally planned windows when the remote rejects OPTIONS
    /// or answers with an unexpected shape.
    pub(crate) async fn sub_request_uris(
        &self,
        service: Service,
        range: &str,
    ) -> Result<Vec<String>> {
        match self.discover_sub_uris(service, range).await {
            Ok(uris) => Ok(uris),
            Err(Error::Discovery(reason)) => {
                tracing::debug!(%reason, "discovery unavailable, planning windows locally");
                let spec = RangeSpec::parse(range)?;
                Ok(spec
                    .windows()
                    .iter()
                    .map(|window| self.resource_uri(service, Some(window)))
                    .collect())
            }
            Err(err) => Err(err),
        }
    }

    /// Fetch every sub-request for a range and merge the `item_key`-keyed
    /// list from each response into one ordered sequence.
    ///
    /// Sub-requests are issued strictly in order and each response is
    /// fully consumed before the next request goes out; items keep the
    /// order they had within each response.
    pub(crate) async fn fetch_and_merge(
        &self,
        service: Service,
        range: &str,
        item_key: &str,
        uri_suffix: Option<&str>,
    ) -> Result<Vec<Value>> {
        let uris = self.sub_request_uris(service, range).await?;

        let mut items = Vec::new();
        for uri in &uris {
            let uri = match uri_suffix {
                Some(suffix) => format!("{uri}{suffix}"),
                None => uri.clone(),
            };
            let value = self.send(Method::GET, &uri, None).await?;
            let rows = value
                .get(item_key)
                .and_then(|r| r.as_array())
                .ok_or_else(|| {
                    Error::malformed(format!("{uri}: expected a {item_key:?} list"))
                })?;
            items.extend(rows.iter().cloned());
        }

        Ok(items)
    }
}

impl Clone for BrightpearlClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for BrightpearlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrightpearlClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

/// Extract a typed field from a decoded body, mapping both a missing key
/// and a shape mismatch to a descriptive error.
fn envelope_field<T: DeserializeOwned>(value: Value, key: &str, context: &str) -> Result<T> {
    let field = value
        .get(key)
        .cloned()
        .ok_or_else(|| Error::malformed(format!("{context}: missing {key:?} key")))?;
    serde_json::from_value(field)
        .map_err(|err| Error::malformed(format!("{context}: unexpected {key:?} shape: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;

    fn test_client() -> BrightpearlClient {
        let config =
            ClientConfig::new("eu1", "2.0.0", "testcompany", "testcompany_testapp").unwrap();
        BrightpearlClient::new(config).unwrap()
    }

    #[test]
    fn test_resource_uri_with_range() {
        let client = test_client();
        assert_eq!(
            client.resource_uri(Service::Product, Some("251")),
            "https://ws-eu1.brightpearl.com/2.0.0/testcompany/product-service/product/251"
        );
        assert_eq!(
            client.resource_uri(Service::Order, Some("500500-500570")),
            "https://ws-eu1.brightpearl.com/2.0.0/testcompany/order-service/order/500500-500570"
        );
    }

    #[test]
    fn test_resource_uri_collection_form() {
        let client = test_client();
        assert_eq!(
            client.resource_uri(Service::Contact, None),
            "https://ws-eu1.brightpearl.com/2.0.0/testcompany/contact-service/contact/"
        );
    }

    #[test]
    fn test_service_stub() {
        let client = test_client();
        assert_eq!(
            client.inner.service_stub(Service::ProductPrice),
            "https://ws-eu1.brightpearl.com/2.0.0/testcompany/product-service"
        );
    }

    #[test]
    fn test_envelope_field_missing_key() {
        let err = envelope_field::<Vec<Value>>(serde_json::json!({}), "response", "test")
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_envelope_field_wrong_shape() {
        let err = envelope_field::<Vec<Value>>(
            serde_json::json!({"response": "not-a-list"}),
            "response",
            "test",
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }
}
