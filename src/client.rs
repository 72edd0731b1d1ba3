use std::fmt::Display;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::devices;
use crate::{response, DeviceError, DeviceResult};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

#[cfg(feature = "default-client")]
mod global {
    use std::sync::Arc;

    use arc_swap::ArcSwap;
    use once_cell::sync::Lazy;

    use super::DeviceClient;

    static DEVICE_CLIENT: Lazy<ArcSwap<DeviceClient>> =
        Lazy::new(|| ArcSwap::new(Arc::new(DeviceClient::default())));

    /// Replaces the process-wide DeviceClient instance.
    pub fn initialize(client: DeviceClient) {
        DEVICE_CLIENT.store(Arc::new(client));
    }

    /// Returns the process-wide DeviceClient instance.
    ///
    /// If [`initialize`] has not been called yet this is a client pointed at
    /// [`DEFAULT_BASE_URL`](super::DEFAULT_BASE_URL).
    pub fn instance() -> Arc<DeviceClient> {
        DEVICE_CLIENT.load_full()
    }
}

#[cfg(feature = "default-client")]
pub use global::{initialize, instance};

/// Builder for the device client.
///
/// Every setting is optional; validation happens in [`build`](Self::build).
#[derive(Default)]
pub struct DeviceClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
}

impl DeviceClientBuilder {
    /// Sets the API base URL, e.g. `https://reqres.in/api`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the HTTP request timeout. Without it the transport default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> DeviceResult<DeviceClient> {
        let raw_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL).trim();
        if raw_url.is_empty() {
            return Err(DeviceError::ConfigurationError("Base URL is required".into()));
        }

        let base_url = Url::parse(raw_url)
            .map_err(|e| DeviceError::ConfigurationError(format!("Invalid base URL: {e}")))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(DeviceError::ConfigurationError(format!(
                "Invalid base URL: {base_url} is not an http(s) URL"
            )));
        }

        let http_client = match self.http_client {
            Some(custom_client) => custom_client,
            None => {
                let user_agent = self
                    .user_agent
                    .as_deref()
                    .unwrap_or(concat!("device-client/", env!("CARGO_PKG_VERSION")));

                let mut builder = ReqwestClient::builder().user_agent(user_agent);
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(|e| {
                    DeviceError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?
            }
        };

        Ok(DeviceClient {
            base_url,
            http_client,
        })
    }
}

/// Client for the device collection exposed under `{base_url}/users`.
///
/// The client holds no state besides the base URL and the HTTP handle, so it
/// is cheap to clone and every call is independent of the others.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    base_url: Url,
    http_client: ReqwestClient,
}

impl Default for DeviceClient {
    fn default() -> Self {
        DeviceClient::builder()
            .build()
            .expect("Failed to build default DeviceClient")
    }
}

impl DeviceClient {
    pub fn builder() -> DeviceClientBuilder {
        DeviceClientBuilder::default()
    }

    /// Creates a client for `base_url` with default transport settings.
    pub fn new(base_url: impl Into<String>) -> DeviceResult<Self> {
        Self::builder().base_url(base_url).build()
    }

    /// The base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Gets the device API interface.
    pub fn devices(&self) -> devices::DeviceHandler {
        devices::DeviceHandler::new(self.clone())
    }

    /// Creates a device. Returns the API's echo of the record, or `None` on
    /// any failure.
    ///
    /// Failures are logged and never returned; use
    /// [`devices().add(..)`](devices::DeviceHandler::add) to observe them.
    pub async fn add_device(&self, name: impl Into<String>, job: impl Into<String>) -> Option<Value> {
        absorb(self.devices().add(name, job).send().await)
    }

    /// Lists one page of devices, or `None` on any failure.
    pub async fn list_devices(&self, page: u32) -> Option<Value> {
        absorb(self.devices().list().page(page).send().await)
    }

    /// Replaces a device's name and job, or `None` on any failure.
    pub async fn update_device(
        &self,
        id: impl Display,
        name: impl Into<String>,
        job: impl Into<String>,
    ) -> Option<Value> {
        absorb(self.devices().update(id, name, job).send().await)
    }

    /// Deletes a device. A successful delete also yields `None`.
    pub async fn delete_device(&self, id: impl Display) -> Option<Value> {
        absorb(self.devices().delete(id).send().await)
    }

    /// Makes a request to the device API and interprets its status.
    ///
    /// `endpoint` is a path relative to the base URL (e.g. `/users/2`); query
    /// parameters go in `query`. Exactly one outcome line is logged for every
    /// response received.
    ///
    /// Returns `Ok(Some(json))` for 200 and 201, `Ok(None)` for 204.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint contains a query string or fragment.
    /// - The request fails due to network issues.
    /// - The API answers with any status other than 200, 201 or 204.
    /// - A 200/201 body is not valid JSON.
    pub async fn request_json<T>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<T>,
    ) -> DeviceResult<Option<Value>>
    where
        T: Serialize,
    {
        let url = self.endpoint_url(endpoint)?;
        self.execute(method, url, query, body).await
    }

    /// Like [`request_json`](Self::request_json) for a single item of
    /// `collection`. `id` always becomes exactly one path segment.
    pub(crate) async fn request_item<T>(
        &self,
        method: Method,
        collection: &str,
        id: &str,
        body: Option<T>,
    ) -> DeviceResult<Option<Value>>
    where
        T: Serialize,
    {
        let url = self.item_url(collection, id)?;
        self.execute(method, url, &[], body).await
    }

    async fn execute<T>(
        &self,
        method: Method,
        url: Url,
        query: &[(&str, String)],
        body: Option<T>,
    ) -> DeviceResult<Option<Value>>
    where
        T: Serialize,
    {
        let mut request = self.http_client.request(method, url);

        if !query.is_empty() {
            request = request.query(query);
        }

        // Add JSON body if provided
        if let Some(data) = body {
            request = request.json(&data).header(CONTENT_TYPE, "application/json");
        }

        let response = request.send().await?;

        let outcome = response::interpret(response.status());
        outcome.log();
        let outcome = outcome.into_result()?;

        if !outcome.has_body {
            return Ok(None);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DeviceError::ResponseBodyError(e.to_string()))?;
        let value: Value = serde_json::from_slice(&bytes)?;
        Ok(Some(value))
    }

    fn endpoint_url(&self, endpoint: &str) -> DeviceResult<Url> {
        if endpoint.contains(['?', '#']) {
            return Err(DeviceError::InvalidEndpoint(format!(
                "endpoint must not include query or fragment: {endpoint}"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DeviceError::InvalidEndpoint(format!("base URL cannot take a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(endpoint.split('/').filter(|segment| !segment.is_empty()));

        Ok(url)
    }

    fn item_url(&self, collection: &str, id: &str) -> DeviceResult<Url> {
        // `PathSegmentsMut::push` drops "." and "..", which would silently
        // retarget the request at the collection.
        if matches!(id, "" | "." | "..") {
            return Err(DeviceError::InvalidEndpoint(format!(
                "invalid device id: {id:?}"
            )));
        }

        let mut url = self.endpoint_url(collection)?;
        url.path_segments_mut()
            .map_err(|_| {
                DeviceError::InvalidEndpoint(format!("base URL cannot take a path: {}", self.base_url))
            })?
            .push(id);

        Ok(url)
    }
}

/// Collapses a typed result into the log-and-return-nothing convention.
///
/// Status failures were already logged when the response was interpreted, so
/// only failures that never produced an outcome are logged here.
fn absorb(result: DeviceResult<Option<Value>>) -> Option<Value> {
    match result {
        Ok(value) => value,
        Err(err) if err.status().is_some() => None,
        Err(err) => {
            log::error!("{}", failure_message(&err));
            None
        }
    }
}

fn failure_message(err: &DeviceError) -> String {
    match err {
        DeviceError::HttpError(e) => format!("Connection error: {e}"),
        other => format!("Request failed: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_extend_base_path() {
        let client = DeviceClient::new("https://reqres.in/api/").unwrap();
        let url = client.endpoint_url("/users/2").unwrap();
        assert_eq!(url.as_str(), "https://reqres.in/api/users/2");

        let client = DeviceClient::new("http://localhost:8080").unwrap();
        let url = client.endpoint_url("users").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/users");
    }

    #[test]
    fn endpoint_segments_are_escaped() {
        let client = DeviceClient::default();
        let url = client.endpoint_url("/users/a b").unwrap();
        assert_eq!(url.path(), "/api/users/a%20b");
    }

    #[test]
    fn endpoint_with_query_is_rejected() {
        let client = DeviceClient::default();
        match client.endpoint_url("/users?page=2") {
            Err(DeviceError::InvalidEndpoint(msg)) => {
                assert!(msg.contains("must not include query"))
            }
            other => panic!("expected InvalidEndpoint, got {other:?}"),
        }
    }

    #[test]
    fn item_ids_are_single_segments() {
        let client = DeviceClient::default();

        let url = client.item_url("/users", "a/b").unwrap();
        assert_eq!(url.path(), "/api/users/a%2Fb");

        let url = client.item_url("/users", "2").unwrap();
        assert_eq!(url.as_str(), "https://reqres.in/api/users/2");
    }

    #[test]
    fn item_ids_that_collapse_are_rejected() {
        let client = DeviceClient::default();
        for id in ["", ".", ".."] {
            match client.item_url("/users", id) {
                Err(DeviceError::InvalidEndpoint(msg)) => {
                    assert!(msg.contains("invalid device id"), "id {id:?}: {msg}")
                }
                other => panic!("id {id:?}: expected InvalidEndpoint, got {other:?}"),
            }
        }
    }

    #[test]
    fn body_read_failures_are_not_connection_errors() {
        let err = DeviceError::ResponseBodyError("unexpected end of stream".into());
        assert_eq!(err.status(), None);
        assert_eq!(
            failure_message(&err),
            "Request failed: Failed to read response body: unexpected end of stream"
        );
    }

    #[tokio::test]
    async fn default_client_sends_crate_user_agent() {
        use wiremock::matchers::{header, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/users/1"))
            .and(header(
                "user-agent",
                concat!("device-client/", env!("CARGO_PKG_VERSION")),
            ))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = DeviceClient {
            base_url: Url::parse(&format!("{}/api", mock_server.uri())).unwrap(),
            ..DeviceClient::default()
        };

        assert!(matches!(client.devices().delete(1).send().await, Ok(None)));
    }

    #[test]
    fn absorb_flattens_errors_to_none() {
        assert_eq!(absorb(Ok(None)), None);
        assert_eq!(
            absorb(Ok(Some(Value::Bool(true)))),
            Some(Value::Bool(true))
        );
        assert_eq!(
            absorb(Err(DeviceError::UnexpectedStatus(http::StatusCode::IM_A_TEAPOT))),
            None
        );
        assert_eq!(
            absorb(Err(DeviceError::InvalidEndpoint("bad".into()))),
            None
        );
    }
}
