//! Upstream statistics API client.
//!
//! One GET per logical request against `base_url` plus percent-encoded path
//! segments, with the JSON:API `accept` header and a bearer credential. The parsed body goes through
//! [`validate_response`] and is handed back un-normalized. There are no
//! retries, and HTTP status codes are not distinguished here: an error
//! status carries a JSON:API `errors` body without `data`, which the
//! envelope check rejects.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::config::UpstreamConfig;
use crate::error::PubgError;
use crate::validate::{validate_api_key, validate_response};

/// Media type of every upstream response.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Raw HTTP access to upstream. Implementations perform exactly one request
/// per call and return the parsed JSON body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Transport name for logging.
    fn name(&self) -> &'static str;

    /// GET `url` with the bearer credential and parse the body as JSON.
    async fn get_json(&self, url: &str, api_key: &str) -> Result<Value, PubgError>;
}

/// `reqwest`-backed transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a client; `timeout` of `None` leaves requests unbounded.
    pub fn new(timeout: Option<Duration>) -> Result<Self, PubgError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("pubg-stats-gql/", env!("CARGO_PKG_VERSION"))),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn get_json(&self, url: &str, api_key: &str) -> Result<Value, PubgError> {
        let response = self.client.get(url).bearer_auth(api_key).send().await?;

        let status = response.status();
        debug!("Upstream responded HTTP {} for {}", status.as_u16(), url);

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            PubgError::UpstreamTransport(format!(
                "non-JSON body from upstream (HTTP {}): {}",
                status.as_u16(),
                e
            ))
        })
    }
}

/// Upstream client bound to one base URL and credential.
#[derive(Clone)]
pub struct UpstreamClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    api_key: Option<String>,
}

impl UpstreamClient {
    /// Create a client over HTTP from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, PubgError> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(config: &UpstreamConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// The configured credential, or `MissingCredential`.
    pub fn validate_api_key(&self) -> Result<&str, PubgError> {
        validate_api_key(self.api_key.as_deref())
    }

    /// Absolute URL for `segments` under the base URL. Each segment is
    /// percent-encoded, so `/`, `?` and `#` inside one cannot leave it.
    /// `query` is appended as given and must already be encoded.
    pub fn url_for(&self, segments: &[&str], query: Option<&str>) -> Result<String, PubgError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| PubgError::UpstreamTransport(format!("invalid base URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| {
                PubgError::UpstreamTransport(format!("base URL cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        url.set_query(query);

        Ok(url.into())
    }

    /// Fetch `segments` (with an optional pre-encoded `query`) and return the
    /// validated envelope.
    ///
    /// `is_array` selects the list form of the envelope check.
    pub async fn fetch(
        &self,
        segments: &[&str],
        query: Option<&str>,
        is_array: bool,
    ) -> Result<Value, PubgError> {
        let api_key = self.validate_api_key()?;
        let url = self.url_for(segments, query)?;

        info!("Fetching {} via {}", url, self.transport.name());
        let envelope = self.transport.get_json(&url, api_key).await?;

        validate_response(Some(&envelope), is_array)?;
        Ok(envelope)
    }
}

/// Transport double with canned responses keyed by URL; records every call.
#[cfg(test)]
pub struct RecordingTransport {
    responses: std::collections::HashMap<String, Value>,
    calls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingTransport {
    pub const BASE_URL: &'static str = "https://upstream.test/shards/steam";

    pub fn new() -> Self {
        Self {
            responses: std::collections::HashMap::new(),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Answer GETs of `path` (relative to [`Self::BASE_URL`]) with `body`.
    pub fn respond(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(
            format!("{}/{}", Self::BASE_URL, path.trim_start_matches('/')),
            body,
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn config(api_key: Option<&str>) -> UpstreamConfig {
        UpstreamConfig {
            base_url: Self::BASE_URL.to_string(),
            api_key: api_key.map(str::to_string),
            timeout_seconds: None,
        }
    }
}

#[cfg(test)]
#[async_trait]
impl Transport for RecordingTransport {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn get_json(&self, url: &str, _api_key: &str) -> Result<Value, PubgError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| PubgError::UpstreamTransport(format!("no canned response for {}", url)))
    }
}
