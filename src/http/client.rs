//! HTTP client for the users endpoint
//!
//! Issues a single `GET {base_url}/users?page={n}` per call and classifies
//! failures into the four user-facing categories:
//! - connectivity (DNS failure, refused connection, offline)
//! - timeout (the fixed deadline elapsed)
//! - server (non-2xx status, with status code and reason text)
//! - unknown (anything else, including an undecodable body)
//!
//! There are no retries here; the caller decides what to do with a failure.

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::types::PageResult;
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL; `/users` is appended
    pub base_url: String,
    /// Request deadline
    pub timeout: Duration,
    /// Headers sent with every request
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from_api(&ApiConfig::default())
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }

    /// Build the client config for an API section, with JSON headers and the API key
    pub fn from_api(api: &ApiConfig) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(ref key) = api.api_key {
            default_headers.insert(api.api_key_header.clone(), key.clone());
        }

        Self {
            base_url: api.base_url.clone(),
            timeout: api.timeout(),
            default_headers,
            user_agent: api.user_agent.clone(),
        }
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Remove a default header
    pub fn without_header(mut self, key: &str) -> Self {
        self.config.default_headers.remove(key);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client for fetching pages of users
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Fetch one page of users
    ///
    /// `page` is 1-based; `0` is rejected without touching the network.
    pub async fn fetch_page(&self, page: u32) -> Result<PageResult> {
        if page == 0 {
            return Err(Error::InvalidPage { page });
        }

        let url = self.users_url();
        let mut req = self.client.get(&url).query(&[("page", page)]);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req.send().await.map_err(|e| self.classify(&e))?;
        let status = response.status();

        if !status.is_success() {
            warn!("Fetching page {} failed with {}", page, status.as_u16());
            return Err(server_error(status));
        }

        let body = response.bytes().await.map_err(|e| self.classify(&e))?;
        let result: PageResult = serde_json::from_slice(&body).map_err(|e| {
            warn!("Page {} has an unreadable body: {}", page, e);
            Error::unknown(format!("invalid response body for page {page}: {e}"))
        })?;

        debug!(
            "Fetched page {}/{} ({} users) from {}",
            result.page_number,
            result.total_pages,
            result.items.len(),
            url
        );
        Ok(result)
    }

    /// Full URL of the users endpoint
    fn users_url(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{base}/users")
    }

    /// Map a transport error onto a fetch error category
    fn classify(&self, err: &reqwest::Error) -> Error {
        if err.is_timeout() {
            warn!("Request timed out after {:?}", self.config.timeout);
            #[allow(clippy::cast_possible_truncation)]
            return Error::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            };
        }

        if err.is_connect() {
            warn!("Connection error: {}", err);
            return Error::Connectivity;
        }

        if let Some(status) = err.status() {
            return server_error(status);
        }

        warn!("Request failed: {}", err);
        Error::unknown(err.to_string())
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Build a server error carrying the status code and its reason phrase
fn server_error(status: StatusCode) -> Error {
    Error::server(
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status"),
    )
}
