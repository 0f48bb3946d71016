//! Hunter.how API client implementation.
//!
//! Structurally parallel to [`crate::ShodanClient`]: the service takes a
//! base64url-encoded query string and a date window instead of a raw query
//! parameter, and nests its result list under `data.list`.

use crate::client::urlencoding;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use chrono::{Duration as ChronoDuration, Utc};
use rangescout_core::{HunterResponse, Result, ScoutError};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The Hunter.how API base URL
const DEFAULT_BASE_URL: &str = "https://api.hunter.how";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Results requested per page (only the first page is fetched)
const PAGE_SIZE: u32 = 100;

/// Default search window in days, ending today
const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Client for the secondary (host) search service
#[derive(Clone)]
pub struct HunterClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_key: String,
    base_url: String,
    window_days: i64,
}

impl HunterClient {
    /// Create a new client with the given API key using default settings
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        HunterClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> HunterClientBuilder {
        HunterClientBuilder::new(api_key)
    }

    /// Search for a host by exact address match.
    ///
    /// Builds an `ip=="<target>"` equality query, base64url-encodes it, and
    /// issues a search over the window ending today. The target is passed
    /// through unvalidated; callers choose an expression the service accepts.
    pub async fn search_host(&self, target: &str) -> Result<HunterResponse> {
        let query = format!("ip==\"{target}\"");
        let encoded = URL_SAFE.encode(query.as_bytes());

        let end = Utc::now().date_naive();
        let start = end - ChronoDuration::days(self.inner.window_days);
        let start_time = start.format("%Y-%m-%d").to_string();
        let end_time = end.format("%Y-%m-%d").to_string();
        let page_size = PAGE_SIZE.to_string();

        let response: HunterResponse = self
            .get_with_query(
                "/search",
                &[
                    ("query", encoded.as_str()),
                    ("page", "1"),
                    ("page_size", &page_size),
                    ("start_time", &start_time),
                    ("end_time", &end_time),
                ],
            )
            .await?;

        // The service reports some failures with HTTP 200 and a status code
        // in the body.
        if let Some(code) = response.code {
            if code != 200 {
                let message = response.message.unwrap_or_default();
                return match code {
                    401 | 403 => Err(ScoutError::Unauthorized),
                    429 => {
                        warn!("Rate limited by Hunter.how API");
                        Err(ScoutError::RateLimited { retry_after: None })
                    }
                    _ => Err(ScoutError::Api {
                        code: u16::try_from(code).unwrap_or(0),
                        message,
                    }),
                };
            }
        }

        Ok(response)
    }

    /// Search for a host, returning `address:port` strings for every entry
    /// in the first page of the result list.
    pub async fn search_endpoints(&self, target: &str) -> Result<Vec<String>> {
        Ok(self.search_host(target).await?.endpoints())
    }

    /// Perform a GET request with query parameters
    async fn get_with_query<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(path, params);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ScoutError::Http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ScoutError::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(ScoutError::Json)
        } else {
            let message = response.text().await.unwrap_or_default();
            match status.as_u16() {
                401 | 403 => Err(ScoutError::Unauthorized),
                429 => {
                    warn!("Rate limited by Hunter.how API");
                    Err(ScoutError::RateLimited { retry_after: None })
                }
                code => Err(ScoutError::Api { code, message }),
            }
        }
    }

    /// Build a URL with query parameters (including API key)
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.inner.base_url, path);

        url.push_str("?api-key=");
        url.push_str(&self.inner.api_key);

        for (key, value) in params {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }
}

/// Builder for configuring a [`HunterClient`]
pub struct HunterClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    window_days: i64,
}

impl HunterClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("rangescout/{}", env!("CARGO_PKG_VERSION")),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the search window length in days
    #[must_use]
    pub fn window_days(mut self, days: i64) -> Self {
        self.window_days = days;
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> HunterClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        HunterClient {
            inner: Arc::new(ClientInner {
                http,
                api_key: self.api_key,
                base_url: self.base_url,
                window_days: self.window_days,
            }),
        }
    }
}
