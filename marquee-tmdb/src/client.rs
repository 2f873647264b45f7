//! HTTP client implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use marquee_core::constants::DEFAULT_UPSTREAM_BASE_URL;
use marquee_core::error::{MovieError, Result, UpstreamError};
use marquee_core::traits::MovieSource;
use marquee_core::types::{Locale, UpstreamRequest};

/// Upstream client configuration.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TmdbConfig {
    /// API base URL, e.g. "https://api.themoviedb.org/3"
    pub base_url: String,
    /// API key sent as the `api_key` query parameter
    pub api_key: String,
    /// Language and region appended to localized/regional requests
    pub locale: Locale,
    /// Request timeout in seconds; `None` keeps the transport default
    pub timeout_seconds: Option<u64>,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE_URL.into(),
            api_key: String::new(),
            locale: Locale::default(),
            timeout_seconds: None,
        }
    }
}

impl TmdbConfig {
    /// Creates config with a base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Sets the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets a request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

/// Client for the upstream metadata API.
pub struct TmdbClient {
    config: TmdbConfig,
    http_client: reqwest::Client,
}

impl TmdbClient {
    /// Creates a new client with the given config.
    pub fn with_config(config: TmdbConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(MovieError::ConfigError("upstream API key is not set".into()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let http_client = builder
            .build()
            .map_err(|e| MovieError::ConfigError(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    /// Absolute URL for an upstream path.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    #[instrument(skip(self, request), fields(path = %request.path))]
    async fn fetch(&self, request: &UpstreamRequest) -> std::result::Result<Value, UpstreamError> {
        let mut query = request.query_pairs(&self.config.locale);
        query.push(("api_key".into(), self.config.api_key.clone()));

        let response = self
            .http_client
            .get(self.url_for(&request.path))
            .query(&query)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport {
                path: request.path.clone(),
                reason: e.without_url().to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                path: request.path.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::Decode {
                path: request.path.clone(),
                reason: e.without_url().to_string(),
            })?;

        debug!(status = status.as_u16(), "Upstream call succeeded");
        Ok(body)
    }
}
