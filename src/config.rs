//! Client configuration.
//!
//! [`ClientConfig`] is immutable once built. Use [`ClientConfigBuilder`] (or
//! [`FetchClient::builder`](crate::FetchClient::builder)) for fluent setup, or
//! deserialize a [`ClientOptions`] from JSON and convert it.
//!
//! # Example
//!
//! ```rust,ignore
//! use easy_fetch::ClientConfig;
//! use std::time::Duration;
//!
//! let config = ClientConfig::builder("https://api.example.com")
//!     .timeout(Duration::from_secs(2))
//!     .header("X-Api-Key", "secret")
//!     .build()?;
//! ```

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;

use crate::error::{FetchError, FetchResult};

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Options object accepted alongside the base URL.
///
/// Both fields are optional; missing values fall back to the defaults
/// (5000 ms, no headers).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientOptions {
    /// Request timeout in milliseconds
    #[serde(default, alias = "timeout")]
    pub timeout_ms: Option<u64>,
    /// Headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

/// Immutable configuration shared by every call on one client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    default_headers: HeaderMap,
}

impl ClientConfig {
    /// Start a builder for the given base URL.
    pub fn builder(base_url: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder::new(base_url)
    }

    /// Build a config from a base URL and an options object.
    pub fn from_options(base_url: impl Into<String>, options: ClientOptions) -> FetchResult<Self> {
        let mut builder = ClientConfigBuilder::new(base_url);
        if let Some(ms) = options.timeout_ms {
            builder = builder.timeout_ms(ms);
        }
        for (name, value) in options.headers {
            builder = builder.header(name, value);
        }
        builder.build()
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Join the base URL and an endpoint with exactly one `/`.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    base_url: String,
    timeout: Duration,
    headers: Vec<(String, String)>,
}

impl ClientConfigBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            headers: Vec::new(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in milliseconds.
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.timeout = Duration::from_millis(ms);
        self
    }

    /// Add a default header to all requests. Later values replace earlier
    /// ones with the same (case-insensitive) name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Validate and build the config.
    pub fn build(self) -> FetchResult<ClientConfig> {
        if self.timeout.is_zero() {
            return Err(FetchError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        let mut default_headers = HeaderMap::new();
        for (name, value) in self.headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                FetchError::InvalidConfig(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(&value).map_err(|e| {
                FetchError::InvalidConfig(format!("Invalid header value for '{}': {}", name, e))
            })?;
            default_headers.insert(header_name, header_value);
        }

        Ok(ClientConfig {
            base_url: self.base_url,
            timeout: self.timeout,
            default_headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::builder("https://api.example.com").build().unwrap();
        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(config.timeout(), Duration::from_millis(5000));
        assert!(config.default_headers().is_empty());
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ClientConfig::builder("https://api.example.com/").build().unwrap();
        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(config.url_for("users/1"), "https://api.example.com/users/1");
        assert_eq!(config.url_for("/users/1"), "https://api.example.com/users/1");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = ClientConfig::builder("https://api.example.com")
            .timeout_ms(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidConfig(_)));
    }

    #[test]
    fn test_invalid_header_rejected() {
        let err = ClientConfig::builder("https://api.example.com")
            .header("bad header", "x")
            .build()
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidConfig(msg) if msg.contains("bad header")));

        let err = ClientConfig::builder("https://api.example.com")
            .header("X-Ok", "line\nbreak")
            .build()
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidConfig(_)));
    }

    #[test]
    fn test_later_header_wins() {
        let config = ClientConfig::builder("https://api.example.com")
            .header("X-Env", "dev")
            .header("x-env", "prod")
            .build()
            .unwrap();
        assert_eq!(config.default_headers().len(), 1);
        assert_eq!(config.default_headers()["x-env"], "prod");
    }

    #[test]
    fn test_options_deserialize() {
        let json = r#"{"timeout": 1500, "headers": {"Authorization": "Bearer t"}}"#;
        let options: ClientOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.timeout_ms, Some(1500));

        let config = ClientConfig::from_options("https://api.example.com", options).unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(1500));
        assert_eq!(config.default_headers()["authorization"], "Bearer t");
    }

    #[test]
    fn test_empty_options_use_defaults() {
        let options: ClientOptions = serde_json::from_str("{}").unwrap();
        let config = ClientConfig::from_options("https://api.example.com", options).unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(DEFAULT_TIMEOUT_MS));
        assert!(config.default_headers().is_empty());
    }
}
