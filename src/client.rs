//! `FetchClient`: `get`/`post` helpers over a shared base URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use easy_fetch::FetchClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FetchClient::builder("https://api.example.com")
//!         .timeout_ms(5000)
//!         .header("X-Api-Key", "secret")
//!         .build()?;
//!
//!     let user = client.get("users/1").await?;
//!     let created = client.post("users", &json!({ "name": "Ann" })).await?;
//!     println!("{user} {created}");
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing;

use crate::config::{ClientConfig, ClientConfigBuilder, ClientOptions};
use crate::error::{FetchError, FetchResult};
use crate::http::{Method, RequestExecutor, RequestSpec};

/// Builder for [`FetchClient`].
#[derive(Debug, Clone)]
pub struct FetchClientBuilder {
    config: ClientConfigBuilder,
}

impl FetchClientBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            config: ClientConfigBuilder::new(base_url),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the timeout in milliseconds.
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config = self.config.timeout_ms(ms);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config = self.config.header(name, value);
        self
    }

    /// Build the client.
    pub fn build(self) -> FetchResult<FetchClient> {
        FetchClient::from_config(self.config.build()?)
    }
}

/// JSON-over-HTTP client bound to one base URL.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FetchClient {
    config: ClientConfig,
    executor: RequestExecutor,
}

impl FetchClient {
    /// Create a client with the default 5000 ms timeout and no headers.
    pub fn new(base_url: impl Into<String>) -> FetchResult<Self> {
        FetchClientBuilder::new(base_url).build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder(base_url: impl Into<String>) -> FetchClientBuilder {
        FetchClientBuilder::new(base_url)
    }

    /// Create a client from a base URL and an options object.
    pub fn with_options(base_url: impl Into<String>, options: ClientOptions) -> FetchResult<Self> {
        Self::from_config(ClientConfig::from_options(base_url, options)?)
    }

    /// Create a client from a prepared config.
    pub fn from_config(config: ClientConfig) -> FetchResult<Self> {
        let http_client = Client::builder().build()?;
        Ok(Self {
            config,
            executor: RequestExecutor::new(http_client),
        })
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    pub fn default_headers(&self) -> &HeaderMap {
        self.config.default_headers()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// GET `{base_url}/{endpoint}` and return the parsed JSON body.
    pub async fn get(&self, endpoint: &str) -> FetchResult<Value> {
        self.get_as(endpoint).await
    }

    /// POST `data` as JSON to `{base_url}/{endpoint}` and return the parsed
    /// JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, data: &B) -> FetchResult<Value> {
        self.post_as(endpoint, data).await
    }

    /// Like [`get`](Self::get), deserializing the body into `T`.
    pub async fn get_as<T: DeserializeOwned>(&self, endpoint: &str) -> FetchResult<T> {
        self.execute(RequestSpec::get(&self.config, endpoint)).await
    }

    /// Like [`post`](Self::post), deserializing the body into `T`.
    pub async fn post_as<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        data: &B,
    ) -> FetchResult<T> {
        match RequestSpec::post_json(&self.config, endpoint, data) {
            Ok(spec) => self.execute(spec).await,
            Err(e) => Err(log_failure(Method::Post, e)),
        }
    }

    /// Run a caller-built request (custom headers or timeout).
    pub async fn execute<T: DeserializeOwned>(&self, spec: RequestSpec) -> FetchResult<T> {
        let method = spec.method;
        self.executor
            .execute(spec)
            .await
            .map_err(|e| log_failure(method, e))
    }
}

fn log_failure(method: Method, error: FetchError) -> FetchError {
    tracing::error!(error = %error, "Fetch {} request failed", method.as_str());
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FetchClient::new("https://api.example.com").unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.timeout(), Duration::from_millis(5000));
    }

    #[test]
    fn test_client_builder() {
        let client = FetchClient::builder("https://api.example.com/")
            .timeout_ms(1000)
            .header("X-Custom", "test")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.timeout(), Duration::from_millis(1000));
        assert_eq!(client.default_headers()["x-custom"], "test");
    }

    #[test]
    fn test_client_with_options() {
        let options = ClientOptions {
            timeout_ms: None,
            headers: [("Accept".to_string(), "application/json".to_string())]
                .into_iter()
                .collect(),
        };
        let client = FetchClient::with_options("https://api.example.com", options).unwrap();
        assert_eq!(client.timeout(), Duration::from_millis(5000));
        assert_eq!(client.default_headers()["accept"], "application/json");
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        assert!(FetchClient::builder("https://api.example.com")
            .timeout(Duration::ZERO)
            .build()
            .is_err());
    }
}
