//! Per-call request description.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{FetchError, FetchResult};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// A single request, built fresh for each call.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub timeout: Duration,
}

impl RequestSpec {
    /// GET `endpoint` with the client's default headers and timeout.
    pub fn get(config: &ClientConfig, endpoint: &str) -> Self {
        Self {
            method: Method::Get,
            url: config.url_for(endpoint),
            headers: config.default_headers().clone(),
            body: None,
            timeout: config.timeout(),
        }
    }

    /// POST `data` as JSON to `endpoint`.
    ///
    /// `Content-Type: application/json` is applied over the defaults, so it
    /// replaces any default content type.
    pub fn post_json<B: Serialize + ?Sized>(
        config: &ClientConfig,
        endpoint: &str,
        data: &B,
    ) -> FetchResult<Self> {
        let body = serde_json::to_vec(data).map_err(FetchError::Serialize)?;
        let mut headers = config.default_headers().clone();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(Self {
            method: Method::Post,
            url: config.url_for(endpoint),
            headers,
            body: Some(body),
            timeout: config.timeout(),
        })
    }

    /// Set a header on this request, replacing a default of the same name.
    pub fn with_header(mut self, name: &str, value: &str) -> FetchResult<Self> {
        let header_name = HeaderName::try_from(name).map_err(|e| {
            FetchError::InvalidConfig(format!("Invalid header name '{}': {}", name, e))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            FetchError::InvalidConfig(format!("Invalid header value for '{}': {}", name, e))
        })?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Override the timeout for this request only.
    pub fn with_timeout(mut self, timeout: Duration) -> FetchResult<Self> {
        if timeout.is_zero() {
            return Err(FetchError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }
        self.timeout = timeout;
        Ok(self)
    }
}
