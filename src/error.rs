//! Error types for the fetch client.

use std::time::Duration;

use thiserror::Error;

/// Errors returned by [`FetchClient`](crate::FetchClient) calls.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection refused, TLS, reset, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response head did not arrive before the request timeout
    #[error("Request timed out after {}ms", .after.as_millis())]
    Timeout { after: Duration },

    /// Non-2xx response status
    #[error("HTTP error! Status: {status}")]
    Http { status: u16, body: String },

    /// Success body was not valid JSON for the requested type
    #[error("Failed to parse response body: {0}")]
    Parse(#[source] serde_json::Error),

    /// Request payload could not be encoded as JSON
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Rejected client configuration (header name/value, zero timeout)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The joined request URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

impl FetchError {
    /// Whether this error came from the request timeout firing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }

    /// The HTTP status code for [`FetchError::Http`].
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify a transport error.
    ///
    /// URL problems surface from reqwest as builder errors and are reported
    /// as [`FetchError::InvalidUrl`]; everything else is a network failure.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            let url = err
                .url()
                .map(|u| u.to_string())
                .unwrap_or_default();
            return FetchError::InvalidUrl(format!("{} ({})", url, err));
        }
        FetchError::Network(err)
    }
}
