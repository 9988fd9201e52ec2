//! Request execution with timeout-driven cancellation.
//!
//! The transport future is raced against a [`futures_timer::Delay`]. Whichever
//! resolves first wins and the other is dropped: a dropped reqwest future
//! aborts its connection, and a dropped `Delay` deregisters its wake-up. The
//! race covers the response head. A success body is read after the timer is
//! gone; an error body is read best-effort within what is left of the timeout
//! and capped at [`MAX_ERROR_BODY_BYTES`].

use std::time::{Duration, Instant};

use futures_timer::Delay;
use futures_util::future::{self, Either};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing;

use crate::error::{FetchError, FetchResult};
use crate::http::request::RequestSpec;

/// Upper bound on the error body kept in [`FetchError::Http`].
pub const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Executes [`RequestSpec`]s over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    client: Client,
}

impl RequestExecutor {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Perform one HTTP exchange and parse the success body as JSON.
    pub async fn execute<T: DeserializeOwned>(&self, spec: RequestSpec) -> FetchResult<T> {
        let timeout = spec.timeout;
        tracing::debug!(
            method = spec.method.as_str(),
            url = %spec.url,
            ?timeout,
            "Sending request"
        );

        let mut req = self
            .client
            .request(spec.method.into(), &spec.url)
            .headers(spec.headers);
        if let Some(body) = spec.body {
            req = req.body(body);
        }

        let started = Instant::now();
        let response = match race_timeout(req.send(), timeout).await {
            Ok(sent) => sent.map_err(FetchError::from_transport)?,
            Err(e) => {
                tracing::warn!(?timeout, "Request to {} timed out", spec.url);
                return Err(e);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let remaining = timeout.saturating_sub(started.elapsed());
            let body = read_error_body(response, remaining).await;
            tracing::warn!(status = status.as_u16(), url = %spec.url, "Request returned error status");
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(FetchError::Parse)
    }
}

/// Read up to [`MAX_ERROR_BODY_BYTES`] of an error body within `budget`.
///
/// Never fails: a stalled or broken body yields whatever arrived before the
/// budget ran out, decoded lossily.
async fn read_error_body(mut response: Response, budget: Duration) -> String {
    let mut buf = Vec::new();
    if !budget.is_zero() {
        let read = async {
            while let Some(chunk) = response.chunk().await? {
                let room = MAX_ERROR_BODY_BYTES - buf.len();
                buf.extend_from_slice(&chunk[..chunk.len().min(room)]);
                if buf.len() >= MAX_ERROR_BODY_BYTES {
                    break;
                }
            }
            Ok::<(), reqwest::Error>(())
        };
        match race_timeout(read, budget).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("Failed to read error response body: {}", e),
            Err(_) => tracing::warn!(?budget, "Error response body did not arrive in time"),
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Resolve `fut`, or fail with [`FetchError::Timeout`] if `timeout` elapses
/// first. The losing side is dropped before this returns.
async fn race_timeout<F: std::future::Future>(fut: F, timeout: Duration) -> FetchResult<F::Output> {
    let fut = std::pin::pin!(fut);
    match future::select(fut, Delay::new(timeout)).await {
        Either::Left((output, _timer)) => Ok(output),
        Either::Right(((), _pending)) => Err(FetchError::Timeout { after: timeout }),
    }
}
