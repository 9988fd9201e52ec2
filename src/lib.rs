//! # easy-fetch
//!
//! A thin async JSON-over-HTTP client: `get`/`post` helpers with a shared base
//! URL, default headers and a per-request timeout that cancels the in-flight
//! request.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use easy_fetch::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), FetchError> {
//!     let client = FetchClient::new("https://api.example.com")?;
//!
//!     match client.get("users/1").await {
//!         Ok(user) => println!("{user}"),
//!         Err(FetchError::Http { status: 404, .. }) => println!("no such user"),
//!         Err(e) if e.is_timeout() => println!("slow server: {e}"),
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Client configuration: base URL, timeout, default headers.
pub mod config;

/// Error taxonomy shared by every call.
pub mod error;

/// Request specs and the timeout-racing executor.
pub mod http;

/// `FetchClient`: the primary entry point.
pub mod client;

pub use client::{FetchClient, FetchClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, ClientOptions, DEFAULT_TIMEOUT_MS};
pub use error::{FetchError, FetchResult};
pub use http::{Method, RequestExecutor, RequestSpec, MAX_ERROR_BODY_BYTES};

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use easy_fetch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{FetchClient, FetchClientBuilder};
    pub use crate::config::{ClientConfig, ClientOptions, DEFAULT_TIMEOUT_MS};
    pub use crate::error::{FetchError, FetchResult};
    pub use crate::http::{Method, RequestSpec};
}
