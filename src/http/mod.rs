//! HTTP layer: per-call request specs and the executor that runs them.

pub mod executor;
pub mod request;

pub use executor::{RequestExecutor, MAX_ERROR_BODY_BYTES};
pub use request::{Method, RequestSpec};
