//! Error types for the Prometheus client.

use thiserror::Error;

/// Errors raised by the Prometheus client.
///
/// Only construction-time errors are fatal to the caller; query-time
/// errors are converted into per-query error values inside a batch.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No backend URL was configured anywhere.
    #[error(
        "Prometheus URL not configured; pass --url or set the PROMETHEUS_URL environment variable"
    )]
    UrlMissing,

    /// The configured URL is not usable.
    #[error("invalid Prometheus URL '{0}': expected http:// or https://")]
    InvalidUrl(String),

    /// Transport-level failure talking to the backend.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered, but with a non-success payload.
    #[error("query failed: {0}")]
    Backend(String),

    /// The response body did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}
