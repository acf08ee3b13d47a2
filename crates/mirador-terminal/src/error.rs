//! Error types for the terminal backend.

use thiserror::Error;

/// Errors that can occur while running the dashboard UI.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error from terminal operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
