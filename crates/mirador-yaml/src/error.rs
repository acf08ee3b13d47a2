//! Error types for configuration loading.

use std::fmt;
use std::path::PathBuf;

/// Error loading or validating a dashboard configuration.
#[derive(Debug)]
pub enum ParseError {
    /// Configuration file could not be read.
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// YAML parsing error.
    Yaml(serde_yaml_ng::Error),
    /// Schema-level validation error.
    Validation(String),
    /// Invalid value for a specific field.
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::Yaml(e) => write!(f, "YAML error: {e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Yaml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yaml_ng::Error> for ParseError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        Self::Yaml(e)
    }
}
