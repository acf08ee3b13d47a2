//! The seam between dashboards and the metrics backend.

use std::collections::HashMap;
use std::fmt;

use crate::value::MetricValue;

/// A backend capable of resolving a batch of queries.
///
/// Individual query failures are represented as [`MetricValue::Error`]
/// entries inside the returned map; `Err` is reserved for failures that
/// take down the whole batch (in which case the caller marks every widget
/// errored for that tick).
pub trait MetricSource {
    /// Resolve `queries` (duplicates allowed) into a map keyed by query
    /// text.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] only when the batch as a whole failed.
    fn query_batch(
        &mut self,
        queries: &[String],
    ) -> Result<HashMap<String, MetricValue>, SourceError>;
}

/// A whole-batch failure from a metric source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    message: String,
}

impl SourceError {
    /// Create an error with a display-ready message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SourceError {}
