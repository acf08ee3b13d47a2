//! Prometheus metrics client for Mirador.
//!
//! Implements the [`mirador_core::MetricSource`] seam over the Prometheus
//! HTTP API using a blocking client: one instant query per widget query,
//! executed sequentially inside one logical batch. Individual query
//! failures become `MetricValue::Error` entries so a flaky backend can
//! never abort a refresh cycle.

mod client;
mod error;

pub use client::{decode_instant_response, PrometheusClient, DEFAULT_TIMEOUT_SECS};
pub use error::ClientError;
