//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define the request metrics recorded by the holiday endpoint
//! - Render the registry in Prometheus text format for `/metrics`
//!
//! # Metrics
//! - `api_request_count` (counter): requests by method, endpoint, http_status
//! - `api_request_latency_seconds` (histogram): latency by endpoint
//!
//! # Design Decisions
//! - The recorder is owned by `Metrics` and injected through app state; it is
//!   never installed as the global recorder
//! - Updates go through `metrics::with_local_recorder` and are atomic, so
//!   concurrent requests need no extra locking
//! - Histogram buckets match the usual web latency defaults

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::{
    BuildError, Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder,
};

/// Request counter name.
pub const REQUEST_COUNT: &str = "api_request_count";

/// Request latency histogram name.
pub const REQUEST_LATENCY: &str = "api_request_latency_seconds";

const LATENCY_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

/// Process metrics registry.
pub struct Metrics {
    recorder: PrometheusRecorder,
    handle: PrometheusHandle,
}

impl Metrics {
    /// Build an empty registry with the request metrics described.
    pub fn new() -> Result<Self, BuildError> {
        let recorder = PrometheusBuilder::new()
            .set_buckets_for_metric(Matcher::Full(REQUEST_LATENCY.to_string()), LATENCY_BUCKETS)?
            .build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            describe_counter!(REQUEST_COUNT, "Total API requests");
            describe_histogram!(REQUEST_LATENCY, Unit::Seconds, "API request latency");
        });

        Ok(Self { recorder, handle })
    }

    /// Record one request: a counter increment and a latency observation
    /// measured from `start` to now.
    pub fn record_request(&self, method: &str, endpoint: &str, status: u16, start: Instant) {
        let latency = start.elapsed().as_secs_f64();

        metrics::with_local_recorder(&self.recorder, || {
            counter!(
                REQUEST_COUNT,
                "method" => method.to_string(),
                "endpoint" => endpoint.to_string(),
                "http_status" => status.to_string()
            )
            .increment(1);
            histogram!(REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency);
        });
    }

    /// Prometheus text exposition of everything recorded so far.
    pub fn render(&self) -> String {
        self.handle.render()
    }

    /// Drain histogram buffers. Call periodically.
    pub fn run_upkeep(&self) {
        self.handle.run_upkeep();
    }
}

/// Value of the first sample named `name` carrying every `labels` pair, as
/// found in Prometheus text output.
pub fn find_sample(rendered: &str, name: &str, labels: &[(&str, &str)]) -> Option<f64> {
    rendered
        .lines()
        .filter(|line| !line.starts_with('#'))
        .filter(|line| {
            line.strip_prefix(name)
                .is_some_and(|rest| rest.starts_with('{') || rest.starts_with(' '))
        })
        .find(|line| {
            labels
                .iter()
                .all(|(k, v)| line.contains(&format!("{}=\"{}\"", k, v)))
        })
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
}
