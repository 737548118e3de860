//! Metrics collection and exposition.
//!
//! # Metrics
//! - `product_requests_total` (counter): requests by operation, status
//! - `product_request_duration_seconds` (histogram): latency by operation
//! - `product_validation_rejections_total` (counter): 400s by operation

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed product request.
pub fn record_request(operation: &'static str, status: u16, start: Instant) {
    counter!(
        "product_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);

    histogram!("product_request_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());

    if status == 400 {
        counter!("product_validation_rejections_total", "operation" => operation).increment(1);
    }
}
