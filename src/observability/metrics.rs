//! Metrics collection and exposition.
//!
//! # Metrics
//! - `lnhub_rpc_calls_total` (counter): node calls by call name and status
//! - `lnhub_rpc_duration_seconds` (histogram): node call latency
//! - `lnhub_requests_total` (counter): page requests by method and status
//! - `lnhub_request_duration_seconds` (histogram): page request latency

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one call to the node.
pub fn record_rpc(call: &'static str, ok: bool, start: Instant) {
    let status = if ok { "ok" } else { "error" };
    metrics::counter!("lnhub_rpc_calls_total", "call" => call, "status" => status).increment(1);
    metrics::histogram!("lnhub_rpc_duration_seconds", "call" => call)
        .record(start.elapsed().as_secs_f64());
}

/// Record one page request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "lnhub_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("lnhub_request_duration_seconds").record(start.elapsed().as_secs_f64());
}
