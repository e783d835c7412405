//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): resolved paths by outcome
//! - `router_index_builds_total` (counter): index builds by result
//! - `router_index_routes` (gauge): routes in the most recent good index
//!
//! # Design Decisions
//! - Recorded by the batch and watch layers, never inside `resolve`
//! - Without an installed recorder every call is a no-op
//! - Prometheus exporter only in watch mode

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::routing::Resolution;

/// Install the Prometheus recorder and HTTP listener.
///
/// Must be called from inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics endpoint"),
    }
}

/// Count one resolved path.
pub fn record_resolution(resolution: &Resolution) {
    let outcome = if resolution.is_match() { "matched" } else { "not_found" };
    ::metrics::counter!("router_resolutions_total", "outcome" => outcome).increment(1);
}

/// Count one index build and, on success, publish its route count.
pub fn record_index_build(ok: bool, routes: usize) {
    let result = if ok { "ok" } else { "error" };
    ::metrics::counter!("router_index_builds_total", "result" => result).increment(1);
    if ok {
        ::metrics::gauge!("router_index_routes").set(routes as f64);
    }
}
