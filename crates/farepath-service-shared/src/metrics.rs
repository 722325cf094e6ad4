//! Prometheus metrics for the farepath service.
//!
//! [`init_metrics`] installs the recorder once at startup, [`metrics_handler`]
//! renders it for `GET /metrics`, and the `record_*` helpers wrap the
//! business counters so handlers never spell metric names themselves.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Whether metrics collection is enabled.
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl MetricsConfig {
    /// Create configuration from `METRICS_ENABLED` ("false" disables, default on).
    pub fn from_env() -> Self {
        let enabled = std::env::var("METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        Self { enabled }
    }
}

/// Initialize the Prometheus metrics recorder.
///
/// # Errors
///
/// Returns an error if metrics are disabled, the recorder was already
/// installed, or the Prometheus builder fails.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }

    if PROMETHEUS_HANDLE.get().is_some() {
        return Err(MetricsError::AlreadyInitialized);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)?;

    Ok(())
}

/// Axum handler for the `/metrics` endpoint.
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|h| h.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone)]
pub enum MetricsError {
    /// Metrics are disabled in configuration.
    Disabled,
    /// The recorder has already been installed.
    AlreadyInitialized,
    /// The Prometheus builder failed to install.
    InstallFailed(String),
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsError::Disabled => write!(f, "metrics are disabled"),
            MetricsError::AlreadyInitialized => write!(f, "metrics recorder already initialized"),
            MetricsError::InstallFailed(e) => {
                write!(f, "failed to install metrics recorder: {}", e)
            }
        }
    }
}

impl std::error::Error for MetricsError {}

// =============================================================================
// Business Metrics Helpers
// =============================================================================

/// Increment `farepath_routes_calculated_total`.
pub fn record_route_calculated() {
    metrics::counter!("farepath_routes_calculated_total").increment(1);
}

/// Increment `farepath_routes_failed_total` for the given reason
/// (`not_found`, `invalid_input`, `bad_query`).
pub fn record_route_failed(reason: &str) {
    metrics::counter!(
        "farepath_routes_failed_total",
        "reason" => reason.to_string()
    )
    .increment(1);
}

/// Record the hop count of a found route in `farepath_route_hops`.
pub fn record_route_hops(hops: usize) {
    metrics::histogram!("farepath_route_hops").record(hops as f64);
}

/// Increment `farepath_edges_registered_total`.
pub fn record_edge_registered() {
    metrics::counter!("farepath_edges_registered_total").increment(1);
}
