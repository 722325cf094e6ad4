//! Health check handlers for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator, always "ok" while the process serves requests.
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Locations with outgoing edges (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations_loaded: Option<usize>,

    /// Edges in the graph (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges_loaded: Option<usize>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            locations_loaded: None,
            edges_loaded: None,
        }
    }

    /// Create a ready status with graph counts.
    pub fn ready(service: &str, version: &str, locations: usize, edges: usize) -> Self {
        Self {
            locations_loaded: Some(locations),
            edges_loaded: Some(edges),
            ..Self::alive(service, version)
        }
    }
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"farepath-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// An empty graph is still ready: edges can be registered at runtime.
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let status = HealthStatus::ready(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        state.origin_count(),
        state.edge_count(),
    );
    (StatusCode::OK, Json(status))
}
