//! Shared infrastructure for the farepath HTTP service.
//!
//! This crate provides the HTTP glue around `farepath-lib`:
//!
//! - [`AppState`]: the routing graph behind a lock plus the edge-list path
//! - [`router`]: the assembled axum router with every endpoint
//! - [`health`]: liveness/readiness handlers
//! - [`ProblemDetails`]: RFC 9457 Problem Details for error responses
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: request id extraction
//! - Request types with validation
//!
//! # Architecture
//!
//! Handlers stay thin; route search and edge-list handling live in
//! `farepath-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Parse query string / JSON body                           │
//! │  - Validate parameters                                      │
//! │  - Lock the graph, call farepath-lib                        │
//! │  - Render the outcome                                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![deny(warnings)]

mod handlers;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use handlers::router;
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_edge_registered, record_route_calculated,
    record_route_failed, record_route_hops, MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, RequestId};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_EDGE,
    PROBLEM_INVALID_REQUEST, PROBLEM_NOT_FOUND,
};
pub use request::{BestRouteQuery, RegisterEdgeRequest, Validate};
pub use state::{AppState, AppStateError};
