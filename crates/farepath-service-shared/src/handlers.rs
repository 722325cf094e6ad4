//! Endpoint handlers and router assembly.
//!
//! # Endpoints
//!
//! - `GET /best-route?origin=..&destination=..` (alias `/melhor-rota`, with
//!   `origem`/`destino`) - rendered route outcome as `text/plain`
//! - `POST /register` (alias `/registrar`) - register an edge, empty `200`
//! - `GET /metrics` - Prometheus metrics
//! - `GET /health/live`, `GET /health/ready` - probes
//!
//! Every other path or method answers `404` with a problem body.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use farepath_lib::RouteOutcome;

use crate::{
    extract_or_generate_request_id, from_lib_error, health_live, health_ready, metrics_handler,
    record_edge_registered, record_route_calculated, record_route_failed, record_route_hops,
    AppState, BestRouteQuery, ProblemDetails, RegisterEdgeRequest, Validate,
};

/// Build the service router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/best-route", get(best_route_handler))
        .route("/melhor-rota", get(best_route_handler))
        .route("/register", post(register_handler))
        .route("/registrar", post(register_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle `GET /best-route`.
async fn best_route_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<BestRouteQuery>, QueryRejection>,
) -> Response {
    let request_id = extract_or_generate_request_id(&headers);

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(request_id = %request_id, error = %rejection, "malformed route query");
            record_route_failed("bad_query");
            return ProblemDetails::bad_request(rejection.body_text(), request_id.as_str())
                .into_response();
        }
    };

    let origin = query.origin.unwrap_or_default();
    let destination = query.destination.unwrap_or_default();
    let outcome = state.find_cheapest_path(&origin, &destination);

    match &outcome {
        RouteOutcome::Found(route) => {
            record_route_calculated();
            record_route_hops(route.hop_count());
        }
        other => record_route_failed(other.label()),
    }

    info!(
        request_id = %request_id,
        origin = %origin,
        destination = %destination,
        outcome = outcome.label(),
        "route query answered"
    );

    (StatusCode::OK, outcome.to_string()).into_response()
}

/// Handle `POST /register`.
async fn register_handler(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let request_id = extract_or_generate_request_id(&headers);

    let request: RegisterEdgeRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            warn!(request_id = %request_id, error = %err, "malformed edge registration body");
            return ProblemDetails::bad_request(
                format!("Request body is not a valid edge: {err}"),
                request_id.as_str(),
            )
            .into_response();
        }
    };

    if let Err(problem) = request.validate(request_id.as_str()) {
        warn!(request_id = %request_id, problem = %problem, "edge registration rejected");
        return problem.into_response();
    }

    let record = request.into_record();
    info!(
        request_id = %request_id,
        origin = %record.origin,
        destination = %record.destination,
        cost = record.cost,
        "registering edge"
    );

    let writer = state.clone();
    match tokio::task::spawn_blocking(move || writer.register_edge(record)).await {
        Ok(Ok(())) => {
            record_edge_registered();
            StatusCode::OK.into_response()
        }
        Ok(Err(err)) => {
            error!(
                request_id = %request_id,
                path = %state.edges_path().display(),
                error = %err,
                "edge registration failed"
            );
            from_lib_error(&err, request_id.as_str()).into_response()
        }
        Err(err) => {
            error!(request_id = %request_id, error = %err, "edge registration task failed");
            ProblemDetails::internal_error("edge registration did not complete", request_id.as_str())
                .into_response()
        }
    }
}

async fn not_found_handler(headers: HeaderMap, uri: Uri) -> Response {
    let request_id = extract_or_generate_request_id(&headers);
    ProblemDetails::not_found(uri.path(), request_id.as_str()).into_response()
}
