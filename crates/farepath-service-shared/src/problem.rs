//! RFC 9457 Problem Details for HTTP APIs.
//!
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use farepath_lib::Error as LibError;

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for edges that cannot be stored.
pub const PROBLEM_INVALID_EDGE: &str = "/problems/invalid-edge";

/// Problem type URI for paths with no endpoint.
pub const PROBLEM_NOT_FOUND: &str = "/problems/not-found";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// RFC 9457 Problem Details response structure.
///
/// # Example
///
/// ```
/// use farepath_service_shared::{ProblemDetails, PROBLEM_INVALID_EDGE};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(PROBLEM_INVALID_EDGE, "Invalid Edge", StatusCode::BAD_REQUEST)
///     .with_detail("origin must not be empty")
///     .with_request_id("req-12345");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Request identifier of the failing request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDetails {
    /// Create a new ProblemDetails with required fields.
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// 400 Bad Request for malformed input.
    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// 400 Bad Request for an edge that breaks a graph invariant.
    pub fn invalid_edge(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(PROBLEM_INVALID_EDGE, "Invalid Edge", StatusCode::BAD_REQUEST)
            .with_detail(detail)
            .with_request_id(request_id)
    }

    /// 404 Not Found for paths the service does not serve.
    pub fn not_found(path: &str, request_id: impl Into<String>) -> Self {
        Self::new(PROBLEM_NOT_FOUND, "Not Found", StatusCode::NOT_FOUND)
            .with_detail(format!("No endpoint at '{}'", path))
            .with_request_id(request_id)
    }

    /// 500 Internal Server Error.
    pub fn internal_error(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.title,
            self.detail.as_deref().unwrap_or("")
        )
    }
}

impl std::error::Error for ProblemDetails {}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Json(&self).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );

        *response.status_mut() = status;
        response
    }
}

/// Convert library errors to ProblemDetails.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::InvalidEdge { message } => ProblemDetails::invalid_edge(message, request_id),
        LibError::EdgeListNotFound { path } => ProblemDetails::internal_error(
            format!("Edge list not available at {}", path.display()),
            request_id,
        ),
        _ => ProblemDetails::internal_error(error.to_string(), request_id),
    }
}
