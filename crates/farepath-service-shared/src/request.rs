//! Request types and validation for HTTP endpoints.
//!
//! Field names accept both the English spelling and the Portuguese aliases
//! `origem`, `destino` and `custo`.

use serde::{Deserialize, Serialize};

use farepath_lib::{Cost, EdgeRecord, MAX_EDGE_COST};

use crate::ProblemDetails;

/// Validation trait for request types.
pub trait Validate {
    /// Validate the request, returning a boxed `ProblemDetails` when invalid.
    ///
    /// The `request_id` populates the problem's `instance` field.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Query string of `GET /best-route`.
///
/// Missing identifiers are not rejected here: the search reports them as
/// invalid input in the response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BestRouteQuery {
    #[serde(default, alias = "origem")]
    pub origin: Option<String>,

    #[serde(default, alias = "destino")]
    pub destination: Option<String>,
}

/// JSON body of `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterEdgeRequest {
    #[serde(default, alias = "origem")]
    pub origin: Option<String>,

    #[serde(default, alias = "destino")]
    pub destination: Option<String>,

    #[serde(default, alias = "custo")]
    pub cost: Option<Cost>,
}

impl RegisterEdgeRequest {
    /// Convert a validated request into an edge record.
    pub fn into_record(self) -> EdgeRecord {
        EdgeRecord::new(
            self.origin.unwrap_or_default(),
            self.destination.unwrap_or_default(),
            self.cost.unwrap_or_default(),
        )
    }
}

fn check_identifier(
    field: &str,
    value: Option<&str>,
    request_id: &str,
) -> Result<(), Box<ProblemDetails>> {
    match value {
        None | Some("") => Err(Box::new(ProblemDetails::bad_request(
            format!("The '{field}' field is required and cannot be empty"),
            request_id,
        ))),
        Some(value) if value.contains([',', '\n', '\r']) => {
            Err(Box::new(ProblemDetails::invalid_edge(
                format!("The '{field}' field cannot contain commas or line breaks"),
                request_id,
            )))
        }
        Some(_) => Ok(()),
    }
}

impl Validate for RegisterEdgeRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        check_identifier("origin", self.origin.as_deref(), request_id)?;
        check_identifier("destination", self.destination.as_deref(), request_id)?;

        match self.cost {
            None => Err(Box::new(ProblemDetails::bad_request(
                "The 'cost' field is required",
                request_id,
            ))),
            Some(cost) if cost < 0 => Err(Box::new(ProblemDetails::invalid_edge(
                "The 'cost' field must not be negative",
                request_id,
            ))),
            Some(cost) if cost > MAX_EDGE_COST => Err(Box::new(ProblemDetails::invalid_edge(
                format!("The 'cost' field must not exceed {MAX_EDGE_COST}"),
                request_id,
            ))),
            Some(_) => Ok(()),
        }
    }
}
