use std::fmt;

use crate::graph::Cost;

/// Separator placed between locations in a rendered path.
///
/// The search orders equal-cost states by their path text, so this value is
/// part of the tie-break and must stay stable.
pub const PATH_SEPARATOR: &str = " - ";

/// Lowest-cost route returned by a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheapestRoute {
    hops: Vec<String>,
    cost: Cost,
}

impl CheapestRoute {
    pub(crate) fn new(hops: Vec<String>, cost: Cost) -> Self {
        Self { hops, cost }
    }

    /// Ordered locations from origin to destination, both included.
    pub fn hops(&self) -> &[String] {
        &self.hops
    }

    /// Sum of the edge costs along [`Self::hops`].
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }

    /// Locations joined with [`PATH_SEPARATOR`].
    pub fn path(&self) -> String {
        self.hops.join(PATH_SEPARATOR)
    }
}

/// Outcome of a cheapest-path query.
///
/// Both failure variants are ordinary results rather than errors: callers
/// render them to the user the same way they render a found route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Found(CheapestRoute),
    /// Origin or destination was missing or empty; no search was attempted.
    InvalidInput,
    /// The frontier ran dry before reaching the destination.
    NotFound,
}

impl RouteOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    pub fn route(&self) -> Option<&CheapestRoute> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            _ => None,
        }
    }

    /// Short machine-friendly label, used for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            RouteOutcome::Found(_) => "found",
            RouteOutcome::InvalidInput => "invalid_input",
            RouteOutcome::NotFound => "not_found",
        }
    }
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteOutcome::Found(route) => {
                write!(f, "Best route: {} at a cost of ${}", route.path(), route.cost)
            }
            RouteOutcome::InvalidInput => f.write_str("Origin or destination not specified."),
            RouteOutcome::NotFound => f.write_str("Route not found."),
        }
    }
}
