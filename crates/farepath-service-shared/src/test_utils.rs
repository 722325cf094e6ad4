//! Test utilities for handler testing.
//!
//! Provides the airport fixture graph and state built on top of it.

use std::path::Path;

use farepath_lib::{Cost, RouteGraph};

use crate::state::AppState;

/// Edges of the airport fixture, in insertion order.
pub const AIRPORT_EDGES: &[(&str, &str, Cost)] = &[
    ("GRU", "BRC", 10),
    ("BRC", "SCL", 5),
    ("GRU", "CDG", 75),
    ("GRU", "SCL", 20),
    ("GRU", "ORL", 56),
    ("ORL", "CDG", 5),
    ("SCL", "ORL", 20),
];

/// Build the airport fixture graph.
pub fn airport_graph() -> RouteGraph {
    let mut graph = RouteGraph::new();
    for &(origin, destination, cost) in AIRPORT_EDGES {
        graph.insert_edge(origin, destination, cost);
    }
    graph
}

/// State over the airport graph whose registrations append to `edges_path`.
pub fn airport_state(edges_path: &Path) -> AppState {
    AppState::from_graph(airport_graph(), edges_path)
}
