//! Shared fixtures for farepath integration tests.

use farepath_lib::{Cost, RouteGraph};

/// Edges of the airport scenario used throughout the tests.
#[allow(dead_code)]
pub const AIRPORT_EDGES: &[(&str, &str, Cost)] = &[
    ("GRU", "BRC", 10),
    ("BRC", "SCL", 5),
    ("GRU", "CDG", 75),
    ("GRU", "SCL", 20),
    ("GRU", "ORL", 56),
    ("ORL", "CDG", 5),
    ("SCL", "ORL", 20),
];

/// Same edges in edge-list file form.
#[allow(dead_code)]
pub const AIRPORT_CSV: &str =
    "GRU,BRC,10\nBRC,SCL,5\nGRU,CDG,75\nGRU,SCL,20\nGRU,ORL,56\nORL,CDG,5\nSCL,ORL,20\n";

#[allow(dead_code)]
pub fn graph_from(edges: &[(&str, &str, Cost)]) -> RouteGraph {
    let mut graph = RouteGraph::new();
    for &(origin, destination, cost) in edges {
        graph.insert_edge(origin, destination, cost);
    }
    graph
}

#[allow(dead_code)]
pub fn airport_graph() -> RouteGraph {
    graph_from(AIRPORT_EDGES)
}
