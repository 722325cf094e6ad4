//! farepath library entry points.
//!
//! This crate owns the routing graph built from `origin,destination,cost`
//! edge lists and the least-cost search that walks it. Higher-level consumers
//! (the console CLI, the HTTP service) should only depend on the functions
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod edges;
pub mod error;
pub mod graph;
pub mod path;
pub mod routing;

pub use edges::{
    append_edge, load_edges, parse_edge_line, read_edges, EdgeRecord, LoadReport, MAX_EDGE_COST,
};
pub use error::{Error, Result};
pub use graph::{Cost, Edge, RouteGraph};
pub use path::find_cheapest_path;
pub use routing::{CheapestRoute, RouteOutcome, PATH_SEPARATOR};
