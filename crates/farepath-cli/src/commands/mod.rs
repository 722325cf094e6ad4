// Handlers for the CLI subcommands. main.rs parses arguments and dispatches
// here; the console loop itself lives in `crate::console`.

pub mod add;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use farepath_lib::{load_edges, Error as LibError, RouteGraph};

/// Load the edge list at `path`, starting from an empty graph when the file
/// does not exist yet.
pub fn load_graph(path: &Path) -> Result<RouteGraph> {
    let mut graph = RouteGraph::new();
    match load_edges(path, &mut graph) {
        Ok(_) => Ok(graph),
        Err(LibError::EdgeListNotFound { path }) => {
            warn!(path = %path.display(), "edge list not found, starting with an empty graph");
            Ok(graph)
        }
        Err(err) => Err(err)
            .with_context(|| format!("failed to load edge list from {}", path.display())),
    }
}
