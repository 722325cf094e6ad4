//! Register a new edge: insert into the graph and append it to the edge list.

use std::path::Path;

use anyhow::{Context, Result};

use farepath_lib::{append_edge, Cost, EdgeRecord, RouteGraph};

/// Arguments for the add command.
#[derive(Debug, Clone)]
pub struct AddCommandArgs {
    pub from: String,
    pub to: String,
    pub cost: Cost,
}

/// Persist the edge first so a rejected write leaves the graph untouched.
pub fn handle_add(graph: &mut RouteGraph, edges_path: &Path, args: &AddCommandArgs) -> Result<()> {
    anyhow::ensure!(args.cost >= 0, "cost must not be negative (got {})", args.cost);

    let record = EdgeRecord::new(args.from.as_str(), args.to.as_str(), args.cost);
    append_edge(edges_path, &record)
        .with_context(|| format!("failed to append edge to {}", edges_path.display()))?;
    graph.insert_edge(record.origin, record.destination, record.cost);

    tracing::info!(
        from = %args.from,
        to = %args.to,
        cost = args.cost,
        path = %edges_path.display(),
        "edge registered"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(from: &str, to: &str, cost: Cost) -> AddCommandArgs {
        AddCommandArgs {
            from: from.to_string(),
            to: to.to_string(),
            cost,
        }
    }

    #[test]
    fn appends_and_inserts() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("routes.csv");
        let mut graph = RouteGraph::new();

        handle_add(&mut graph, &path, &args("GRU", "SCL", 20)).expect("edge added");

        assert_eq!(graph.edges_from("GRU").len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "GRU,SCL,20\n");
    }

    #[test]
    fn negative_cost_is_rejected() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("routes.csv");
        let mut graph = RouteGraph::new();

        let error = handle_add(&mut graph, &path, &args("GRU", "SCL", -1)).expect_err("rejected");
        assert!(error.to_string().contains("negative"));
        assert!(graph.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn separator_in_identifier_is_rejected() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("routes.csv");
        let mut graph = RouteGraph::new();

        assert!(handle_add(&mut graph, &path, &args("GRU,X", "SCL", 1)).is_err());
        assert!(graph.is_empty());
    }
}
