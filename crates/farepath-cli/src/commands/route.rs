//! One-shot route query.

use std::io::Write;

use anyhow::Result;

use farepath_lib::{find_cheapest_path, RouteGraph, RouteOutcome};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting location.
    pub from: String,
    /// Destination location.
    pub to: String,
}

/// Run a single query and print the rendered outcome.
pub fn handle_route<W: Write>(
    graph: &RouteGraph,
    args: &RouteCommandArgs,
    mut output: W,
) -> Result<RouteOutcome> {
    let outcome = find_cheapest_path(graph, &args.from, &args.to);
    tracing::info!(
        from = %args.from,
        to = %args.to,
        outcome = outcome.label(),
        "route query answered"
    );
    writeln!(output, "{outcome}")?;
    Ok(outcome)
}
