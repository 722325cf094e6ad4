use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use farepath_cli::commands::add::{handle_add, AddCommandArgs};
use farepath_cli::commands::load_graph;
use farepath_cli::commands::route::{handle_route, RouteCommandArgs};
use farepath_cli::console::run_console;
use farepath_lib::MAX_EDGE_COST;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cheapest-route queries over an edge-list file")]
struct Cli {
    /// Edge-list file with one `origin,destination,cost` edge per line.
    #[arg(env = "FAREPATH_EDGES")]
    edges: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive prompt (default).
    Console,
    /// Print the cheapest route between two locations.
    Route {
        /// Starting location.
        #[arg(long = "from")]
        from: String,
        /// Destination location.
        #[arg(long = "to")]
        to: String,
    },
    /// Register a new edge and append it to the edge-list file.
    Add {
        /// Origin location.
        #[arg(long = "from")]
        from: String,
        /// Destination location.
        #[arg(long = "to")]
        to: String,
        /// Non-negative integer cost.
        #[arg(long = "cost", value_parser = clap::value_parser!(i64).range(0..=MAX_EDGE_COST))]
        cost: i64,
    },
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let mut graph = load_graph(&cli.edges)?;

    match cli.command.unwrap_or(Command::Console) {
        Command::Console => {
            let stdin = io::stdin();
            run_console(&graph, stdin.lock(), io::stdout().lock())
                .context("console session failed")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Route { from, to } => {
            let outcome = handle_route(&graph, &RouteCommandArgs { from, to }, io::stdout())?;
            Ok(if outcome.is_found() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Add { from, to, cost } => {
            handle_add(&mut graph, &cli.edges, &AddCommandArgs { from, to, cost })?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
