use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    analyze::{self, AnalyzeArgs},
    distances::{self, DistancesArgs},
    euler::{self, EulerArgs},
    hamilton::{self, HamiltonArgs},
};

mod commands;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "algos", version, about = "Graph algorithms sample driver")]
struct Cli {
    /// Print reports as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    /// Enable debug logging on stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Log level or filter directive, e.g. `debug` or `algos_graph=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Emit log records as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report connectivity, reachability and cycles of a random graph.
    Analyze(AnalyzeArgs),
    /// Search a random graph for an Eulerian path.
    Euler(EulerArgs),
    /// Enumerate Hamiltonian paths and cycles of a complete or random matrix.
    Hamilton(HamiltonArgs),
    /// Compare the shortest-path engines on a random weighted graph.
    Distances(DistancesArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json)?;
    match cli.command {
        Command::Analyze(args) => analyze::run(&args, cli.json),
        Command::Euler(args) => euler::run(&args, cli.json),
        Command::Hamilton(args) => hamilton::run(&args, cli.json),
        Command::Distances(args) => distances::run(&args, cli.json),
    }
}
