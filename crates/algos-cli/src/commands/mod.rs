use std::error::Error;
use std::fmt::Display;

use algos_graph::RandomGraphConfig;
use clap::Args;
use serde::Serialize;

pub mod analyze;
pub mod distances;
pub mod euler;
pub mod hamilton;

/// Knobs shared by every subcommand that draws a random adjacency list.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Number of vertices.
    #[arg(long, default_value_t = 8)]
    pub vertices: usize,
    /// Number of edges to draw.
    #[arg(long, default_value_t = 12)]
    pub edges: usize,
    /// Seed for the deterministic generator.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Store every edge for both endpoints.
    #[arg(long)]
    pub undirected: bool,
    /// Forbid edges that start and end at the same vertex.
    #[arg(long)]
    pub no_self_loops: bool,
}

impl GraphArgs {
    pub fn config(&self) -> RandomGraphConfig {
        let config = RandomGraphConfig {
            vertices: self.vertices,
            edges: self.edges,
            allow_self_loops: !self.no_self_loops,
            ..RandomGraphConfig::default()
        };
        if self.undirected {
            config.undirected()
        } else {
            config
        }
    }
}

/// Prints `report` as pretty JSON or through its `Display` impl.
pub fn emit<T>(report: &T, json: bool) -> Result<(), Box<dyn Error>>
where
    T: Serialize + Display,
{
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
