use std::error::Error;
use std::fmt;

use algos_core::rng::RngHandle;
use algos_core::{Direction, Graph};
use algos_graph::{
    enumerate_cycles, format_walk, gen_random_list, has_cycle, is_connected, reachable_set,
};
use clap::Args;
use serde::Serialize;

use super::{emit, GraphArgs};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
    /// Vertex to compute the reachable set from.
    #[arg(long, default_value_t = 0)]
    pub start: usize,
}

#[derive(Debug, Serialize)]
struct AnalyzeReport {
    seed: u64,
    vertices: usize,
    edges: usize,
    direction: Direction,
    connected: bool,
    start: usize,
    reachable: Vec<usize>,
    has_cycle: bool,
    cycles: Vec<Vec<usize>>,
}

impl fmt::Display for AnalyzeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:?} graph, {} vertices, {} edges (seed {})",
            self.direction, self.vertices, self.edges, self.seed
        )?;
        writeln!(f, "connected from 0: {}", self.connected)?;
        writeln!(f, "reachable from {}: {:?}", self.start, self.reachable)?;
        writeln!(f, "has cycle: {}", self.has_cycle)?;
        for cycle in &self.cycles {
            writeln!(f, "  cycle: {}", format_walk(cycle))?;
        }
        Ok(())
    }
}

pub fn run(args: &AnalyzeArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let mut rng = RngHandle::from_seed(args.graph.seed);
    let graph = gen_random_list(&args.graph.config(), &mut rng)?;
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "generated graph"
    );

    let report = AnalyzeReport {
        seed: rng.seed(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        direction: graph.direction(),
        connected: is_connected(&graph),
        start: args.start,
        reachable: reachable_set(&graph, args.start)?.into_iter().collect(),
        has_cycle: has_cycle(&graph),
        cycles: enumerate_cycles(&graph),
    };
    emit(&report, json)
}
