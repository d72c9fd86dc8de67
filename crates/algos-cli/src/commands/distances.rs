use std::error::Error;
use std::fmt;

use algos_core::rng::RngHandle;
use algos_graph::{distances, gen_random_list, ShortestPathEngine};
use clap::{Args, ValueEnum};
use serde::Serialize;

use super::{emit, GraphArgs};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EngineChoice {
    /// Repeated relaxation passes.
    Naive,
    /// Array-scan Dijkstra.
    Dense,
    /// Bucket queue bounded by `--max-weight`.
    Dial,
    /// Binary-heap Dijkstra.
    Heap,
}

#[derive(Args, Debug)]
pub struct DistancesArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
    /// Largest edge weight drawn, also used as the Dial bound.
    #[arg(long, default_value_t = 10)]
    pub max_weight: u64,
    /// Source vertex.
    #[arg(long, default_value_t = 0)]
    pub source: usize,
    /// Run a single engine instead of all four.
    #[arg(long, value_enum)]
    pub engine: Option<EngineChoice>,
}

impl EngineChoice {
    fn engine(self, max_weight: u64) -> ShortestPathEngine {
        match self {
            EngineChoice::Naive => ShortestPathEngine::Naive,
            EngineChoice::Dense => ShortestPathEngine::DenseDijkstra,
            EngineChoice::Dial => ShortestPathEngine::Dial { max_weight },
            EngineChoice::Heap => ShortestPathEngine::HeapDijkstra,
        }
    }
}

#[derive(Debug, Serialize)]
struct EngineRun {
    engine: &'static str,
    distances: Vec<Option<u64>>,
}

#[derive(Debug, Serialize)]
struct DistancesReport {
    seed: u64,
    vertices: usize,
    edges: usize,
    source: usize,
    runs: Vec<EngineRun>,
    agree: bool,
}

impl fmt::Display for DistancesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "distances from {} ({} vertices, {} edges, seed {})",
            self.source, self.vertices, self.edges, self.seed
        )?;
        write!(f, "{:>8}", "vertex")?;
        for run in &self.runs {
            write!(f, " {:>14}", run.engine)?;
        }
        writeln!(f)?;
        for vertex in 0..self.vertices {
            write!(f, "{vertex:>8}")?;
            for run in &self.runs {
                match run.distances.get(vertex).copied().flatten() {
                    Some(distance) => write!(f, " {distance:>14}")?,
                    None => write!(f, " {:>14}", "-")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "engines agree: {}", self.agree)
    }
}

pub fn run(args: &DistancesArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let config = args.graph.config().weighted(args.max_weight);
    let mut rng = RngHandle::from_seed(args.graph.seed);
    let graph = gen_random_list(&config, &mut rng)?;

    let engines: Vec<ShortestPathEngine> = match args.engine {
        Some(choice) => vec![choice.engine(args.max_weight)],
        None => ShortestPathEngine::all(args.max_weight).to_vec(),
    };

    let mut runs = Vec::with_capacity(engines.len());
    for engine in engines {
        let table = distances(engine, &graph, args.source)?;
        runs.push(EngineRun {
            engine: engine.name(),
            distances: table.iter().map(|(_, distance)| distance).collect(),
        });
    }
    let agree = runs
        .windows(2)
        .all(|pair| pair[0].distances == pair[1].distances);
    if !agree {
        tracing::warn!(source = args.source, "shortest-path engines disagree");
    }

    let report = DistancesReport {
        seed: rng.seed(),
        vertices: config.vertices,
        edges: graph.edge_count(),
        source: args.source,
        runs,
        agree,
    };
    emit(&report, json)
}
