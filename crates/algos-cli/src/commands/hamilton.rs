use std::error::Error;
use std::fmt;

use algos_core::rng::RngHandle;
use algos_graph::{close_cycles, format_walk, gen_random_matrix, hamiltonian_paths, AdjacencyMatrix};
use clap::Args;
use serde::Serialize;

use super::emit;

#[derive(Args, Debug)]
pub struct HamiltonArgs {
    /// Number of vertices.
    #[arg(long, default_value_t = 4)]
    pub vertices: usize,
    /// Edge probability for a random undirected matrix; omit for a complete graph.
    #[arg(long)]
    pub density: Option<f64>,
    /// Seed for the random matrix.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Origin of every enumerated path.
    #[arg(long, default_value_t = 0)]
    pub start: usize,
    /// Refuse inputs larger than this; enumeration grows factorially.
    #[arg(long, default_value_t = 9)]
    pub max_vertices: usize,
}

#[derive(Debug, Serialize)]
struct HamiltonReport {
    vertices: usize,
    start: usize,
    path_count: usize,
    cycle_count: usize,
    paths: Vec<Vec<usize>>,
    cycles: Vec<Vec<usize>>,
}

impl fmt::Display for HamiltonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} Hamiltonian paths from {} on {} vertices",
            self.path_count, self.start, self.vertices
        )?;
        for path in &self.paths {
            writeln!(f, "  {}", format_walk(path))?;
        }
        writeln!(f, "{} Hamiltonian cycles", self.cycle_count)?;
        for cycle in &self.cycles {
            writeln!(f, "  {}", format_walk(cycle))?;
        }
        Ok(())
    }
}

pub fn run(args: &HamiltonArgs, json: bool) -> Result<(), Box<dyn Error>> {
    if args.vertices > args.max_vertices {
        return Err(format!(
            "{} vertices exceeds --max-vertices {}",
            args.vertices, args.max_vertices
        )
        .into());
    }

    let matrix = match args.density {
        Some(density) => {
            let mut rng = RngHandle::from_seed(args.seed);
            gen_random_matrix(args.vertices, density, &mut rng)
        }
        None => AdjacencyMatrix::complete(args.vertices),
    };

    let paths = hamiltonian_paths(&matrix, args.start)?;
    let cycles = close_cycles(&matrix, &paths);
    let report = HamiltonReport {
        vertices: args.vertices,
        start: args.start,
        path_count: paths.len(),
        cycle_count: cycles.len(),
        paths,
        cycles,
    };
    emit(&report, json)
}
