use std::error::Error;
use std::fmt;

use algos_core::rng::RngHandle;
use algos_core::Graph;
use algos_graph::{find_eulerian_path, format_walk, gen_random_list};
use clap::Args;
use serde::Serialize;

use super::{emit, GraphArgs};

#[derive(Args, Debug)]
pub struct EulerArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Debug, Serialize)]
struct EulerReport {
    seed: u64,
    vertices: usize,
    edges: usize,
    feasible: bool,
    start: Option<usize>,
    walk: Vec<usize>,
    edge_ids: Vec<u64>,
    circuit: bool,
    stranded_edges: usize,
}

impl fmt::Display for EulerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertices, self.edges)?;
        let Some(start) = self.start else {
            return writeln!(f, "no Eulerian path: degree balance fails");
        };
        let kind = if self.circuit { "circuit" } else { "path" };
        writeln!(f, "Eulerian {kind} from {start}: {}", format_walk(&self.walk))?;
        if self.stranded_edges > 0 {
            writeln!(
                f,
                "graph is disconnected: {} edges unreachable from {start}",
                self.stranded_edges
            )?;
        }
        Ok(())
    }
}

pub fn run(args: &EulerArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let mut rng = RngHandle::from_seed(args.graph.seed);
    let mut graph = gen_random_list(&args.graph.config(), &mut rng)?;
    let seed = rng.seed();
    let vertices = graph.vertex_count();
    let edges = graph.edge_count();

    let report = match find_eulerian_path(&mut graph) {
        Some(path) => EulerReport {
            seed,
            vertices,
            edges,
            feasible: true,
            start: Some(path.start),
            walk: path.vertices(),
            edge_ids: path.steps.iter().map(|step| step.edge.as_raw()).collect(),
            circuit: path.is_circuit(),
            stranded_edges: path.stranded_edges,
        },
        None => EulerReport {
            seed,
            vertices,
            edges,
            feasible: false,
            start: None,
            walk: Vec::new(),
            edge_ids: Vec::new(),
            circuit: false,
            stranded_edges: edges,
        },
    };
    emit(&report, json)
}
