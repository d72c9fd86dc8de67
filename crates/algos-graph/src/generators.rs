use algos_core::errors::AlgoError;
use algos_core::rng::RngHandle;
use rand::Rng;

use crate::adjacency::AdjacencyList;
use crate::flags::RandomGraphConfig;
use crate::matrix::AdjacencyMatrix;

/// Draws `config.edges` edges uniformly at random.
///
/// Parallel edges may occur. Weights, when requested, are drawn from
/// `0..=max_weight`. Fails with `empty-graph` when edges are requested on a
/// graph without vertices, or when self-loops are disallowed and fewer than
/// two vertices exist.
pub fn gen_random_list(
    config: &RandomGraphConfig,
    rng: &mut RngHandle,
) -> Result<AdjacencyList, AlgoError> {
    let vertices = config.vertices;
    if config.edges > 0 && vertices == 0 {
        return Err(AlgoError::invalid_query(
            "empty-graph",
            "random generator cannot place edges without vertices",
        )
        .with_context("edges", config.edges));
    }
    if config.edges > 0 && vertices < 2 && !config.allow_self_loops {
        return Err(AlgoError::invalid_query(
            "empty-graph",
            "loop-free edges need at least two vertices",
        )
        .with_context("vertices", vertices)
        .with_hint("enable self-loops or add vertices"));
    }

    let mut graph = AdjacencyList::new(vertices, config.direction);
    for _ in 0..config.edges {
        let from = rng.gen_range(0..vertices);
        let to = if config.allow_self_loops {
            rng.gen_range(0..vertices)
        } else {
            // Skip `from` by shifting the upper half of the range.
            let pick = rng.gen_range(0..vertices - 1);
            if pick >= from {
                pick + 1
            } else {
                pick
            }
        };
        match config.max_weight {
            Some(max_weight) => {
                let weight = rng.gen_range(0..=max_weight);
                graph.add_weighted_edge(from, to, weight)?;
            }
            None => {
                graph.add_edge(from, to)?;
            }
        }
    }
    Ok(graph)
}

/// Random undirected matrix: each unordered pair of distinct vertices is
/// linked with probability `density`, clamped to `[0, 1]`.
pub fn gen_random_matrix(vertices: usize, density: f64, rng: &mut RngHandle) -> AdjacencyMatrix {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let mut matrix = AdjacencyMatrix::new(vertices);
    for from in 0..vertices {
        for to in from + 1..vertices {
            if rng.gen_bool(density) {
                matrix.link_pair(from, to);
            }
        }
    }
    matrix
}
