//! Single-source shortest distances, four ways.
//!
//! | engine | input | cost |
//! |---|---|---|
//! | [`naive_relaxation`] | [`WeightMatrix`] | O(V³) worst case |
//! | [`dijkstra_dense`] | [`WeightMatrix`] | O(V²), best on dense graphs |
//! | [`dial`] | [`AdjacencyList`] + weight bound `W` | O(V·C + E) for heaviest edge `C <= W` |
//! | [`dijkstra_heap`] | [`AdjacencyList`] | O((V + E) log V) |
//!
//! All engines assume non-negative weights and agree on every finite distance.
//! Unreached vertices keep [`UNREACHED`](algos_core::UNREACHED).

mod bucket;
mod dense;
mod heap;
mod naive;

pub use bucket::dial;
pub use dense::dijkstra_dense;
pub use heap::dijkstra_heap;
pub use naive::naive_relaxation;

use algos_core::{AlgoError, DistanceTable, UNREACHED};
use serde::{Deserialize, Serialize};

use crate::adjacency::AdjacencyList;
use crate::matrix::WeightMatrix;

/// Selects one of the shortest-path strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortestPathEngine {
    /// Repeated full relaxation passes until a fixed point.
    Naive,
    /// Dijkstra with a linear scan of the queued vertices.
    DenseDijkstra,
    /// Dial's bucket queue for weights bounded by `max_weight`.
    Dial {
        /// Largest edge cost the graph may contain.
        max_weight: u64,
    },
    /// Dijkstra over a binary heap with lazy deletion.
    HeapDijkstra,
}

impl ShortestPathEngine {
    /// Every engine, with Dial configured for `max_weight`.
    pub fn all(max_weight: u64) -> [ShortestPathEngine; 4] {
        [
            ShortestPathEngine::Naive,
            ShortestPathEngine::DenseDijkstra,
            ShortestPathEngine::Dial { max_weight },
            ShortestPathEngine::HeapDijkstra,
        ]
    }

    /// Short stable label.
    pub fn name(&self) -> &'static str {
        match self {
            ShortestPathEngine::Naive => "naive",
            ShortestPathEngine::DenseDijkstra => "dense-dijkstra",
            ShortestPathEngine::Dial { .. } => "dial",
            ShortestPathEngine::HeapDijkstra => "heap-dijkstra",
        }
    }
}

/// Runs `engine` on an adjacency list, converting to a [`WeightMatrix`] for
/// the matrix-based engines.
pub fn distances(
    engine: ShortestPathEngine,
    graph: &AdjacencyList,
    source: usize,
) -> Result<DistanceTable, AlgoError> {
    match engine {
        ShortestPathEngine::Naive => naive_relaxation(&WeightMatrix::from(graph), source),
        ShortestPathEngine::DenseDijkstra => dijkstra_dense(&WeightMatrix::from(graph), source),
        ShortestPathEngine::Dial { max_weight } => dial(graph, source, max_weight),
        ShortestPathEngine::HeapDijkstra => dijkstra_heap(graph, source),
    }
}

/// `base + cost`, refusing results that would collide with the sentinel.
pub(crate) fn extend(base: u64, cost: u64, target: usize) -> Result<u64, AlgoError> {
    base.checked_add(cost)
        .filter(|distance| *distance < UNREACHED)
        .ok_or_else(|| {
            AlgoError::invalid_query(
                "distance-overflow",
                "path length does not fit below the unreached sentinel",
            )
            .with_context("vertex", target)
            .with_context("base", base)
            .with_context("cost", cost)
        })
}
