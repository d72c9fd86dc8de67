#![deny(missing_docs)]
#![doc = "Core traits and data types for the graph algorithms toolkit. See crates/algos-graph/docs/graph-api.md for the algorithm contracts."]

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;
mod types;

pub use errors::{AlgoError, ErrorInfo};
pub use rng::RngHandle;
pub use types::{DistanceTable, UNREACHED};

/// Identifier for an edge within an adjacency list's edge table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Whether edges are one-way or stored for both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Direction {
    /// Every edge leads from its source to its destination only.
    #[default]
    Directed,
    /// Every edge is reachable from both endpoints.
    Undirected,
}

impl Direction {
    /// Returns `true` for [`Direction::Directed`].
    pub fn is_directed(&self) -> bool {
        matches!(self, Direction::Directed)
    }
}

/// Read-only structural contract shared by every graph representation.
///
/// Vertices are dense indices `0..vertex_count()`. Implementations guarantee
/// that `neighbours` only yields indices inside that range.
pub trait Graph {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Out-neighbours of `vertex` in adjacency order. Yields nothing for an
    /// out-of-range vertex.
    fn neighbours(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns `true` when the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Fails with `start-out-of-range` unless `vertex` is a valid index.
    fn check_vertex(&self, vertex: usize) -> Result<(), AlgoError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(
                AlgoError::invalid_query("start-out-of-range", "vertex is not part of the graph")
                    .with_context("vertex", vertex)
                    .with_context("vertices", self.vertex_count()),
            )
        }
    }
}
