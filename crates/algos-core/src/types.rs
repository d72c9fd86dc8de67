use serde::{Deserialize, Serialize};

/// Sentinel distance meaning "not reached from the source".
///
/// Strictly greater than every finite distance an engine will store; engines
/// report `distance-overflow` instead of producing a finite value this large.
pub const UNREACHED: u64 = u64::MAX;

/// Single-source distance table shared by every shortest-path engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceTable {
    source: usize,
    distances: Vec<u64>,
}

impl DistanceTable {
    /// Creates a table for `vertices` vertices where only `source` is reached.
    ///
    /// `source` must be a valid index; engines validate it before calling.
    pub fn new(vertices: usize, source: usize) -> Self {
        let mut distances = vec![UNREACHED; vertices];
        if let Some(slot) = distances.get_mut(source) {
            *slot = 0;
        }
        Self { source, distances }
    }

    /// Source vertex of the table.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of vertices covered by the table.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` when the table covers no vertices.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Finite distance to `vertex`, or `None` when unreached or out of range.
    pub fn get(&self, vertex: usize) -> Option<u64> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|distance| *distance != UNREACHED)
    }

    /// Raw distance to `vertex`, [`UNREACHED`] included.
    pub fn raw(&self, vertex: usize) -> u64 {
        self.distances.get(vertex).copied().unwrap_or(UNREACHED)
    }

    /// Whether `vertex` has a finite distance.
    pub fn is_reached(&self, vertex: usize) -> bool {
        self.get(vertex).is_some()
    }

    /// Number of vertices with a finite distance.
    pub fn reached_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|distance| **distance != UNREACHED)
            .count()
    }

    /// Raw distances in vertex order.
    pub fn as_slice(&self) -> &[u64] {
        &self.distances
    }

    /// Iterates `(vertex, Option<distance>)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<u64>)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(vertex, distance)| (vertex, Some(*distance).filter(|d| *d != UNREACHED)))
    }

    /// Mutable access used by the engines while relaxing edges.
    pub fn as_mut_slice(&mut self) -> &mut [u64] {
        &mut self.distances
    }
}
