use algos_core::{AlgoError, Direction, EdgeId, Graph};
use serde::{Deserialize, Serialize};

use crate::ids::{edge_index, ensure_endpoints, ensure_vertex_count, make_edge};

/// One adjacency entry: the neighbour reached and the edge that leads there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arc {
    /// Vertex reached through this entry.
    pub to: usize,
    /// Edge table identifier shared by both endpoints of an undirected edge.
    pub edge: EdgeId,
}

/// Stored edge payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    from: usize,
    to: usize,
    weight: Option<u64>,
    used: bool,
}

impl EdgeRecord {
    fn new(from: usize, to: usize, weight: Option<u64>) -> Self {
        Self {
            from,
            to,
            weight,
            used: false,
        }
    }

    /// Endpoint the edge was inserted from.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Endpoint the edge was inserted towards.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Declared weight, if any.
    pub fn weight(&self) -> Option<u64> {
        self.weight
    }

    /// Cost read by the weighted engines; unweighted edges cost `1`.
    pub fn cost(&self) -> u64 {
        self.weight.unwrap_or(1)
    }

    /// Whether the Eulerian finder has consumed this edge.
    pub fn is_used(&self) -> bool {
        self.used
    }
}

/// Vertex-indexed adjacency list backed by a single edge table.
///
/// Undirected edges are stored once in the table and referenced by an [`Arc`]
/// from each endpoint, so per-edge state such as the `used` flag never has to
/// be mirrored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyList {
    direction: Direction,
    arcs: Vec<Vec<Arc>>,
    edges: Vec<EdgeRecord>,
}

impl AdjacencyList {
    /// Creates a graph with `vertices` vertices and no edges.
    pub fn new(vertices: usize, direction: Direction) -> Self {
        Self {
            direction,
            arcs: vec![Vec::new(); vertices],
            edges: Vec::new(),
        }
    }

    /// Creates an empty directed graph.
    pub fn directed(vertices: usize) -> Self {
        Self::new(vertices, Direction::Directed)
    }

    /// Creates an empty undirected graph.
    pub fn undirected(vertices: usize) -> Self {
        Self::new(vertices, Direction::Undirected)
    }

    /// Builds a directed graph from per-vertex neighbour lists.
    ///
    /// Fails with `vertex-count-mismatch` when `rows.len() != vertices` and with
    /// `vertex-out-of-range` when any destination is not below `vertices`.
    pub fn from_neighbours(vertices: usize, rows: Vec<Vec<usize>>) -> Result<Self, AlgoError> {
        ensure_vertex_count(vertices, rows.len())?;
        let mut graph = Self::directed(vertices);
        for (from, row) in rows.into_iter().enumerate() {
            for to in row {
                graph.insert(from, to, None)?;
            }
        }
        Ok(graph)
    }

    /// Builds a directed weighted graph from per-vertex `(destination, weight)` lists.
    pub fn from_weighted(
        vertices: usize,
        rows: Vec<Vec<(usize, u64)>>,
    ) -> Result<Self, AlgoError> {
        ensure_vertex_count(vertices, rows.len())?;
        let mut graph = Self::directed(vertices);
        for (from, row) in rows.into_iter().enumerate() {
            for (to, weight) in row {
                graph.insert(from, to, Some(weight))?;
            }
        }
        Ok(graph)
    }

    /// Adds an unweighted edge. Undirected graphs also register the reverse arc.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<EdgeId, AlgoError> {
        self.insert(from, to, None)
    }

    /// Adds a weighted edge. Undirected graphs also register the reverse arc.
    pub fn add_weighted_edge(
        &mut self,
        from: usize,
        to: usize,
        weight: u64,
    ) -> Result<EdgeId, AlgoError> {
        self.insert(from, to, Some(weight))
    }

    fn insert(&mut self, from: usize, to: usize, weight: Option<u64>) -> Result<EdgeId, AlgoError> {
        ensure_endpoints(self.arcs.len(), from, to)?;
        let id = make_edge(self.edges.len());
        self.edges.push(EdgeRecord::new(from, to, weight));
        self.arcs[from].push(Arc { to, edge: id });
        if !self.direction.is_directed() {
            self.arcs[to].push(Arc { to: from, edge: id });
        }
        Ok(id)
    }

    /// Directedness fixed at construction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of edges in the edge table (an undirected edge counts once).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adjacency entries of `vertex`; empty for an out-of-range vertex.
    pub fn arcs(&self, vertex: usize) -> &[Arc] {
        self.arcs.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Looks up an edge record.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeRecord, AlgoError> {
        self.edges.get(edge_index(id)).ok_or_else(|| {
            AlgoError::invalid_graph("unknown-edge", "edge does not exist")
                .with_context("edge", id.as_raw())
        })
    }

    /// Iterates the edge table in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeRecord)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(idx, record)| (make_edge(idx), record))
    }

    /// Number of adjacency entries leaving `vertex` (its degree when undirected).
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.arcs(vertex).len()
    }

    /// Number of adjacency entries arriving at `vertex`.
    pub fn in_degree(&self, vertex: usize) -> usize {
        self.arcs
            .iter()
            .flat_map(|row| row.iter())
            .filter(|arc| arc.to == vertex)
            .count()
    }

    /// Largest edge cost in the table, if there are edges.
    pub fn max_cost(&self) -> Option<u64> {
        self.edges.iter().map(EdgeRecord::cost).max()
    }

    /// Number of edges the Eulerian finder has not consumed yet.
    pub fn unused_edge_count(&self) -> usize {
        self.edges.iter().filter(|edge| !edge.used).count()
    }

    /// Clears every `used` flag, undoing the Eulerian finder's side effect.
    pub fn reset_usage(&mut self) {
        for edge in &mut self.edges {
            edge.used = false;
        }
    }

    pub(crate) fn cost_of(&self, arc: &Arc) -> u64 {
        self.edges
            .get(edge_index(arc.edge))
            .map(EdgeRecord::cost)
            .unwrap_or(1)
    }

    pub(crate) fn is_used(&self, id: EdgeId) -> bool {
        self.edges
            .get(edge_index(id))
            .map(|edge| edge.used)
            .unwrap_or(true)
    }

    pub(crate) fn mark_used(&mut self, id: EdgeId) {
        if let Some(edge) = self.edges.get_mut(edge_index(id)) {
            edge.used = true;
        }
    }
}

impl Graph for AdjacencyList {
    fn vertex_count(&self) -> usize {
        self.arcs.len()
    }

    fn neighbours(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.arcs(vertex).iter().map(|arc| arc.to))
    }
}
