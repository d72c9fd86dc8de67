use algos_core::{AlgoError, Graph};
use serde::{Deserialize, Serialize};

use crate::adjacency::AdjacencyList;
use crate::ids::ensure_endpoints;

/// Square boolean adjacency matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Creates an `n×n` matrix without edges.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Complete graph: every off-diagonal entry set.
    pub fn complete(size: usize) -> Self {
        let mut matrix = Self::new(size);
        for from in 0..size {
            for to in 0..size {
                if from != to {
                    matrix.cells[from * size + to] = true;
                }
            }
        }
        matrix
    }

    /// Builds a matrix from explicit rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, AlgoError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (index, row) in rows.into_iter().enumerate() {
            ensure_row_len(size, index, row.len())?;
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    /// Sets the directed entry `from -> to`.
    pub fn set_edge(&mut self, from: usize, to: usize) -> Result<(), AlgoError> {
        ensure_endpoints(self.size, from, to)?;
        self.cells[from * self.size + to] = true;
        Ok(())
    }

    /// Sets both `from -> to` and `to -> from`.
    pub fn set_undirected_edge(&mut self, from: usize, to: usize) -> Result<(), AlgoError> {
        self.set_edge(from, to)?;
        self.set_edge(to, from)
    }

    /// Sets both entries of an in-range pair.
    pub(crate) fn link_pair(&mut self, a: usize, b: usize) {
        debug_assert!(a < self.size && b < self.size);
        self.cells[a * self.size + b] = true;
        self.cells[b * self.size + a] = true;
    }

    /// Whether the entry `from -> to` is set; `false` outside the matrix.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from < self.size && to < self.size && self.cells[from * self.size + to]
    }

    /// Row of `vertex`; empty outside the matrix.
    pub fn row(&self, vertex: usize) -> &[bool] {
        if vertex < self.size {
            &self.cells[vertex * self.size..(vertex + 1) * self.size]
        } else {
            &[]
        }
    }

    /// Whether the matrix describes an undirected graph.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|from| {
            (from + 1..self.size).all(|to| self.has_edge(from, to) == self.has_edge(to, from))
        })
    }
}

impl Graph for AdjacencyMatrix {
    fn vertex_count(&self) -> usize {
        self.size
    }

    fn neighbours(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(
            self.row(vertex)
                .iter()
                .enumerate()
                .filter(|(_, set)| **set)
                .map(|(to, _)| to),
        )
    }
}

impl From<&AdjacencyList> for AdjacencyMatrix {
    fn from(list: &AdjacencyList) -> Self {
        let size = list.vertex_count();
        let mut matrix = Self::new(size);
        for from in 0..size {
            for arc in list.arcs(from) {
                matrix.cells[from * size + arc.to] = true;
            }
        }
        matrix
    }
}

/// Square weighted matrix; `None` marks a missing edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightMatrix {
    size: usize,
    cells: Vec<Option<u64>>,
}

impl WeightMatrix {
    /// Creates an `n×n` matrix without edges.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Builds a matrix from explicit rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<Option<u64>>>) -> Result<Self, AlgoError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (index, row) in rows.into_iter().enumerate() {
            ensure_row_len(size, index, row.len())?;
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    /// Sets the weight of `from -> to`, replacing any previous value.
    pub fn set_weight(&mut self, from: usize, to: usize, weight: u64) -> Result<(), AlgoError> {
        ensure_endpoints(self.size, from, to)?;
        self.cells[from * self.size + to] = Some(weight);
        Ok(())
    }

    /// Weight of `from -> to`; `None` when absent or outside the matrix.
    pub fn weight(&self, from: usize, to: usize) -> Option<u64> {
        if from < self.size && to < self.size {
            self.cells[from * self.size + to]
        } else {
            None
        }
    }

    /// Row of `vertex`; empty outside the matrix.
    pub fn row(&self, vertex: usize) -> &[Option<u64>] {
        if vertex < self.size {
            &self.cells[vertex * self.size..(vertex + 1) * self.size]
        } else {
            &[]
        }
    }
}

impl Graph for WeightMatrix {
    fn vertex_count(&self) -> usize {
        self.size
    }

    fn neighbours(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(
            self.row(vertex)
                .iter()
                .enumerate()
                .filter(|(_, weight)| weight.is_some())
                .map(|(to, _)| to),
        )
    }
}

/// Parallel edges collapse to their cheapest cost.
impl From<&AdjacencyList> for WeightMatrix {
    fn from(list: &AdjacencyList) -> Self {
        let size = list.vertex_count();
        let mut matrix = Self::new(size);
        for from in 0..size {
            for arc in list.arcs(from) {
                let cost = list.cost_of(arc);
                let cell = &mut matrix.cells[from * size + arc.to];
                *cell = Some(cell.map_or(cost, |known| known.min(cost)));
            }
        }
        matrix
    }
}

fn ensure_row_len(size: usize, row: usize, len: usize) -> Result<(), AlgoError> {
    if len != size {
        return Err(AlgoError::invalid_graph(
            "non-square-matrix",
            "matrix row length differs from the row count",
        )
        .with_context("row", row)
        .with_context("len", len)
        .with_context("rows", size));
    }
    Ok(())
}
