//! Exhaustive Hamiltonian path and cycle enumeration from a fixed origin.
//!
//! The search visits every simple path leaving the origin, so output and work
//! grow factorially with the vertex count. Only use it on small graphs.

use std::collections::VecDeque;

use algos_core::{AlgoError, Graph};

use crate::matrix::AdjacencyMatrix;

/// Partial path stored in the search arena. States sharing a prefix share the
/// arena entries of that prefix through `parent`.
#[derive(Debug, Clone, Copy)]
struct PathState {
    vertex: usize,
    parent: Option<usize>,
    visited: usize,
}

#[derive(Debug, Default)]
struct PathArena {
    states: Vec<PathState>,
}

impl PathArena {
    fn push(&mut self, state: PathState) -> usize {
        self.states.push(state);
        self.states.len() - 1
    }

    fn get(&self, index: usize) -> PathState {
        self.states[index]
    }

    /// Vertices of the path ending at `index`, origin first.
    fn walk(&self, index: usize) -> Vec<usize> {
        let mut vertices = Vec::with_capacity(self.states[index].visited);
        let mut cursor = Some(index);
        while let Some(current) = cursor {
            let state = self.states[current];
            vertices.push(state.vertex);
            cursor = state.parent;
        }
        vertices.reverse();
        vertices
    }

    fn mark(&self, index: usize, on_path: &mut [bool], value: bool) {
        let mut cursor = Some(index);
        while let Some(current) = cursor {
            let state = self.states[current];
            on_path[state.vertex] = value;
            cursor = state.parent;
        }
    }
}

/// Every Hamiltonian path leaving `start`, in breadth-first discovery order.
///
/// An empty matrix yields no paths; a single vertex yields `[[start]]`.
#[tracing::instrument(level = "debug", skip(matrix), fields(vertices = matrix.vertex_count()))]
pub fn hamiltonian_paths(
    matrix: &AdjacencyMatrix,
    start: usize,
) -> Result<Vec<Vec<usize>>, AlgoError> {
    let vertices = matrix.vertex_count();
    if vertices == 0 {
        return Ok(Vec::new());
    }
    matrix.check_vertex(start)?;

    let mut arena = PathArena::default();
    let root = arena.push(PathState {
        vertex: start,
        parent: None,
        visited: 1,
    });
    let mut queue = VecDeque::from([root]);
    let mut on_path = vec![false; vertices];
    let mut paths = Vec::new();

    while let Some(index) = queue.pop_front() {
        let state = arena.get(index);
        if state.visited == vertices {
            paths.push(arena.walk(index));
            continue;
        }
        arena.mark(index, &mut on_path, true);
        for next in matrix.neighbours(state.vertex) {
            if on_path[next] {
                continue;
            }
            let child = arena.push(PathState {
                vertex: next,
                parent: Some(index),
                visited: state.visited + 1,
            });
            queue.push_back(child);
        }
        arena.mark(index, &mut on_path, false);
    }

    tracing::debug!(
        states = arena.states.len(),
        paths = paths.len(),
        "Hamiltonian search exhausted"
    );
    Ok(paths)
}

/// Hamiltonian paths from `start` whose last vertex links back to `start`,
/// each closed by repeating `start` at the end.
pub fn hamiltonian_cycles(
    matrix: &AdjacencyMatrix,
    start: usize,
) -> Result<Vec<Vec<usize>>, AlgoError> {
    let paths = hamiltonian_paths(matrix, start)?;
    Ok(close_cycles(matrix, &paths))
}

/// Keeps the paths whose last vertex links back to their first and closes
/// each by repeating the first vertex.
///
/// Lets a caller holding the output of [`hamiltonian_paths`] derive the
/// cycles without searching again.
pub fn close_cycles(matrix: &AdjacencyMatrix, paths: &[Vec<usize>]) -> Vec<Vec<usize>> {
    paths
        .iter()
        .filter_map(|path| {
            let (first, last) = (*path.first()?, *path.last()?);
            matrix.has_edge(last, first).then(|| {
                let mut cycle = path.clone();
                cycle.push(first);
                cycle
            })
        })
        .collect()
}
