//! Eulerian path discovery over an [`AdjacencyList`].
//!
//! The finder consumes edges of the caller's graph: every traversed edge is
//! flagged `used` in the shared edge table. Call
//! [`AdjacencyList::reset_usage`] to run again on the same graph.

use algos_core::{EdgeId, Graph};
use serde::{Deserialize, Serialize};

use crate::adjacency::{AdjacencyList, Arc};

/// One traversed edge, in walk direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EulerStep {
    /// Edge table identifier of the traversed edge.
    pub edge: EdgeId,
    /// Vertex the step leaves.
    pub from: usize,
    /// Vertex the step enters.
    pub to: usize,
}

/// Walk produced by [`find_eulerian_path`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EulerianPath {
    /// Vertex the walk starts from.
    pub start: usize,
    /// Traversed edges from start to finish.
    pub steps: Vec<EulerStep>,
    /// Edges left untouched because they are not reachable from `start`.
    /// Zero whenever the input graph was connected.
    pub stranded_edges: usize,
}

impl EulerianPath {
    /// Vertex sequence of the walk, `start` first.
    pub fn vertices(&self) -> Vec<usize> {
        let mut vertices = Vec::with_capacity(self.steps.len() + 1);
        vertices.push(self.start);
        vertices.extend(self.steps.iter().map(|step| step.to));
        vertices
    }

    /// Whether the walk ends where it started and uses at least one edge.
    pub fn is_circuit(&self) -> bool {
        self.steps.last().is_some_and(|step| step.to == self.start)
    }

    /// Whether every edge of the graph was traversed.
    pub fn is_complete(&self) -> bool {
        self.stranded_edges == 0
    }
}

/// Applies the degree-balance rule to the unused edges and returns the start
/// vertex a walk must use, or `None` when no Eulerian path exists.
///
/// Undirected: at most two odd-degree vertices; with two, the walk starts at
/// the first of them. Directed: at most one vertex with `out - in == 1` (the
/// start), at most one with `in - out == 1`, every other vertex balanced.
/// Without a forced start the first vertex holding an unused edge is chosen.
pub fn check_feasibility(graph: &AdjacencyList) -> Option<usize> {
    let vertices = graph.vertex_count();
    if vertices == 0 {
        return None;
    }
    let out_degree: Vec<usize> = (0..vertices)
        .map(|vertex| unused_arcs(graph, vertex).count())
        .collect();
    let fallback = out_degree.iter().position(|degree| *degree > 0).unwrap_or(0);

    if !graph.direction().is_directed() {
        let odd: Vec<usize> = (0..vertices)
            .filter(|vertex| out_degree[*vertex] % 2 == 1)
            .collect();
        return match odd.len() {
            0 => Some(fallback),
            1 | 2 => Some(odd[0]),
            _ => None,
        };
    }

    let mut in_degree = vec![0usize; vertices];
    for vertex in 0..vertices {
        for arc in unused_arcs(graph, vertex) {
            in_degree[arc.to] += 1;
        }
    }
    let mut start = None;
    let mut finish_seen = false;
    let mut imbalance = 0i64;
    for vertex in 0..vertices {
        let difference = out_degree[vertex] as i64 - in_degree[vertex] as i64;
        imbalance += difference;
        match difference {
            0 => {}
            1 if start.is_none() => start = Some(vertex),
            -1 if !finish_seen => finish_seen = true,
            _ => return None,
        }
    }
    if imbalance != 0 {
        return None;
    }
    Some(start.unwrap_or(fallback))
}

/// Finds a walk that uses every unused edge exactly once.
///
/// Returns `None`, leaving the graph untouched, when the degree-balance rule
/// fails. Connectivity is the caller's responsibility: on a disconnected
/// graph the walk covers the start vertex's component and the remainder is
/// reported in [`EulerianPath::stranded_edges`].
#[tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count(), direction = ?graph.direction()))]
pub fn find_eulerian_path(graph: &mut AdjacencyList) -> Option<EulerianPath> {
    let Some(start) = check_feasibility(graph) else {
        tracing::debug!("degree balance rules out an Eulerian path");
        return None;
    };

    let mut cursor = vec![0usize; graph.vertex_count()];
    let mut stack: Vec<(usize, Option<EulerStep>)> = vec![(start, None)];
    let mut steps = Vec::with_capacity(graph.unused_edge_count());

    while let Some(&(vertex, via)) = stack.last() {
        match next_unused_arc(graph, vertex, &mut cursor[vertex]) {
            Some((edge, to)) => {
                graph.mark_used(edge);
                stack.push((
                    to,
                    Some(EulerStep {
                        edge,
                        from: vertex,
                        to,
                    }),
                ));
            }
            None => {
                stack.pop();
                if let Some(step) = via {
                    steps.push(step);
                }
            }
        }
    }
    steps.reverse();

    let stranded_edges = graph.unused_edge_count();
    if stranded_edges > 0 {
        tracing::warn!(
            stranded_edges,
            "graph is not connected; Eulerian walk covers only the start component"
        );
    }
    tracing::debug!(start, steps = steps.len(), "Eulerian walk assembled");
    Some(EulerianPath {
        start,
        steps,
        stranded_edges,
    })
}

fn unused_arcs(graph: &AdjacencyList, vertex: usize) -> impl Iterator<Item = &Arc> + '_ {
    graph
        .arcs(vertex)
        .iter()
        .filter(move |arc| !graph.is_used(arc.edge))
}

/// Advances `cursor` past consumed arcs of `vertex` and returns the next free one.
fn next_unused_arc(
    graph: &AdjacencyList,
    vertex: usize,
    cursor: &mut usize,
) -> Option<(EdgeId, usize)> {
    let arcs = graph.arcs(vertex);
    while let Some(arc) = arcs.get(*cursor) {
        *cursor += 1;
        if !graph.is_used(arc.edge) {
            return Some((arc.edge, arc.to));
        }
    }
    None
}
