//! Depth-first reachability, cycle detection and cycle enumeration.
//!
//! Every entry point runs on an explicit frame stack, so deep graphs never
//! grow the call stack, and keeps its [`VertexStatus`] table local to the call.

use std::collections::BTreeSet;
use std::ops::ControlFlow;

use algos_core::{AlgoError, Graph};
use serde::{Deserialize, Serialize};

/// Three-color marking used by the cycle searches.
///
/// Within one call a vertex only moves forward:
/// `Unvisited -> InProgress -> Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VertexStatus {
    /// Not reached yet.
    Unvisited,
    /// On the current DFS path (an ancestor of the vertex being expanded).
    InProgress,
    /// Fully explored.
    Done,
}

type Neighbours<'g> = Box<dyn Iterator<Item = usize> + 'g>;

/// Returns every vertex reachable from `start`, `start` included.
#[tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count()))]
pub fn reachable_set<G: Graph + ?Sized>(
    graph: &G,
    start: usize,
) -> Result<BTreeSet<usize>, AlgoError> {
    graph.check_vertex(start)?;
    let mut visited = BTreeSet::new();
    visited.insert(start);
    let mut frames: Vec<Neighbours<'_>> = vec![graph.neighbours(start)];
    while let Some(top) = frames.last_mut() {
        match top.next() {
            Some(next) => {
                if visited.insert(next) {
                    frames.push(graph.neighbours(next));
                }
            }
            None => {
                frames.pop();
            }
        }
    }
    tracing::debug!(reached = visited.len(), "reachability complete");
    Ok(visited)
}

/// Returns `true` when every vertex is reachable from vertex `0`.
///
/// The empty graph counts as connected. For directed graphs this is
/// reachability from vertex `0`, **not** strong connectivity: `0 -> 1` is
/// reported connected although `0` cannot be reached from `1`.
pub fn is_connected<G: Graph + ?Sized>(graph: &G) -> bool {
    let vertices = graph.vertex_count();
    if vertices == 0 {
        return true;
    }
    reachable_set(graph, 0)
        .map(|reached| reached.len() == vertices)
        .unwrap_or(false)
}

/// Returns `true` as soon as any back-edge is found.
///
/// Every component is searched. Undirected adjacency lists store each edge
/// for both endpoints, so any undirected edge already closes a cycle here.
#[tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count()))]
pub fn has_cycle<G: Graph + ?Sized>(graph: &G) -> bool {
    let mut found = false;
    walk_back_edges(graph, |_, _| {
        found = true;
        ControlFlow::Break(())
    });
    found
}

/// Lists the cycle closed by every back-edge met during the traversal.
///
/// A cycle is the stretch of the current DFS path from the back-edge target
/// to the vertex being expanded; the closing edge back to its first vertex is
/// implied. The same cycle can appear more than once when several back-edges
/// close it.
#[tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count()))]
pub fn enumerate_cycles<G: Graph + ?Sized>(graph: &G) -> Vec<Vec<usize>> {
    let mut cycles = Vec::new();
    walk_back_edges(graph, |path, target| {
        if let Some(position) = path.iter().rposition(|vertex| *vertex == target) {
            cycles.push(path[position..].to_vec());
        }
        ControlFlow::Continue(())
    });
    tracing::debug!(cycles = cycles.len(), "cycle enumeration complete");
    cycles
}

/// Three-color DFS over all components. `on_back_edge` receives the current
/// path and the `InProgress` vertex the back-edge points to.
fn walk_back_edges<G, F>(graph: &G, mut on_back_edge: F)
where
    G: Graph + ?Sized,
    F: FnMut(&[usize], usize) -> ControlFlow<()>,
{
    let vertices = graph.vertex_count();
    let mut status = vec![VertexStatus::Unvisited; vertices];
    let mut frames: Vec<Neighbours<'_>> = Vec::new();
    let mut path: Vec<usize> = Vec::new();

    for root in 0..vertices {
        if status[root] != VertexStatus::Unvisited {
            continue;
        }
        status[root] = VertexStatus::InProgress;
        path.push(root);
        frames.push(graph.neighbours(root));

        while let Some(top) = frames.last_mut() {
            match top.next() {
                Some(next) => match status[next] {
                    VertexStatus::Unvisited => {
                        status[next] = VertexStatus::InProgress;
                        path.push(next);
                        frames.push(graph.neighbours(next));
                    }
                    VertexStatus::InProgress => {
                        if on_back_edge(&path, next).is_break() {
                            return;
                        }
                    }
                    VertexStatus::Done => {}
                },
                None => {
                    frames.pop();
                    if let Some(finished) = path.pop() {
                        status[finished] = VertexStatus::Done;
                    }
                }
            }
        }
    }
}
