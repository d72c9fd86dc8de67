use std::cmp::Reverse;
use std::collections::BinaryHeap;

use algos_core::{AlgoError, DistanceTable, Graph};

use super::extend;
use crate::adjacency::AdjacencyList;

/// Dijkstra over a binary min-heap.
///
/// Superseded heap entries are not removed when a distance improves; they are
/// discarded once they reach the head and their vertex is already finalized.
#[tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dijkstra_heap(graph: &AdjacencyList, source: usize) -> Result<DistanceTable, AlgoError> {
    graph.check_vertex(source)?;
    let mut table = DistanceTable::new(graph.vertex_count(), source);
    let mut finalized = vec![false; graph.vertex_count()];
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0u64, source)));
    let mut discarded = 0usize;

    while let Some(Reverse((_, vertex))) = heap.pop() {
        finalized[vertex] = true;
        let base = table.raw(vertex);

        for arc in graph.arcs(vertex) {
            let candidate = extend(base, graph.cost_of(arc), arc.to)?;
            if candidate < table.raw(arc.to) {
                table.as_mut_slice()[arc.to] = candidate;
                if !finalized[arc.to] {
                    heap.push(Reverse((candidate, arc.to)));
                }
            }
        }

        while heap
            .peek()
            .is_some_and(|Reverse((_, head))| finalized[*head])
        {
            heap.pop();
            discarded += 1;
        }
    }

    tracing::debug!(
        reached = table.reached_count(),
        discarded,
        "heap dijkstra finished"
    );
    Ok(table)
}
