use algos_core::{AlgoError, DistanceTable, Graph, UNREACHED};

use super::extend;
use crate::adjacency::AdjacencyList;

/// Dijkstra over a circular bucket queue (Dial's algorithm).
///
/// `max_weight` is the caller's bound `W` on edge costs. The queue keeps one
/// bucket per possible cost, `min(W, heaviest edge) + 1` of them, indexed by
/// `distance % buckets`, and every queued vertex sits in the bucket of its
/// current tentative distance. Memory and time scale with the heaviest edge,
/// so this engine only pays off for small weights.
///
/// Fails with `weight-exceeds-bound` before any work when an edge costs more
/// than `max_weight` or the buckets cannot be allocated.
#[tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dial(
    graph: &AdjacencyList,
    source: usize,
    max_weight: u64,
) -> Result<DistanceTable, AlgoError> {
    graph.check_vertex(source)?;
    ensure_weight_bound(graph, max_weight)?;
    let mut buckets = allocate_buckets(graph, max_weight)?;
    let span = buckets.len();

    let mut table = DistanceTable::new(graph.vertex_count(), source);
    buckets[0].push(source);
    let mut pending = 1usize;
    let mut cursor: u64 = 0;

    while pending > 0 {
        let mut slot = slot_of(cursor, span);
        while buckets[slot].is_empty() {
            cursor += 1;
            slot = slot_of(cursor, span);
        }
        let Some(vertex) = buckets[slot].pop() else {
            continue;
        };
        pending -= 1;

        for arc in graph.arcs(vertex) {
            let candidate = extend(cursor, graph.cost_of(arc), arc.to)?;
            let known = table.raw(arc.to);
            if candidate >= known {
                continue;
            }
            if known != UNREACHED {
                let bucket = &mut buckets[slot_of(known, span)];
                if let Some(position) = bucket.iter().position(|queued| *queued == arc.to) {
                    bucket.swap_remove(position);
                    pending -= 1;
                }
            }
            table.as_mut_slice()[arc.to] = candidate;
            buckets[slot_of(candidate, span)].push(arc.to);
            pending += 1;
        }
    }

    tracing::debug!(
        reached = table.reached_count(),
        last_distance = cursor,
        "bucket queue drained"
    );
    Ok(table)
}

fn ensure_weight_bound(graph: &AdjacencyList, max_weight: u64) -> Result<(), AlgoError> {
    for (id, edge) in graph.edges() {
        if edge.cost() > max_weight {
            return Err(AlgoError::invalid_query(
                "weight-exceeds-bound",
                "edge cost is larger than the declared maximum weight",
            )
            .with_context("edge", id.as_raw())
            .with_context("cost", edge.cost())
            .with_context("max_weight", max_weight)
            .with_hint("pass a bound at least as large as the heaviest edge"));
        }
    }
    Ok(())
}

fn allocate_buckets(
    graph: &AdjacencyList,
    max_weight: u64,
) -> Result<Vec<Vec<usize>>, AlgoError> {
    let heaviest = graph.max_cost().map_or(0, |cost| cost.min(max_weight));
    let refuse = || {
        AlgoError::invalid_query(
            "weight-exceeds-bound",
            "bucket queue cannot allocate one bucket per weight",
        )
        .with_context("max_weight", max_weight)
        .with_context("heaviest", heaviest)
        .with_hint("use a heap-based engine for large weights")
    };
    let span = heaviest
        .checked_add(1)
        .and_then(|count| usize::try_from(count).ok())
        .ok_or_else(refuse)?;
    let mut buckets: Vec<Vec<usize>> = Vec::new();
    buckets.try_reserve_exact(span).map_err(|_| refuse())?;
    buckets.resize_with(span, Vec::new);
    Ok(buckets)
}

fn slot_of(distance: u64, span: usize) -> usize {
    (distance % span as u64) as usize
}
