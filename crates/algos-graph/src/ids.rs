use algos_core::{AlgoError, EdgeId};

/// Converts an [`EdgeId`] into its underlying index within the edge table.
pub(crate) fn edge_index(id: EdgeId) -> usize {
    id.as_raw() as usize
}

/// Creates an [`EdgeId`] from an index.
pub(crate) fn make_edge(index: usize) -> EdgeId {
    EdgeId::from_raw(index as u64)
}

/// Rejects an edge whose endpoints fall outside `0..vertices`.
pub(crate) fn ensure_endpoints(vertices: usize, from: usize, to: usize) -> Result<(), AlgoError> {
    for (role, vertex) in [("from", from), ("to", to)] {
        if vertex >= vertices {
            return Err(AlgoError::invalid_graph(
                "vertex-out-of-range",
                "edge endpoint is not a vertex of the graph",
            )
            .with_context("endpoint", role)
            .with_context("vertex", vertex)
            .with_context("vertices", vertices));
        }
    }
    Ok(())
}

/// Rejects adjacency input whose row count disagrees with the declared size.
pub(crate) fn ensure_vertex_count(declared: usize, rows: usize) -> Result<(), AlgoError> {
    if declared != rows {
        return Err(AlgoError::invalid_graph(
            "vertex-count-mismatch",
            "adjacency rows do not match the declared vertex count",
        )
        .with_context("declared", declared)
        .with_context("rows", rows));
    }
    Ok(())
}
