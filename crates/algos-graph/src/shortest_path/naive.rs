use algos_core::{AlgoError, DistanceTable, Graph, UNREACHED};

use super::extend;
use crate::matrix::WeightMatrix;

/// Relaxes every edge in repeated passes until a pass changes nothing.
///
/// Passes start at `source` and wrap around the vertex range.
#[tracing::instrument(level = "debug", skip(matrix), fields(vertices = matrix.vertex_count()))]
pub fn naive_relaxation(matrix: &WeightMatrix, source: usize) -> Result<DistanceTable, AlgoError> {
    matrix.check_vertex(source)?;
    let vertices = matrix.vertex_count();
    let mut table = DistanceTable::new(vertices, source);
    let mut passes = 0usize;
    let mut changed = true;

    while changed {
        changed = false;
        passes += 1;
        for offset in 0..vertices {
            let from = (source + offset) % vertices;
            let base = table.raw(from);
            if base == UNREACHED {
                continue;
            }
            for (to, weight) in matrix.row(from).iter().enumerate() {
                let Some(weight) = weight else {
                    continue;
                };
                let candidate = extend(base, *weight, to)?;
                if candidate < table.raw(to) {
                    table.as_mut_slice()[to] = candidate;
                    changed = true;
                }
            }
        }
    }

    tracing::debug!(passes, reached = table.reached_count(), "relaxation converged");
    Ok(table)
}
