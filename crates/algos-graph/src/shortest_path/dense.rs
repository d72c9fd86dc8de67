use algos_core::{AlgoError, DistanceTable, Graph};

use super::extend;
use crate::matrix::WeightMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanStatus {
    Unchecked,
    Queued,
    Done,
}

/// Dijkstra picking the next vertex by scanning every queued vertex.
#[tracing::instrument(level = "debug", skip(matrix), fields(vertices = matrix.vertex_count()))]
pub fn dijkstra_dense(matrix: &WeightMatrix, source: usize) -> Result<DistanceTable, AlgoError> {
    matrix.check_vertex(source)?;
    let vertices = matrix.vertex_count();
    let mut table = DistanceTable::new(vertices, source);
    let mut status = vec![ScanStatus::Unchecked; vertices];
    status[source] = ScanStatus::Queued;
    let mut queued = 1usize;

    while queued > 0 {
        // Ties go to the lowest index.
        let Some(current) = (0..vertices)
            .filter(|vertex| status[*vertex] == ScanStatus::Queued)
            .min_by_key(|vertex| table.raw(*vertex))
        else {
            break;
        };
        let base = table.raw(current);

        for (to, weight) in matrix.row(current).iter().enumerate() {
            if to == current {
                continue;
            }
            let Some(weight) = weight else {
                continue;
            };
            let candidate = extend(base, *weight, to)?;
            if candidate < table.raw(to) {
                table.as_mut_slice()[to] = candidate;
                if status[to] == ScanStatus::Unchecked {
                    status[to] = ScanStatus::Queued;
                    queued += 1;
                }
            }
        }

        status[current] = ScanStatus::Done;
        queued -= 1;
    }

    tracing::debug!(reached = table.reached_count(), "dense dijkstra finished");
    Ok(table)
}
