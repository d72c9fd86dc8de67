#![deny(missing_docs)]
#![doc = include_str!("../docs/graph-api.md")]

//! In-memory graph representations and the traversal, Eulerian, Hamiltonian
//! and shortest-path algorithms implemented over them.

mod adjacency;
mod eulerian;
mod flags;
mod generators;
mod hamiltonian;
mod ids;
mod matrix;
mod traversal;
mod walk;

pub mod shortest_path;

pub use adjacency::{AdjacencyList, Arc, EdgeRecord};
pub use eulerian::{check_feasibility, find_eulerian_path, EulerStep, EulerianPath};
pub use flags::RandomGraphConfig;
pub use generators::{gen_random_list, gen_random_matrix};
pub use hamiltonian::{close_cycles, hamiltonian_cycles, hamiltonian_paths};
pub use matrix::{AdjacencyMatrix, WeightMatrix};
pub use shortest_path::{
    dial, dijkstra_dense, dijkstra_heap, distances, naive_relaxation, ShortestPathEngine,
};
pub use traversal::{enumerate_cycles, has_cycle, is_connected, reachable_set, VertexStatus};
pub use walk::format_walk;
