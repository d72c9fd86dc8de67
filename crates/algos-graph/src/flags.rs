use algos_core::Direction;

/// Configuration options for [`gen_random_list`](crate::gen_random_list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomGraphConfig {
    /// Number of vertices in the generated graph.
    pub vertices: usize,
    /// Number of edges to draw. Parallel edges may occur.
    pub edges: usize,
    /// Directedness of the generated adjacency list.
    pub direction: Direction,
    /// Inclusive upper bound for edge weights; `None` leaves edges unweighted.
    pub max_weight: Option<u64>,
    /// Whether an edge may start and end at the same vertex.
    pub allow_self_loops: bool,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            vertices: 8,
            edges: 12,
            direction: Direction::Directed,
            max_weight: None,
            allow_self_loops: true,
        }
    }
}

impl RandomGraphConfig {
    /// Returns a copy of the configuration with weights drawn from `0..=max_weight`.
    pub fn weighted(mut self, max_weight: u64) -> Self {
        self.max_weight = Some(max_weight);
        self
    }

    /// Returns a copy of the configuration producing an undirected graph.
    pub fn undirected(mut self) -> Self {
        self.direction = Direction::Undirected;
        self
    }
}
