//! Synthetic inputs shared by the hierarchy benchmarks.

use rand::{rngs::StdRng, Rng, SeedableRng};

use dendra_core::UndirectedGraph;

/// A square 4-adjacency grid with seeded random edge weights.
pub struct WeightedGrid {
    /// The grid graph.
    pub graph: UndirectedGraph,
    /// One weight per edge, drawn uniformly from `[0, 256)`.
    pub weights: Vec<f64>,
}

/// Builds the 4-adjacency graph of a `side x side` grid and weights its
/// edges from a seeded generator, so every benchmark run sees the same
/// input.
#[must_use]
pub fn weighted_grid(side: usize, seed: u64) -> WeightedGrid {
    let mut graph = UndirectedGraph::new(side * side);
    for row in 0..side {
        for col in 0..side {
            let vertex = row * side + col;
            if col + 1 < side {
                graph
                    .add_edge(vertex, vertex + 1)
                    .expect("grid vertices are in bounds");
            }
            if row + 1 < side {
                graph
                    .add_edge(vertex, vertex + side)
                    .expect("grid vertices are in bounds");
            }
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let weights = (0..graph.num_edges())
        .map(|_| f64::from(rng.gen_range(0..256u32)))
        .collect();

    WeightedGrid { graph, weights }
}
