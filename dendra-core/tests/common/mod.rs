//! Shared helpers for integration tests.

use dendra_core::UndirectedGraph;

/// Builds the 4-adjacency graph of a `height x width` grid: vertices
/// row-major, each adding its rightward then its downward edge.
pub fn grid_4_adjacency(height: usize, width: usize) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new(height * width);
    for row in 0..height {
        for col in 0..width {
            let vertex = row * width + col;
            if col + 1 < width {
                graph
                    .add_edge(vertex, vertex + 1)
                    .expect("grid vertices are in bounds");
            }
            if row + 1 < height {
                graph
                    .add_edge(vertex, vertex + width)
                    .expect("grid vertices are in bounds");
            }
        }
    }
    graph
}
