//! Shared test utilities for `dendra-core`.

use crate::{
    graph::UndirectedGraph,
    tree::{NodeInclusion, Tree},
};

/// Builds the 4-adjacency graph of a `height x width` grid.
///
/// Vertices are numbered row-major; every vertex adds its rightward edge
/// and then its downward edge, so edge ids follow that scan order.
pub(crate) fn grid_4_adjacency(height: usize, width: usize) -> UndirectedGraph {
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

/// Returns the sorted leaf set under each node.
pub(crate) fn leaf_sets(tree: &Tree) -> Vec<Vec<usize>> {
    let mut sets: Vec<Vec<usize>> = vec![Vec::new(); tree.num_nodes()];
    for node in tree.leaves_to_root(NodeInclusion::Include, NodeInclusion::Include) {
        if tree.is_leaf(node) {
            sets[node].push(node);
        } else {
            let mut merged = Vec::new();
            for &child in tree.children(node) {
                merged.extend_from_slice(&sets[child]);
            }
            merged.sort_unstable();
            sets[node] = merged;
        }
    }
    sets
}

/// Asserts that two node-weighted trees are isomorphic under the identity
/// on leaves, ignoring interior node numbering.
///
/// Interior nodes of the trees compared here always have at least two
/// children, so a node is determined by its leaf set and the comparison of
/// `(leaf set, altitude)` collections decides isomorphism.
pub(crate) fn assert_isomorphic(
    left_tree: &Tree,
    left_altitudes: &[f64],
    right_tree: &Tree,
    right_altitudes: &[f64],
) {
    let mut left: Vec<(Vec<usize>, f64)> = leaf_sets(left_tree)
        .into_iter()
        .zip(left_altitudes.iter().copied())
        .collect();
    let mut right: Vec<(Vec<usize>, f64)> = leaf_sets(right_tree)
        .into_iter()
        .zip(right_altitudes.iter().copied())
        .collect();
    left.sort_by(|a, b| a.0.cmp(&b.0));
    right.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(left.len(), right.len(), "trees differ in node count");
    for (left, right) in left.iter().zip(&right) {
        assert_eq!(left.0, right.0, "trees partition the leaves differently");
        assert_eq!(
            left.1, right.1,
            "node over leaves {:?} differs in altitude",
            left.0
        );
    }
}
