//! Saliency maps: projecting a node-weighted hierarchy onto graph edges.

use crate::{
    error::HierarchyError,
    graph::UndirectedGraph,
    tree::{LcaIndex, Tree},
};

/// Weights each graph edge with the altitude of the lowest common ancestor
/// of its endpoints in `tree`.
///
/// The tree's leaves must be the graph's vertices. The result has one entry
/// per live edge, indexed by edge id; two hierarchies over the same graph
/// are equivalent exactly when their saliency maps are equal, which is what
/// makes this the standard comparison surface.
///
/// # Errors
/// Returns [`HierarchyError::LeafCountMismatch`] when the tree and graph do
/// not share a vertex set and [`HierarchyError::AltitudesLengthMismatch`]
/// when `altitudes` does not weight every tree node.
pub fn saliency_map(
    graph: &UndirectedGraph,
    tree: &Tree,
    altitudes: &[f64],
) -> Result<Vec<f64>, HierarchyError> {
    if tree.num_leaves() != graph.num_vertices() {
        return Err(HierarchyError::LeafCountMismatch {
            leaves: tree.num_leaves(),
            vertices: graph.num_vertices(),
        });
    }
    if altitudes.len() != tree.num_nodes() {
        return Err(HierarchyError::AltitudesLengthMismatch {
            expected: tree.num_nodes(),
            got: altitudes.len(),
        });
    }

    let index = LcaIndex::new(tree);
    let ancestors = index.lca_pairs(graph.edges().map(|(_, source, target)| (source, target)));
    Ok(ancestors.into_iter().map(|node| altitudes[node]).collect())
}
