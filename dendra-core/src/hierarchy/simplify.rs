//! Tree simplification: splicing out interior nodes selected by a predicate.

use crate::{
    error::HierarchyError,
    tree::{NodeInclusion, Tree},
};

/// The output of [`simplify_tree`]: the surviving tree and the mapping from
/// its node ids back to the ids of the input tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SimplifiedTree {
    tree: Tree,
    node_map: Vec<usize>,
}

impl SimplifiedTree {
    /// Returns the simplified tree.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Maps each surviving node to its id in the input tree.
    #[must_use]
    pub fn node_map(&self) -> &[usize] {
        &self.node_map
    }

    /// Consumes the pair.
    #[must_use]
    pub fn into_parts(self) -> (Tree, Vec<usize>) {
        (self.tree, self.node_map)
    }
}

/// Copies `tree` with every interior node satisfying `criterion` removed,
/// reattaching its children to its parent.
///
/// The criterion is consulted for interior nodes only: leaves and the root
/// are never deleted. Surviving nodes keep their relative order, so the
/// result is still in leaves-first topological layout, and the returned
/// node map translates new ids back to input ids.
///
/// # Errors
/// Returns [`HierarchyError::Tree`] when the surviving parent vector fails
/// validation, which indicates a logic error rather than bad input.
pub fn simplify_tree<F>(tree: &Tree, criterion: F) -> Result<SimplifiedTree, HierarchyError>
where
    F: Fn(usize) -> bool,
{
    let num_nodes = tree.num_nodes();
    let mut parents: Vec<usize> = tree.parents().to_vec();

    // Root to leaves: point the children of each deleted node at its parent.
    // Parents are visited first, so the reattachment target is always final.
    // `deleted_above[i]` counts deletions at indices >= i.
    let mut deleted_above = vec![0usize; num_nodes];
    let mut count = 0usize;
    for node in tree.root_to_leaves(NodeInclusion::Exclude, NodeInclusion::Exclude) {
        let parent = parents[node];
        if criterion(node) {
            for &child in tree.children(node) {
                parents[child] = parent;
            }
            count += 1;
        }
        deleted_above[node] = count;
    }
    let total = count;

    // A surviving node's new id is its old id minus the deletions below it.
    let deleted_below: Vec<usize> = deleted_above.iter().map(|&above| total - above).collect();

    let surviving = num_nodes - total;
    let mut new_parents: Vec<usize> = (0..surviving).collect();
    let mut node_map = vec![0usize; surviving];

    let mut next = 0usize;
    for node in tree.leaves_to_root(NodeInclusion::Include, NodeInclusion::Exclude) {
        if tree.is_leaf(node) || !criterion(node) {
            let parent = parents[node];
            new_parents[next] = parent - deleted_below[parent];
            node_map[next] = node;
            next += 1;
        }
    }
    node_map[surviving - 1] = tree.root();

    Ok(SimplifiedTree {
        tree: Tree::from_parents(new_parents)?,
        node_map,
    })
}
