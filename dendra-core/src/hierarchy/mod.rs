//! Morphological hierarchies over edge-weighted graphs.
//!
//! Two tree builders share the result shapes in this module:
//!
//! - [`bpt_canonical`] processes edges in non-decreasing weight order and
//!   merges connected components with a union-find, producing the canonical
//!   binary partition tree together with the minimum spanning tree the
//!   merges traced out.
//! - [`binary_partition_tree`] repeatedly fuses the two regions joined by
//!   the globally cheapest edge and asks a caller-supplied [`LinkageRule`]
//!   to re-weight the edges towards the surviving neighbours, so the same
//!   loop yields single, complete, average, or custom linkage clusterings.
//!
//! On top of them, [`simplify_tree`] splices out interior nodes selected by
//! a predicate, [`quasi_flat_zones_hierarchy`] collapses constant-altitude
//! plateaus of the canonical tree, and [`saliency_map`] projects a node
//! altitude vector back onto the graph's edges through lowest-common-ancestor
//! queries.

mod canonical;
mod fusion;
mod linkage;
mod saliency;
mod simplify;

use crate::tree::Tree;

pub use self::{
    canonical::{bpt_canonical, quasi_flat_zones_hierarchy, CanonicalHierarchy},
    fusion::{binary_partition_tree, FusionStep, LinkageRule, NeighbourMerge},
    linkage::{AverageLinkage, CompleteLinkage, SingleLinkage},
    saliency::saliency_map,
    simplify::{simplify_tree, SimplifiedTree},
};

/// A tree together with the altitude of each of its nodes.
///
/// Leaves sit at altitude zero; every interior node carries the weight of
/// the fusion that created it, non-decreasing towards the root.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeWeightedTree {
    tree: Tree,
    altitudes: Vec<f64>,
}

impl NodeWeightedTree {
    pub(crate) fn new(tree: Tree, altitudes: Vec<f64>) -> Self {
        debug_assert_eq!(tree.num_nodes(), altitudes.len());
        Self { tree, altitudes }
    }

    /// Returns the tree.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns the altitude of each tree node.
    #[must_use]
    pub fn altitudes(&self) -> &[f64] {
        &self.altitudes
    }

    /// Consumes the pair.
    #[must_use]
    pub fn into_parts(self) -> (Tree, Vec<f64>) {
        (self.tree, self.altitudes)
    }
}
