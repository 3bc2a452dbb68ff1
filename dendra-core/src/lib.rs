//! Dendra core library.
//!
//! Builds morphological hierarchies over undirected edge-weighted graphs:
//! binary partition trees (canonical, by altitude ordering, and generic, by
//! pluggable linkage), the quasi-flat-zones hierarchy, tree simplification,
//! and saliency maps. The supporting structures (mutable graph, parent-vector
//! tree with a lowest-common-ancestor index, pairing heap, union-find) are
//! the building blocks of those algorithms.

mod error;
mod graph;
mod heap;
mod hierarchy;
mod tree;
mod union_find;

pub use crate::{
    error::{HierarchyError, HierarchyErrorCode},
    graph::{GraphError, GraphErrorCode, UndirectedGraph},
    heap::{HeapHandle, PairingHeap},
    hierarchy::{
        binary_partition_tree, bpt_canonical, quasi_flat_zones_hierarchy, saliency_map,
        simplify_tree, AverageLinkage, CanonicalHierarchy, CompleteLinkage, FusionStep,
        LinkageRule, NeighbourMerge, NodeWeightedTree, SimplifiedTree, SingleLinkage,
    },
    tree::{LcaIndex, NodeInclusion, Tree, TreeError, TreeErrorCode},
};

#[cfg(test)]
pub(crate) mod test_utils;
