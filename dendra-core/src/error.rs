//! Error types for the hierarchy entry points.
//!
//! Every algorithm surfaces its failures here, at the public boundary; there
//! are no retries and no partial results. Structural errors from the graph
//! and tree layers are wrapped rather than flattened so callers can still
//! reach the originating variant through `source()`.

use thiserror::Error;

use crate::{graph::GraphError, tree::TreeError};

/// An error produced by one of the hierarchy construction entry points.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum HierarchyError {
    /// The input graph has no vertices.
    #[error("cannot build a hierarchy over an empty graph")]
    EmptyGraph,
    /// The edge-weight vector does not match the graph's edge count.
    #[error("edge weights have length {got}, but the graph has {expected} edges")]
    WeightsLengthMismatch {
        /// The graph's edge count.
        expected: usize,
        /// The length of the supplied weight vector.
        got: usize,
    },
    /// The altitude vector does not match the tree's node count.
    #[error("altitudes have length {got}, but the tree has {expected} nodes")]
    AltitudesLengthMismatch {
        /// The tree's node count.
        expected: usize,
        /// The length of the supplied altitude vector.
        got: usize,
    },
    /// The tree's leaves do not correspond to the graph's vertices.
    #[error("tree has {leaves} leaves, but the graph has {vertices} vertices")]
    LeafCountMismatch {
        /// The tree's leaf count.
        leaves: usize,
        /// The graph's vertex count.
        vertices: usize,
    },
    /// The merge scan ran out of edges before spanning the graph.
    #[error("graph is disconnected: {merged} of the {required} required merges performed")]
    DisconnectedGraph {
        /// Merges performed before the scan was exhausted.
        merged: usize,
        /// Merges a connected graph would need (`n - 1`).
        required: usize,
    },
    /// A linkage rule returned without weighting one of its descriptors.
    #[error("linkage rule left edge {edge} to neighbour {neighbour} without a weight")]
    LinkageContractViolation {
        /// The neighbour vertex of the unweighted descriptor.
        neighbour: usize,
        /// The surviving edge of the unweighted descriptor.
        edge: usize,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("hierarchy invariant violated: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
    },
    /// A graph operation failed while running an algorithm.
    #[error("graph operation failed: {source}")]
    Graph {
        /// The underlying graph error.
        #[from]
        source: GraphError,
    },
    /// A constructed parent vector was not a valid tree.
    #[error("constructed parent vector is not a valid tree: {source}")]
    Tree {
        /// The underlying tree validation error.
        #[from]
        source: TreeError,
    },
}

impl HierarchyError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> HierarchyErrorCode {
        match self {
            Self::EmptyGraph => HierarchyErrorCode::EmptyGraph,
            Self::WeightsLengthMismatch { .. } => HierarchyErrorCode::WeightsLengthMismatch,
            Self::AltitudesLengthMismatch { .. } => HierarchyErrorCode::AltitudesLengthMismatch,
            Self::LeafCountMismatch { .. } => HierarchyErrorCode::LeafCountMismatch,
            Self::DisconnectedGraph { .. } => HierarchyErrorCode::DisconnectedGraph,
            Self::LinkageContractViolation { .. } => HierarchyErrorCode::LinkageContractViolation,
            Self::InvariantViolation { .. } => HierarchyErrorCode::InvariantViolation,
            Self::Graph { .. } => HierarchyErrorCode::Graph,
            Self::Tree { .. } => HierarchyErrorCode::Tree,
        }
    }
}

/// Machine-readable error codes for [`HierarchyError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HierarchyErrorCode {
    /// The input graph has no vertices.
    EmptyGraph,
    /// The edge-weight vector does not match the graph's edge count.
    WeightsLengthMismatch,
    /// The altitude vector does not match the tree's node count.
    AltitudesLengthMismatch,
    /// The tree's leaves do not correspond to the graph's vertices.
    LeafCountMismatch,
    /// The merge scan ran out of edges before spanning the graph.
    DisconnectedGraph,
    /// A linkage rule returned without weighting one of its descriptors.
    LinkageContractViolation,
    /// An internal invariant was violated.
    InvariantViolation,
    /// A graph operation failed while running an algorithm.
    Graph,
    /// A constructed parent vector was not a valid tree.
    Tree,
}

impl HierarchyErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "EMPTY_GRAPH",
            Self::WeightsLengthMismatch => "WEIGHTS_LENGTH_MISMATCH",
            Self::AltitudesLengthMismatch => "ALTITUDES_LENGTH_MISMATCH",
            Self::LeafCountMismatch => "LEAF_COUNT_MISMATCH",
            Self::DisconnectedGraph => "DISCONNECTED_GRAPH",
            Self::LinkageContractViolation => "LINKAGE_CONTRACT_VIOLATION",
            Self::InvariantViolation => "INVARIANT_VIOLATION",
            Self::Graph => "GRAPH_OPERATION_FAILED",
            Self::Tree => "INVALID_TREE",
        }
    }
}
