//! Rooted trees stored as parent vectors, with directional iterators.
//!
//! The node layout is the contract the hierarchy builders rely on: every
//! non-root node maps to a strictly greater index and the root is the last
//! node, so a plain index scan is a leaves-to-root traversal and the reverse
//! scan is root-to-leaves. Binary partition trees place their `n` leaves at
//! `[0, n)` and interior nodes above them in creation order, which satisfies
//! the layout by construction.

mod lca;

use thiserror::Error;

pub use self::lca::LcaIndex;

/// Errors returned when validating a parent vector.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum TreeError {
    /// A tree needs at least one node.
    #[error("cannot build a tree from an empty parent vector")]
    Empty,
    /// A parent index referred past the end of the vector.
    #[error("node {node} has parent {parent}, but the tree has {num_nodes} nodes")]
    ParentOutOfBounds {
        /// The offending node.
        node: usize,
        /// Its out-of-bounds parent.
        parent: usize,
        /// The number of nodes in the vector.
        num_nodes: usize,
    },
    /// A non-root node did not map to a strictly greater index, or the last
    /// node was not self-parented.
    #[error("node {node} has parent {parent}; parents must be strictly greater and the last node must be the root")]
    NotTopological {
        /// The offending node.
        node: usize,
        /// Its parent.
        parent: usize,
    },
}

impl TreeError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> TreeErrorCode {
        match self {
            Self::Empty => TreeErrorCode::Empty,
            Self::ParentOutOfBounds { .. } => TreeErrorCode::ParentOutOfBounds,
            Self::NotTopological { .. } => TreeErrorCode::NotTopological,
        }
    }
}

/// Machine-readable error codes for [`TreeError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TreeErrorCode {
    /// A tree needs at least one node.
    Empty,
    /// A parent index referred past the end of the vector.
    ParentOutOfBounds,
    /// The vector was not in leaves-first topological order.
    NotTopological,
}

impl TreeErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "TREE_EMPTY",
            Self::ParentOutOfBounds => "TREE_PARENT_OUT_OF_BOUNDS",
            Self::NotTopological => "TREE_NOT_TOPOLOGICAL",
        }
    }
}

/// Whether a traversal yields leaves (or the root).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeInclusion {
    /// Yield the nodes.
    Include,
    /// Skip them.
    Exclude,
}

/// Rooted tree over a topologically ordered parent vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    parents: Vec<usize>,
    children: Vec<Vec<usize>>,
    num_leaves: usize,
}

impl Tree {
    /// Validates a parent vector and builds the tree.
    ///
    /// Every non-root node must map to a strictly greater index and the last
    /// node must be its own parent (the root).
    ///
    /// # Errors
    /// Returns [`TreeError`] when the vector is empty, a parent is out of
    /// bounds, or the layout is not leaves-first topological.
    pub fn from_parents(parents: Vec<usize>) -> Result<Self, TreeError> {
        if parents.is_empty() {
            return Err(TreeError::Empty);
        }
        let num_nodes = parents.len();
        let root = num_nodes - 1;
        for (node, &parent) in parents.iter().enumerate() {
            if parent >= num_nodes {
                return Err(TreeError::ParentOutOfBounds {
                    node,
                    parent,
                    num_nodes,
                });
            }
            if node == root {
                if parent != root {
                    return Err(TreeError::NotTopological { node, parent });
                }
            } else if parent <= node {
                return Err(TreeError::NotTopological { node, parent });
            }
        }

        let mut children = vec![Vec::new(); num_nodes];
        for (node, &parent) in parents.iter().enumerate() {
            if node != root {
                children[parent].push(node);
            }
        }
        let num_leaves = children.iter().filter(|nodes| nodes.is_empty()).count();

        Ok(Self {
            parents,
            children,
            num_leaves,
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.parents.len()
    }

    /// Returns the number of leaves.
    #[must_use]
    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// Returns the root node, always the last index.
    #[must_use]
    pub fn root(&self) -> usize {
        self.parents.len() - 1
    }

    /// Returns the parent of `node`; the root is its own parent.
    #[must_use]
    pub fn parent(&self, node: usize) -> usize {
        self.parents[node]
    }

    /// Returns the whole parent vector.
    #[must_use]
    pub fn parents(&self) -> &[usize] {
        &self.parents
    }

    /// Returns the children of `node` in ascending index order.
    #[must_use]
    pub fn children(&self, node: usize) -> &[usize] {
        &self.children[node]
    }

    /// Returns `true` when `node` has no children.
    #[must_use]
    pub fn is_leaf(&self, node: usize) -> bool {
        self.children[node].is_empty()
    }

    /// Walks the strict ancestors of `node`, ending at the root.
    pub fn ancestors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        let root = self.root();
        std::iter::successors(Some(node), move |&current| {
            (current != root).then(|| self.parents[current])
        })
        .skip(1)
    }

    /// Iterates nodes from the leaves towards the root.
    ///
    /// By the layout invariant this is a plain index scan: every node is
    /// yielded before its parent.
    pub fn leaves_to_root(
        &self,
        leaves: NodeInclusion,
        root: NodeInclusion,
    ) -> impl Iterator<Item = usize> + '_ {
        let end = match root {
            NodeInclusion::Include => self.num_nodes(),
            NodeInclusion::Exclude => self.num_nodes() - 1,
        };
        (0..end).filter(move |&node| leaves == NodeInclusion::Include || !self.is_leaf(node))
    }

    /// Iterates nodes from the root towards the leaves; the reverse of
    /// [`Self::leaves_to_root`].
    pub fn root_to_leaves(
        &self,
        leaves: NodeInclusion,
        root: NodeInclusion,
    ) -> impl Iterator<Item = usize> + '_ {
        let end = match root {
            NodeInclusion::Include => self.num_nodes(),
            NodeInclusion::Exclude => self.num_nodes() - 1,
        };
        (0..end)
            .rev()
            .filter(move |&node| leaves == NodeInclusion::Include || !self.is_leaf(node))
    }
}

#[cfg(test)]
mod tests;
