//! Lowest-common-ancestor queries over a preprocessed tree.
//!
//! An Euler tour of the tree is materialized once, and a sparse table over
//! the tour depths answers range-minimum queries without further allocation.
//! Preprocessing is O(n log n); every query after that is O(1), so a batch
//! of k queries is O(k) — the shape the saliency map needs, one query per
//! graph edge.

use super::Tree;

/// Static LCA index for one tree.
#[derive(Clone, Debug)]
pub struct LcaIndex {
    euler: Vec<usize>,
    depths: Vec<usize>,
    first_visit: Vec<usize>,
    // sparse[k][i] = tour position of the minimum depth in [i, i + 2^k).
    sparse: Vec<Vec<usize>>,
}

impl LcaIndex {
    /// Preprocesses `tree` for constant-time queries.
    #[must_use]
    pub fn new(tree: &Tree) -> Self {
        let num_nodes = tree.num_nodes();
        let tour_len = 2 * num_nodes - 1;
        let mut euler = Vec::with_capacity(tour_len);
        let mut depths = Vec::with_capacity(tour_len);
        let mut first_visit = vec![0; num_nodes];

        let root = tree.root();
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        first_visit[root] = 0;
        euler.push(root);
        depths.push(0);

        while let Some(&mut (node, ref mut next_child)) = stack.last_mut() {
            let children = tree.children(node);
            if *next_child < children.len() {
                let child = children[*next_child];
                *next_child += 1;
                first_visit[child] = euler.len();
                euler.push(child);
                depths.push(stack.len());
                stack.push((child, 0));
            } else {
                stack.pop();
                if let Some(&(parent, _)) = stack.last() {
                    euler.push(parent);
                    depths.push(stack.len() - 1);
                }
            }
        }

        let sparse = build_sparse_table(&depths);

        Self {
            euler,
            depths,
            first_visit,
            sparse,
        }
    }

    /// Returns the lowest common ancestor of two nodes.
    #[must_use]
    pub fn lca(&self, left: usize, right: usize) -> usize {
        let (low, high) = {
            let left = self.first_visit[left];
            let right = self.first_visit[right];
            if left <= right {
                (left, right)
            } else {
                (right, left)
            }
        };
        self.euler[self.range_min(low, high)]
    }

    /// Answers a batch of queries, one result per `(left, right)` pair.
    ///
    /// The batch entry point used by the saliency map, where the pairs are
    /// the endpoints of every graph edge.
    #[must_use]
    pub fn lca_pairs(&self, pairs: impl IntoIterator<Item = (usize, usize)>) -> Vec<usize> {
        pairs
            .into_iter()
            .map(|(left, right)| self.lca(left, right))
            .collect()
    }

    /// Tour position of the minimum depth in the inclusive range.
    fn range_min(&self, low: usize, high: usize) -> usize {
        let span = high - low + 1;
        let level = (usize::BITS - 1 - span.leading_zeros()) as usize;
        let left = self.sparse[level][low];
        let right = self.sparse[level][high + 1 - (1 << level)];
        if self.depths[left] <= self.depths[right] {
            left
        } else {
            right
        }
    }
}

fn build_sparse_table(depths: &[usize]) -> Vec<Vec<usize>> {
    let len = depths.len();
    let levels = (usize::BITS - len.leading_zeros()) as usize;
    let mut sparse = Vec::with_capacity(levels);
    sparse.push((0..len).collect::<Vec<_>>());

    let mut window = 1;
    while window * 2 <= len {
        let previous = &sparse[sparse.len() - 1];
        let mut level = Vec::with_capacity(len - window * 2 + 1);
        for index in 0..=(len - window * 2) {
            let left = previous[index];
            let right = previous[index + window];
            level.push(if depths[left] <= depths[right] {
                left
            } else {
                right
            });
        }
        sparse.push(level);
        window *= 2;
    }

    sparse
}
