//! Mergeable min-heap with stable external handles.
//!
//! A pairing heap over arena-allocated nodes. Handles are arena indices, so
//! they stay valid for the whole life of the heap regardless of melds, pops,
//! and key updates; slots of popped elements are retired rather than reused.
//! Keys are `f64` compared with `total_cmp`, which keeps the ordering total
//! even for the degenerate inputs the callers explicitly leave undefined.
//!
//! The fusion tree builder keeps one entry per live graph edge in this heap
//! and relies on `update` to move an entry when an edge is re-weighted, in
//! either direction.

use std::cmp::Ordering;

/// Stable reference to an element pushed onto a [`PairingHeap`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HeapHandle(usize);

#[derive(Clone, Debug)]
struct Slot<P> {
    key: f64,
    payload: P,
    child: Option<usize>,
    sibling: Option<usize>,
    // Parent when first child, left sibling otherwise, None for the root.
    prev: Option<usize>,
    live: bool,
}

/// Min-heap with `push`, `pop`, and handle-based `update` in either
/// direction.
#[derive(Clone, Debug, Default)]
pub struct PairingHeap<P> {
    slots: Vec<Slot<P>>,
    root: Option<usize>,
    len: usize,
    scratch: Vec<usize>,
}

impl<P: Copy> PairingHeap<P> {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            root: None,
            len: 0,
            scratch: Vec::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            root: None,
            len: 0,
            scratch: Vec::new(),
        }
    }

    /// Returns the number of elements currently on the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the heap holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts an element and returns its handle. O(1).
    pub fn push(&mut self, key: f64, payload: P) -> HeapHandle {
        let node = self.slots.len();
        self.slots.push(Slot {
            key,
            payload,
            child: None,
            sibling: None,
            prev: None,
            live: true,
        });
        self.root = Some(match self.root {
            None => node,
            Some(root) => self.meld(root, node),
        });
        self.len += 1;
        HeapHandle(node)
    }

    /// Returns a minimum-key element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<(f64, P)> {
        self.root.map(|root| {
            let slot = &self.slots[root];
            (slot.key, slot.payload)
        })
    }

    /// Removes and returns a minimum-key element. Amortized O(log n).
    pub fn pop(&mut self) -> Option<(f64, P)> {
        let root = self.root?;
        let children = self.slots[root].child.take();
        self.root = self.merge_pairs(children);
        if let Some(new_root) = self.root {
            self.slots[new_root].prev = None;
        }
        self.slots[root].live = false;
        self.len -= 1;
        Some((self.slots[root].key, self.slots[root].payload))
    }

    /// Replaces the key and payload of a live element.
    ///
    /// A decrease cuts the subtree and melds it with the root (amortized
    /// near-constant); an increase detaches the element, re-melds its
    /// children, and reinserts it (amortized O(log n)).
    ///
    /// The handle must refer to an element that has not been popped.
    pub fn update(&mut self, handle: HeapHandle, key: f64, payload: P) {
        let node = handle.0;
        debug_assert!(self.slots[node].live, "update on a popped element");
        let increased = key.total_cmp(&self.slots[node].key) == Ordering::Greater;
        self.slots[node].key = key;
        self.slots[node].payload = payload;

        if self.root == Some(node) {
            if increased {
                let children = self.slots[node].child.take();
                if let Some(merged) = self.merge_pairs(children) {
                    self.root = Some(self.meld(node, merged));
                }
            }
            return;
        }

        self.detach(node);
        let root = self.root.expect("non-root element implies a root");
        if increased {
            let children = self.slots[node].child.take();
            let root = match self.merge_pairs(children) {
                Some(merged) => self.meld(root, merged),
                None => root,
            };
            self.root = Some(self.meld(root, node));
        } else {
            self.root = Some(self.meld(root, node));
        }
    }

    /// Melds two tree roots; the larger key becomes the first child of the
    /// smaller. Returns the surviving root.
    fn meld(&mut self, left: usize, right: usize) -> usize {
        let (parent, child) =
            if self.slots[left].key.total_cmp(&self.slots[right].key) != Ordering::Greater {
                (left, right)
            } else {
                (right, left)
            };
        let first = self.slots[parent].child;
        self.slots[child].sibling = first;
        if let Some(first) = first {
            self.slots[first].prev = Some(child);
        }
        self.slots[child].prev = Some(parent);
        self.slots[parent].child = Some(child);
        parent
    }

    /// Unlinks a non-root node from its parent and siblings.
    fn detach(&mut self, node: usize) {
        let prev = self.slots[node].prev.expect("detach expects a non-root");
        let sibling = self.slots[node].sibling;
        if self.slots[prev].child == Some(node) {
            self.slots[prev].child = sibling;
        } else {
            self.slots[prev].sibling = sibling;
        }
        if let Some(sibling) = sibling {
            self.slots[sibling].prev = Some(prev);
        }
        self.slots[node].prev = None;
        self.slots[node].sibling = None;
    }

    /// Two-pass merge of a sibling list, the classic pairing-heap pop.
    fn merge_pairs(&mut self, first: Option<usize>) -> Option<usize> {
        let mut list = std::mem::take(&mut self.scratch);
        list.clear();

        let mut cursor = first;
        while let Some(node) = cursor {
            cursor = self.slots[node].sibling.take();
            self.slots[node].prev = None;
            list.push(node);
        }

        let mut merged = 0;
        let mut index = 0;
        while index + 1 < list.len() {
            list[merged] = self.meld(list[index], list[index + 1]);
            merged += 1;
            index += 2;
        }
        if index < list.len() {
            list[merged] = list[index];
            merged += 1;
        }

        let mut root: Option<usize> = None;
        for &node in list[..merged].iter().rev() {
            root = Some(match root {
                None => node,
                Some(accumulated) => self.meld(node, accumulated),
            });
        }

        self.scratch = list;
        root
    }
}

#[cfg(test)]
mod tests;
