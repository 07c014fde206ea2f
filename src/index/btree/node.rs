//! B-tree node layout.
//!
//! A node stores its entries in parallel vectors:
//!
//! ```text
//! keys:      [ k0 | k1 | ... | k(n-1) ]
//! values:    [ v0 | v1 | ... | v(n-1) ]
//! children:  [ c0 | c1 | ... | c(n-1) | cn ]   (internal nodes only)
//! ```
//!
//! Child `i` holds keys below `keys[i]` and above `keys[i - 1]`. Indexing
//! children uniformly (instead of hanging left/right links off each entry)
//! means a split, rotation or merge is a plain `Vec` splice.
//!
//! Each node owns its children outright. There is no parent pointer: the
//! recursion carries `(parent, child_index)` instead.

use crate::common::Order;

/// Discriminates leaf nodes from internal nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    /// Bottom level; entries have no children.
    Leaf,
    /// Upper level; `n` entries separate `n + 1` children.
    Internal,
}

/// Where a key lives relative to one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    /// The key is stored in this node at the given entry index.
    Found(usize),
    /// The key is not in this node. For an internal node, the index is
    /// the child whose range covers the key; for a leaf, it is the
    /// position a new entry would be inserted at.
    Descend(usize),
}

/// A single B-tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<K, V> {
    pub(crate) kind: NodeKind,
    pub(crate) keys: Vec<K>,
    pub(crate) values: Vec<V>,
    pub(crate) children: Vec<Node<K, V>>,
}

impl<K, V> Node<K, V> {
    /// Create an empty leaf sized for `order`.
    ///
    /// Capacity is `max_keys + 1` so the transient overflow entry
    /// inserted right before a split never reallocates.
    pub(crate) fn new_leaf(order: Order) -> Self {
        let cap = order.max_keys() + 1;
        Self {
            kind: NodeKind::Leaf,
            keys: Vec::with_capacity(cap),
            values: Vec::with_capacity(cap),
            children: Vec::new(),
        }
    }

    /// Create an internal node holding one separator and two children.
    ///
    /// This is the shape of a freshly grown root.
    pub(crate) fn new_root(
        key: K,
        value: V,
        left: Node<K, V>,
        right: Node<K, V>,
        order: Order,
    ) -> Self {
        let cap = order.max_keys() + 1;
        let mut keys = Vec::with_capacity(cap);
        let mut values = Vec::with_capacity(cap);
        let mut children = Vec::with_capacity(cap + 1);
        keys.push(key);
        values.push(value);
        children.push(left);
        children.push(right);
        Self {
            kind: NodeKind::Internal,
            keys,
            values,
            children,
        }
    }

    /// Number of entries in use.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }

    /// True when the node holds more than `max_keys` entries and must split.
    #[inline]
    pub(crate) fn is_overfull(&self, order: Order) -> bool {
        self.len() > order.max_keys()
    }

    /// True when the node holds fewer than `min_keys` entries.
    ///
    /// Only meaningful for non-root nodes; the root is exempt.
    #[inline]
    pub(crate) fn is_deficient(&self, order: Order) -> bool {
        self.len() < order.min_keys()
    }

    /// Insert an entry at `idx`, shifting later entries right.
    pub(crate) fn insert_entry(&mut self, idx: usize, key: K, value: V) {
        self.keys.insert(idx, key);
        self.values.insert(idx, value);
    }

    /// Remove the entry at `idx`, shifting later entries left.
    pub(crate) fn remove_entry(&mut self, idx: usize) -> (K, V) {
        (self.keys.remove(idx), self.values.remove(idx))
    }

    /// Swap in a new key/value at `idx`, returning the old pair.
    pub(crate) fn replace_entry(&mut self, idx: usize, key: K, value: V) -> (K, V) {
        (
            std::mem::replace(&mut self.keys[idx], key),
            std::mem::replace(&mut self.values[idx], value),
        )
    }

    /// Count of entries stored in this subtree.
    pub(crate) fn subtree_len(&self) -> usize {
        self.len() + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

impl<K: Ord, V> Node<K, V> {
    /// Locate `key` within this node.
    ///
    /// Binary search over the separators gives the same answer as a
    /// left-to-right scan: the first separator greater than `key` picks
    /// the child to its left, and running off the end picks the
    /// rightmost child.
    #[inline]
    pub(crate) fn find(&self, key: &K) -> Slot {
        match self.keys.binary_search(key) {
            Ok(idx) => Slot::Found(idx),
            Err(idx) => Slot::Descend(idx),
        }
    }
}
