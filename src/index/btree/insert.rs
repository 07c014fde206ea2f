//! Insertion and node splitting.
//!
//! Insert descends to the leaf that covers the key, places the entry in
//! sorted position, and only then checks for overflow. An overflowing
//! node splits around [`Order::split_index`] and hands the median entry
//! plus its new right sibling back to the caller, one level at a time:
//!
//! ```text
//! before (B = 2, MAX_KEYS = 3):      [10 20 30 40]      <- 4 entries, overfull
//!
//! after split:                            20            <- promoted to parent
//!                                   [10]     [30 40]
//! ```
//!
//! If the promotion reaches the top, [`BTree`](super::BTree) grows a new
//! root around it.

use super::node::{Node, Slot};
use super::stats::TreeStats;
use crate::common::Order;

/// What one level of insertion reports to its parent.
#[derive(Debug)]
pub(crate) enum InsertOutcome<K, V> {
    /// The key already existed; its value was replaced in place and the
    /// old value is returned. Shape is unchanged.
    Updated(V),

    /// A new entry was placed and every node on the path still fits.
    Inserted,

    /// A new entry was placed and this node split. The parent must insert
    /// `key`/`value` as a separator with `right` as the child after it.
    Split {
        key: K,
        value: V,
        right: Node<K, V>,
    },
}

impl<K: Ord, V> Node<K, V> {
    /// Insert `key`/`value` into this subtree.
    pub(crate) fn insert(
        &mut self,
        key: K,
        value: V,
        order: Order,
        stats: &TreeStats,
    ) -> InsertOutcome<K, V> {
        match self.find(&key) {
            Slot::Found(idx) => {
                let old = std::mem::replace(&mut self.values[idx], value);
                return InsertOutcome::Updated(old);
            }
            Slot::Descend(idx) if self.is_leaf() => {
                self.insert_entry(idx, key, value);
            }
            Slot::Descend(idx) => match self.children[idx].insert(key, value, order, stats) {
                InsertOutcome::Split { key, value, right } => {
                    self.insert_entry(idx, key, value);
                    self.children.insert(idx + 1, right);
                }
                outcome => return outcome,
            },
        }

        if !self.is_overfull(order) {
            return InsertOutcome::Inserted;
        }

        let (key, value, right) = self.split(order);
        TreeStats::bump(&stats.splits);
        InsertOutcome::Split { key, value, right }
    }

    /// Cut an overfull node in two.
    ///
    /// Entries `0..mid` stay here, entry `mid` is returned for promotion,
    /// and entries after `mid` move into a new sibling of the same kind.
    /// For internal nodes, children `0..=mid` stay and the rest move.
    pub(crate) fn split(&mut self, order: Order) -> (K, V, Node<K, V>) {
        let mid = order.split_index();
        debug_assert!(self.len() > mid, "split of a node that is not overfull");

        let mut right = Node::new_leaf(order);
        right.kind = self.kind;
        right.keys.extend(self.keys.drain(mid + 1..));
        right.values.extend(self.values.drain(mid + 1..));
        if !self.is_leaf() {
            right.children.reserve(order.max_keys() + 2);
            right.children.extend(self.children.drain(mid + 1..));
        }

        let (key, value) = self.remove_entry(mid);

        tracing::trace!(
            left_keys = self.len(),
            right_keys = right.len(),
            leaf = self.is_leaf(),
            "split node"
        );

        (key, value, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::btree::node::NodeKind;

    fn order(b: usize) -> Order {
        Order::new(b).unwrap()
    }

    /// Insert into a bare node, growing a root the way the tree does.
    fn insert_all(b: usize, keys: &[u32]) -> (Node<u32, u32>, TreeStats) {
        let order = order(b);
        let stats = TreeStats::new();
        let mut root = Node::new_leaf(order);
        for &k in keys {
            if let InsertOutcome::Split { key, value, right } = root.insert(k, k * 10, order, &stats) {
                let left = std::mem::replace(&mut root, Node::new_leaf(order));
                root = Node::new_root(key, value, left, right, order);
            }
        }
        (root, stats)
    }

    // ========================================================================
    // Leaf insertion
    // ========================================================================

    #[test]
    fn test_insert_keeps_sorted_order() {
        let (root, stats) = insert_all(3, &[30, 10, 50, 20, 40]);
        assert!(root.is_leaf());
        assert_eq!(root.keys, vec![10, 20, 30, 40, 50]);
        assert_eq!(root.values, vec![100, 200, 300, 400, 500]);
        assert_eq!(stats.snapshot().splits, 0);
    }

    #[test]
    fn test_insert_existing_key_overwrites() {
        let order = order(3);
        let stats = TreeStats::new();
        let mut root = Node::new_leaf(order);
        root.insert(1, 10, order, &stats);

        match root.insert(1, 11, order, &stats) {
            InsertOutcome::Updated(old) => assert_eq!(old, 10),
            other => panic!("expected Updated, got {:?}", other),
        }
        assert_eq!(root.len(), 1);
        assert_eq!(root.values, vec![11]);
    }

    // ========================================================================
    // Splitting
    // ========================================================================

    #[test]
    fn test_leaf_split_at_midpoint() {
        // B = 3: sixth key overflows, entry at index 3 is promoted
        let (root, stats) = insert_all(3, &[1, 2, 3, 4, 5, 6]);

        assert_eq!(root.kind, NodeKind::Internal);
        assert_eq!(root.keys, vec![4]);
        assert_eq!(root.values, vec![40]);
        assert_eq!(root.children[0].keys, vec![1, 2, 3]);
        assert_eq!(root.children[1].keys, vec![5, 6]);
        assert_eq!(stats.snapshot().splits, 1);
    }

    #[test]
    fn test_split_order_two() {
        let (root, _) = insert_all(2, &[1, 2, 3, 4]);
        assert_eq!(root.keys, vec![3]);
        assert_eq!(root.children[0].keys, vec![1, 2]);
        assert_eq!(root.children[1].keys, vec![4]);
    }

    #[test]
    fn test_internal_split_moves_children() {
        // B = 2 with 1..=20 forces an internal split and a third level
        let (root, stats) = insert_all(2, &(1..=20).collect::<Vec<_>>());

        assert_eq!(root.keys, vec![9]);
        assert_eq!(root.children[0].keys, vec![3, 6]);
        assert_eq!(root.children[1].keys, vec![12, 15, 18]);
        assert_eq!(root.subtree_len(), 20);
        for child in &root.children {
            assert_eq!(child.kind, NodeKind::Internal);
            assert_eq!(child.children.len(), child.len() + 1);
            assert!(child.children.iter().all(Node::is_leaf));
        }
        // 6 leaf splits, 1 internal split
        assert_eq!(stats.snapshot().splits, 7);
    }

    #[test]
    fn test_split_keeps_capacity() {
        let order = order(3);
        let mut node: Node<u32, u32> = Node::new_leaf(order);
        for k in 0..6 {
            node.insert_entry(k as usize, k, k);
        }
        let (key, _, right) = node.split(order);

        assert_eq!(key, 3);
        assert_eq!(node.keys, vec![0, 1, 2]);
        assert_eq!(right.keys, vec![4, 5]);
        assert!(right.keys.capacity() > order.max_keys());
    }
}
