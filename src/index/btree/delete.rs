//! Deletion and underflow repair.
//!
//! Removal runs in two halves. The descent finds the key and takes it out:
//! - from a leaf, by shifting the later entries left
//! - from an internal node, by swapping in the predecessor (max of the
//!   left child) or successor (min of the right child) and removing that
//!   entry from its leaf instead
//!
//! On the way back up, each level reports a [`Removal`]. `Underflow`
//! means the child just dropped below `min_keys` and the parent must
//! repair it before returning:
//!
//! ```text
//! rotate (sibling has spare):      [ .. 20 .. ]            [ .. 15 .. ]
//!                               [10 15]    [_]   ->     [10]      [20]
//!
//! merge (sibling at minimum):      [ .. 20 .. ]            [ .. .. ]
//!                                  [10]    [_]   ->     [10 20]
//! ```
//!
//! A merge takes a separator out of the parent, so the parent may report
//! `Underflow` in turn. The root ignores the signal; if it ends up with
//! no keys, [`BTree`](super::BTree) collapses it onto its single child.

use super::node::{Node, Slot};
use super::stats::TreeStats;
use crate::common::Order;

/// What one level of removal reports to its parent.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Removal<T> {
    /// The key was not in this subtree. Nothing changed.
    Absent,

    /// The entry was removed and this node still holds at least
    /// `min_keys` entries.
    Removed(T),

    /// The entry was removed and this node is now deficient.
    Underflow(T),
}

impl<K: Ord, V> Node<K, V> {
    /// Remove `key` from this subtree, returning its value.
    pub(crate) fn remove(&mut self, key: &K, order: Order, stats: &TreeStats) -> Removal<V> {
        match self.find(key) {
            Slot::Found(idx) if self.is_leaf() => {
                let (_, value) = self.remove_entry(idx);
                self.settle(value, order)
            }
            Slot::Found(idx) => self.remove_separator(idx, order, stats),
            Slot::Descend(_) if self.is_leaf() => Removal::Absent,
            Slot::Descend(idx) => match self.children[idx].remove(key, order, stats) {
                Removal::Underflow(value) => {
                    self.repair_child(idx, order, stats);
                    self.settle(value, order)
                }
                outcome => outcome,
            },
        }
    }

    /// Remove the separator at `idx` of an internal node.
    ///
    /// The replacement comes from whichever adjacent child holds more
    /// entries; on a tie the successor (right child) is used.
    fn remove_separator(&mut self, idx: usize, order: Order, stats: &TreeStats) -> Removal<V> {
        let take_predecessor = self.children[idx].len() > self.children[idx + 1].len();
        let (child, popped) = if take_predecessor {
            (idx, self.children[idx].pop_max(order, stats))
        } else {
            (idx + 1, self.children[idx + 1].pop_min(order, stats))
        };

        let ((key, value), underflow) = match popped {
            Removal::Removed(entry) => (entry, false),
            Removal::Underflow(entry) => (entry, true),
            // children of an internal node are never empty
            Removal::Absent => return Removal::Absent,
        };

        let (_, old) = self.replace_entry(idx, key, value);
        if underflow {
            self.repair_child(child, order, stats);
            return self.settle(old, order);
        }
        Removal::Removed(old)
    }

    /// Remove and return the largest entry of this subtree.
    fn pop_max(&mut self, order: Order, stats: &TreeStats) -> Removal<(K, V)> {
        if self.is_leaf() {
            return match (self.keys.pop(), self.values.pop()) {
                (Some(key), Some(value)) => self.settle((key, value), order),
                _ => Removal::Absent,
            };
        }

        let last = self.children.len() - 1;
        match self.children[last].pop_max(order, stats) {
            Removal::Underflow(entry) => {
                self.repair_child(last, order, stats);
                self.settle(entry, order)
            }
            outcome => outcome,
        }
    }

    /// Remove and return the smallest entry of this subtree.
    fn pop_min(&mut self, order: Order, stats: &TreeStats) -> Removal<(K, V)> {
        if self.is_leaf() {
            if self.keys.is_empty() {
                return Removal::Absent;
            }
            let entry = self.remove_entry(0);
            return self.settle(entry, order);
        }

        match self.children[0].pop_min(order, stats) {
            Removal::Underflow(entry) => {
                self.repair_child(0, order, stats);
                self.settle(entry, order)
            }
            outcome => outcome,
        }
    }

    /// Tag a removed payload with this node's occupancy.
    #[inline]
    fn settle<T>(&self, payload: T, order: Order) -> Removal<T> {
        if self.is_deficient(order) {
            Removal::Underflow(payload)
        } else {
            Removal::Removed(payload)
        }
    }

    /// Restore `children[idx]` to at least `min_keys` entries.
    ///
    /// Tries a rotation from the left sibling, then from the right
    /// sibling, and merges only when both are at the minimum. A merge
    /// pairs the deficient child with its left sibling when there is one.
    fn repair_child(&mut self, idx: usize, order: Order, stats: &TreeStats) {
        let min = order.min_keys();

        if idx > 0 && self.children[idx - 1].len() > min {
            self.rotate_right(idx - 1);
            TreeStats::bump(&stats.rotations);
        } else if idx + 1 < self.children.len() && self.children[idx + 1].len() > min {
            self.rotate_left(idx);
            TreeStats::bump(&stats.rotations);
        } else {
            let sep = if idx > 0 { idx - 1 } else { idx };
            self.merge_children(sep);
            TreeStats::bump(&stats.merges);
        }
    }

    /// Move one entry from `children[sep]` into `children[sep + 1]`
    /// through the separator at `sep`.
    fn rotate_right(&mut self, sep: usize) {
        let (head, tail) = self.children.split_at_mut(sep + 1);
        let donor = &mut head[sep];
        let target = &mut tail[0];

        let last = donor.len() - 1;
        let (key, value) = donor.remove_entry(last);
        let key = std::mem::replace(&mut self.keys[sep], key);
        let value = std::mem::replace(&mut self.values[sep], value);
        target.insert_entry(0, key, value);

        if let Some(child) = donor.children.pop() {
            target.children.insert(0, child);
        }

        tracing::trace!(separator_index = sep, keys = target.len(), "rotate right");
    }

    /// Move one entry from `children[sep + 1]` into `children[sep]`
    /// through the separator at `sep`.
    fn rotate_left(&mut self, sep: usize) {
        let (head, tail) = self.children.split_at_mut(sep + 1);
        let target = &mut head[sep];
        let donor = &mut tail[0];

        let (key, value) = donor.remove_entry(0);
        let key = std::mem::replace(&mut self.keys[sep], key);
        let value = std::mem::replace(&mut self.values[sep], value);
        target.keys.push(key);
        target.values.push(value);

        if !donor.is_leaf() {
            target.children.push(donor.children.remove(0));
        }

        tracing::trace!(separator_index = sep, keys = target.len(), "rotate left");
    }

    /// Fold `children[sep + 1]` and the separator at `sep` into `children[sep]`.
    ///
    /// One side is deficient (`min_keys - 1`) and the other at
    /// `min_keys`, so the result holds `2 * min_keys` entries, below
    /// `max_keys`.
    fn merge_children(&mut self, sep: usize) {
        let right = self.children.remove(sep + 1);
        let (key, value) = self.remove_entry(sep);

        let left = &mut self.children[sep];
        left.keys.push(key);
        left.values.push(value);
        left.keys.extend(right.keys);
        left.values.extend(right.values);
        left.children.extend(right.children);

        tracing::trace!(
            separator_index = sep,
            keys = left.len(),
            parent_keys = self.keys.len(),
            "merge siblings"
        );
    }
}
