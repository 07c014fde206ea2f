//! Diagnostics: structural dumps and invariant checking.
//!
//! None of this is needed to use the tree. It exists so tests and
//! debugging sessions can look inside.

use std::fmt::{self, Debug, Write};

use thiserror::Error;

use super::node::Node;
use super::tree::BTree;
use crate::common::{IndexKey, Order};

/// A broken structural invariant, as reported by [`BTree::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Keys inside a node, or across a separator boundary, are not
    /// strictly increasing.
    #[error("keys out of order at depth {depth}")]
    Unordered { depth: usize },

    /// A node holds more or fewer entries than its position allows.
    #[error("node at depth {depth} holds {len} keys, expected {min}..={max}")]
    Occupancy {
        depth: usize,
        len: usize,
        min: usize,
        max: usize,
    },

    /// An internal node's child count is not `keys + 1`, or a leaf has
    /// children, or the key and value arrays disagree.
    #[error("node at depth {depth} has {keys} keys, {values} values and {children} children")]
    Fanout {
        depth: usize,
        keys: usize,
        values: usize,
        children: usize,
    },

    /// A leaf sits at a depth other than the tree's height.
    #[error("leaf at depth {depth}, tree height is {height}")]
    UnevenLeaves { depth: usize, height: usize },

    /// The cached entry count disagrees with the stored entries.
    #[error("tree reports {reported} entries, found {actual}")]
    LengthMismatch { reported: usize, actual: usize },
}

impl<K: IndexKey, V> BTree<K, V> {
    /// Check every structural invariant of the tree.
    ///
    /// - keys strictly increase within each node and respect the bounds
    ///   set by the separators above
    /// - non-root nodes hold `min_keys..=max_keys` entries; the root holds
    ///   at most `max_keys`, and at least one if it is internal
    /// - an internal node with `k` keys has `k + 1` children; leaves have none
    /// - every leaf sits at depth `height`
    /// - `len()` matches the number of stored entries
    ///
    /// # Errors
    /// Returns the first violation found, walking depth-first.
    pub fn validate(&self) -> std::result::Result<(), InvariantViolation> {
        let checker = Checker {
            order: self.order(),
            height: self.height(),
        };
        checker.visit(self.root(), 1, None, None)?;

        let actual = self.root().subtree_len();
        if actual != self.len() {
            return Err(InvariantViolation::LengthMismatch {
                reported: self.len(),
                actual,
            });
        }
        Ok(())
    }

    /// All keys in ascending order.
    pub fn keys_in_order(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.len());
        collect_keys(self.root(), &mut out);
        out
    }
}

impl<K: IndexKey + Debug, V> BTree<K, V> {
    /// Render the tree one node per line, indented by depth.
    ///
    /// ```text
    /// P
    ///   D, H, L
    ///     A, B, C
    ///     ...
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = dump_node(self.root(), 0, &mut out);
        out
    }
}

fn collect_keys<'a, K, V>(node: &'a Node<K, V>, out: &mut Vec<&'a K>) {
    if node.is_leaf() {
        out.extend(node.keys.iter());
        return;
    }
    for (idx, child) in node.children.iter().enumerate() {
        collect_keys(child, out);
        if let Some(key) = node.keys.get(idx) {
            out.push(key);
        }
    }
}

fn dump_node<K: Debug, V>(node: &Node<K, V>, depth: usize, out: &mut String) -> fmt::Result {
    let keys: Vec<String> = node.keys.iter().map(|k| format!("{:?}", k)).collect();
    writeln!(out, "{:indent$}{}", "", keys.join(", "), indent = depth * 2)?;
    for child in &node.children {
        dump_node(child, depth + 1, out)?;
    }
    Ok(())
}

struct Checker {
    order: Order,
    height: usize,
}

impl Checker {
    fn visit<K: Ord, V>(
        &self,
        node: &Node<K, V>,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> std::result::Result<(), InvariantViolation> {
        let len = node.len();
        let is_root = depth == 1;

        let fanout_ok = node.values.len() == len
            && if node.is_leaf() {
                node.children.is_empty()
            } else {
                node.children.len() == len + 1
            };
        if !fanout_ok {
            return Err(InvariantViolation::Fanout {
                depth,
                keys: len,
                values: node.values.len(),
                children: node.children.len(),
            });
        }

        let min = match (is_root, node.is_leaf()) {
            (false, _) => self.order.min_keys(),
            (true, true) => 0,
            (true, false) => 1,
        };
        let max = self.order.max_keys();
        if len < min || len > max {
            return Err(InvariantViolation::Occupancy {
                depth,
                len,
                min,
                max,
            });
        }

        let sorted = node.keys.windows(2).all(|w| w[0] < w[1]);
        let above_lower = match (lower, node.keys.first()) {
            (Some(lo), Some(first)) => first > lo,
            _ => true,
        };
        let below_upper = match (upper, node.keys.last()) {
            (Some(hi), Some(last)) => last < hi,
            _ => true,
        };
        if !(sorted && above_lower && below_upper) {
            return Err(InvariantViolation::Unordered { depth });
        }

        if node.is_leaf() {
            if depth != self.height {
                return Err(InvariantViolation::UnevenLeaves {
                    depth,
                    height: self.height,
                });
            }
            return Ok(());
        }

        for (idx, child) in node.children.iter().enumerate() {
            let lo = if idx == 0 { lower } else { node.keys.get(idx - 1) };
            let hi = if idx == len { upper } else { node.keys.get(idx) };
            self.visit(child, depth + 1, lo, hi)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(b: usize, keys: impl IntoIterator<Item = u32>) -> BTree<u32, u32> {
        let mut tree = BTree::new(b).unwrap();
        for k in keys {
            tree.put(k, k).unwrap();
        }
        tree
    }

    #[test]
    fn test_validate_fresh_and_built_trees() {
        assert_eq!(tree_with(3, std::iter::empty()).validate(), Ok(()));
        assert_eq!(tree_with(2, 0..100).validate(), Ok(()));
        assert_eq!(tree_with(5, (0..500).rev()).validate(), Ok(()));
    }

    #[test]
    fn test_validate_catches_unsorted_leaf() {
        let mut tree = tree_with(3, [1, 2, 3]);
        tree.root_mut_for_test().keys.swap(0, 2);
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::Unordered { depth: 1 })
        );
    }

    #[test]
    fn test_validate_catches_underfull_child() {
        let mut tree = tree_with(3, 1..=6); // [4] over [1, 2, 3] [5, 6]
        let child = &mut tree.root_mut_for_test().children[1];
        child.remove_entry(0);
        child.remove_entry(0);
        assert!(matches!(
            tree.validate(),
            Err(InvariantViolation::Occupancy { depth: 2, len: 0, .. })
        ));
    }

    #[test]
    fn test_validate_catches_length_mismatch() {
        let mut tree = tree_with(3, [1, 2]);
        tree.root_mut_for_test().remove_entry(0);
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::LengthMismatch {
                reported: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_keys_in_order() {
        let tree = tree_with(2, [5, 3, 9, 1, 7, 2, 8, 4, 6, 0]);
        let keys: Vec<u32> = tree.keys_in_order().into_iter().copied().collect();
        assert_eq!(keys, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_dump_layout() {
        let tree = tree_with(3, 1..=6);
        assert_eq!(tree.dump(), "4\n  1, 2, 3\n  5, 6\n");

        let empty: BTree<u32, u32> = BTree::new(3).unwrap();
        assert_eq!(empty.dump(), "\n");
    }

    #[test]
    fn test_violation_display() {
        let err = InvariantViolation::UnevenLeaves {
            depth: 2,
            height: 3,
        };
        assert_eq!(err.to_string(), "leaf at depth 2, tree height is 3");
    }
}
