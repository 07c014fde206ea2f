//! Read-only descent.
//!
//! Lookup walks from the root toward the leaves, stopping early when a
//! separator matches: promoted entries keep their values, so an internal
//! node can hold the answer.

use super::node::{Node, Slot};

impl<K: Ord, V> Node<K, V> {
    /// Find the value stored under `key` in this subtree.
    ///
    /// Iterative, so lookup depth never touches the call stack.
    pub(crate) fn search(&self, key: &K) -> Option<&V> {
        let mut node = self;
        loop {
            match node.find(key) {
                Slot::Found(idx) => return Some(&node.values[idx]),
                Slot::Descend(_) if node.is_leaf() => return None,
                Slot::Descend(idx) => node = &node.children[idx],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::common::Order;
    use crate::index::btree::node::Node;

    fn leaf(keys: &[u32]) -> Node<u32, String> {
        let mut node = Node::new_leaf(Order::default());
        for (i, &k) in keys.iter().enumerate() {
            node.insert_entry(i, k, format!("v{}", k));
        }
        node
    }

    /// Two-level tree:
    /// ```text
    ///          [20, 40]
    ///   [5,10]  [25,30]  [45,50]
    /// ```
    fn two_level() -> Node<u32, String> {
        let mut root = Node::new_root(
            20,
            "v20".to_string(),
            leaf(&[5, 10]),
            leaf(&[25, 30]),
            Order::default(),
        );
        root.insert_entry(1, 40, "v40".to_string());
        root.children.push(leaf(&[45, 50]));
        root
    }

    #[test]
    fn test_search_empty_leaf() {
        let node = leaf(&[]);
        assert_eq!(node.search(&1), None);
    }

    #[test]
    fn test_search_hits_leaves_and_separators() {
        let root = two_level();
        assert_eq!(root.search(&5).map(String::as_str), Some("v5"));
        assert_eq!(root.search(&30).map(String::as_str), Some("v30"));
        assert_eq!(root.search(&50).map(String::as_str), Some("v50"));
        // separators are answered from the internal node itself
        assert_eq!(root.search(&20).map(String::as_str), Some("v20"));
        assert_eq!(root.search(&40).map(String::as_str), Some("v40"));
    }

    #[test]
    fn test_search_misses() {
        let root = two_level();
        for k in [0, 7, 15, 21, 35, 41, 60] {
            assert_eq!(root.search(&k), None, "key {} should be absent", k);
        }
    }
}
