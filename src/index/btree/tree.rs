//! The public B-tree handle.

use super::delete::Removal;
use super::insert::InsertOutcome;
use super::node::Node;
use super::stats::TreeStats;
use crate::common::{Error, IndexKey, Order, Result};

/// An in-memory ordered map backed by a B-tree of fixed order.
///
/// # Architecture
/// ```text
/// ┌────────────────────────────────────────────────────────┐
/// │ BTree { root, height, len, order, stats }              │
/// │                                                        │
/// │   height 3             [ P ]                           │
/// │                       /     \                          │
/// │   height 2      [D H L]      [T X]                     │
/// │                 / | | \      / | \                     │
/// │   height 1   leaves ...     leaves ...                 │
/// └────────────────────────────────────────────────────────┘
/// ```
///
/// The tree owns its root; every node owns its children. Height only
/// changes at the root: a root split adds a level, and a root left with
/// no keys after a merge is replaced by its only child.
///
/// # Thread Safety
/// The tree has no internal locking. Mutation takes `&mut self`, so a
/// caller sharing a tree must serialize writers itself (for example one
/// `RwLock` per tree). Lookups take `&self` and only touch the atomic
/// statistics counters.
///
/// # Usage
/// ```
/// use interchangedb_btree::BTree;
///
/// let mut tree = BTree::new(3).unwrap();
/// tree.put("apple", 1).unwrap();
/// tree.put("pear", 2).unwrap();
///
/// assert_eq!(tree.get(&"apple").unwrap(), Some(&1));
/// assert_eq!(tree.delete(&"pear").unwrap(), Some(2));
/// assert_eq!(tree.get(&"pear").unwrap(), None);
/// assert_eq!(tree.height(), 1);
/// ```
#[derive(Debug)]
pub struct BTree<K, V> {
    /// Root node. A leaf (possibly empty) when `height == 1`.
    root: Node<K, V>,

    /// Levels from root to leaf, leaves at 1.
    height: usize,

    /// Number of stored entries.
    len: usize,

    /// Branching factor (immutable after construction).
    order: Order,

    /// Operation and structure counters.
    stats: TreeStats,
}

impl<K: IndexKey, V> BTree<K, V> {
    /// Create an empty tree with branching factor `order`.
    ///
    /// # Errors
    /// - `Error::InvalidArgument` if `order < 2`
    pub fn new(order: usize) -> Result<Self> {
        Ok(Self::with_order(Order::new(order)?))
    }

    /// Create an empty tree from an already validated order.
    pub fn with_order(order: Order) -> Self {
        Self {
            root: Node::new_leaf(order),
            height: 1,
            len: 0,
            order,
            stats: TreeStats::new(),
        }
    }

    // ========================================================================
    // Public API: Lookup
    // ========================================================================

    /// Look up the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is not present, including on an
    /// empty tree.
    ///
    /// # Errors
    /// - `Error::InvalidArgument` if `key` is absent
    pub fn get(&self, key: &K) -> Result<Option<&V>> {
        Self::check_key(key)?;

        let found = self.root.search(key);
        TreeStats::bump(&self.stats.lookups);
        if found.is_some() {
            TreeStats::bump(&self.stats.lookup_hits);
        }
        Ok(found)
    }

    /// Check whether `key` is present.
    ///
    /// # Errors
    /// - `Error::InvalidArgument` if `key` is absent
    pub fn contains_key(&self, key: &K) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    // ========================================================================
    // Public API: Mutation
    // ========================================================================

    /// Insert `value` under `key`, replacing any existing value in place.
    ///
    /// Returns the previous value if the key was already present. An
    /// overwrite never changes the tree's shape.
    ///
    /// # Errors
    /// - `Error::InvalidArgument` if `key` is absent; the tree is not modified
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>> {
        Self::check_key(&key)?;

        match self.root.insert(key, value, self.order, &self.stats) {
            InsertOutcome::Updated(old) => {
                TreeStats::bump(&self.stats.updates);
                Ok(Some(old))
            }
            InsertOutcome::Inserted => {
                self.len += 1;
                TreeStats::bump(&self.stats.inserts);
                Ok(None)
            }
            InsertOutcome::Split { key, value, right } => {
                self.grow_root(key, value, right);
                self.len += 1;
                TreeStats::bump(&self.stats.inserts);
                Ok(None)
            }
        }
    }

    /// Remove `key`, returning its value.
    ///
    /// Deleting a key that is not present is a no-op and returns
    /// `Ok(None)`.
    ///
    /// # Errors
    /// - `Error::InvalidArgument` if `key` is absent; the tree is not modified
    pub fn delete(&mut self, key: &K) -> Result<Option<V>> {
        Self::check_key(key)?;

        let value = match self.root.remove(key, self.order, &self.stats) {
            Removal::Absent => return Ok(None),
            // the root is exempt from the minimum; only emptiness matters
            Removal::Removed(value) | Removal::Underflow(value) => value,
        };

        self.len -= 1;
        TreeStats::bump(&self.stats.deletes);

        if !self.root.is_leaf() && self.root.len() == 0 {
            self.collapse_root();
        }
        Ok(Some(value))
    }

    /// Drop every entry, leaving a single empty leaf root.
    pub fn clear(&mut self) {
        self.root = Node::new_leaf(self.order);
        self.height = 1;
        self.len = 0;
    }

    // ========================================================================
    // Public API: Accessors
    // ========================================================================

    /// Levels from root to leaf; an empty tree has height 1.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The branching factor this tree was built with.
    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Operation and structure counters.
    #[inline]
    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    fn check_key(key: &K) -> Result<()> {
        if key.is_absent() {
            return Err(Error::absent_key());
        }
        Ok(())
    }

    /// Put a new root above the old one after a root split.
    fn grow_root(&mut self, key: K, value: V, right: Node<K, V>) {
        let left = std::mem::replace(&mut self.root, Node::new_leaf(self.order));
        self.root = Node::new_root(key, value, left, right, self.order);
        self.height += 1;

        TreeStats::bump(&self.stats.root_splits);
        tracing::debug!(height = self.height, "root split, tree grew a level");
    }

    /// Replace an internal root that lost its last key with its only child.
    fn collapse_root(&mut self) {
        debug_assert_eq!(self.root.children.len(), 1);
        if let Some(child) = self.root.children.pop() {
            self.root = child;
            self.height -= 1;

            TreeStats::bump(&self.stats.root_collapses);
            tracing::debug!(height = self.height, "root collapsed, tree lost a level");
        }
    }

    pub(crate) fn root(&self) -> &Node<K, V> {
        &self.root
    }

    #[cfg(test)]
    pub(crate) fn root_mut_for_test(&mut self) -> &mut Node<K, V> {
        &mut self.root
    }
}

impl<K: IndexKey, V> Default for BTree<K, V> {
    fn default() -> Self {
        Self::with_order(Order::default())
    }
}
