//! InterchangeDB B-tree - an in-memory ordered index for the InterchangeDB storage engine.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       BTree<K, V>                               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Public API (tree)                        │   │
//! │  │        get / put / delete / height / validate            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐  │
//! │  │   search     │  │  insert + split  │  │ delete + rotate  │  │
//! │  │  (descent)   │  │  (grow at root)  │  │ merge + collapse │  │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘  │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │      Node: keys[k] | values[k] | children[k + 1]         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The index never touches disk and has no internal locking. Persistence
//! and concurrency are layered on top by the caller.
//!
//! # Modules
//! - [`common`] - Shared primitives (Order, IndexKey, Error, config)
//! - [`index`] - Index structures (B-tree)
//!
//! # Quick Start
//! ```
//! use interchangedb_btree::BTree;
//!
//! let mut tree = BTree::new(3).unwrap();
//! for (i, key) in ["a", "b", "c", "d", "e", "f"].into_iter().enumerate() {
//!     tree.put(key, i).unwrap();
//! }
//!
//! assert_eq!(tree.get(&"d").unwrap(), Some(&3));
//! assert_eq!(tree.height(), 2);
//!
//! tree.delete(&"d").unwrap();
//! assert_eq!(tree.get(&"d").unwrap(), None);
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_ORDER, MIN_ORDER};
pub use common::{Error, IndexKey, Order, Result};

pub use index::btree::{BTree, InvariantViolation, StatsSnapshot, TreeStats};
