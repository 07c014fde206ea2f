//! B-tree index implementation.
//!
//! An in-memory B-tree of fixed order `B`. Every entry carries a key and a
//! value; internal nodes additionally own one more child than they have
//! entries.
//!
//! # Components
//! - [`BTree`] - The public handle: `get`, `put`, `delete`, `height`
//! - `node` - Node layout and in-node search
//! - `search` - Read-only descent
//! - `insert` - Insertion and node splitting
//! - `delete` - Removal, rotation, merge and root collapse
//! - [`TreeStats`] - Operation and structure counters
//! - [`InvariantViolation`] - Diagnostics for structural checks

mod debug;
mod delete;
mod insert;
mod node;
mod search;
mod stats;
mod tree;

pub use debug::InvariantViolation;
pub use stats::{StatsSnapshot, TreeStats};
pub use tree::BTree;
