//! Index structures.
//!
//! - [`btree`] - In-memory B-tree with split, rotate and merge rebalancing

pub mod btree;
