//! Common types and utilities shared across the index.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The branching factor (`Order`)
//! - The key trait (`IndexKey`)

pub mod config;
pub mod error;
mod key;
mod order;

pub use error::{Error, Result};
pub use key::IndexKey;
pub use order::Order;
