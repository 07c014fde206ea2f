//! Branching factor type.

use std::fmt;

use crate::common::config::{DEFAULT_ORDER, MIN_ORDER};
use crate::common::{Error, Result};

/// The branching factor `B` of a tree.
///
/// All node capacity limits derive from it:
/// - `max_keys() = 2B - 1`: a node holding more must split
/// - `min_keys() = B - 1`: a non-root node holding fewer is deficient
/// - `split_index() = B`: the entry promoted when a node of `2B` entries splits
///
/// An `Order` can only be built through [`Order::new`], so every value
/// in circulation is at least [`MIN_ORDER`].
///
/// # Example
/// ```
/// use interchangedb_btree::Order;
///
/// let order = Order::new(3).unwrap();
/// assert_eq!(order.max_keys(), 5);
/// assert_eq!(order.min_keys(), 2);
/// assert!(Order::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Order(usize);

impl Order {
    /// Create a validated order.
    ///
    /// # Errors
    /// - `Error::InvalidArgument` if `b < MIN_ORDER`
    pub fn new(b: usize) -> Result<Self> {
        if b < MIN_ORDER {
            return Err(Error::InvalidArgument(format!(
                "order {} is below the minimum of {}",
                b, MIN_ORDER
            )));
        }
        Ok(Order(b))
    }

    /// The raw branching factor.
    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }

    /// Maximum entries a node holds at rest.
    #[inline]
    pub fn max_keys(&self) -> usize {
        2 * self.0 - 1
    }

    /// Minimum entries a non-root node holds at rest.
    #[inline]
    pub fn min_keys(&self) -> usize {
        self.0 - 1
    }

    /// Index of the entry promoted out of an overflowing node.
    ///
    /// An overflowing node holds `max_keys() + 1` entries; cutting at
    /// `ceil((max_keys() + 1) / 2)` leaves `B` entries on the left and
    /// `B - 1` on the right.
    #[inline]
    pub fn split_index(&self) -> usize {
        (self.max_keys() + 1).div_ceil(2)
    }
}

impl Default for Order {
    fn default() -> Self {
        Order(DEFAULT_ORDER)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order({})", self.0)
    }
}
