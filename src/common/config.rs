//! Configuration constants for the B-tree index.

/// Branching factor used when no order is given.
///
/// With `B = 3`:
/// - `MAX_KEYS = 2B - 1 = 5` entries per node
/// - `MIN_KEYS = B - 1 = 2` entries per non-root node
/// - Up to 6 children per internal node
///
/// Small enough that splits and merges show up after a handful of
/// operations, which keeps the structural tests readable.
pub const DEFAULT_ORDER: usize = 3;

/// Smallest legal branching factor.
///
/// `B = 2` gives a 2-3-4 tree (1 to 3 keys per node). Anything below
/// that leaves `MIN_KEYS = 0` and the occupancy invariant collapses.
pub const MIN_ORDER: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Order;

    #[test]
    fn test_default_order_is_legal() {
        let order = Order::new(DEFAULT_ORDER).unwrap();
        assert_eq!(order.max_keys(), 5);
        assert_eq!(order.min_keys(), 2);
    }

    #[test]
    fn test_min_order_keeps_min_keys_positive() {
        assert_eq!(Order::new(MIN_ORDER).unwrap().min_keys(), 1);
        assert!(Order::new(MIN_ORDER - 1).is_err());
    }
}
