//! Structural statistics for a B-tree.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracked by a [`BTree`](super::BTree).
///
/// All fields are atomic so that `get(&self)` can record lookups
/// without needing `&mut` access, and the tree stays `Sync` for callers
/// that share it behind their own read lock.
///
/// # Memory Ordering
/// We use `Ordering::Relaxed` for all operations because:
/// - We only need atomicity (no partial updates)
/// - We don't need synchronization between different counters
/// - Statistics are "eventually consistent" - exact ordering doesn't matter
///
/// # Example
/// ```
/// use interchangedb_btree::TreeStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = TreeStats::new();
/// stats.splits.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.splits.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct TreeStats {
    /// Number of `get`/`contains_key` calls that reached the tree.
    pub lookups: AtomicU64,

    /// Number of lookups that found their key.
    pub lookup_hits: AtomicU64,

    /// Number of `put` calls that added a new key.
    pub inserts: AtomicU64,

    /// Number of `put` calls that overwrote an existing key.
    pub updates: AtomicU64,

    /// Number of `delete` calls that removed a key.
    pub deletes: AtomicU64,

    /// Number of node splits, root splits included.
    pub splits: AtomicU64,

    /// Number of sibling merges.
    pub merges: AtomicU64,

    /// Number of sibling rotations.
    pub rotations: AtomicU64,

    /// Number of times the tree grew a level.
    pub root_splits: AtomicU64,

    /// Number of times the tree lost a level.
    pub root_collapses: AtomicU64,
}

impl TreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            lookups: AtomicU64::new(0),
            lookup_hits: AtomicU64::new(0),
            inserts: AtomicU64::new(0),
            updates: AtomicU64::new(0),
            deletes: AtomicU64::new(0),
            splits: AtomicU64::new(0),
            merges: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
            root_splits: AtomicU64::new(0),
            root_collapses: AtomicU64::new(0),
        }
    }

    /// Calculate lookup hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        self.snapshot().hit_rate()
    }

    /// Get a snapshot of current statistics.
    ///
    /// This returns a non-atomic copy for display/logging.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            lookups: self.lookups.load(Ordering::Relaxed),
            lookup_hits: self.lookup_hits.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            splits: self.splits.load(Ordering::Relaxed),
            merges: self.merges.load(Ordering::Relaxed),
            rotations: self.rotations.load(Ordering::Relaxed),
            root_splits: self.root_splits.load(Ordering::Relaxed),
            root_collapses: self.root_collapses.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.lookup_hits.store(0, Ordering::Relaxed);
        self.inserts.store(0, Ordering::Relaxed);
        self.updates.store(0, Ordering::Relaxed);
        self.deletes.store(0, Ordering::Relaxed);
        self.splits.store(0, Ordering::Relaxed);
        self.merges.store(0, Ordering::Relaxed);
        self.rotations.store(0, Ordering::Relaxed);
        self.root_splits.store(0, Ordering::Relaxed);
        self.root_collapses.store(0, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for TreeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of tree statistics.
///
/// Unlike `TreeStats`, this is not atomic and can be safely
/// printed, compared, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub lookups: u64,
    pub lookup_hits: u64,
    pub inserts: u64,
    pub updates: u64,
    pub deletes: u64,
    pub splits: u64,
    pub merges: u64,
    pub rotations: u64,
    pub root_splits: u64,
    pub root_collapses: u64,
}

impl StatsSnapshot {
    /// Calculate lookup hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.lookup_hits as f64 / self.lookups as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ lookups: {}, hit_rate: {:.2}%, inserts: {}, deletes: {}, splits: {}, merges: {}, rotations: {} }}",
            self.lookups,
            self.hit_rate() * 100.0,
            self.inserts,
            self.deletes,
            self.splits,
            self.merges,
            self.rotations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = TreeStats::new();
        assert_eq!(stats.lookups.load(Ordering::Relaxed), 0);
        assert_eq!(stats.splits.load(Ordering::Relaxed), 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn test_stats_bump_and_snapshot() {
        let stats = TreeStats::new();
        for _ in 0..4 {
            TreeStats::bump(&stats.lookups);
        }
        TreeStats::bump(&stats.lookup_hits);
        TreeStats::bump(&stats.merges);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.lookups, 4);
        assert_eq!(snapshot.lookup_hits, 1);
        assert_eq!(snapshot.merges, 1);
        assert_eq!(snapshot.hit_rate(), 0.25);
    }

    #[test]
    fn test_stats_reset() {
        let stats = TreeStats::new();
        stats.rotations.fetch_add(100, Ordering::Relaxed);
        stats.root_collapses.fetch_add(3, Ordering::Relaxed);

        stats.reset();

        assert_eq!(stats.snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn test_stats_display() {
        let stats = TreeStats::new();
        stats.lookups.fetch_add(80, Ordering::Relaxed);
        stats.lookup_hits.fetch_add(60, Ordering::Relaxed);
        stats.splits.fetch_add(5, Ordering::Relaxed);

        let display = format!("{}", stats.snapshot());

        assert!(display.contains("lookups: 80"));
        assert!(display.contains("75.00%"));
        assert!(display.contains("splits: 5"));
    }
}
