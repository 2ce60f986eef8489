//! Clone counter — a payload that tallies how often it has been duplicated.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A payload whose clones share one counter.
///
/// Moving a `CloneCounter` leaves the count alone; every `clone` bumps it.
/// Equality compares only the `id`.
#[derive(Debug)]
pub struct CloneCounter {
    id: u32,
    clones: Arc<AtomicUsize>,
}

impl CloneCounter {
    /// Create a fresh payload with a clone count of zero.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            clones: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The identifier this payload was created with.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Number of clones made from this payload or any of its clones.
    #[must_use]
    pub fn clones(&self) -> usize {
        self.clones.load(Ordering::SeqCst)
    }
}

impl Clone for CloneCounter {
    fn clone(&self) -> Self {
        self.clones.fetch_add(1, Ordering::SeqCst);
        Self {
            id: self.id,
            clones: Arc::clone(&self.clones),
        }
    }
}

impl PartialEq for CloneCounter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CloneCounter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_keeps_count_at_zero() {
        let original = CloneCounter::new(1);
        let moved = original;

        assert_eq!(moved.clones(), 0);
    }

    #[test]
    fn test_clones_share_count() {
        let original = CloneCounter::new(1);
        let first = original.clone();
        let second = first.clone();

        assert_eq!(original.clones(), 2);
        assert_eq!(second.clones(), 2);
        assert_eq!(second, original);
    }
}
