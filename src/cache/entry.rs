//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A single cached value and the instant it was inserted.
///
/// Entries are never mutated in place; an overwrite replaces the whole entry,
/// timestamp included.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Opaque serialized payload
    pub value: Vec<u8>,
    /// Insertion instant
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed between insertion and `now` (zero if `now` is earlier).
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Returns true once the entry's age strictly exceeds `lifetime`.
    ///
    /// An entry exactly `lifetime` old is still fresh.
    pub fn is_stale(&self, now: Instant, lifetime: Duration) -> bool {
        self.age_at(now) > lifetime
    }
}
