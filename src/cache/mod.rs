//! Cache Module
//!
//! Provides the expiring in-memory byte cache and the read-through layer the
//! shell commands fetch catalog data through.

use std::collections::HashMap;

mod entry;
mod read_through;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use read_through::ReadThrough;
pub use stats::{CacheCounters, CacheStats};
pub use store::ExpiringCache;

/// Map guarded by the cache lock and swept by the background task.
pub type EntryMap = HashMap<String, CacheEntry>;
