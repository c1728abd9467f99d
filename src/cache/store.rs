//! Cache Store Module
//!
//! Expiring key/value store: a HashMap behind a readers-writer lock plus the
//! background sweep task that evicts stale entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::cache::{CacheCounters, CacheEntry, CacheStats, EntryMap};
use crate::tasks::spawn_sweep_task;

// == Expiring Cache ==
/// Concurrency-safe byte cache whose entries expire after a fixed lifetime.
///
/// Expiration is enforced only by the sweep task, never at lookup time: an
/// entry is readable until the first sweep that finds it older than the
/// lifetime, so staleness is bounded by one sweep period.
///
/// # Lifecycle
/// The cache starts *running*. [`ExpiringCache::stop`] ends the sweep task and
/// may be called any number of times. A stopped cache still accepts inserts
/// and lookups, but nothing is ever evicted again. Dropping the cache signals
/// the sweep task as well.
#[derive(Debug)]
pub struct ExpiringCache {
    /// Key-value storage, shared with the sweep task
    entries: Arc<RwLock<EntryMap>>,
    /// Hit/miss/eviction counters, shared with the sweep task
    counters: Arc<CacheCounters>,
    /// Uniform entry lifetime and sweep period
    lifetime: Duration,
    /// Stop signal for the sweep task
    shutdown: CancellationToken,
    /// Sweep task handle, taken by the first `stop`
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    ///
    /// # Arguments
    /// * `lifetime` - How long entries live; also the sweep period
    ///
    /// # Panics
    /// Must be called from within a tokio runtime.
    pub fn new(lifetime: Duration) -> Self {
        let entries = Arc::new(RwLock::new(EntryMap::new()));
        let counters = Arc::new(CacheCounters::default());
        let shutdown = CancellationToken::new();

        let handle = spawn_sweep_task(
            entries.clone(),
            counters.clone(),
            lifetime,
            shutdown.clone(),
        );
        info!("Cache started with entry lifetime {:?}", lifetime);

        Self {
            entries,
            counters,
            lifetime,
            shutdown,
            sweeper: Mutex::new(Some(handle)),
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and its timestamp.
    pub async fn insert(&self, key: impl Into<String>, value: Vec<u8>) {
        let key = key.into();
        let mut entries = self.entries.write().await;
        entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if present right now.
    ///
    /// No age check happens here; an entry past its lifetime stays visible
    /// until the next sweep removes it.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let value = {
            let entries = self.entries.read().await;
            entries.get(key).map(|entry| entry.value.clone())
        };

        match value {
            Some(_) => self.counters.record_hit(),
            None => self.counters.record_miss(),
        }
        value
    }

    // == Stop ==
    /// Stops the sweep task and waits for it to exit.
    ///
    /// Idempotent and safe to call concurrently: later callers wait for the
    /// first one to finish, then return without doing anything.
    pub async fn stop(&self) {
        self.shutdown.cancel();

        let mut sweeper = self.sweeper.lock().await;
        if let Some(handle) = sweeper.take() {
            if let Err(err) = handle.await {
                if err.is_panic() {
                    std::panic::resume_unwind(err.into_panic());
                }
            }
            info!("Cache sweep task stopped");
        }
    }

    // == Is Running ==
    /// Returns false once `stop` has been called.
    pub fn is_running(&self) -> bool {
        !self.shutdown.is_cancelled()
    }

    // == Lifetime ==
    /// The fixed entry lifetime this cache was built with.
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let total_entries = self.entries.read().await.len();
        self.counters.snapshot(total_entries)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Drop for ExpiringCache {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
