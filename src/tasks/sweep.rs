//! Cache Sweep Task
//!
//! Background task that periodically evicts cache entries older than the
//! cache lifetime.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::{CacheCounters, EntryMap};

/// Shortest sweep period; a zero lifetime is swept at this rate.
pub const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(1);

/// Spawns the sweep task for one cache.
///
/// Every `lifetime` the task takes the write lock and removes each entry whose
/// age exceeds `lifetime`. It exits as soon as `shutdown` is cancelled; a sweep
/// already holding the lock finishes first.
///
/// # Arguments
/// * `entries` - Shared entry map owned by the cache
/// * `counters` - Cache counters, credited with every eviction
/// * `lifetime` - Entry lifetime, also used as the sweep period
/// * `shutdown` - Cancellation signal ending the loop
///
/// # Panics
/// Must be called from within a tokio runtime.
pub fn spawn_sweep_task(
    entries: Arc<RwLock<EntryMap>>,
    counters: Arc<CacheCounters>,
    lifetime: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    let period = lifetime.max(MIN_SWEEP_PERIOD);

    tokio::spawn(async move {
        debug!("Starting cache sweep task with period {:?}", period);

        // First tick one full period after start, not immediately
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    debug!("Cache sweep task received stop signal");
                    break;
                }
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard = entries.write().await;
                        sweep_expired(&mut guard, Instant::now(), lifetime)
                    };
                    counters.record_evictions(removed);

                    if removed > 0 {
                        info!("Cache sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Cache sweep: no expired entries found");
                    }
                }
            }
        }
    })
}

/// Removes every entry older than `lifetime` as of `now`.
///
/// Returns the number of entries removed.
pub fn sweep_expired(entries: &mut EntryMap, now: Instant, lifetime: Duration) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| !entry.is_stale(now, lifetime));
    before - entries.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheEntry;

    fn shared_map() -> Arc<RwLock<EntryMap>> {
        Arc::new(RwLock::new(EntryMap::new()))
    }

    #[test]
    fn test_sweep_expired_only_removes_stale_entries() {
        let mut entries = EntryMap::new();
        entries.insert("old".to_string(), CacheEntry::new(b"1".to_vec()));
        let lifetime = Duration::from_secs(60);

        // Pretend a minute and a half has gone by for "old", none for "new"
        let later = Instant::now() + Duration::from_secs(90);
        let mut fresh = CacheEntry::new(b"2".to_vec());
        fresh.created_at = later;
        entries.insert("new".to_string(), fresh);

        let removed = sweep_expired(&mut entries, later, lifetime);
        assert_eq!(removed, 1);
        assert!(!entries.contains_key("old"));
        assert!(entries.contains_key("new"));
    }

    #[test]
    fn test_sweep_expired_empty_map() {
        let mut entries = EntryMap::new();
        assert_eq!(
            sweep_expired(&mut entries, Instant::now(), Duration::ZERO),
            0
        );
    }

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let entries = shared_map();
        let counters = Arc::new(CacheCounters::default());
        let shutdown = CancellationToken::new();

        entries
            .write()
            .await
            .insert("expire_soon".to_string(), CacheEntry::new(b"v".to_vec()));

        let handle = spawn_sweep_task(
            entries.clone(),
            counters.clone(),
            Duration::from_millis(20),
            shutdown.clone(),
        );

        // Two full periods guarantee at least one sweep after the entry went stale
        tokio::time::sleep(Duration::from_millis(80)).await;

        assert!(
            entries.read().await.get("expire_soon").is_none(),
            "Expired entry should have been swept"
        );
        assert_eq!(counters.snapshot(0).evictions, 1);

        shutdown.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_fresh_entries() {
        let entries = shared_map();
        let shutdown = CancellationToken::new();
        let handle = spawn_sweep_task(
            entries.clone(),
            Arc::new(CacheCounters::default()),
            Duration::from_secs(3600),
            shutdown.clone(),
        );

        entries
            .write()
            .await
            .insert("long_lived".to_string(), CacheEntry::new(b"v".to_vec()));
        tokio::time::sleep(Duration::from_millis(50)).await;

        let guard = entries.read().await;
        assert_eq!(guard.get("long_lived").unwrap().value, b"v");
        drop(guard);

        shutdown.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_sweep_task_exits_on_cancel() {
        let shutdown = CancellationToken::new();
        let handle = spawn_sweep_task(
            shared_map(),
            Arc::new(CacheCounters::default()),
            Duration::from_secs(3600),
            shutdown.clone(),
        );

        shutdown.cancel();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweep task should exit promptly once cancelled")
            .unwrap();
    }
}
