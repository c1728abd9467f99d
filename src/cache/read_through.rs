//! Read-Through Module
//!
//! "Fetch with caching" on top of [`ExpiringCache`]: a hit decodes the cached
//! bytes, a miss calls the source, caches the encoded result and returns it.

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cache::{CacheStats, ExpiringCache};
use crate::error::{FetchError, ReadThroughError};

// == Read Through ==
/// Cheaply cloneable read-through view over a shared cache.
///
/// Concurrent misses on the same key are not coalesced: each caller runs its
/// own fetch and the last insert wins. Both results are expected to be
/// equivalent, so this only costs a duplicate request.
#[derive(Debug, Clone)]
pub struct ReadThrough {
    cache: Arc<ExpiringCache>,
}

impl ReadThrough {
    pub fn new(cache: Arc<ExpiringCache>) -> Self {
        Self { cache }
    }

    /// The underlying cache.
    pub fn cache(&self) -> &Arc<ExpiringCache> {
        &self.cache
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    // == Fetch Cached ==
    /// Returns the value cached under `key`, or fetches, caches and returns it.
    ///
    /// The cache is written only after both the fetch and the encoding
    /// succeeded, so a failed call leaves no entry behind.
    ///
    /// # Errors
    /// - [`ReadThroughError::Deserialize`] if cached bytes do not decode as `T`
    /// - [`ReadThroughError::Fetch`] if the miss path's fetch fails
    /// - [`ReadThroughError::Serialize`] if the fetched value cannot be encoded
    pub async fn fetch_cached<T, F, Fut>(&self, key: &str, fetch: F) -> Result<T, ReadThroughError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        if let Some(bytes) = self.cache.get(key).await {
            debug!(key, "cache hit");
            return serde_json::from_slice(&bytes).map_err(|source| {
                ReadThroughError::Deserialize {
                    key: key.to_string(),
                    source,
                }
            });
        }

        debug!(key, "cache miss, fetching");
        let value = fetch().await?;
        let bytes = serde_json::to_vec(&value).map_err(|source| ReadThroughError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.cache.insert(key, bytes).await;

        Ok(value)
    }
}
