//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check store behavior over arbitrary keys and byte values.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::ExpiringCache;

// == Test Configuration ==
const TEST_LIFETIME: Duration = Duration::from_secs(300);

/// Runs `body` against a fresh cache on a single-threaded runtime.
fn with_cache<F, Fut>(body: F) -> Fut::Output
where
    F: FnOnce(ExpiringCache) -> Fut,
    Fut: std::future::Future,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("test runtime");
    runtime.block_on(async move { body(ExpiringCache::new(TEST_LIFETIME)).await })
}

// == Strategies ==
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9/:?=._-]{1,64}"
}

fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Insert { key: String, value: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    // Small key space so gets and overwrites actually collide
    let key = "[a-d]{1,2}";
    prop_oneof![
        (key, value_strategy()).prop_map(|(key, value)| CacheOp::Insert { key, value }),
        key.prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Insert followed immediately by a lookup returns exactly what was stored.
    #[test]
    fn prop_insert_then_get_returns_value(key in key_strategy(), value in value_strategy()) {
        let expected = value.clone();
        let got = with_cache(|cache| async move {
            cache.insert(key.clone(), value).await;
            let got = cache.get(&key).await;
            cache.stop().await;
            got
        });
        prop_assert_eq!(got, Some(expected));
    }

    // Keys that were never inserted are absent.
    #[test]
    fn prop_absent_keys_miss(
        inserted in prop::collection::hash_set(key_strategy(), 0..16),
        probe in key_strategy()
    ) {
        prop_assume!(!inserted.contains(&probe));
        let got = with_cache(|cache| async move {
            for key in inserted {
                cache.insert(key, b"present".to_vec()).await;
            }
            let got = cache.get(&probe).await;
            cache.stop().await;
            got
        });
        prop_assert_eq!(got, None);
    }

    // Any interleaving of inserts and gets behaves like a plain map
    // (nothing expires within the test's lifetime).
    #[test]
    fn prop_behaves_like_a_map(ops in prop::collection::vec(cache_op_strategy(), 1..64)) {
        let mismatches = with_cache(|cache| async move {
            let mut model: HashMap<String, Vec<u8>> = HashMap::new();
            let mut mismatches = Vec::new();

            for op in ops {
                match op {
                    CacheOp::Insert { key, value } => {
                        cache.insert(key.clone(), value.clone()).await;
                        model.insert(key, value);
                    }
                    CacheOp::Get { key } => {
                        let got = cache.get(&key).await;
                        if got.as_ref() != model.get(&key) {
                            mismatches.push(key);
                        }
                    }
                }
            }

            if cache.len().await != model.len() {
                mismatches.push("<len>".to_string());
            }
            cache.stop().await;
            mismatches
        });
        prop_assert!(mismatches.is_empty(), "diverged on {:?}", mismatches);
    }
}
