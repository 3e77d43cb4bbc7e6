//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a plain HashMap model.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::cache::{CacheStore, MockClock};

// == Strategies ==
/// Generates cache keys from a small alphabet so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-e]{1,2}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ]{0,32}".prop_map(|s| json!(s)),
        any::<bool>().prop_map(|b| json!(b)),
    ]
}

/// Cache operations, including clock advances
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: Value, ttl: Option<u64> },
    Get { key: String },
    Delete { key: String },
    Advance { secs: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy(), prop::option::of(0u64..5))
            .prop_map(|(key, value, ttl)| CacheOp::Set { key, value, ttl }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
        (0u64..4).prop_map(|secs| CacheOp::Advance { secs }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Every read agrees with a model that records (value, absolute expiry)
    // and treats `now > expiry` as absent.
    #[test]
    fn prop_matches_expiry_model(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let clock = MockClock::new(0);
        let mut store = CacheStore::with_clock(Arc::new(clock.clone()));
        let mut model: HashMap<String, (Value, Option<u64>)> = HashMap::new();
        let mut now: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value, ttl } => {
                    let expires = ttl.filter(|t| *t > 0).map(|t| now + t * 1000);
                    model.insert(key.clone(), (value.clone(), expires));
                    prop_assert!(store.set(key, value, ttl));
                }
                CacheOp::Get { key } => {
                    let expired = matches!(model.get(&key), Some((_, Some(exp))) if now > *exp);
                    if expired {
                        model.remove(&key);
                    }
                    let expected = model.get(&key).map(|(value, _)| value.clone());
                    prop_assert_eq!(store.get(&key), expected);
                }
                CacheOp::Delete { key } => {
                    let expected = model.remove(&key).is_some();
                    prop_assert_eq!(store.delete(&key), expected);
                }
                CacheOp::Advance { secs } => {
                    now += secs * 1000;
                    clock.advance_secs(secs);
                }
            }
            prop_assert_eq!(store.len(), model.len());
        }
    }

    // Hits and misses add up to the number of reads.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let clock = MockClock::new(0);
        let mut store = CacheStore::with_clock(Arc::new(clock.clone()));
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value, ttl } => {
                    store.set(key, value, ttl);
                }
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Delete { key } => {
                    store.delete(&key);
                }
                CacheOp::Advance { secs } => clock.advance_secs(secs),
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert!(stats.expired <= stats.misses);
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }

    // Storing then retrieving before expiry returns the exact value.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy(), ttl in prop::option::of(1u64..100)) {
        let mut store = CacheStore::new();

        store.set(key.clone(), value.clone(), ttl);
        prop_assert_eq!(store.get(&key), Some(value));
    }

    // Delete is idempotent: the second call reports false and changes nothing.
    #[test]
    fn prop_delete_idempotent(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new();

        store.set(key.clone(), value, None);
        prop_assert!(store.delete(&key));
        prop_assert!(!store.delete(&key));
        prop_assert!(store.is_empty());
        prop_assert_eq!(store.get(&key), None);
    }
}
