//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check hit/miss accounting and invalidation behaviour.

use proptest::prelude::*;

use crate::cache::{CacheKey, CacheStore, CachedValue};
use crate::models::Account;

// == Strategies ==
/// Generates keys over a small number space so operations collide often
fn key_strategy() -> impl Strategy<Value = CacheKey> {
    prop_oneof![
        Just(CacheKey::AllAccounts),
        (0u32..20).prop_map(|n| CacheKey::account_number(format!("1{:09}", n))),
    ]
}

fn value_for(key: &CacheKey) -> CachedValue {
    match key {
        CacheKey::AccountNumber(number) => CachedValue::Account(Account {
            id: format!("id-{}", number),
            account_number: number.clone(),
            customer_name: "Prop".to_string(),
            account_nickname: None,
        }),
        CacheKey::AllAccounts => CachedValue::Accounts(Vec::new()),
    }
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: CacheKey },
    StalePut { key: CacheKey },
    Get { key: CacheKey },
    InvalidateAll,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        key_strategy().prop_map(|key| CacheOp::Put { key }),
        key_strategy().prop_map(|key| CacheOp::StalePut { key }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        Just(CacheOp::InvalidateAll),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations, hits and misses match the lookups made
    // and cleared entries match what each invalidation removed.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;
        let mut expected_invalidations: u64 = 0;
        let mut expected_cleared: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Put { key } => {
                    let generation = store.generation();
                    let value = value_for(&key);
                    prop_assert!(store.put(key, value, generation));
                }
                CacheOp::StalePut { key } => {
                    let generation = store.generation();
                    let value = value_for(&key);
                    let _ = store.put(key, value, generation.wrapping_sub(1));
                }
                CacheOp::Get { key } => {
                    match store.get(&key) {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                }
                CacheOp::InvalidateAll => {
                    let before = store.len() as u64;
                    prop_assert_eq!(store.invalidate_all() as u64, before);
                    expected_invalidations += 1;
                    expected_cleared += before;
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.invalidations, expected_invalidations, "Invalidations mismatch");
        prop_assert_eq!(stats.entries_cleared, expected_cleared, "Cleared entries mismatch");
    }

    // After invalidate-all, no key that was cached before is served.
    #[test]
    fn prop_invalidate_all_leaves_no_hits(keys in prop::collection::vec(key_strategy(), 1..30)) {
        let mut store = CacheStore::new();

        for key in &keys {
            store.put(key.clone(), value_for(key), store.generation());
        }
        store.invalidate_all();

        for key in &keys {
            prop_assert!(store.get(key).is_none(), "Stale hit after invalidation");
        }
        prop_assert!(store.is_empty());
    }

    // A fill observed before any number of invalidations is never stored.
    #[test]
    fn prop_fill_from_older_generation_is_discarded(
        key in key_strategy(),
        invalidations in 1usize..5
    ) {
        let mut store = CacheStore::new();
        let observed = store.generation();

        for _ in 0..invalidations {
            store.invalidate_all();
        }

        prop_assert!(!store.put(key.clone(), value_for(&key), observed));
        prop_assert!(store.get(&key).is_none());
    }
}
