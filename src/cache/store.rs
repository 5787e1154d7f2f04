//! Cache Store Module
//!
//! Synchronous cache core: a key map with a generation counter that advances
//! on every invalidate-all. There is no TTL and no capacity bound.

use std::collections::HashMap;

use crate::cache::{CacheKey, CacheStats, CachedValue, Lookup};

// == Cache Store ==
/// Read cache storage with invalidate-all semantics.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Cached read results
    entries: HashMap<CacheKey, CachedValue>,
    /// Advances on every invalidate-all
    generation: u64,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore at generation 0.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Looks up a cached value, recording a hit or a miss.
    pub fn get(&mut self, key: &CacheKey) -> Option<CachedValue> {
        let found = self.entries.get(key).cloned();
        self.stats.record_lookup(if found.is_some() {
            Lookup::Hit
        } else {
            Lookup::Miss
        });
        found
    }

    // == Generation ==
    /// Returns the current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // == Put ==
    /// Stores a value read while the cache was at `observed_generation`.
    ///
    /// Returns false and stores nothing if an invalidation happened since.
    pub fn put(&mut self, key: CacheKey, value: CachedValue, observed_generation: u64) -> bool {
        if observed_generation != self.generation {
            return false;
        }

        self.entries.insert(key, value);
        true
    }

    // == Invalidate All ==
    /// Drops every entry and advances the generation.
    ///
    /// Returns the number of entries removed.
    pub fn invalidate_all(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.generation += 1;
        self.stats.record_invalidation(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Account;

    fn account(number: &str) -> Account {
        Account {
            id: format!("id-{}", number),
            account_number: number.to_string(),
            customer_name: "Alice".to_string(),
            account_nickname: None,
        }
    }

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert!(store.is_empty());
        assert_eq!(store.generation(), 0);
    }

    #[test]
    fn test_put_and_get() {
        let mut store = CacheStore::new();
        let key = CacheKey::account_number("1000000001");

        assert!(store.put(key.clone(), CachedValue::Account(account("1000000001")), 0));

        assert_eq!(
            store.get(&key),
            Some(CachedValue::Account(account("1000000001")))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_records_miss() {
        let mut store = CacheStore::new();

        assert_eq!(store.get(&CacheKey::AllAccounts), None);

        let stats = store.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 0);
    }

    #[test]
    fn test_invalidate_all_clears_every_key() {
        let mut store = CacheStore::new();
        store.put(CacheKey::account_number("1000000001"), CachedValue::Account(account("1000000001")), 0);
        store.put(CacheKey::AllAccounts, CachedValue::Accounts(vec![account("1000000001")]), 0);

        let removed = store.invalidate_all();

        assert_eq!(removed, 2);
        assert!(store.is_empty());
        assert_eq!(store.generation(), 1);
        assert_eq!(store.get(&CacheKey::AllAccounts), None);
    }

    #[test]
    fn test_put_with_stale_generation_is_dropped() {
        let mut store = CacheStore::new();
        let observed = store.generation();

        // A write lands between the read and the put
        store.invalidate_all();

        let stored = store.put(CacheKey::AllAccounts, CachedValue::Accounts(Vec::new()), observed);

        assert!(!stored);
        assert!(store.is_empty());
    }

    #[test]
    fn test_stats() {
        let mut store = CacheStore::new();
        store.put(CacheKey::AllAccounts, CachedValue::Accounts(Vec::new()), 0);
        store.put(CacheKey::account_number("1000000002"), CachedValue::Account(account("1000000002")), 0);
        store.get(&CacheKey::AllAccounts); // hit
        store.get(&CacheKey::account_number("1000000001")); // miss
        store.invalidate_all();

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.invalidations, 1);
        assert_eq!(stats.entries_cleared, 2);
        assert_eq!(stats.hit_rate(), 0.5);
    }
}
