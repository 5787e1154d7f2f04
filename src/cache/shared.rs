//! Shared Cache Implementations
//!
//! `ReadCache` implementations used by the server.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheKey, CacheResult, CacheStats, CacheStore, CachedValue, ReadCache};

// == In-Memory Read Cache ==
/// Process-local read cache.
///
/// Wraps a `CacheStore` in an async RwLock so it can be shared between handlers.
#[derive(Debug, Default)]
pub struct InMemoryReadCache {
    store: RwLock<CacheStore>,
}

impl InMemoryReadCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Returns the current number of cached entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl ReadCache for InMemoryReadCache {
    async fn get(&self, key: &CacheKey) -> CacheResult<Option<CachedValue>> {
        // Write lock: lookups update hit/miss stats
        let mut store = self.store.write().await;
        Ok(store.get(key))
    }

    async fn generation(&self) -> CacheResult<u64> {
        Ok(self.store.read().await.generation())
    }

    async fn put(
        &self,
        key: CacheKey,
        value: CachedValue,
        observed_generation: u64,
    ) -> CacheResult<bool> {
        let mut store = self.store.write().await;
        let stored = store.put(key, value, observed_generation);
        if !stored {
            debug!("Discarded cache fill from generation {}", observed_generation);
        }
        Ok(stored)
    }

    async fn invalidate_all(&self) -> CacheResult<()> {
        let mut store = self.store.write().await;
        let removed = store.invalidate_all();
        debug!("Cache invalidated: removed {} entries ({})", removed, store.stats());
        Ok(())
    }
}

// == Disabled Cache ==
/// Cache that never stores anything; every lookup is a miss.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledCache;

#[async_trait]
impl ReadCache for DisabledCache {
    async fn get(&self, _key: &CacheKey) -> CacheResult<Option<CachedValue>> {
        Ok(None)
    }

    async fn generation(&self) -> CacheResult<u64> {
        Ok(0)
    }

    async fn put(
        &self,
        _key: CacheKey,
        _value: CachedValue,
        _observed_generation: u64,
    ) -> CacheResult<bool> {
        Ok(false)
    }

    async fn invalidate_all(&self) -> CacheResult<()> {
        Ok(())
    }
}
