//! Cache Module
//!
//! Read cache in front of the account store. Writes clear the whole cache;
//! there is no TTL or eviction policy.

mod entry;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use async_trait::async_trait;
use thiserror::Error;

// Re-export public types
pub use entry::{CacheKey, CachedValue};
pub use shared::{DisabledCache, InMemoryReadCache};
pub use stats::{CacheStats, Lookup};
pub use store::CacheStore;

// == Cache Error ==
/// Failures reported by a `ReadCache`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The cache backend could not be reached
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

/// Convenience Result type for cache operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;

// == Read Cache ==
/// Key-value read cache with an invalidate-all operation.
///
/// Callers read `generation()` before loading from the store and pass it to
/// `put`; a put whose generation is older than the latest invalidation is
/// discarded.
#[async_trait]
pub trait ReadCache: Send + Sync {
    /// Returns the cached value for `key`, if any
    async fn get(&self, key: &CacheKey) -> CacheResult<Option<CachedValue>>;

    /// Returns the current invalidation generation
    async fn generation(&self) -> CacheResult<u64>;

    /// Caches `value` under `key`. Returns whether it was stored.
    async fn put(
        &self,
        key: CacheKey,
        value: CachedValue,
        observed_generation: u64,
    ) -> CacheResult<bool>;

    /// Clears every entry
    async fn invalidate_all(&self) -> CacheResult<()>;
}
