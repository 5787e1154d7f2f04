//! Read cache counters, reported in the invalidation log line.

use std::fmt;

/// Outcome of a cache lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Hit,
    Miss,
}

/// Lookup and invalidation counters since startup.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub invalidations: u64,
    /// Entries dropped across all invalidations
    pub entries_cleared: u64,
}

impl CacheStats {
    pub fn record_lookup(&mut self, lookup: Lookup) {
        match lookup {
            Lookup::Hit => self.hits += 1,
            Lookup::Miss => self.misses += 1,
        }
    }

    pub fn record_invalidation(&mut self, cleared: usize) {
        self.invalidations += 1;
        self.entries_cleared += cleared as u64;
    }

    /// Fraction of lookups served from the cache; 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={} misses={} hit_rate={:.2} invalidations={} entries_cleared={}",
            self.hits,
            self.misses,
            self.hit_rate(),
            self.invalidations,
            self.entries_cleared
        )
    }
}
