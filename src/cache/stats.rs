//! Cache Statistics Module
//!
//! Counts reads against the mock cache so tests can assert on access patterns.

// == Cache Stats ==
/// Read counters for the mock cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    /// Reads that returned a value
    pub hits: u64,
    /// Reads that returned nothing (never set, deleted, or expired)
    pub misses: u64,
    /// Entries purged because a read found them expired
    pub expired: u64,
    /// Entries currently held, including expired ones not yet read.
    /// Filled in by `CacheStore::stats` at snapshot time.
    pub total_entries: usize,
}

impl CacheStats {
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Counts a read that returned a live value.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Counts a read that returned nothing.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Expired ==
    /// Counts a lazy purge. The read itself is recorded separately as a miss.
    pub fn record_expired(&mut self) {
        self.expired += 1;
    }
}
