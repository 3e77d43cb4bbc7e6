//! Cache Store Module
//!
//! Mock key-value cache combining HashMap storage with lazily evaluated TTL expiration.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

// == Cache Store ==
/// In-memory cache with optional per-key expiry.
///
/// Not internally synchronized: callers sharing one instance across threads
/// must serialize access themselves.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage, each entry carrying its own expiry
    entries: HashMap<String, CacheEntry>,
    /// Read statistics
    stats: CacheStats,
    /// Time source for stamping and checking expiry
    clock: Arc<dyn Clock>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty cache driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty cache driven by the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            clock,
        }
    }

    // == Set ==
    /// Stores a value unconditionally, replacing any previous value and expiry.
    ///
    /// With `ttl_seconds`, the entry expires at now + TTL. A TTL of zero
    /// behaves like no TTL. Always returns `true`.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
        ttl_seconds: Option<u64>,
    ) -> bool {
        let key = key.into();
        let entry = CacheEntry::new(value.into(), ttl_seconds, self.clock.now_ms());
        debug!(key = %key, expires_at = ?entry.expires_at, "cache set");

        self.entries.insert(key, entry);
        true
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// An entry found expired is purged before returning `None`, so a later
    /// read sees the key as absent rather than merely hidden.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        if self.purge_if_expired(key) {
            self.stats.record_miss();
            return None;
        }

        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Exists ==
    /// Returns whether `key` holds a live value, purging it if expired.
    ///
    /// Does not count towards hits or misses.
    pub fn exists(&mut self, key: &str) -> bool {
        !self.purge_if_expired(key) && self.entries.contains_key(key)
    }

    // == Delete ==
    /// Removes a key and its expiry.
    ///
    /// Returns `true` if the key was present, expired or not.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            debug!(key = %key, "cache delete");
        }
        removed
    }

    // == Time To Live ==
    /// Returns the remaining TTL in milliseconds without purging anything.
    ///
    /// `None` if the key is absent or has no expiry.
    pub fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .and_then(|entry| entry.ttl_remaining_ms(now))
    }

    // == Stats ==
    /// Returns current cache statistics, with `total_entries` counted now.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.entries.len(),
            ..self.stats.clone()
        }
    }

    // == Length ==
    /// Returns the number of entries held, including expired ones not yet read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes `key` if it has expired. Returns whether it was purged.
    fn purge_if_expired(&mut self, key: &str) -> bool {
        let now = self.clock.now_ms();
        let expired = self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired_at(now));

        if expired {
            self.entries.remove(key);
            self.stats.record_expired();
            debug!(key = %key, "cache entry expired on read");
        }
        expired
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}
