//! Cache Module
//!
//! In-memory key-value cache test double with per-key TTL.
//!
//! Expiry is lazy: an expired entry stays in memory until a read (`get` or
//! `exists`) observes it, at which point it is purged. There is no sweep.
//! Tests may rely on that timing, so keep it that way.

mod clock;
mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, MockClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
