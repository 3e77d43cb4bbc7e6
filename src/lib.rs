//! Fixture Kit - in-memory test doubles and fixture validation
//!
//! Provides a mock document store, a mock TTL cache, schema checks for the
//! sample records they are seeded with, and the connection config helpers
//! the test suites share.

pub mod admin;
pub mod cache;
pub mod config;
pub mod docstore;
pub mod error;
pub mod fixtures;
pub mod schemas;

pub use admin::{bootstrap_admin, AdminOutcome, AdminRequest};
pub use cache::{CacheStore, MockClock};
pub use config::Config;
pub use docstore::{DocumentStore, Record};
pub use error::{FixtureError, Result};
