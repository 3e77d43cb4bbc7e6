//! Document Store Module
//!
//! In-memory multi-collection record store standing in for a document database
//! in tests. Records are JSON objects; each gets a random `_id` on insert.

pub mod query;
mod store;


pub use query::{matches, Record};
pub use store::DocumentStore;

// == Public Constants ==
/// Reserved field holding a record's identifier
pub const ID_FIELD: &str = "_id";

/// The only supported update operator
pub const SET_OPERATOR: &str = "$set";
