//! Schemas Module
//!
//! Shape and constraint checks for the sample records fed into the mock
//! stores: crypto prices, OCR documents, marketing campaigns and users.
//! A record either passes or is rejected with a reason; nothing else.

mod campaign;
mod crypto;
mod document;
mod samples;
mod user;

pub use campaign::{Campaign, CampaignMetrics};
pub use crypto::CryptoPrice;
pub use document::{Document, DocumentType};
pub use samples::{validate_record, validate_samples, InvalidRecord, SampleSet, RECORD_KINDS};
pub use user::{is_valid_email, User, UserRole};

use serde::de::DeserializeOwned;
use serde_json::Value;

// == Schema Trait ==
/// A record type with constraints beyond what deserialization enforces.
pub trait Schema: DeserializeOwned {
    /// Collection name the record kind is stored under
    const KIND: &'static str;

    /// Returns an error message if a constraint fails, None if valid.
    fn validate(&self) -> Option<String>;

    /// Deserializes and validates `value` in one go.
    fn parse(value: &Value) -> Result<Self, String> {
        let record: Self = serde_json::from_value(value.clone()).map_err(|e| e.to_string())?;
        match record.validate() {
            Some(reason) => Err(reason),
            None => Ok(record),
        }
    }
}

/// Checks that a string's character count lies within `min..=max`.
pub(crate) fn check_length(field: &str, value: &str, min: usize, max: usize) -> Option<String> {
    let len = value.chars().count();
    if len < min || len > max {
        Some(format!(
            "{} must be between {} and {} characters, got {}",
            field, min, max, len
        ))
    } else {
        None
    }
}
