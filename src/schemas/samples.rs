//! Sample Set
//!
//! The bundle of sample records loaded from the fixture file, validated per kind.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Campaign, CryptoPrice, Document, Schema, User};
use crate::error::{FixtureError, Result};

/// Every record kind, in the order they are validated and seeded.
pub const RECORD_KINDS: [&str; 4] = [
    CryptoPrice::KIND,
    Document::KIND,
    Campaign::KIND,
    User::KIND,
];

/// Raw sample records grouped by kind. Records stay untyped JSON so that
/// invalid ones can be reported instead of failing the whole file.
///
/// Kinds may be omitted, but an unrecognised top-level key rejects the file
/// so a misspelled kind is never silently skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleSet {
    #[serde(default)]
    pub crypto_prices: Vec<Value>,
    #[serde(default)]
    pub documents: Vec<Value>,
    #[serde(default)]
    pub campaigns: Vec<Value>,
    #[serde(default)]
    pub users: Vec<Value>,
}

/// A sample record that failed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidRecord {
    pub kind: &'static str,
    pub index: usize,
    pub reason: String,
}

impl SampleSet {
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Records of the given kind.
    ///
    /// # Errors
    /// `InvalidArgument` for a kind outside [`RECORD_KINDS`].
    pub fn records(&self, kind: &str) -> Result<&[Value]> {
        match kind {
            CryptoPrice::KIND => Ok(self.crypto_prices.as_slice()),
            Document::KIND => Ok(self.documents.as_slice()),
            Campaign::KIND => Ok(self.campaigns.as_slice()),
            User::KIND => Ok(self.users.as_slice()),
            other => Err(unknown_kind(other)),
        }
    }

    /// Every record that fails its schema, in file order.
    pub fn invalid_records(&self) -> Vec<InvalidRecord> {
        let mut invalid = Vec::new();
        collect_invalid::<CryptoPrice>(&self.crypto_prices, &mut invalid);
        collect_invalid::<Document>(&self.documents, &mut invalid);
        collect_invalid::<Campaign>(&self.campaigns, &mut invalid);
        collect_invalid::<User>(&self.users, &mut invalid);
        invalid
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_records().is_empty()
    }

    pub fn len(&self) -> usize {
        self.crypto_prices.len() + self.documents.len() + self.campaigns.len() + self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn collect_invalid<T: Schema>(records: &[Value], out: &mut Vec<InvalidRecord>) {
    for (index, record) in records.iter().enumerate() {
        if let Err(reason) = T::parse(record) {
            out.push(InvalidRecord {
                kind: T::KIND,
                index,
                reason,
            });
        }
    }
}

fn unknown_kind(kind: &str) -> FixtureError {
    FixtureError::InvalidArgument(format!("Unknown data type: {}", kind))
}

// == Validation Entry Points ==
/// Validates one record against the schema for `kind`.
///
/// Returns `Ok(false)` when the record is rejected.
///
/// # Errors
/// `InvalidArgument` if `kind` names no known schema.
pub fn validate_record(kind: &str, record: &Value) -> Result<bool> {
    let valid = match kind {
        CryptoPrice::KIND => CryptoPrice::parse(record).is_ok(),
        Document::KIND => Document::parse(record).is_ok(),
        Campaign::KIND => Campaign::parse(record).is_ok(),
        User::KIND => User::parse(record).is_ok(),
        other => return Err(unknown_kind(other)),
    };
    Ok(valid)
}

/// True only if `data` is a well-formed sample set whose every record validates.
pub fn validate_samples(data: &Value) -> bool {
    SampleSet::from_value(data).is_ok_and(|samples| samples.is_valid())
}
