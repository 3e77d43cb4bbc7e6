//! OCR document records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Schema;

/// Kinds of scanned documents the OCR pipeline recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Invoice,
    Receipt,
    Contract,
    Report,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "invoice",
            DocumentType::Receipt => "receipt",
            DocumentType::Contract => "contract",
            DocumentType::Report => "report",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Extracted text
    pub content: String,
    /// Free-form extraction metadata (dates, amounts, currency, ...)
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Schema for Document {
    const KIND: &'static str = "documents";

    fn validate(&self) -> Option<String> {
        if self.id.trim().is_empty() {
            return Some("id cannot be empty".to_string());
        }
        if self.content.trim().is_empty() {
            return Some("content cannot be empty".to_string());
        }
        None
    }
}
