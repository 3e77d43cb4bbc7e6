//! Fixture helpers

use std::fs;
use std::path::Path;

use rand::{distr::Alphanumeric, Rng};
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Generates a random string of `length` ASCII letters and digits.
pub fn generate_random_string(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Reads and parses the JSON sample file at `path`.
pub fn load_samples(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading samples");
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixtureError;
    use std::io::Write;

    #[test]
    fn test_generate_random_string() {
        let first = generate_random_string(10);
        assert_eq!(first.len(), 10);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));

        let second = generate_random_string(20);
        assert_eq!(second.len(), 20);
        assert_ne!(first, second);
    }

    #[test]
    fn test_generate_empty_string() {
        assert!(generate_random_string(0).is_empty());
    }

    #[test]
    fn test_load_samples() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"users": [{{"id": "user_001"}}]}}"#).unwrap();

        let data = load_samples(file.path()).unwrap();
        assert_eq!(data["users"][0]["id"], "user_001");
    }

    #[test]
    fn test_load_samples_missing_file() {
        let result = load_samples("/definitely/not/here.json");
        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
