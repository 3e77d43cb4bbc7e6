//! Configuration Module
//!
//! Handles loading runtime settings for the fixture CLI from environment variables.

use std::env;
use std::path::PathBuf;

/// Default location of the database/cache connection config.
pub const DEFAULT_DB_CONFIG_PATH: &str = "testdata/test_db_config.json";

/// Default location of the sample fixture records.
pub const DEFAULT_SAMPLES_PATH: &str = "testdata/test_samples.json";

/// Default length of generated record identifiers.
pub const DEFAULT_ID_LENGTH: usize = 10;

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON database/cache connection config
    pub db_config_path: PathBuf,
    /// Path to the JSON sample records
    pub samples_path: PathBuf,
    /// Length of identifiers generated by the document store
    pub id_length: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `FIXTURE_DB_CONFIG` - Connection config path (default: testdata/test_db_config.json)
    /// - `FIXTURE_SAMPLES` - Sample records path (default: testdata/test_samples.json)
    /// - `FIXTURE_ID_LENGTH` - Generated identifier length (default: 10)
    pub fn from_env() -> Self {
        Self {
            db_config_path: env::var("FIXTURE_DB_CONFIG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_CONFIG_PATH)),
            samples_path: env::var("FIXTURE_SAMPLES")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SAMPLES_PATH)),
            id_length: env::var("FIXTURE_ID_LENGTH")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|len| *len > 0)
                .unwrap_or(DEFAULT_ID_LENGTH),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_config_path: PathBuf::from(DEFAULT_DB_CONFIG_PATH),
            samples_path: PathBuf::from(DEFAULT_SAMPLES_PATH),
            id_length: DEFAULT_ID_LENGTH,
        }
    }
}
