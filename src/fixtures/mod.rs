//! Fixture Support Module
//!
//! Connection settings for the test databases and cache, random strings, and
//! loading of the sample record file.

mod db_config;
mod helpers;

pub use db_config::{
    load_db_config, DbConfig, RedisConfig, RetryConfig, TestDataConfig, TestDbConfig,
    TimeoutConfig,
};
pub use helpers::{generate_random_string, load_samples};
