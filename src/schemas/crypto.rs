//! Crypto price records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{check_length, Schema};

/// One OHLC price observation for a trading pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoPrice {
    /// Trading pair, e.g. `BTC/USD`
    pub symbol: String,
    pub price: f64,
    pub timestamp: DateTime<Utc>,
    pub volume: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub close: f64,
}

impl Schema for CryptoPrice {
    const KIND: &'static str = "crypto_prices";

    fn validate(&self) -> Option<String> {
        if let Some(reason) = check_length("symbol", &self.symbol, 2, 10) {
            return Some(reason);
        }
        let positive = [
            ("price", self.price),
            ("high", self.high),
            ("low", self.low),
            ("open", self.open),
            ("close", self.close),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Some(format!("{} must be greater than 0, got {}", field, value));
            }
        }
        if self.volume.is_nan() || self.volume < 0.0 {
            return Some(format!("volume must not be negative, got {}", self.volume));
        }
        if self.low > self.high {
            return Some(format!(
                "low ({}) must not exceed high ({})",
                self.low, self.high
            ));
        }
        None
    }
}
