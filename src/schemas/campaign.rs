//! Marketing campaign records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{check_length, Schema};

/// Performance counters for a campaign over its period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignMetrics {
    pub impressions: i64,
    pub clicks: i64,
    pub conversions: i64,
    pub revenue: f64,
    /// Return on investment; may be negative
    pub roi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub metrics: CampaignMetrics,
    /// Reporting month as `YYYY-MM`
    pub period: String,
}

impl Schema for Campaign {
    const KIND: &'static str = "campaigns";

    fn validate(&self) -> Option<String> {
        if self.id.trim().is_empty() {
            return Some("id cannot be empty".to_string());
        }
        if let Some(reason) = check_length("name", &self.name, 3, 100) {
            return Some(reason);
        }

        let m = &self.metrics;
        for (field, value) in [
            ("impressions", m.impressions),
            ("clicks", m.clicks),
            ("conversions", m.conversions),
        ] {
            if value < 0 {
                return Some(format!("metrics.{} must not be negative, got {}", field, value));
            }
        }
        if m.revenue.is_nan() || m.revenue < 0.0 {
            return Some(format!("metrics.revenue must not be negative, got {}", m.revenue));
        }
        if !m.roi.is_finite() {
            return Some("metrics.roi must be a finite number".to_string());
        }

        if !is_valid_period(&self.period) {
            return Some(format!("period must be YYYY-MM, got '{}'", self.period));
        }
        None
    }
}

fn is_valid_period(period: &str) -> bool {
    period.len() == 7
        && NaiveDate::parse_from_str(&format!("{}-01", period), "%Y-%m-%d").is_ok()
}
