use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One region's environmental and economic measurements.
///
/// All fields are required. Range constraints are enforced by
/// `scoring::validation` before a record reaches the scorer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IndicatorRecord {
    /// Geographic region the measurements describe
    pub region: String,
    /// Average rainfall in millimeters (expected 0-1000)
    pub rainfall_mm: f64,
    /// Average temperature in Celsius
    pub temperature_c: f64,
    /// Humidity percentage (0-100)
    pub humidity_percent: f64,
    /// Crop yield in tons
    pub crop_yield_tons: f64,
    /// Food price index
    pub food_price_index: f64,
    /// Food stock in tons
    pub food_stock_tons: f64,
    /// GDP per capita
    pub gdp_per_capita: f64,
    /// Unemployment rate percentage (0-100)
    pub unemployment_rate: f64,
    /// Inflation rate percentage
    pub inflation_rate: f64,
    /// Normalized Difference Vegetation Index (-1 to 1)
    pub ndvi_index: f64,
    /// Soil moisture percentage (0-100)
    pub soil_moisture: f64,
}

// Level thresholds are inclusive upper bounds.
const LOW_MAX: f64 = 30.0;
const MEDIUM_MAX: f64 = 60.0;

/// Categorical risk bucket derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket a score. Boundary values belong to the lower bucket:
    /// exactly 30 is LOW, exactly 60 is MEDIUM.
    pub fn from_score(score: f64) -> Self {
        if score <= LOW_MAX {
            RiskLevel::Low
        } else if score <= MEDIUM_MAX {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring one indicator record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub region: String,
    /// Aggregate risk on a 0-100 scale
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    /// Top factors driving the score, highest contribution first
    pub contributing_factors: Vec<String>,
    /// Response actions, in fixed rule order
    pub recommended_actions: Vec<String>,
    /// When the assessment was computed
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_low_boundary_inclusive() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30.1), RiskLevel::Medium);
    }

    #[test]
    fn test_level_medium_boundary_inclusive() {
        assert_eq!(RiskLevel::from_score(60.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(60.1), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100.0), RiskLevel::High);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(RiskLevel::Low.to_string(), "LOW");
        assert_eq!(RiskLevel::Medium.to_string(), "MEDIUM");
        assert_eq!(RiskLevel::High.to_string(), "HIGH");
    }

    #[test]
    fn test_level_serializes_uppercase() {
        let json = serde_json::to_string(&RiskLevel::High).unwrap();
        assert_eq!(json, "\"HIGH\"");
    }

    #[test]
    fn test_indicator_record_rejects_unknown_fields() {
        let json = r#"{
            "region": "Testland",
            "rainfall_mm": 500,
            "temperature_c": 25,
            "humidity_percent": 50,
            "crop_yield_tons": 500,
            "food_price_index": 100,
            "food_stock_tons": 500,
            "gdp_per_capita": 5000,
            "unemployment_rate": 10,
            "inflation_rate": 5,
            "ndvi_index": 0.5,
            "soil_moisture": 50,
            "extra_field": 1
        }"#;
        let result: Result<IndicatorRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_indicator_record_requires_all_fields() {
        let json = r#"{ "region": "Testland", "rainfall_mm": 500 }"#;
        let result: Result<IndicatorRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
