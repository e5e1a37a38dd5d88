use chrono::Utc;
use thiserror::Error;

use super::weights::{
    Factor, EXPLAINED, LABEL_HIGH_FOOD_PRICES, LABEL_HIGH_INFLATION, LABEL_HIGH_TEMPERATURE,
    LABEL_HIGH_UNEMPLOYMENT, LABEL_LOW_CROP_YIELD, LABEL_LOW_FOOD_STOCKS, LABEL_LOW_RAINFALL,
};
use crate::indicators::{Assessment, IndicatorRecord, RiskLevel};
use crate::observe::AssessmentLog;

#[derive(Debug, Error)]
pub enum PredictError {
    /// Input failed the declared field constraints. Produced by the
    /// validation layer; never reaches the scorer itself.
    #[error("invalid indicator record: {0}")]
    Validation(String),
    /// Scoring produced a non-finite result, which means an unexpected
    /// value slipped past validation.
    #[error("risk computation failed for region '{region}': {reason}")]
    Computation { region: String, reason: String },
}

/// Linear rescale of `value` from `[min, max]` onto a 0-100 scale.
/// Deliberately unclamped: out-of-range inputs extrapolate past the
/// scale instead of saturating. The score contract depends on that.
fn normalize(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min) * 100.0
}

/// Weighted contribution of one factor to the raw risk sum.
fn contribution(factor: Factor, data: &IndicatorRecord) -> f64 {
    let w = factor.weight();
    match factor {
        Factor::Rainfall => w * (1.0 - normalize(data.rainfall_mm, 0.0, 1000.0)),
        Factor::Temperature => w * normalize(data.temperature_c, -10.0, 50.0),
        Factor::Humidity => w * (1.0 - data.humidity_percent / 100.0),
        Factor::CropYield => w * (1.0 - normalize(data.crop_yield_tons, 0.0, 1000.0)),
        Factor::FoodPrice => w * normalize(data.food_price_index, 0.0, 200.0),
        Factor::FoodStock => w * (1.0 - normalize(data.food_stock_tons, 0.0, 1000.0)),
        Factor::GdpPerCapita => w * (1.0 - normalize(data.gdp_per_capita, 0.0, 100_000.0)),
        Factor::Unemployment => w * (data.unemployment_rate / 100.0),
        Factor::Inflation => w * normalize(data.inflation_rate, 0.0, 50.0),
        Factor::Ndvi => w * (1.0 - (data.ndvi_index + 1.0) / 2.0),
        Factor::SoilMoisture => w * (1.0 - data.soil_moisture / 100.0),
    }
}

/// Aggregate risk score on a 0-100 scale.
///
/// Individual contributions are never clamped; only the final sum is.
pub fn risk_score(data: &IndicatorRecord) -> f64 {
    let raw: f64 = Factor::ALL.iter().map(|&f| contribution(f, data)).sum();
    (raw * 100.0).clamp(0.0, 100.0)
}

/// Top 3 factor labels by contribution, highest first. Only the seven
/// explained factors compete; ties keep table order (stable sort).
pub fn contributing_factors(data: &IndicatorRecord) -> Vec<String> {
    let mut ranked: Vec<(&str, f64)> = EXPLAINED
        .iter()
        .map(|&(factor, label)| (label, contribution(factor, data)))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
        .iter()
        .take(3)
        .map(|(label, _)| (*label).to_string())
        .collect()
}

/// Response actions derived from the contributing factors and the level.
/// Rules are independent and evaluated in fixed order; the list is
/// truncated to 5 entries.
pub fn recommended_actions(level: RiskLevel, factors: &[String]) -> Vec<String> {
    let has = |label: &str| factors.iter().any(|f| f == label);
    let mut actions: Vec<String> = Vec::new();

    if has(LABEL_LOW_RAINFALL) || has(LABEL_HIGH_TEMPERATURE) {
        actions.push(
            "Implement drought-resistant farming techniques and irrigation systems".to_string(),
        );
    }
    if has(LABEL_LOW_CROP_YIELD) {
        actions.push("Distribute improved seeds and agricultural inputs to farmers".to_string());
    }
    if has(LABEL_HIGH_FOOD_PRICES) || has(LABEL_LOW_FOOD_STOCKS) {
        actions
            .push("Establish emergency food reserves and price stabilization measures".to_string());
    }
    if has(LABEL_HIGH_UNEMPLOYMENT) || has(LABEL_HIGH_INFLATION) {
        actions.push(
            "Implement emergency employment programs and economic stabilization measures"
                .to_string(),
        );
    }
    if level == RiskLevel::High {
        actions.push(
            "Activate emergency response protocols and seek international assistance".to_string(),
        );
    }

    actions.truncate(5);
    actions
}

/// Score one indicator record: score, level, factors, actions, in that
/// order, stamped with the current time. Every invocation is recorded
/// through `log`, success or failure.
pub fn predict(
    data: &IndicatorRecord,
    log: &dyn AssessmentLog,
) -> Result<Assessment, PredictError> {
    let score = risk_score(data);
    if !score.is_finite() {
        let err = PredictError::Computation {
            region: data.region.clone(),
            reason: "score is not a finite number".to_string(),
        };
        log.record_failure(
            &err.to_string(),
            &[("region", &data.region), ("kind", "computation")],
        );
        return Err(err);
    }

    let level = RiskLevel::from_score(score);
    let factors = contributing_factors(data);
    let actions = recommended_actions(level, &factors);
    log.record_success(&data.region, score, level);

    Ok(Assessment {
        region: data.region.clone(),
        risk_score: score,
        risk_level: level,
        contributing_factors: factors,
        recommended_actions: actions,
        timestamp: Utc::now(),
    })
}
