use super::engine::PredictError;
use crate::indicators::IndicatorRecord;

/// Check an indicator record against its declared field constraints.
/// Returns all violations at once (not just the first).
pub fn validate_record(record: &IndicatorRecord) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if record.region.trim().is_empty() {
        errors.push("region: must not be empty".to_string());
    }

    let fields = [
        ("rainfall_mm", record.rainfall_mm),
        ("temperature_c", record.temperature_c),
        ("humidity_percent", record.humidity_percent),
        ("crop_yield_tons", record.crop_yield_tons),
        ("food_price_index", record.food_price_index),
        ("food_stock_tons", record.food_stock_tons),
        ("gdp_per_capita", record.gdp_per_capita),
        ("unemployment_rate", record.unemployment_rate),
        ("inflation_rate", record.inflation_rate),
        ("ndvi_index", record.ndvi_index),
        ("soil_moisture", record.soil_moisture),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            errors.push(format!("{}: must be a finite number", name));
        }
    }

    check_min(&mut errors, "rainfall_mm", record.rainfall_mm, 0.0);
    check_range(&mut errors, "humidity_percent", record.humidity_percent, 0.0, 100.0);
    check_min(&mut errors, "crop_yield_tons", record.crop_yield_tons, 0.0);
    check_min(&mut errors, "food_price_index", record.food_price_index, 0.0);
    check_min(&mut errors, "food_stock_tons", record.food_stock_tons, 0.0);
    check_min(&mut errors, "gdp_per_capita", record.gdp_per_capita, 0.0);
    check_range(&mut errors, "unemployment_rate", record.unemployment_rate, 0.0, 100.0);
    check_range(&mut errors, "ndvi_index", record.ndvi_index, -1.0, 1.0);
    check_range(&mut errors, "soil_moisture", record.soil_moisture, 0.0, 100.0);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Like `validate_record`, but folds the violations into the tagged
/// error type so callers can branch on the variant.
pub fn ensure_valid(record: &IndicatorRecord) -> Result<(), PredictError> {
    validate_record(record).map_err(|errors| PredictError::Validation(errors.join("; ")))
}

fn check_min(errors: &mut Vec<String>, field: &str, value: f64, min: f64) {
    // NaN is reported by the finite check, not here.
    if value < min {
        errors.push(format!("{}: must be at least {} (got {})", field, min, value));
    }
}

fn check_range(errors: &mut Vec<String>, field: &str, value: f64, min: f64, max: f64) {
    if value < min || value > max {
        errors.push(format!(
            "{}: must be between {} and {} (got {})",
            field, min, max, value
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> IndicatorRecord {
        IndicatorRecord {
            region: "Sahelia".to_string(),
            rainfall_mm: 420.0,
            temperature_c: 31.0,
            humidity_percent: 40.0,
            crop_yield_tons: 350.0,
            food_price_index: 130.0,
            food_stock_tons: 200.0,
            gdp_per_capita: 1800.0,
            unemployment_rate: 22.0,
            inflation_rate: 14.0,
            ndvi_index: 0.3,
            soil_moisture: 35.0,
        }
    }

    #[test]
    fn test_valid_record() {
        assert!(validate_record(&valid_record()).is_ok());
    }

    #[test]
    fn test_empty_region() {
        let mut record = valid_record();
        record.region = "  ".to_string();
        let errors = validate_record(&record).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("region"));
    }

    #[test]
    fn test_humidity_out_of_range() {
        let mut record = valid_record();
        record.humidity_percent = 140.0;
        let errors = validate_record(&record).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("humidity_percent"));
        assert!(errors[0].contains("between 0 and 100"));
    }

    #[test]
    fn test_ndvi_out_of_range() {
        let mut record = valid_record();
        record.ndvi_index = 1.5;
        let errors = validate_record(&record).unwrap_err();
        assert!(errors[0].contains("ndvi_index"));
    }

    #[test]
    fn test_negative_gdp() {
        let mut record = valid_record();
        record.gdp_per_capita = -1.0;
        let errors = validate_record(&record).unwrap_err();
        assert!(errors[0].contains("gdp_per_capita"));
        assert!(errors[0].contains("at least 0"));
    }

    #[test]
    fn test_rainfall_above_expected_range_is_accepted() {
        // Only non-negativity is enforced; 0-1000 is a domain
        // expectation, not a constraint.
        let mut record = valid_record();
        record.rainfall_mm = 2000.0;
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn test_nan_rejected_as_non_finite() {
        let mut record = valid_record();
        record.temperature_c = f64::NAN;
        let errors = validate_record(&record).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("temperature_c"));
        assert!(errors[0].contains("finite"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut record = valid_record();
        record.region = String::new();
        record.soil_moisture = 101.0;
        record.unemployment_rate = -5.0;
        let errors = validate_record(&record).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_ensure_valid_tags_validation_error() {
        let mut record = valid_record();
        record.humidity_percent = -1.0;
        let err = ensure_valid(&record).unwrap_err();
        assert!(matches!(err, PredictError::Validation(_)));
        assert!(err.to_string().contains("humidity_percent"));
    }
}
