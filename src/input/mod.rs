use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::indicators::IndicatorRecord;

/// Parse indicator records from JSON or YAML text. Accepts either a
/// single record or a list of records.
pub fn parse_records(content: &str, yaml: bool) -> Result<Vec<IndicatorRecord>> {
    if yaml {
        if let Ok(records) = serde_saphyr::from_str::<Vec<IndicatorRecord>>(content) {
            return Ok(records);
        }
        let record: IndicatorRecord =
            serde_saphyr::from_str(content).context("Invalid YAML indicator record")?;
        Ok(vec![record])
    } else {
        if let Ok(records) = serde_json::from_str::<Vec<IndicatorRecord>>(content) {
            return Ok(records);
        }
        let record: IndicatorRecord =
            serde_json::from_str(content).context("Invalid JSON indicator record")?;
        Ok(vec![record])
    }
}

fn is_yaml_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Load indicator records from a file, or from stdin when `path` is
/// None. File format is chosen by extension (`.yaml`/`.yml` is YAML,
/// anything else JSON); stdin is always JSON.
pub fn load_records(path: Option<PathBuf>) -> Result<Vec<IndicatorRecord>> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read indicator file at {}", path.display()))?;
            parse_records(&content, is_yaml_path(&path))
                .with_context(|| format!("Failed to parse indicator file at {}", path.display()))
        }
        None => {
            let mut content = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut content)
                .context("Failed to read indicator records from stdin")?;
            parse_records(&content, false)
        }
    }
}

/// A filled-in record for the `template` subcommand.
pub fn sample_record() -> IndicatorRecord {
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
