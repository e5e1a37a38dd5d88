//! Fixed weight and label tables for the risk formula.

/// The eleven weighted factors, in summation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    Rainfall,
    Temperature,
    Humidity,
    CropYield,
    FoodPrice,
    FoodStock,
    GdpPerCapita,
    Unemployment,
    Inflation,
    Ndvi,
    SoilMoisture,
}

impl Factor {
    /// All factors in the order their contributions are summed.
    pub const ALL: [Factor; 11] = [
        Factor::Rainfall,
        Factor::Temperature,
        Factor::Humidity,
        Factor::CropYield,
        Factor::FoodPrice,
        Factor::FoodStock,
        Factor::GdpPerCapita,
        Factor::Unemployment,
        Factor::Inflation,
        Factor::Ndvi,
        Factor::SoilMoisture,
    ];

    /// Fixed weight of this factor. The eleven weights sum to 1.00.
    pub const fn weight(self) -> f64 {
        match self {
            Factor::Rainfall => 0.12,
            Factor::Temperature => 0.08,
            Factor::Humidity => 0.05,
            Factor::CropYield => 0.15,
            Factor::FoodPrice => 0.12,
            Factor::FoodStock => 0.13,
            Factor::GdpPerCapita => 0.08,
            Factor::Unemployment => 0.09,
            Factor::Inflation => 0.08,
            Factor::Ndvi => 0.05,
            Factor::SoilMoisture => 0.05,
        }
    }
}

pub const LABEL_LOW_RAINFALL: &str = "Low rainfall";
pub const LABEL_HIGH_TEMPERATURE: &str = "High temperature";
pub const LABEL_LOW_CROP_YIELD: &str = "Low crop yield";
pub const LABEL_HIGH_FOOD_PRICES: &str = "High food prices";
pub const LABEL_LOW_FOOD_STOCKS: &str = "Low food stocks";
pub const LABEL_HIGH_UNEMPLOYMENT: &str = "High unemployment";
pub const LABEL_HIGH_INFLATION: &str = "High inflation";

/// The subset of factors surfaced as contributing factors, paired with
/// their display labels. Table order is the tie-break order for the
/// stable sort. Humidity, GDP, NDVI and soil moisture are deliberately
/// not surfaced as headline causes.
pub const EXPLAINED: [(Factor, &str); 7] = [
    (Factor::Rainfall, LABEL_LOW_RAINFALL),
    (Factor::Temperature, LABEL_HIGH_TEMPERATURE),
    (Factor::CropYield, LABEL_LOW_CROP_YIELD),
    (Factor::FoodPrice, LABEL_HIGH_FOOD_PRICES),
    (Factor::FoodStock, LABEL_LOW_FOOD_STOCKS),
    (Factor::Unemployment, LABEL_HIGH_UNEMPLOYMENT),
    (Factor::Inflation, LABEL_HIGH_INFLATION),
];
