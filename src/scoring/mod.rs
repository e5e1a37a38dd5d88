pub mod engine;
pub mod validation;
pub mod weights;

pub use engine::{contributing_factors, predict, recommended_actions, risk_score, PredictError};
pub use validation::{ensure_valid, validate_record};
pub use weights::Factor;
