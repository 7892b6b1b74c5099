use serde::{Deserialize, Serialize};

use super::defaults;

/// Prediction subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Returned when the user's rated movies carry no similarity weight.
    pub fallback_rating: f64,
    /// Weighted predictions are rounded to this many decimal places.
    pub decimal_places: u32,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            fallback_rating: defaults::DEFAULT_FALLBACK_RATING,
            decimal_places: defaults::DEFAULT_DECIMAL_PLACES,
        }
    }
}
