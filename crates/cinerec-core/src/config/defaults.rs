// Single source of truth for all default values.

use crate::constants;

// --- Data ---
pub const DEFAULT_MOVIES_PATH: &str = "movies.csv";
pub const DEFAULT_TRAINING_PATH: &str = "training_ratings.csv";
pub const DEFAULT_TEST_PATH: &str = "test_ratings.csv";
pub const DEFAULT_HAS_HEADERS: bool = true;
pub const DEFAULT_DELIMITER: &str = ",";

// --- Similarity ---
pub const DEFAULT_RATING_SPAN: f64 = constants::RATING_SPAN;

// --- Prediction ---
pub const DEFAULT_FALLBACK_RATING: f64 = constants::RATING_SCALE_MIDPOINT;
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

// --- Evaluation ---
pub const DEFAULT_PARALLEL: bool = false;
pub const DEFAULT_THREADS: usize = 0; // 0 = rayon picks

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
