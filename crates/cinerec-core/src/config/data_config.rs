use serde::{Deserialize, Serialize};

use super::defaults;

/// Locations and shape of the three source tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Movie catalog: `movie_id, title, ...`.
    pub movies_path: String,
    /// Training ratings: `user_id, movie_id, rating`.
    pub training_path: String,
    /// Held-out ratings, same shape as training.
    pub test_path: String,
    /// Whether every table starts with a header row to skip.
    pub has_headers: bool,
    /// Field delimiter. Must be a single byte.
    pub delimiter: String,
}

impl DataConfig {
    /// The delimiter as the byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.as_bytes().first().copied().unwrap_or(b',')
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            movies_path: defaults::DEFAULT_MOVIES_PATH.to_string(),
            training_path: defaults::DEFAULT_TRAINING_PATH.to_string(),
            test_path: defaults::DEFAULT_TEST_PATH.to_string(),
            has_headers: defaults::DEFAULT_HAS_HEADERS,
            delimiter: defaults::DEFAULT_DELIMITER.to_string(),
        }
    }
}
