use serde::{Deserialize, Serialize};

use super::defaults;

/// Similarity subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Divisor that maps an average absolute difference into `[0, 1]`.
    pub rating_span: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            rating_span: defaults::DEFAULT_RATING_SPAN,
        }
    }
}
