use serde::{Deserialize, Serialize};

use super::defaults;

/// Batch evaluation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Evaluate test records on a rayon pool.
    pub parallel: bool,
    /// Worker threads for parallel evaluation. 0 lets rayon decide.
    pub threads: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            parallel: defaults::DEFAULT_PARALLEL,
            threads: defaults::DEFAULT_THREADS,
        }
    }
}
