//! Top-level cinerec configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    DataConfig, EvaluationConfig, ObservabilityConfig, PredictionConfig, SimilarityConfig,
};
use crate::constants::MAX_DECIMAL_PLACES;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CINEREC_*`)
/// 3. Config file passed to `load`
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CinerecConfig {
    pub data: DataConfig,
    pub similarity: SimilarityConfig,
    pub prediction: PredictionConfig,
    pub evaluation: EvaluationConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub movies_path: Option<String>,
    pub training_path: Option<String>,
    pub test_path: Option<String>,
    pub parallel: Option<bool>,
    pub log_level: Option<String>,
}

impl CinerecConfig {
    /// Load configuration from an optional TOML file, the process environment,
    /// and CLI overrides, then validate the result.
    pub fn load(
        path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        debug!(
            config_file = ?path,
            cli_overrides = cli_overrides.is_some(),
            movies_path = %config.data.movies_path,
            training_path = %config.data.training_path,
            test_path = %config.data.test_path,
            parallel = config.evaluation.parallel,
            "configuration resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `CINEREC_*` overrides read through `lookup`.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("CINEREC_MOVIES_PATH") {
            self.data.movies_path = val;
        }
        if let Some(val) = lookup("CINEREC_TRAINING_PATH") {
            self.data.training_path = val;
        }
        if let Some(val) = lookup("CINEREC_TEST_PATH") {
            self.data.test_path = val;
        }
        if let Some(v) = lookup("CINEREC_RATING_SPAN").and_then(|s| s.parse::<f64>().ok()) {
            self.similarity.rating_span = v;
        }
        if let Some(v) = lookup("CINEREC_FALLBACK_RATING").and_then(|s| s.parse::<f64>().ok()) {
            self.prediction.fallback_rating = v;
        }
        if let Some(v) = lookup("CINEREC_DECIMAL_PLACES").and_then(|s| s.parse::<u32>().ok()) {
            self.prediction.decimal_places = v;
        }
        if let Some(v) = lookup("CINEREC_PARALLEL").and_then(|s| s.parse::<bool>().ok()) {
            self.evaluation.parallel = v;
        }
        if let Some(v) = lookup("CINEREC_THREADS").and_then(|s| s.parse::<usize>().ok()) {
            self.evaluation.threads = v;
        }
    }

    /// Apply CLI overrides. Only `Some` values replace the current ones.
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref path) = cli.movies_path {
            self.data.movies_path = path.clone();
        }
        if let Some(ref path) = cli.training_path {
            self.data.training_path = path.clone();
        }
        if let Some(ref path) = cli.test_path {
            self.data.test_path = path.clone();
        }
        if let Some(parallel) = cli.parallel {
            self.evaluation.parallel = parallel;
        }
        if let Some(ref level) = cli.log_level {
            self.observability.log_level = level.clone();
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let span = self.similarity.rating_span;
        if !span.is_finite() || span <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "similarity.rating_span".to_string(),
                message: "must be a positive finite number".to_string(),
            });
        }
        if !self.prediction.fallback_rating.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "prediction.fallback_rating".to_string(),
                message: "must be finite".to_string(),
            });
        }
        if self.prediction.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::ValidationFailed {
                field: "prediction.decimal_places".to_string(),
                message: format!("must be at most {MAX_DECIMAL_PLACES}"),
            });
        }
        if self.data.delimiter.len() != 1 {
            return Err(ConfigError::ValidationFailed {
                field: "data.delimiter".to_string(),
                message: "must be a single byte".to_string(),
            });
        }
        Ok(())
    }
}
