pub mod cinerec_config;
pub mod data_config;
pub mod defaults;
pub mod evaluation_config;
pub mod observability_config;
pub mod prediction_config;
pub mod similarity_config;

pub use cinerec_config::{CinerecConfig, CliOverrides};
pub use data_config::DataConfig;
pub use evaluation_config::EvaluationConfig;
pub use observability_config::ObservabilityConfig;
pub use prediction_config::PredictionConfig;
pub use similarity_config::SimilarityConfig;
