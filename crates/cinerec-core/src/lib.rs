//! # cinerec-core
//!
//! Foundation crate for the cinerec rating predictor.
//! Defines ids, models, traits, errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CinerecConfig;
pub use errors::{CinerecError, CinerecResult, EntityKind};
pub use models::{Movie, MovieId, Rating, Similarity, UserId, UserRatings};
