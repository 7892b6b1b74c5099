//! # cinerec-prediction
//!
//! Predicts a user's rating for a movie as the similarity-weighted average of
//! the ratings that user gave other movies, and evaluates those predictions
//! against held-out ratings.
//!
//! ## Prediction paths
//!
//! | Case | Result |
//! |------|--------|
//! | User already rated the movie | That rating, unchanged |
//! | Rated movies carry similarity weight | `Σ(w·r) / Σw`, rounded to 2 places |
//! | Total weight is zero | Fallback rating (scale midpoint, 2.5) |
//!
//! Predictions are not clamped to the rating scale: negative similarities can
//! push the weighted average outside `[0, 5]`.

pub mod batch;
pub mod correlation;
pub mod predictor;

pub use batch::BatchEvaluator;
pub use correlation::correlation;
pub use predictor::Predictor;
