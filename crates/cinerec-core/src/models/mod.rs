pub mod ids;
pub mod movie;
pub mod prediction;
pub mod records;
pub mod similarity;

pub use ids::{MovieId, UserId};
pub use movie::{Movie, UserRatings};
pub use prediction::{EvaluationReport, PredictedRating, Prediction, PredictionSource};
pub use records::{MovieRecord, RatingRecord, TestRecord};
pub use similarity::{MoviePair, Similarity};

/// A user's score for a movie, on the 0–5 scale.
pub type Rating = f64;
