use serde::{Deserialize, Serialize};

use super::{Rating, UserId};

/// How a prediction was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PredictionSource {
    /// The user already rated the movie.
    Direct,
    /// Similarity-weighted average over the user's rated movies.
    Weighted { neighbors: usize, weight_sum: f64 },
    /// No similarity evidence; the configured fallback was returned.
    Fallback,
}

/// A predicted rating plus the path that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub rating: Rating,
    pub source: PredictionSource,
}

/// One evaluated test record: `(user, title, predicted, actual)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedRating {
    pub user_id: UserId,
    pub movie_title: String,
    pub predicted: Rating,
    pub actual: Rating,
}

impl PredictedRating {
    pub fn as_tuple(&self) -> (UserId, &str, Rating, Rating) {
        (self.user_id, &self.movie_title, self.predicted, self.actual)
    }
}

/// Output of a full batch evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub predictions: Vec<PredictedRating>,
    /// Pearson correlation between predicted and actual ratings.
    pub correlation: f64,
}

impl EvaluationReport {
    pub fn predicted(&self) -> Vec<Rating> {
        self.predictions.iter().map(|p| p.predicted).collect()
    }

    pub fn actual(&self) -> Vec<Rating> {
        self.predictions.iter().map(|p| p.actual).collect()
    }
}
