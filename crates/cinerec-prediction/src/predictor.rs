//! Predictor: similarity-weighted average over the user's rated movies.

use cinerec_core::config::PredictionConfig;
use cinerec_core::errors::CinerecResult;
use cinerec_core::models::{MovieId, Prediction, PredictionSource, Rating, UserId};
use cinerec_core::traits::{IPredictor, IRatingLookup, ISimilarity};
use tracing::debug;

/// Item-based rating predictor.
pub struct Predictor<'a> {
    store: &'a dyn IRatingLookup,
    similarity: &'a dyn ISimilarity,
    config: PredictionConfig,
}

impl<'a> Predictor<'a> {
    pub fn new(
        store: &'a dyn IRatingLookup,
        similarity: &'a dyn ISimilarity,
        config: PredictionConfig,
    ) -> Self {
        Self {
            store,
            similarity,
            config,
        }
    }

    /// Predict and report which path produced the value.
    pub fn predict_detailed(&self, user: UserId, movie: MovieId) -> CinerecResult<Prediction> {
        let ratings = self.store.get_user_ratings(user)?;
        self.store.get_movie(movie)?;

        if let Some(&rating) = ratings.get(&movie) {
            debug!(user = %user, movie = %movie, rating, "direct rating");
            return Ok(Prediction {
                rating,
                source: PredictionSource::Direct,
            });
        }

        let mut weighted_sum = 0.0;
        let mut weight_sum = 0.0;
        let mut neighbors = 0usize;

        // Ascending movie id, so the sums are reproducible run to run.
        for (&neighbor, &rating) in ratings {
            let weight = self.similarity.similarity(neighbor, movie)?.weight();
            weighted_sum += weight * rating;
            weight_sum += weight;
            if weight != 0.0 {
                neighbors += 1;
            }
        }

        if weight_sum == 0.0 {
            debug!(user = %user, movie = %movie, "no similarity evidence, using fallback");
            return Ok(Prediction {
                rating: self.config.fallback_rating,
                source: PredictionSource::Fallback,
            });
        }

        let rating = round_to(weighted_sum / weight_sum, self.config.decimal_places);
        debug!(user = %user, movie = %movie, neighbors, weight_sum, rating, "weighted prediction");

        Ok(Prediction {
            rating,
            source: PredictionSource::Weighted {
                neighbors,
                weight_sum,
            },
        })
    }
}

impl IPredictor for Predictor<'_> {
    fn predict(&self, user: UserId, movie: MovieId) -> CinerecResult<Rating> {
        self.predict_detailed(user, movie).map(|p| p.rating)
    }
}

/// Round to `places` decimal places from the exact binary value, the way
/// Python's `round` does. Scaling by a power of ten first would round twice.
fn round_to(value: f64, places: u32) -> f64 {
    format!("{value:.prec$}", prec = places as usize)
        .parse()
        .unwrap_or(value)
}
