use crate::errors::CinerecResult;
use crate::models::{MovieId, Rating, UserId};

/// Predicts a single user's rating for a single movie.
pub trait IPredictor: Send + Sync {
    fn predict(&self, user: UserId, movie: MovieId) -> CinerecResult<Rating>;
}
