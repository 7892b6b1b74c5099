//! Row shapes of the three source tables.

use serde::{Deserialize, Serialize};

use super::{MovieId, Rating, UserId};

/// A movie catalog row. Columns after the title are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub movie_id: MovieId,
    pub title: String,
}

/// A training rating row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: Rating,
}

/// A held-out rating the evaluator predicts and compares against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub actual: Rating,
}

impl From<RatingRecord> for TestRecord {
    fn from(record: RatingRecord) -> Self {
        Self {
            user_id: record.user_id,
            movie_id: record.movie_id,
            actual: record.rating,
        }
    }
}
