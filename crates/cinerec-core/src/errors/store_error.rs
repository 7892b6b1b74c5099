//! Rating store load and build errors.

use super::error_code::{self, CinerecErrorCode};

/// Errors raised while reading the source tables or assembling the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("malformed record in {path} at line {line}: {message}")]
    Parse {
        path: String,
        line: u64,
        message: String,
    },

    #[error("rating by user {user_id} references unknown movie {movie_id}")]
    DanglingMovie { user_id: u32, movie_id: u32 },

    #[error("rating {rating} by user {user_id} for movie {movie_id} is outside [{min}, {max}]")]
    RatingOutOfRange {
        user_id: u32,
        movie_id: u32,
        rating: f64,
        min: f64,
        max: f64,
    },
}

impl CinerecErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::STORE_IO,
            Self::Parse { .. } => error_code::STORE_PARSE,
            Self::DanglingMovie { .. } | Self::RatingOutOfRange { .. } => {
                error_code::STORE_INTEGRITY
            }
        }
    }
}
