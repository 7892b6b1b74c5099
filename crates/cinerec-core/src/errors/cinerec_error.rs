use std::fmt;

use super::error_code::{self, CinerecErrorCode};
use super::{ConfigError, StoreError};

/// The kind of id that failed a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Movie,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Movie => f.write_str("movie"),
        }
    }
}

/// Top-level error for every cinerec operation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CinerecError {
    #[error("unknown {kind} id {id}")]
    UnknownEntity { kind: EntityKind, id: u32 },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CinerecError {
    pub fn unknown_user(id: impl Into<u32>) -> Self {
        Self::UnknownEntity {
            kind: EntityKind::User,
            id: id.into(),
        }
    }

    pub fn unknown_movie(id: impl Into<u32>) -> Self {
        Self::UnknownEntity {
            kind: EntityKind::Movie,
            id: id.into(),
        }
    }

    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl CinerecErrorCode for CinerecError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEntity { .. } => error_code::UNKNOWN_ENTITY,
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::Store(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type CinerecResult<T> = Result<T, CinerecError>;
