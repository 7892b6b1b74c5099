use serde::{Deserialize, Serialize};

use super::MovieId;

/// Similarity between two movies.
///
/// `NoEvidence` means the movies share no raters. It is kept apart from a
/// computed `0.0` so callers can tell the two cases apart, but both carry
/// zero weight in a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Similarity {
    NoEvidence,
    Computed(f64),
}

impl Similarity {
    /// Weight this similarity contributes to a weighted average.
    pub fn weight(self) -> f64 {
        match self {
            Self::NoEvidence => 0.0,
            Self::Computed(value) => value,
        }
    }

    pub fn has_evidence(self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

/// Unordered pair of movie ids. `MoviePair::new(a, b) == MoviePair::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MoviePair {
    low: MovieId,
    high: MovieId,
}

impl MoviePair {
    pub fn new(a: MovieId, b: MovieId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> MovieId {
        self.low
    }

    pub fn high(&self) -> MovieId {
        self.high
    }

    pub fn contains(&self, movie: MovieId) -> bool {
        self.low == movie || self.high == movie
    }

    /// The member of the pair that is not `movie`, if `movie` is a member.
    pub fn other(&self, movie: MovieId) -> Option<MovieId> {
        if movie == self.low {
            Some(self.high)
        } else if movie == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}
