use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{MovieId, Rating, UserId};

/// One user's ratings, keyed by movie. Ordered so that sums over a user's
/// ratings accumulate in the same order on every run.
pub type UserRatings = BTreeMap<MovieId, Rating>;

/// A catalog entry plus the users who rated it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Users with a training rating for this movie. Filled in during load.
    pub raters: BTreeSet<UserId>,
}

impl Movie {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            raters: BTreeSet::new(),
        }
    }

    /// Number of users who rated this movie.
    pub fn rater_count(&self) -> usize {
        self.raters.len()
    }

    pub fn is_rated_by(&self, user: UserId) -> bool {
        self.raters.contains(&user)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.title)
    }
}
