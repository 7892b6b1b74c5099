use std::collections::BTreeSet;

use crate::errors::CinerecResult;
use crate::models::{Movie, MovieId, Rating, UserId, UserRatings};

/// Read-only access to loaded movies and ratings.
pub trait IRatingLookup: Send + Sync {
    /// The movie with `id`, or `UnknownEntity`.
    fn get_movie(&self, id: MovieId) -> CinerecResult<&Movie>;

    /// Every rating `user` gave, or `UnknownEntity`.
    fn get_user_ratings(&self, user: UserId) -> CinerecResult<&UserRatings>;

    /// The rating `user` gave `movie`, or `None` if they never rated it.
    fn get_rating(&self, user: UserId, movie: MovieId) -> Option<Rating>;

    /// Users who rated `movie`, or `UnknownEntity`.
    fn raters_of(&self, movie: MovieId) -> CinerecResult<&BTreeSet<UserId>> {
        self.get_movie(movie).map(|m| &m.raters)
    }

    fn contains_movie(&self, movie: MovieId) -> bool {
        self.get_movie(movie).is_ok()
    }

    fn contains_user(&self, user: UserId) -> bool {
        self.get_user_ratings(user).is_ok()
    }
}
