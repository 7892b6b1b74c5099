//! RatingStore: immutable lookup over loaded movies and ratings.

use std::collections::{BTreeMap, HashMap};

use cinerec_core::errors::{CinerecError, CinerecResult, StoreError};
use cinerec_core::models::{Movie, MovieId, MovieRecord, Rating, RatingRecord, UserId, UserRatings};
use cinerec_core::traits::IRatingLookup;

use crate::builder::RatingStoreBuilder;

/// Counts describing a built store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    pub movies: usize,
    pub users: usize,
    pub ratings: usize,
}

/// Movies by id and each user's ratings by movie id.
///
/// Every movie id in a user's ratings exists in the movie map, and every
/// rating lies on the 0–5 scale. Both are enforced by `RatingStoreBuilder`.
#[derive(Debug, Clone, Default)]
pub struct RatingStore {
    pub(crate) movies: HashMap<MovieId, Movie>,
    pub(crate) users: BTreeMap<UserId, UserRatings>,
    pub(crate) rating_count: usize,
}

impl RatingStore {
    pub fn builder() -> RatingStoreBuilder {
        RatingStoreBuilder::new()
    }

    /// Build a store from already-parsed catalog and training rows.
    pub fn from_records(
        movies: impl IntoIterator<Item = MovieRecord>,
        ratings: impl IntoIterator<Item = RatingRecord>,
    ) -> Result<Self, StoreError> {
        let mut builder = RatingStoreBuilder::new();
        for movie in movies {
            builder.add_movie(movie.movie_id, movie.title);
        }
        for rating in ratings {
            builder.add_rating(rating);
        }
        builder.build()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            movies: self.movies.len(),
            users: self.users.len(),
            ratings: self.rating_count,
        }
    }

    /// All movies, in no particular order.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    /// All users with their ratings, ascending by user id.
    pub fn users(&self) -> impl Iterator<Item = (UserId, &UserRatings)> {
        self.users.iter().map(|(id, ratings)| (*id, ratings))
    }
}

impl IRatingLookup for RatingStore {
    fn get_movie(&self, id: MovieId) -> CinerecResult<&Movie> {
        self.movies
            .get(&id)
            .ok_or_else(|| CinerecError::unknown_movie(id))
    }

    fn get_user_ratings(&self, user: UserId) -> CinerecResult<&UserRatings> {
        self.users
            .get(&user)
            .ok_or_else(|| CinerecError::unknown_user(user))
    }

    fn get_rating(&self, user: UserId, movie: MovieId) -> Option<Rating> {
        self.users.get(&user)?.get(&movie).copied()
    }

    fn contains_movie(&self, movie: MovieId) -> bool {
        self.movies.contains_key(&movie)
    }

    fn contains_user(&self, user: UserId) -> bool {
        self.users.contains_key(&user)
    }
}
