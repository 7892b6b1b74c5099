//! Collects catalog and training rows, then validates them into a `RatingStore`.

use std::collections::{BTreeMap, HashMap};

use cinerec_core::constants::{RATING_SCALE_MAX, RATING_SCALE_MIN};
use cinerec_core::errors::StoreError;
use cinerec_core::models::{Movie, MovieId, RatingRecord, UserId, UserRatings};
use tracing::{debug, warn};

use crate::store::RatingStore;

/// Accumulates movies and ratings in any order.
#[derive(Debug, Default)]
pub struct RatingStoreBuilder {
    movies: HashMap<MovieId, Movie>,
    ratings: Vec<RatingRecord>,
}

impl RatingStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a catalog entry. A repeated id replaces the earlier title.
    pub fn add_movie(&mut self, id: MovieId, title: impl Into<String>) -> &mut Self {
        let title = title.into();
        if let Some(existing) = self.movies.get(&id) {
            warn!(movie_id = %id, old = %existing.title, new = %title, "duplicate movie id in catalog");
        }
        self.movies.insert(id, Movie::new(id, title));
        self
    }

    /// Add a training rating. Validation happens in `build`.
    pub fn add_rating(&mut self, record: RatingRecord) -> &mut Self {
        self.ratings.push(record);
        self
    }

    pub fn extend_ratings(&mut self, records: impl IntoIterator<Item = RatingRecord>) -> &mut Self {
        self.ratings.extend(records);
        self
    }

    /// Group ratings by user and attach raters to movies.
    ///
    /// A later rating for the same (user, movie) replaces the earlier one.
    pub fn build(self) -> Result<RatingStore, StoreError> {
        let Self {
            mut movies,
            ratings,
        } = self;
        let mut users: BTreeMap<UserId, UserRatings> = BTreeMap::new();

        for record in ratings {
            let RatingRecord {
                user_id,
                movie_id,
                rating,
            } = record;

            if !(RATING_SCALE_MIN..=RATING_SCALE_MAX).contains(&rating) {
                return Err(StoreError::RatingOutOfRange {
                    user_id: user_id.value(),
                    movie_id: movie_id.value(),
                    rating,
                    min: RATING_SCALE_MIN,
                    max: RATING_SCALE_MAX,
                });
            }

            let movie = movies
                .get_mut(&movie_id)
                .ok_or(StoreError::DanglingMovie {
                    user_id: user_id.value(),
                    movie_id: movie_id.value(),
                })?;
            movie.raters.insert(user_id);

            if let Some(previous) = users.entry(user_id).or_default().insert(movie_id, rating) {
                warn!(
                    user_id = %user_id,
                    movie_id = %movie_id,
                    previous,
                    rating,
                    "duplicate training rating, keeping the later one"
                );
            }
        }

        let rating_count = users.values().map(|r| r.len()).sum();
        debug!(
            movies = movies.len(),
            users = users.len(),
            ratings = rating_count,
            "rating store built"
        );

        Ok(RatingStore {
            movies,
            users,
            rating_count,
        })
    }
}
