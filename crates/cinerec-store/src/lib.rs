//! # cinerec-store
//!
//! Holds per-user and per-movie rating data loaded from the movie catalog and
//! training ratings tables.
//!
//! Ratings are grouped by user id explicitly, so the training table may arrive
//! in any order. Build-time validation rejects ratings for movies missing from
//! the catalog and ratings outside the 0–5 scale.

pub mod builder;
pub mod loader;
pub mod store;

pub use builder::RatingStoreBuilder;
pub use loader::{load_movies, load_ratings, load_store, load_test_records};
pub use store::{RatingStore, StoreStats};
