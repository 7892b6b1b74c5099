//! # cinerec-similarity
//!
//! Item-to-item similarity from the average absolute rating difference over
//! the users who rated both movies:
//!
//! ```text
//! similarity = 1 - (Σ |r(u,a) - r(u,b)| / |U|) / rating_span
//! ```
//!
//! Movies with no common raters get `Similarity::NoEvidence`.
//!
//! Results are memoized per unordered movie pair in a single symmetric
//! cache, so `similarity(a, b)` and `similarity(b, a)` share one entry and the
//! algorithm runs at most once per pair.

pub mod cache;
pub mod engine;
pub mod mean_abs_diff;

pub use cache::SimilarityCache;
pub use engine::SimilarityEngine;
pub use mean_abs_diff::mean_absolute_difference;
