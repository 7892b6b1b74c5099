use crate::errors::CinerecResult;
use crate::models::{MovieId, Similarity};

/// Pairwise movie similarity provider.
pub trait ISimilarity: Send + Sync {
    /// Similarity between `a` and `b`. Symmetric in its arguments.
    /// Fails with `UnknownEntity` if either movie is not in the store.
    fn similarity(&self, a: MovieId, b: MovieId) -> CinerecResult<Similarity>;
}
