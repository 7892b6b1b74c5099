//! Symmetric similarity cache using moka.
//!
//! One entry per unordered movie pair. Unbounded and never invalidated:
//! ratings are immutable once the store is built.

use std::sync::atomic::{AtomicU64, Ordering};

use cinerec_core::models::{MovieId, MoviePair, Similarity};
use moka::sync::Cache;

/// Memoized pairwise similarities.
pub struct SimilarityCache {
    entries: Cache<MoviePair, Similarity>,
    computations: AtomicU64,
}

impl SimilarityCache {
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().build(),
            computations: AtomicU64::new(0),
        }
    }

    /// Cached similarity for the pair, from either side.
    pub fn get(&self, a: MovieId, b: MovieId) -> Option<Similarity> {
        self.entries.get(&MoviePair::new(a, b))
    }

    pub fn contains(&self, a: MovieId, b: MovieId) -> bool {
        self.entries.contains_key(&MoviePair::new(a, b))
    }

    /// Return the cached similarity, or run `compute` and cache its result.
    ///
    /// Concurrent callers for the same pair wait for a single `compute` run.
    pub fn get_or_compute<F>(&self, a: MovieId, b: MovieId, compute: F) -> Similarity
    where
        F: FnOnce() -> Similarity,
    {
        self.entries.get_with(MoviePair::new(a, b), || {
            self.computations.fetch_add(1, Ordering::Relaxed);
            compute()
        })
    }

    /// How many times a similarity was actually computed.
    pub fn computations(&self) -> u64 {
        self.computations.load(Ordering::Relaxed)
    }

    /// Every cached similarity involving `movie`, keyed by the other movie,
    /// ascending by id.
    pub fn cached_neighbors(&self, movie: MovieId) -> Vec<(MovieId, Similarity)> {
        let mut neighbors: Vec<(MovieId, Similarity)> = self
            .entries
            .iter()
            .filter_map(|(pair, similarity)| pair.other(movie).map(|other| (other, similarity)))
            .collect();
        neighbors.sort_by_key(|(id, _)| *id);
        neighbors
    }

    /// Number of cached pairs.
    pub fn len(&self) -> usize {
        self.entries.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SimilarityCache {
    fn default() -> Self {
        Self::new()
    }
}
