//! SimilarityEngine: validates ids, consults the cache, computes on miss.

use cinerec_core::config::SimilarityConfig;
use cinerec_core::errors::CinerecResult;
use cinerec_core::models::{MovieId, Similarity};
use cinerec_core::traits::{IRatingLookup, ISimilarity};
use tracing::trace;

use crate::cache::SimilarityCache;
use crate::mean_abs_diff::mean_absolute_difference;

/// Memoized mean-absolute-difference similarity over a rating store.
pub struct SimilarityEngine<'a, S: IRatingLookup + ?Sized> {
    store: &'a S,
    cache: SimilarityCache,
    config: SimilarityConfig,
}

impl<'a, S: IRatingLookup + ?Sized> SimilarityEngine<'a, S> {
    pub fn new(store: &'a S, config: SimilarityConfig) -> Self {
        Self {
            store,
            cache: SimilarityCache::new(),
            config,
        }
    }

    /// Get a reference to the similarity cache.
    pub fn cache(&self) -> &SimilarityCache {
        &self.cache
    }
}

impl<'a, S: IRatingLookup + ?Sized> ISimilarity for SimilarityEngine<'a, S> {
    fn similarity(&self, a: MovieId, b: MovieId) -> CinerecResult<Similarity> {
        // Unknown ids fail before the cache is touched.
        let movie_a = self.store.get_movie(a)?;
        let movie_b = self.store.get_movie(b)?;

        Ok(self.cache.get_or_compute(a, b, || {
            let similarity =
                mean_absolute_difference(self.store, movie_a, movie_b, self.config.rating_span);
            trace!(movie_a = %a, movie_b = %b, ?similarity, "computed similarity");
            similarity
        }))
    }
}
