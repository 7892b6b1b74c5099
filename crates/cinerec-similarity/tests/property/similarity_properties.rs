use cinerec_core::config::SimilarityConfig;
use cinerec_core::constants::{RATING_SCALE_MAX, RATING_SCALE_MIN, RATING_SPAN};
use cinerec_core::models::{MovieId, RatingRecord, UserId};
use cinerec_core::traits::ISimilarity;
use cinerec_similarity::SimilarityEngine;
use cinerec_store::RatingStore;
use proptest::prelude::*;

const MOVIES: u32 = 6;

fn arb_store() -> impl Strategy<Value = RatingStore> {
    prop::collection::btree_map((1u32..15, 1u32..=MOVIES), 0u32..=10, 0..50).prop_map(|map| {
        let mut builder = RatingStore::builder();
        for id in 1..=MOVIES {
            builder.add_movie(MovieId(id), format!("Movie {id}"));
        }
        for ((user, movie), half_stars) in map {
            builder.add_rating(RatingRecord {
                user_id: UserId(user),
                movie_id: MovieId(movie),
                rating: f64::from(half_stars) * 0.5,
            });
        }
        builder.build().unwrap()
    })
}

// ── Symmetry ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn similarity_is_symmetric(store in arb_store(), a in 1u32..=MOVIES, b in 1u32..=MOVIES) {
        // Separate engines so the second answer is computed, not cached.
        let forward = SimilarityEngine::new(&store, SimilarityConfig::default());
        let backward = SimilarityEngine::new(&store, SimilarityConfig::default());
        prop_assert_eq!(
            forward.similarity(MovieId(a), MovieId(b)).unwrap(),
            backward.similarity(MovieId(b), MovieId(a)).unwrap()
        );
    }
}

// ── Bounds ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn similarity_stays_within_scale_bounds(store in arb_store(), a in 1u32..=MOVIES, b in 1u32..=MOVIES) {
        let engine = SimilarityEngine::new(&store, SimilarityConfig::default());
        let weight = engine.similarity(MovieId(a), MovieId(b)).unwrap().weight();
        let lowest = 1.0 - (RATING_SCALE_MAX - RATING_SCALE_MIN) / RATING_SPAN;
        prop_assert!(weight <= 1.0);
        prop_assert!(weight >= lowest - 1e-12);
    }

    #[test]
    fn self_similarity_is_one_or_no_evidence(store in arb_store(), a in 1u32..=MOVIES) {
        let engine = SimilarityEngine::new(&store, SimilarityConfig::default());
        let similarity = engine.similarity(MovieId(a), MovieId(a)).unwrap();
        if similarity.has_evidence() {
            prop_assert_eq!(similarity.weight(), 1.0);
        }
    }
}

// ── Memoization ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn each_pair_is_computed_at_most_once(
        store in arb_store(),
        queries in prop::collection::vec((1u32..=MOVIES, 1u32..=MOVIES), 1..40),
    ) {
        let engine = SimilarityEngine::new(&store, SimilarityConfig::default());
        let mut distinct = std::collections::BTreeSet::new();
        for (a, b) in queries {
            engine.similarity(MovieId(a), MovieId(b)).unwrap();
            distinct.insert((a.min(b), a.max(b)));
        }
        prop_assert_eq!(engine.cache().computations(), distinct.len() as u64);
        prop_assert_eq!(engine.cache().len(), distinct.len());
    }
}
