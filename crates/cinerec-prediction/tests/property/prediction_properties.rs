use cinerec_core::config::{EvaluationConfig, PredictionConfig, SimilarityConfig};
use cinerec_core::constants::RATING_SCALE_MIDPOINT;
use cinerec_core::models::{MovieId, RatingRecord, TestRecord, UserId};
use cinerec_core::traits::{IPredictor, IRatingLookup};
use cinerec_prediction::{correlation, BatchEvaluator, Predictor};
use cinerec_similarity::SimilarityEngine;
use cinerec_store::RatingStore;
use proptest::prelude::*;

const MOVIES: u32 = 6;
const USERS: u32 = 8;

fn arb_store() -> impl Strategy<Value = RatingStore> {
    prop::collection::btree_map((1u32..=USERS, 1u32..=MOVIES), 1u32..=10, 1..40).prop_map(|map| {
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

// ── Direct ratings ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn rated_movies_return_the_stored_rating(store in arb_store()) {
        let engine = SimilarityEngine::new(&store, SimilarityConfig::default());
        let predictor = Predictor::new(&store, &engine, PredictionConfig::default());

        for (user, ratings) in store.users() {
            for (&movie, &rating) in ratings {
                prop_assert_eq!(predictor.predict(user, movie).unwrap(), rating);
            }
        }
        prop_assert_eq!(engine.cache().computations(), 0);
    }
}

// ── Fallback ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn unrated_movie_falls_back(store in arb_store()) {
        // Movie 7 exists but nobody rated it, so no pair has common raters.
        let mut builder = RatingStore::builder();
        for movie in store.movies() {
            builder.add_movie(movie.id, movie.title.clone());
        }
        builder.add_movie(MovieId(MOVIES + 1), "Unseen");
        for (user, ratings) in store.users() {
            for (&movie_id, &rating) in ratings {
                builder.add_rating(RatingRecord { user_id: user, movie_id, rating });
            }
        }
        let store = builder.build().unwrap();
        let engine = SimilarityEngine::new(&store, SimilarityConfig::default());
        let predictor = Predictor::new(&store, &engine, PredictionConfig::default());

        for (user, _) in store.users() {
            prop_assert_eq!(
                predictor.predict(user, MovieId(MOVIES + 1)).unwrap(),
                RATING_SCALE_MIDPOINT
            );
        }
    }
}

// ── Batch shape ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn batch_preserves_length_and_order(
        store in arb_store(),
        picks in prop::collection::vec((0usize..64, 1u32..=MOVIES), 0..20),
    ) {
        let users: Vec<UserId> = store.users().map(|(user, _)| user).collect();
        let records: Vec<TestRecord> = picks
            .iter()
            .map(|&(u, m)| TestRecord {
                user_id: users[u % users.len()],
                movie_id: MovieId(m),
                actual: 3.0,
            })
            .collect();

        let engine = SimilarityEngine::new(&store, SimilarityConfig::default());
        let predictor = Predictor::new(&store, &engine, PredictionConfig::default());
        let evaluator = BatchEvaluator::new(&store, &predictor, EvaluationConfig::default());
        let out = evaluator.predict_batch(&records).unwrap();

        prop_assert_eq!(out.len(), records.len());
        for (row, record) in out.iter().zip(&records) {
            prop_assert_eq!(row.user_id, record.user_id);
            prop_assert_eq!(&row.movie_title, &store.get_movie(record.movie_id).unwrap().title);
            prop_assert_eq!(row.predicted, predictor.predict(record.user_id, record.movie_id).unwrap());
        }

        let parallel = evaluator.predict_batch_parallel(&records).unwrap();
        prop_assert_eq!(parallel, out);
    }
}

// ── Correlation ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn correlation_with_itself_is_one(values in prop::collection::vec(0.0f64..5.0, 2..30)) {
        prop_assume!(values.iter().any(|v| *v != values[0]));
        let r = correlation(&values, &values).unwrap();
        prop_assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_is_bounded(
        pairs in prop::collection::vec((0.0f64..5.0, 0.0f64..5.0), 2..30),
    ) {
        let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        prop_assume!(x.iter().any(|v| *v != x[0]) && y.iter().any(|v| *v != y[0]));
        let r = correlation(&x, &y).unwrap();
        prop_assert!((-1.0..=1.0).contains(&r));
    }

    #[test]
    fn correlation_ignores_magnitude(
        pairs in prop::collection::vec((0u32..=10, 0u32..=10), 3..30),
        exponent in -250i32..=250,
    ) {
        let x: Vec<f64> = pairs.iter().map(|&(a, _)| f64::from(a) * 0.5).collect();
        let y: Vec<f64> = pairs.iter().map(|&(_, b)| f64::from(b) * 0.5).collect();
        prop_assume!(x.iter().any(|v| *v != x[0]) && y.iter().any(|v| *v != y[0]));

        let factor = 10f64.powi(exponent);
        let sx: Vec<f64> = x.iter().map(|v| v * factor).collect();
        let sy: Vec<f64> = y.iter().map(|v| v * factor).collect();

        let unit = correlation(&x, &y).unwrap();
        let rescaled = correlation(&sx, &sy).unwrap();
        prop_assert!((unit - rescaled).abs() < 1e-9, "{} vs {}", unit, rescaled);
        prop_assert_eq!(correlation(&sx, &sx).unwrap(), 1.0);
    }
}
