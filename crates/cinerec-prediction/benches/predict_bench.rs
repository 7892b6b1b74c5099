//! Criterion benchmarks for cinerec-prediction.
//!
//! Synthetic store: 200 movies, 500 users, ~20 ratings per user.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cinerec_core::config::{EvaluationConfig, PredictionConfig, SimilarityConfig};
use cinerec_core::models::{MovieId, RatingRecord, TestRecord, UserId};
use cinerec_core::traits::IPredictor;
use cinerec_prediction::{correlation, BatchEvaluator, Predictor};
use cinerec_similarity::SimilarityEngine;
use cinerec_store::RatingStore;

const MOVIES: u32 = 200;
const USERS: u32 = 500;
const RATINGS_PER_USER: u32 = 20;

/// Deterministic pseudo-random store.
fn synthetic_store() -> RatingStore {
    let mut builder = RatingStore::builder();
    for id in 1..=MOVIES {
        builder.add_movie(MovieId(id), format!("Movie {id}"));
    }
    for user in 1..=USERS {
        for k in 0..RATINGS_PER_USER {
            let movie = (user * 7 + k * 13) % MOVIES + 1;
            let half_stars = (user + k * 3) % 10 + 1;
            builder.add_rating(RatingRecord {
                user_id: UserId(user),
                movie_id: MovieId(movie),
                rating: f64::from(half_stars) * 0.5,
            });
        }
    }
    builder.build().unwrap_or_else(|e| panic!("synthetic store: {e}"))
}

fn test_records(count: u32) -> Vec<TestRecord> {
    (0..count)
        .map(|i| TestRecord {
            user_id: UserId(i % USERS + 1),
            movie_id: MovieId((i * 31) % MOVIES + 1),
            actual: f64::from(i % 10 + 1) * 0.5,
        })
        .collect()
}

fn bench_predict_cold(c: &mut Criterion) {
    let store = synthetic_store();
    c.bench_function("predict_cold_cache", |bench| {
        bench.iter(|| {
            let engine = SimilarityEngine::new(&store, SimilarityConfig::default());
            let predictor = Predictor::new(&store, &engine, PredictionConfig::default());
            black_box(predictor.predict(UserId(42), MovieId(99)).ok());
        });
    });
}

fn bench_predict_warm(c: &mut Criterion) {
    let store = synthetic_store();
    let engine = SimilarityEngine::new(&store, SimilarityConfig::default());
    let predictor = Predictor::new(&store, &engine, PredictionConfig::default());
    let _ = predictor.predict(UserId(42), MovieId(99));

    c.bench_function("predict_warm_cache", |bench| {
        bench.iter(|| black_box(predictor.predict(UserId(42), MovieId(99)).ok()));
    });
}

fn bench_batch(c: &mut Criterion) {
    let store = synthetic_store();
    let records = test_records(1_000);

    for parallel in [false, true] {
        let name = if parallel {
            "evaluate_1000_parallel"
        } else {
            "evaluate_1000_sequential"
        };
        c.bench_function(name, |bench| {
            bench.iter(|| {
                let engine = SimilarityEngine::new(&store, SimilarityConfig::default());
                let predictor = Predictor::new(&store, &engine, PredictionConfig::default());
                let config = EvaluationConfig {
                    parallel,
                    threads: 0,
                };
                let evaluator = BatchEvaluator::new(&store, &predictor, config);
                black_box(evaluator.evaluate(&records).ok());
            });
        });
    }
}

fn bench_correlation(c: &mut Criterion) {
    let x: Vec<f64> = (0..10_000).map(|i| f64::from(i % 97) * 0.05).collect();
    let y: Vec<f64> = (0..10_000).map(|i| f64::from(i % 89) * 0.05).collect();
    c.bench_function("correlation_10k", |bench| {
        bench.iter(|| black_box(correlation(&x, &y).ok()));
    });
}

criterion_group!(
    benches,
    bench_predict_cold,
    bench_predict_warm,
    bench_batch,
    bench_correlation
);
criterion_main!(benches);
