//! BatchEvaluator: predicts every held-out record and scores the run.

use cinerec_core::config::EvaluationConfig;
use cinerec_core::errors::{CinerecError, CinerecResult};
use cinerec_core::models::{EvaluationReport, PredictedRating, TestRecord};
use cinerec_core::traits::{IPredictor, IRatingLookup};
use rayon::prelude::*;
use tracing::info;

use crate::correlation::correlation;

/// Runs a predictor over test records, preserving input order.
pub struct BatchEvaluator<'a> {
    store: &'a dyn IRatingLookup,
    predictor: &'a dyn IPredictor,
    config: EvaluationConfig,
}

impl<'a> BatchEvaluator<'a> {
    pub fn new(
        store: &'a dyn IRatingLookup,
        predictor: &'a dyn IPredictor,
        config: EvaluationConfig,
    ) -> Self {
        Self {
            store,
            predictor,
            config,
        }
    }

    /// One `(user, title, predicted, actual)` per record, in input order.
    /// The first unknown user or movie aborts the batch.
    pub fn predict_batch(&self, records: &[TestRecord]) -> CinerecResult<Vec<PredictedRating>> {
        records.iter().map(|record| self.evaluate_record(record)).collect()
    }

    /// Same output as `predict_batch`, with records spread over a rayon pool.
    pub fn predict_batch_parallel(
        &self,
        records: &[TestRecord],
    ) -> CinerecResult<Vec<PredictedRating>> {
        let run = || {
            records
                .par_iter()
                .map(|record| self.evaluate_record(record))
                .collect::<CinerecResult<Vec<_>>>()
        };

        if self.config.threads == 0 {
            return run();
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build()
            .map_err(|e| CinerecError::invalid_input(format!("thread pool: {e}")))?;
        pool.install(run)
    }

    /// Predict every record and correlate predicted with actual ratings.
    pub fn evaluate(&self, records: &[TestRecord]) -> CinerecResult<EvaluationReport> {
        let predictions = if self.config.parallel {
            self.predict_batch_parallel(records)?
        } else {
            self.predict_batch(records)?
        };

        let predicted: Vec<f64> = predictions.iter().map(|p| p.predicted).collect();
        let actual: Vec<f64> = predictions.iter().map(|p| p.actual).collect();
        let correlation = correlation(&predicted, &actual)?;

        info!(
            records = predictions.len(),
            parallel = self.config.parallel,
            correlation,
            "evaluation complete"
        );

        Ok(EvaluationReport {
            predictions,
            correlation,
        })
    }

    fn evaluate_record(&self, record: &TestRecord) -> CinerecResult<PredictedRating> {
        let movie = self.store.get_movie(record.movie_id)?;
        let predicted = self.predictor.predict(record.user_id, record.movie_id)?;
        Ok(PredictedRating {
            user_id: record.user_id,
            movie_title: movie.title.clone(),
            predicted,
            actual: record.actual,
        })
    }
}
