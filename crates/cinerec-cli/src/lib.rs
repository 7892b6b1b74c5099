//! cinerec-cli library
//!
//! Argument parsing and command execution for the `cinerec` binary.
//! Commands write to any `io::Write` so they can be driven from tests.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cinerec_core::config::{CinerecConfig, CliOverrides};
use cinerec_core::errors::{CinerecError, CinerecErrorCode, ConfigError, StoreError};
use cinerec_core::models::{MovieId, PredictionSource, UserId};
use cinerec_core::tracing_setup::init_tracing;
use cinerec_core::traits::IRatingLookup;
use cinerec_prediction::{BatchEvaluator, Predictor};
use cinerec_similarity::SimilarityEngine;
use cinerec_store::{load_store, load_test_records};
use clap::{Parser, Subcommand};
use tracing::info;

/// cinerec - item-based movie rating predictor
#[derive(Parser, Debug)]
#[command(name = "cinerec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML config file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Movie catalog CSV
    #[arg(long, global = true, value_name = "PATH")]
    pub movies: Option<String>,

    /// Training ratings CSV
    #[arg(long, global = true, value_name = "PATH")]
    pub training: Option<String>,

    /// Log filter (overridden by CINEREC_LOG)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict every held-out rating and report the correlation
    Evaluate {
        /// Held-out test ratings CSV
        #[arg(long, value_name = "PATH")]
        test: Option<String>,

        /// Evaluate records on a thread pool
        #[arg(long)]
        parallel: bool,
    },

    /// Predict a single user's rating for a movie
    Predict {
        #[arg(short, long)]
        user: u32,

        #[arg(short, long)]
        movie: u32,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let (test_path, parallel) = match &self.command {
            Commands::Evaluate { test, parallel } => (test.clone(), parallel.then_some(true)),
            Commands::Predict { .. } => (None, None),
        };
        CliOverrides {
            movies_path: self.movies.clone(),
            training_path: self.training.clone(),
            test_path,
            parallel,
            log_level: self.log_level.clone(),
        }
    }
}

/// Resolve config, load data, and run the selected command.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let config = CinerecConfig::load(cli.config.as_deref(), Some(&cli.overrides()))
        .context("failed to load configuration")?;
    init_tracing(&config.observability);

    let store = load_store(&config.data).context("failed to load training data")?;
    let engine = SimilarityEngine::new(&store, config.similarity.clone());
    let predictor = Predictor::new(&store, &engine, config.prediction.clone());

    match &cli.command {
        Commands::Evaluate { .. } => {
            let records = load_test_records(Path::new(&config.data.test_path), &config.data)
                .context("failed to load test ratings")?;
            let evaluator = BatchEvaluator::new(&store, &predictor, config.evaluation.clone());
            let report = evaluator.evaluate(&records).context("evaluation failed")?;

            writeln!(out, "Rating predictions:")?;
            for prediction in &report.predictions {
                let (user, title, predicted, actual) = prediction.as_tuple();
                writeln!(out, "({user}, {title:?}, {predicted:?}, {actual:?})")?;
            }
            writeln!(out, "Correlation: {}", report.correlation)?;

            info!(
                similarities = engine.cache().computations(),
                "similarity computations"
            );
        }
        Commands::Predict { user, movie } => {
            let movie_id = MovieId(*movie);
            let prediction = predictor
                .predict_detailed(UserId(*user), movie_id)
                .with_context(|| format!("cannot predict user {user} for movie {movie}"))?;
            let title = &store
                .get_movie(movie_id)
                .with_context(|| format!("movie {movie} is missing from the catalog"))?
                .title;

            let source = match prediction.source {
                PredictionSource::Direct => "direct rating".to_string(),
                PredictionSource::Weighted { neighbors, .. } => {
                    format!("weighted over {neighbors} rated movies")
                }
                PredictionSource::Fallback => "fallback, no similarity evidence".to_string(),
            };
            writeln!(out, "{user}, {title:?}: {:?} ({source})", prediction.rating)?;
        }
    }

    Ok(())
}

/// Stable code of the first cinerec error in `err`'s cause chain.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<CinerecError>() {
            return e.error_code();
        }
        if let Some(e) = cause.downcast_ref::<StoreError>() {
            return e.error_code();
        }
        if let Some(e) = cause.downcast_ref::<ConfigError>() {
            return e.error_code();
        }
    }
    "INTERNAL"
}
