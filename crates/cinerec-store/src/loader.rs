//! CSV loaders for the movie catalog, training ratings, and test ratings.
//!
//! Each table starts with a header row (skipped when `DataConfig::has_headers`).
//! Fields are read by position, so header names do not matter and extra
//! catalog columns (e.g. genres) are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use cinerec_core::config::DataConfig;
use cinerec_core::errors::StoreError;
use cinerec_core::models::{MovieId, MovieRecord, RatingRecord, TestRecord, UserId};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::info;

use crate::store::RatingStore;

/// Load the catalog and training tables named in `config` into a store.
pub fn load_store(config: &DataConfig) -> Result<RatingStore, StoreError> {
    let movies = load_movies(Path::new(&config.movies_path), config)?;
    let ratings = load_ratings(Path::new(&config.training_path), config)?;
    let store = RatingStore::from_records(movies, ratings)?;

    let stats = store.stats();
    info!(
        movies = stats.movies,
        users = stats.users,
        ratings = stats.ratings,
        "loaded rating store"
    );
    Ok(store)
}

pub fn load_movies(path: &Path, config: &DataConfig) -> Result<Vec<MovieRecord>, StoreError> {
    read_movies(open(path)?, &path.display().to_string(), config)
}

pub fn load_ratings(path: &Path, config: &DataConfig) -> Result<Vec<RatingRecord>, StoreError> {
    read_ratings(open(path)?, &path.display().to_string(), config)
}

pub fn load_test_records(path: &Path, config: &DataConfig) -> Result<Vec<TestRecord>, StoreError> {
    let records = load_ratings(path, config)?;
    Ok(records.into_iter().map(TestRecord::from).collect())
}

/// Parse `(movie_id, title, ...)` rows from any reader.
pub fn read_movies<R: Read>(
    reader: R,
    source: &str,
    config: &DataConfig,
) -> Result<Vec<MovieRecord>, StoreError> {
    collect_rows(reader, source, config, |row| {
        Ok(MovieRecord {
            movie_id: MovieId(row.parse(0, "movie_id")?),
            title: row.text(1, "title")?.to_string(),
        })
    })
}

/// Parse `(user_id, movie_id, rating)` rows from any reader.
pub fn read_ratings<R: Read>(
    reader: R,
    source: &str,
    config: &DataConfig,
) -> Result<Vec<RatingRecord>, StoreError> {
    collect_rows(reader, source, config, |row| {
        Ok(RatingRecord {
            user_id: UserId(row.parse(0, "user_id")?),
            movie_id: MovieId(row.parse(1, "movie_id")?),
            rating: row.parse(2, "rating")?,
        })
    })
}

fn open(path: &Path) -> Result<File, StoreError> {
    File::open(path).map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn collect_rows<R, T, F>(
    reader: R,
    source: &str,
    config: &DataConfig,
    mut parse: F,
) -> Result<Vec<T>, StoreError>
where
    R: Read,
    F: FnMut(&Row<'_>) -> Result<T, StoreError>,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(config.has_headers)
        .delimiter(config.delimiter_byte())
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| StoreError::Parse {
            path: source.to_string(),
            line: e.position().map(|p| p.line()).unwrap_or(0),
            message: e.to_string(),
        })?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        rows.push(parse(&Row {
            record: &record,
            source,
        })?);
    }
    Ok(rows)
}

/// One CSV record with positional, error-reporting accessors.
struct Row<'a> {
    record: &'a StringRecord,
    source: &'a str,
}

impl Row<'_> {
    fn line(&self) -> u64 {
        self.record.position().map(|p| p.line()).unwrap_or(0)
    }

    fn error(&self, message: String) -> StoreError {
        StoreError::Parse {
            path: self.source.to_string(),
            line: self.line(),
            message,
        }
    }

    fn text(&self, index: usize, name: &str) -> Result<&str, StoreError> {
        self.record
            .get(index)
            .ok_or_else(|| self.error(format!("missing field `{name}` (column {index})")))
    }

    fn parse<T>(&self, index: usize, name: &str) -> Result<T, StoreError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.text(index, name)?;
        raw.parse::<T>()
            .map_err(|e| self.error(format!("invalid `{name}` value {raw:?}: {e}")))
    }
}
