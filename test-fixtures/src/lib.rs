//! Test fixture locator for cinerec CSV datasets.
//!
//! Each dataset is a directory under `test-fixtures/` holding `movies.csv`,
//! `training_ratings.csv`, and `test_ratings.csv`.

use std::path::PathBuf;

use cinerec_core::config::DataConfig;

/// Small hand-checked dataset: six movies, four users, seven test records.
pub const MOVIELENS_MINI: &str = "movielens-mini";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join(MOVIELENS_MINI).exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Absolute path to a file inside the fixtures folder.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Read a fixture file to a string.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// A `DataConfig` pointing at the three tables of `dataset`.
pub fn dataset_config(dataset: &str) -> DataConfig {
    let dir = fixtures_root().join(dataset);
    DataConfig {
        movies_path: dir.join("movies.csv").display().to_string(),
        training_path: dir.join("training_ratings.csv").display().to_string(),
        test_path: dir.join("test_ratings.csv").display().to_string(),
        ..DataConfig::default()
    }
}
