//! Custom error types for the profiling toolkit.
//!
//! The library uses a single `thiserror` hierarchy. Most statistical edge
//! cases (non-numeric columns, undefined statistics, zero-width IQR) are
//! not errors at all and are resolved locally in the profiler; only the
//! conditions below surface to callers.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for profiling operations.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The dataset has zero columns, so there is nothing to analyze.
    /// Fatal for that table's profiling run; no partial results are produced.
    #[error("dataset has no columns to analyze")]
    EmptyDataset,

    /// Column was not found in the dataset.
    #[error("column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// The configured input directory does not exist.
    #[error("input directory not found: {}", .0.display())]
    InputDirNotFound(PathBuf),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for profiling operations.
pub type Result<T> = std::result::Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_display() {
        let err = ProfileError::EmptyDataset;
        assert_eq!(err.to_string(), "dataset has no columns to analyze");
    }

    #[test]
    fn test_column_not_found_display() {
        let err = ProfileError::ColumnNotFound("Age".to_string());
        assert!(err.to_string().contains("Age"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ProfileError = io.into();
        assert!(matches!(err, ProfileError::Io(_)));
    }
}
