//! Configuration types for the profiling toolkit.
//!
//! Input and output locations are explicit configuration values passed to
//! the loader and reporter; the profiling core itself never touches the
//! filesystem. Built with the builder pattern for ergonomic setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a profiling run.
///
/// Use [`ProfilerConfig::builder()`] to create a new configuration with a
/// fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use eda_profiling::ProfilerConfig;
///
/// let config = ProfilerConfig::builder()
///     .raw_dir("./data/raw")
///     .processed_dir("./data/processed")
///     .iqr_multiplier(3.0)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilerConfig {
    /// Directory scanned for input CSV files.
    /// Default: "./data/raw"
    pub raw_dir: PathBuf,

    /// Directory the report tables are written to (created if absent).
    /// Default: "./data/processed"
    pub processed_dir: PathBuf,

    /// IQR multiplier for the outlier bounds
    /// `[Q1 - k*IQR, Q3 + k*IQR]`. Must be positive.
    /// Default: 1.5
    pub iqr_multiplier: f64,

    /// Whether identifier-looking numeric columns are excluded from the
    /// statistics and outlier reports.
    /// Default: true
    pub exclude_id_columns: bool,

    /// Minimum fraction of parseable values for a string column to be
    /// coerced to numeric at load time. Must be in (0.0, 1.0].
    /// Default: 0.9
    pub numeric_coercion_threshold: f64,

    /// Whether to also write the full JSON report next to the CSV tables.
    /// Default: false
    pub emit_json_report: bool,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from("./data/raw"),
            processed_dir: PathBuf::from("./data/processed"),
            iqr_multiplier: 1.5,
            exclude_id_columns: true,
            numeric_coercion_threshold: 0.9,
            emit_json_report: false,
        }
    }
}

impl ProfilerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ProfilerConfigBuilder {
        ProfilerConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.iqr_multiplier.is_finite() || self.iqr_multiplier <= 0.0 {
            return Err(ConfigValidationError::InvalidIqrMultiplier(
                self.iqr_multiplier,
            ));
        }

        if !(self.numeric_coercion_threshold > 0.0 && self.numeric_coercion_threshold <= 1.0) {
            return Err(ConfigValidationError::InvalidThreshold {
                field: "numeric_coercion_threshold".to_string(),
                value: self.numeric_coercion_threshold,
            });
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid IQR multiplier: {0} (must be positive)")]
    InvalidIqrMultiplier(f64),

    #[error("Invalid threshold for '{field}': {value} (must be in (0.0, 1.0])")]
    InvalidThreshold { field: String, value: f64 },
}

/// Builder for [`ProfilerConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct ProfilerConfigBuilder {
    raw_dir: Option<PathBuf>,
    processed_dir: Option<PathBuf>,
    iqr_multiplier: Option<f64>,
    exclude_id_columns: Option<bool>,
    numeric_coercion_threshold: Option<f64>,
    emit_json_report: Option<bool>,
}

impl ProfilerConfigBuilder {
    /// Set the directory scanned for input CSV files.
    pub fn raw_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.raw_dir = Some(path.into());
        self
    }

    /// Set the directory report tables are written to.
    pub fn processed_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.processed_dir = Some(path.into());
        self
    }

    /// Set the IQR multiplier used for the outlier bounds.
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = Some(multiplier);
        self
    }

    /// Enable or disable exclusion of identifier-looking numeric columns.
    pub fn exclude_id_columns(mut self, exclude: bool) -> Self {
        self.exclude_id_columns = Some(exclude);
        self
    }

    /// Set the numeric-coercion threshold applied at load time.
    pub fn numeric_coercion_threshold(mut self, threshold: f64) -> Self {
        self.numeric_coercion_threshold = Some(threshold);
        self
    }

    /// Enable or disable the JSON report file.
    pub fn emit_json_report(mut self, emit: bool) -> Self {
        self.emit_json_report = Some(emit);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `ProfilerConfig` or an error if validation fails.
    pub fn build(self) -> Result<ProfilerConfig, ConfigValidationError> {
        let defaults = ProfilerConfig::default();
        let config = ProfilerConfig {
            raw_dir: self.raw_dir.unwrap_or(defaults.raw_dir),
            processed_dir: self.processed_dir.unwrap_or(defaults.processed_dir),
            iqr_multiplier: self.iqr_multiplier.unwrap_or(defaults.iqr_multiplier),
            exclude_id_columns: self
                .exclude_id_columns
                .unwrap_or(defaults.exclude_id_columns),
            numeric_coercion_threshold: self
                .numeric_coercion_threshold
                .unwrap_or(defaults.numeric_coercion_threshold),
            emit_json_report: self.emit_json_report.unwrap_or(defaults.emit_json_report),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProfilerConfig::default();
        assert_eq!(config.raw_dir, PathBuf::from("./data/raw"));
        assert_eq!(config.processed_dir, PathBuf::from("./data/processed"));
        assert_eq!(config.iqr_multiplier, 1.5);
        assert!(config.exclude_id_columns);
        assert_eq!(config.numeric_coercion_threshold, 0.9);
    }

    #[test]
    fn test_builder_defaults() {
        let config = ProfilerConfig::builder().build().unwrap();
        assert_eq!(config.iqr_multiplier, 1.5);
        assert!(!config.emit_json_report);
    }

    #[test]
    fn test_builder_custom_values() {
        let config = ProfilerConfig::builder()
            .raw_dir("input")
            .processed_dir("output")
            .iqr_multiplier(3.0)
            .exclude_id_columns(false)
            .numeric_coercion_threshold(0.8)
            .emit_json_report(true)
            .build()
            .unwrap();

        assert_eq!(config.raw_dir, PathBuf::from("input"));
        assert_eq!(config.processed_dir, PathBuf::from("output"));
        assert_eq!(config.iqr_multiplier, 3.0);
        assert!(!config.exclude_id_columns);
        assert_eq!(config.numeric_coercion_threshold, 0.8);
        assert!(config.emit_json_report);
    }

    #[test]
    fn test_validation_invalid_multiplier() {
        let result = ProfilerConfig::builder().iqr_multiplier(0.0).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidIqrMultiplier(_)
        ));

        let result = ProfilerConfig::builder().iqr_multiplier(-1.5).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_invalid_threshold() {
        let result = ProfilerConfig::builder()
            .numeric_coercion_threshold(1.5)
            .build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidThreshold { .. }
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = ProfilerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ProfilerConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.iqr_multiplier, deserialized.iqr_multiplier);
        assert_eq!(config.raw_dir, deserialized.raw_dir);
    }
}
