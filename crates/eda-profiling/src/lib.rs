//! EDA Profiling Library
//!
//! A CSV dataset profiling toolkit built with Rust and Polars.
//!
//! # Overview
//!
//! This library gives data analysts a quick, repeatable first pass over new
//! datasets before deeper analysis:
//!
//! - **Structure**: row/column counts, null counts, duplicate rows,
//!   candidate-key columns
//! - **Summary Statistics**: min, max, mean, median, sample standard
//!   deviation and variation coefficient per numeric column
//! - **Outlier Detection**: IQR rule with configurable multiplier,
//!   identifier-looking columns excluded
//! - **Reporting**: CSV report tables plus an optional JSON report written
//!   to a processed-output directory
//!
//! The profiling core is pure: it consumes an immutable `DataFrame` whose
//! column types were fixed once at load time, and produces result structures
//! without touching storage. File discovery, CSV parsing and report writing
//! live in the [`loader`] and [`reporting`] modules.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use eda_profiling::{Profiler, ProfilerConfig, ReportGenerator, RunReport};
//! use eda_profiling::loader;
//! use eda_profiling::types::TableReportEntry;
//!
//! let config = ProfilerConfig::builder()
//!     .raw_dir("./data/raw")
//!     .processed_dir("./data/processed")
//!     .build()?;
//!
//! let profiler = Profiler::new(config.clone());
//! let mut entries = Vec::new();
//!
//! for path in loader::discover_csv_files(&config.raw_dir)? {
//!     let df = loader::load_csv(&path)?;
//!     let (df, _) = loader::coerce_numeric_columns(df, config.numeric_coercion_threshold)?;
//!     entries.push(TableReportEntry {
//!         meta: loader::table_meta(&path)?,
//!         profile: profiler.profile_dataset(&df)?,
//!     });
//! }
//!
//! ReportGenerator::new(&config.processed_dir).write_all(&entries)?;
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod profiler;
pub mod reporting;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{ConfigValidationError, ProfilerConfig, ProfilerConfigBuilder};
pub use error::{ProfileError, Result as ProfileResult};
pub use profiler::Profiler;
pub use reporting::{ReportGenerator, RunReport};
pub use types::{
    ColumnSummary, DuplicateReport, OutlierReport, TableMeta, TableProfile, TableReportEntry,
};
