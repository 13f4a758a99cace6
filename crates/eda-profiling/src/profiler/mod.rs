//! Dataset profiling module.
//!
//! This module provides the profiling core: dataset-level counts, per-column
//! summary statistics and IQR outlier detection. The profiler is a pure
//! function of its input `DataFrame`; it performs no I/O and never mutates
//! the dataset, so repeated runs over the same data yield identical results.

mod role_inference;
mod statistics;

use crate::config::ProfilerConfig;
use crate::error::{ProfileError, Result};
use crate::types::{ColumnSummary, DuplicateReport, OutlierReport, TableProfile};
use crate::utils::{indexed_numeric_values, is_numeric_series, numeric_values};
use polars::prelude::*;
use tracing::debug;

/// Profiles a loaded dataset.
///
/// Column dtypes are fixed by the loader before profiling; every per-column
/// decision here dispatches on the dtype, never on per-cell inspection.
pub struct Profiler {
    config: ProfilerConfig,
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new(ProfilerConfig::default())
    }
}

impl Profiler {
    /// Create a profiler with the given configuration.
    pub fn new(config: ProfilerConfig) -> Self {
        Self { config }
    }

    /// Row and column counts.
    ///
    /// Fails with [`ProfileError::EmptyDataset`] when there are no columns.
    pub fn count_rows_columns(&self, df: &DataFrame) -> Result<(usize, usize)> {
        if df.width() == 0 {
            return Err(ProfileError::EmptyDataset);
        }
        Ok((df.height(), df.width()))
    }

    /// Null count per column, in column order.
    ///
    /// A value counts as null when it is the polars null; no imputation is
    /// performed.
    pub fn count_nulls(&self, df: &DataFrame) -> Vec<(String, usize)> {
        df.get_columns()
            .iter()
            .map(|col| (col.name().to_string(), col.null_count()))
            .collect()
    }

    /// Duplicate and unique row counts.
    ///
    /// Rows are compared across all columns with null equal to null; the
    /// first occurrence is the original.
    pub fn count_duplicates(&self, df: &DataFrame) -> Result<DuplicateReport> {
        let row_count = df.height();
        let unique_count = if row_count == 0 {
            0
        } else {
            df.unique::<&str, &str>(None, UniqueKeepStrategy::First, None)?
                .height()
        };

        Ok(DuplicateReport {
            unique_count,
            duplicate_count: row_count - unique_count,
        })
    }

    /// Columns that uniquely identify every row on their own.
    pub fn candidate_keys(&self, df: &DataFrame) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for col in df.get_columns() {
            let series = col.as_materialized_series();
            if role_inference::is_candidate_key(series)? {
                keys.push(series.name().to_string());
            }
        }
        Ok(keys)
    }

    /// Summary statistics for every column, in column order.
    ///
    /// Numeric columns get count, min, max, mean, median, sample standard
    /// deviation and variation coefficient over their non-null values.
    /// Non-numeric columns report only count and null count.
    pub fn summary_statistics(&self, df: &DataFrame) -> Result<Vec<ColumnSummary>> {
        df.get_columns()
            .iter()
            .map(|col| self.summarize_column(col.as_materialized_series()))
            .collect()
    }

    fn summarize_column(&self, series: &Series) -> Result<ColumnSummary> {
        let mut summary =
            ColumnSummary::new(series.name().to_string(), format!("{:?}", series.dtype()));
        summary.null_count = series.null_count();
        summary.count = series.len() - summary.null_count;

        if !is_numeric_series(series) {
            return Ok(summary);
        }

        summary.numeric = true;
        summary.id_like =
            self.config.exclude_id_columns && role_inference::is_id_like_column(series)?;

        let values = numeric_values(series)?;
        summary.min = statistics::min(&values);
        summary.max = statistics::max(&values);
        summary.mean = statistics::mean(&values);
        summary.median = statistics::median(&values);
        summary.std_dev = statistics::sample_std(&values);
        summary.variation_coeff = match (summary.mean, summary.std_dev) {
            (Some(mean), Some(std)) => statistics::variation_coefficient(mean, std),
            _ => None,
        };

        Ok(summary)
    }

    /// IQR outlier detection for a single column.
    ///
    /// Flags values outside `[Q1 - k*IQR, Q3 + k*IQR]` where k is the
    /// configured multiplier. A zero IQR (constant column) flags nothing.
    /// Non-numeric and all-null columns are skipped with `Ok(None)`.
    pub fn detect_outliers(&self, df: &DataFrame, column: &str) -> Result<Option<OutlierReport>> {
        let col = df
            .column(column)
            .map_err(|_| ProfileError::ColumnNotFound(column.to_string()))?;
        let series = col.as_materialized_series();

        if !is_numeric_series(series) {
            debug!("skipping outlier detection for non-numeric column {column}");
            return Ok(None);
        }

        let indexed = indexed_numeric_values(series)?;
        if indexed.is_empty() {
            debug!("skipping outlier detection for all-null column {column}");
            return Ok(None);
        }

        let values: Vec<f64> = indexed.iter().map(|(_, v)| *v).collect();
        let sorted = statistics::sorted_copy(&values);
        let (Some(q1), Some(q3)) = (
            statistics::quantile(&sorted, 0.25),
            statistics::quantile(&sorted, 0.75),
        ) else {
            return Ok(None);
        };

        let iqr = q3 - q1;
        let lower_bound = q1 - self.config.iqr_multiplier * iqr;
        let upper_bound = q3 + self.config.iqr_multiplier * iqr;

        let mut indices = Vec::new();
        let mut flagged = Vec::new();
        if iqr > 0.0 {
            for (idx, value) in &indexed {
                if *value < lower_bound || *value > upper_bound {
                    indices.push(*idx);
                    flagged.push(*value);
                }
            }
        }

        flagged.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        flagged.dedup();

        Ok(Some(OutlierReport {
            column: column.to_string(),
            q1,
            q3,
            lower_bound,
            upper_bound,
            indices,
            values: flagged,
        }))
    }

    /// Profile one dataset end to end.
    ///
    /// The only fatal condition is the zero-column dataset; non-numeric
    /// columns are simply absent from the outlier list, and undefined
    /// statistics stay `None` in their summaries.
    pub fn profile_dataset(&self, df: &DataFrame) -> Result<TableProfile> {
        let (row_count, column_count) = self.count_rows_columns(df)?;

        let total_null_count = self.count_nulls(df).iter().map(|(_, n)| n).sum();
        let duplicates = self.count_duplicates(df)?;
        let candidate_keys = self.candidate_keys(df)?;
        let columns = self.summary_statistics(df)?;

        let mut outliers = Vec::new();
        for summary in &columns {
            if summary.numeric && !summary.id_like {
                if let Some(report) = self.detect_outliers(df, &summary.name)? {
                    outliers.push(report);
                }
            }
        }

        debug!(
            rows = row_count,
            columns = column_count,
            duplicates = duplicates.duplicate_count,
            "profiled dataset"
        );

        Ok(TableProfile {
            row_count,
            column_count,
            total_null_count,
            duplicates,
            candidate_keys,
            columns,
            outliers,
        })
    }
}
