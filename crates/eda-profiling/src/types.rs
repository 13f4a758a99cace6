//! Result types produced by a profiling run.
//!
//! All results are computed fresh per run and never mutated afterwards;
//! they are handed to the reporting layer and then discarded. Undefined
//! statistics (e.g. the standard deviation of a single value) are `None`,
//! never NaN and never zero, so serialization stays unambiguous.

use serde::{Deserialize, Serialize};

/// Descriptive statistics for a single column.
///
/// Non-numeric columns carry only `count` and `null_count`; every statistic
/// field is `None` for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    /// Polars dtype after the load-time coercion pass.
    pub dtype: String,
    /// Number of non-null values.
    pub count: usize,
    pub null_count: usize,
    /// Whether the column dtype is numeric.
    pub numeric: bool,
    /// Whether the column looks like an identifier and is excluded from
    /// the statistics and outlier reports.
    pub id_like: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Sample standard deviation (N−1 denominator). `None` with fewer than
    /// two non-null values.
    pub std_dev: Option<f64>,
    /// `std_dev / mean`. `None` when the mean is zero or std is undefined.
    pub variation_coeff: Option<f64>,
}

impl ColumnSummary {
    /// Create a summary with no statistics filled in.
    pub fn new(name: impl Into<String>, dtype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dtype: dtype.into(),
            count: 0,
            null_count: 0,
            numeric: false,
            id_like: false,
            min: None,
            max: None,
            mean: None,
            median: None,
            std_dev: None,
            variation_coeff: None,
        }
    }
}

/// Duplicate row counts for a dataset.
///
/// Two rows are duplicates when every column value compares equal, with
/// null equal to null. The first occurrence counts as the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateReport {
    pub unique_count: usize,
    pub duplicate_count: usize,
}

impl DuplicateReport {
    /// Total row count covered by this report.
    pub fn total(&self) -> usize {
        self.unique_count + self.duplicate_count
    }
}

/// IQR outlier flags for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    pub column: String,
    pub q1: f64,
    pub q3: f64,
    /// `q1 - multiplier * iqr`
    pub lower_bound: f64,
    /// `q3 + multiplier * iqr`
    pub upper_bound: f64,
    /// Row indices of flagged values, ascending.
    pub indices: Vec<usize>,
    /// Distinct flagged values, sorted ascending.
    pub values: Vec<f64>,
}

impl OutlierReport {
    pub fn has_outliers(&self) -> bool {
        !self.indices.is_empty()
    }
}

/// Everything the profiler derives for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableProfile {
    pub row_count: usize,
    pub column_count: usize,
    /// Sum of null counts across all columns.
    pub total_null_count: usize,
    pub duplicates: DuplicateReport,
    /// Columns that uniquely identify every row on their own (no nulls,
    /// distinct count equals row count).
    pub candidate_keys: Vec<String>,
    pub columns: Vec<ColumnSummary>,
    /// One entry per numeric column eligible for outlier detection.
    pub outliers: Vec<OutlierReport>,
}

impl TableProfile {
    /// Look up the summary for a named column.
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Metadata about the source file a dataset was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMeta {
    /// File stem, used as the table name in reports.
    pub name: String,
    /// Last-modified timestamp of the source file, ISO-8601 UTC.
    pub date_updated: String,
}

/// A profiled table together with its source metadata; one per input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableReportEntry {
    pub meta: TableMeta,
    pub profile: TableProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_report_total() {
        let report = DuplicateReport {
            unique_count: 90,
            duplicate_count: 10,
        };
        assert_eq!(report.total(), 100);
    }

    #[test]
    fn test_column_summary_new_has_no_statistics() {
        let summary = ColumnSummary::new("age", "Float64");
        assert_eq!(summary.name, "age");
        assert_eq!(summary.dtype, "Float64");
        assert!(summary.min.is_none());
        assert!(summary.std_dev.is_none());
        assert!(!summary.numeric);
    }

    #[test]
    fn test_outlier_report_has_outliers() {
        let mut report = OutlierReport {
            column: "value".to_string(),
            q1: 2.0,
            q3: 5.0,
            lower_bound: -2.5,
            upper_bound: 9.5,
            indices: vec![],
            values: vec![],
        };
        assert!(!report.has_outliers());

        report.indices.push(6);
        report.values.push(100.0);
        assert!(report.has_outliers());
    }

    #[test]
    fn test_undefined_statistic_serializes_as_null() {
        let mut summary = ColumnSummary::new("val", "Float64");
        summary.numeric = true;
        summary.count = 1;
        summary.min = Some(5.0);
        summary.max = Some(5.0);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"std_dev\":null"));
        assert!(json.contains("\"min\":5.0"));
    }

    #[test]
    fn test_table_report_entry_json_roundtrip() {
        let entry = TableReportEntry {
            meta: TableMeta {
                name: "sales".to_string(),
                date_updated: "2026-01-08T12:34:56Z".to_string(),
            },
            profile: TableProfile {
                row_count: 3,
                column_count: 2,
                total_null_count: 1,
                duplicates: DuplicateReport {
                    unique_count: 3,
                    duplicate_count: 0,
                },
                candidate_keys: vec!["order_id".to_string()],
                columns: vec![ColumnSummary::new("order_id", "Int64")],
                outliers: vec![],
            },
        };

        let json = serde_json::to_string(&entry).unwrap();
        let back: TableReportEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
