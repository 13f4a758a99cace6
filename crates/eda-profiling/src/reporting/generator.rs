//! Report table generation.
//!
//! Assembles the three CSV report tables (structure, summary statistics,
//! outliers) plus the optional JSON report, and writes them to the
//! processed-output directory. The profiling core never touches the
//! filesystem; all persistence lives here.

use crate::error::Result;
use crate::types::TableReportEntry;
use chrono::Local;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;
use tracing::info;

/// Structure report: one row per table.
pub const STRUCTURE_REPORT_FILE: &str = "Column-RowCount-duplicate.csv";

/// Summary statistics report: one row per (table, numeric column).
pub const SUMMARY_REPORT_FILE: &str = "Summary_Statistics.csv";

/// Outlier report: one row per (table, numeric column).
pub const OUTLIER_REPORT_FILE: &str = "Outliers.csv";

/// Full machine-readable report.
pub const JSON_REPORT_FILE: &str = "eda_report.json";

/// Full run output for JSON serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Timestamp when the report was generated.
    pub generated_at: String,
    /// Directory the input tables were read from.
    pub input_dir: String,
    /// One entry per profiled table.
    pub tables: Vec<TableReportEntry>,
}

impl RunReport {
    /// Assemble the run report with a local generation timestamp.
    pub fn new(input_dir: impl Into<String>, tables: Vec<TableReportEntry>) -> Self {
        Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_dir: input_dir.into(),
            tables,
        }
    }
}

/// Writes report tables to the processed-output directory.
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    /// Create a generator targeting the given output directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    fn write_csv(&self, file_name: &str, df: &mut DataFrame) -> Result<PathBuf> {
        self.ensure_output_dir()?;
        let path = self.output_dir.join(file_name);
        let mut file = File::create(&path)?;
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
        info!("report written to {}", path.display());
        Ok(path)
    }

    /// Write all three CSV report tables; returns their paths.
    pub fn write_all(&self, entries: &[TableReportEntry]) -> Result<Vec<PathBuf>> {
        Ok(vec![
            self.write_structure_report(entries)?,
            self.write_summary_report(entries)?,
            self.write_outlier_report(entries)?,
        ])
    }

    /// One row per table: shape, candidate keys, duplicate and null counts.
    pub fn write_structure_report(&self, entries: &[TableReportEntry]) -> Result<PathBuf> {
        let mut table_names = Vec::with_capacity(entries.len());
        let mut unique_columns = Vec::with_capacity(entries.len());
        let mut column_counts = Vec::with_capacity(entries.len());
        let mut row_counts = Vec::with_capacity(entries.len());
        let mut unique_rows = Vec::with_capacity(entries.len());
        let mut duplicate_rows = Vec::with_capacity(entries.len());
        let mut null_counts = Vec::with_capacity(entries.len());
        let mut dates = Vec::with_capacity(entries.len());

        for entry in entries {
            let profile = &entry.profile;
            table_names.push(entry.meta.name.clone());
            unique_columns.push(if profile.candidate_keys.is_empty() {
                "None".to_string()
            } else {
                profile.candidate_keys.join(", ")
            });
            column_counts.push(profile.column_count as u64);
            row_counts.push(profile.row_count as u64);
            unique_rows.push(profile.duplicates.unique_count as u64);
            duplicate_rows.push(profile.duplicates.duplicate_count as u64);
            null_counts.push(profile.total_null_count as u64);
            dates.push(entry.meta.date_updated.clone());
        }

        let mut df = DataFrame::new(vec![
            Column::new("Table Name".into(), table_names),
            Column::new("Unique Column(s)".into(), unique_columns),
            Column::new("Column Count".into(), column_counts),
            Column::new("Row Count".into(), row_counts),
            Column::new("Unique Rows Count".into(), unique_rows),
            Column::new("Duplicate Rows Count".into(), duplicate_rows),
            Column::new("Null Count".into(), null_counts),
            Column::new("Date Updated".into(), dates),
        ])?;

        self.write_csv(STRUCTURE_REPORT_FILE, &mut df)
    }

    /// One row per (table, numeric column) with the descriptive statistics.
    /// Undefined statistics render as empty cells.
    pub fn write_summary_report(&self, entries: &[TableReportEntry]) -> Result<PathBuf> {
        let mut table_names = Vec::new();
        let mut column_names = Vec::new();
        let mut minimums: Vec<Option<f64>> = Vec::new();
        let mut maximums: Vec<Option<f64>> = Vec::new();
        let mut medians: Vec<Option<f64>> = Vec::new();
        let mut averages: Vec<Option<f64>> = Vec::new();
        let mut std_devs: Vec<Option<f64>> = Vec::new();
        let mut variation_coeffs: Vec<Option<f64>> = Vec::new();
        let mut dates = Vec::new();

        for entry in entries {
            for summary in &entry.profile.columns {
                if !summary.numeric || summary.id_like {
                    continue;
                }
                table_names.push(entry.meta.name.clone());
                column_names.push(summary.name.clone());
                minimums.push(summary.min);
                maximums.push(summary.max);
                medians.push(summary.median);
                averages.push(summary.mean);
                std_devs.push(summary.std_dev);
                variation_coeffs.push(summary.variation_coeff);
                dates.push(entry.meta.date_updated.clone());
            }
        }

        let mut df = DataFrame::new(vec![
            Column::new("Table Name".into(), table_names),
            Column::new("Numeric Column".into(), column_names),
            Column::new("Minimum".into(), minimums),
            Column::new("Maximum".into(), maximums),
            Column::new("Median".into(), medians),
            Column::new("Average".into(), averages),
            Column::new("Standard Deviation".into(), std_devs),
            Column::new("Variation Coefficient".into(), variation_coeffs),
            Column::new("Date Updated".into(), dates),
        ])?;

        self.write_csv(SUMMARY_REPORT_FILE, &mut df)
    }

    /// One row per (table, numeric column) with the IQR bounds and the
    /// flagged values, or `No Outliers` for clean columns.
    pub fn write_outlier_report(&self, entries: &[TableReportEntry]) -> Result<PathBuf> {
        let mut table_names = Vec::new();
        let mut column_names = Vec::new();
        let mut averages: Vec<Option<f64>> = Vec::new();
        let mut std_devs: Vec<Option<f64>> = Vec::new();
        let mut lower_bounds = Vec::new();
        let mut upper_bounds = Vec::new();
        let mut outlier_lists = Vec::new();
        let mut dates = Vec::new();

        for entry in entries {
            for report in &entry.profile.outliers {
                let summary = entry.profile.column(&report.column);

                table_names.push(entry.meta.name.clone());
                column_names.push(report.column.clone());
                averages.push(summary.and_then(|s| s.mean).map(round1));
                std_devs.push(summary.and_then(|s| s.std_dev).map(round1));
                lower_bounds.push(report.lower_bound);
                upper_bounds.push(report.upper_bound);
                outlier_lists.push(format_outlier_values(&report.values));
                dates.push(entry.meta.date_updated.clone());
            }
        }

        let mut df = DataFrame::new(vec![
            Column::new("Table Name".into(), table_names),
            Column::new("Numeric Column".into(), column_names),
            Column::new("Average".into(), averages),
            Column::new("Standard Deviation".into(), std_devs),
            Column::new("Lower Bound".into(), lower_bounds),
            Column::new("Upper Bound".into(), upper_bounds),
            Column::new("Outliers".into(), outlier_lists),
            Column::new("Date Updated".into(), dates),
        ])?;

        self.write_csv(OUTLIER_REPORT_FILE, &mut df)
    }

    /// Write the full run report as pretty-printed JSON.
    pub fn write_json_report(&self, report: &RunReport) -> Result<PathBuf> {
        self.ensure_output_dir()?;
        let path = self.output_dir.join(JSON_REPORT_FILE);
        fs::write(&path, serde_json::to_string_pretty(report)?)?;
        info!("report written to {}", path.display());
        Ok(path)
    }
}

/// Round to one decimal place for the compact outlier table.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Render the flagged values as a compact `"; "`-joined list, or the
/// literal `No Outliers` marker when none were flagged.
fn format_outlier_values(values: &[f64]) -> String {
    if values.is_empty() {
        return "No Outliers".to_string();
    }
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
