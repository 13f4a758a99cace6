//! CSV discovery and loading.
//!
//! The loader is the only place where column types are decided: after the
//! polars schema inference, a one-time coercion pass converts string
//! columns that are mostly numeric (e.g. "1,234" or "$5.00") to Float64.
//! From then on the dataset is read-only and the profiler dispatches on
//! the final dtypes.

use crate::error::{ProfileError, Result};
use crate::types::TableMeta;
use crate::utils::{count_numeric_values, is_missing_marker, parse_numeric_string};
use chrono::{DateTime, Utc};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// List the CSV files in a directory, sorted by file name.
///
/// The extension match is case-insensitive. Fails when the directory does
/// not exist.
pub fn discover_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ProfileError::InputDirNotFound(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();

    files.sort();
    Ok(files)
}

/// Load a CSV file with multiple fallback strategies.
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    // Strategy 1: standard loading with quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("standard loading failed for {}: {e}", path.display());
        }
    }

    // Strategy 2: without quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("loading without quotes failed for {}: {e}", path.display());
        }
    }

    // Strategy 3: pre-clean the content
    let content = fs::read_to_string(path)?;
    let cleaned = clean_csv_content(&content);
    let cursor = std::io::Cursor::new(cleaned);

    CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .into_reader_with_file_handle(cursor)
        .finish()
        .map_err(|e| {
            warn!("could not load {}: {e}", path.display());
            e.into()
        })
}

/// Strip stray quote escaping and blank lines before a last-chance parse.
fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Coerce string columns that are mostly numeric to Float64.
///
/// A string column qualifies when at least `threshold` of its countable
/// values (empty strings and missing markers excluded) parse as numbers.
/// Unparseable values and missing markers become nulls. Returns the
/// coerced frame and the names of converted columns.
pub fn coerce_numeric_columns(mut df: DataFrame, threshold: f64) -> Result<(DataFrame, Vec<String>)> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut converted = Vec::new();

    for name in &names {
        let series = df.column(name)?.as_materialized_series().clone();
        if series.dtype() != &DataType::String {
            continue;
        }

        let (numeric_count, total_count) = count_numeric_values(&series);
        if total_count == 0 || numeric_count == 0 {
            continue;
        }
        if (numeric_count as f64 / total_count as f64) < threshold {
            continue;
        }

        let str_ca = series.str()?;
        let parsed: Vec<Option<f64>> = str_ca
            .into_iter()
            .map(|opt| {
                opt.and_then(|s| {
                    let trimmed = s.trim();
                    if trimmed.is_empty() || is_missing_marker(trimmed) {
                        None
                    } else {
                        parse_numeric_string(trimmed)
                    }
                })
            })
            .collect();

        df.replace(name, Series::new(series.name().clone(), parsed))?;
        debug!("coerced column {name} from String to Float64");
        converted.push(name.clone());
    }

    Ok((df, converted))
}

/// Metadata for a source file: table name (file stem) and last-modified
/// timestamp as ISO-8601 UTC.
pub fn table_meta(path: &Path) -> Result<TableMeta> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("table")
        .to_string();

    let modified = fs::metadata(path)?.modified()?;
    let timestamp: DateTime<Utc> = modified.into();

    Ok(TableMeta {
        name,
        date_updated: timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    })
}
