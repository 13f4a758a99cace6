//! Shared utilities for the profiling toolkit.
//!
//! Helpers for dtype classification, numeric string parsing and value
//! extraction used across the loader and the profiler.

use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a Series holds numeric data.
#[inline]
pub fn is_numeric_series(series: &Series) -> bool {
    is_numeric_dtype(series.dtype())
}

// =============================================================================
// String Parsing Utilities
// =============================================================================

/// Characters commonly used in numeric formatting that should be stripped.
pub const NUMERIC_FORMAT_CHARS: [char; 6] = [',', '$', '%', '€', '£', ' '];

/// Common error/missing value markers in raw data.
pub const MISSING_MARKERS: [&str; 8] = [
    "error", "unknown", "n/a", "na", "null", "missing", "none", "#n/a",
];

/// Clean a string for numeric parsing by removing formatting characters.
pub fn clean_numeric_string(s: &str) -> String {
    let mut result = s.trim().to_string();
    for c in NUMERIC_FORMAT_CHARS {
        result = result.replace(c, "");
    }
    result
}

/// Check if a string is an error/missing value marker.
pub fn is_missing_marker(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    MISSING_MARKERS.iter().any(|&marker| lower == marker)
}

/// Try to parse a string as a numeric value (f64).
///
/// Handles common formatting like currency symbols, percentages, and
/// thousands separators.
pub fn parse_numeric_string(s: &str) -> Option<f64> {
    let cleaned = clean_numeric_string(s);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Check if a string can be parsed as a numeric value.
pub fn is_numeric_string(s: &str) -> bool {
    parse_numeric_string(s).is_some()
}

// =============================================================================
// Series Value Extraction
// =============================================================================

/// Count values in a string Series that can be parsed as numeric.
///
/// Returns `(numeric_count, total_count)` where `total_count` excludes
/// empty strings and missing markers.
pub fn count_numeric_values(series: &Series) -> (usize, usize) {
    let mut numeric_count = 0;
    let mut total_count = 0;

    if let Ok(str_series) = series.str() {
        for val in str_series.into_iter().flatten() {
            let trimmed = val.trim();
            if trimmed.is_empty() || is_missing_marker(trimmed) {
                continue;
            }
            total_count += 1;
            if is_numeric_string(trimmed) {
                numeric_count += 1;
            }
        }
    }

    (numeric_count, total_count)
}

/// Get the ratio of numeric-parseable values in a string Series.
pub fn numeric_ratio(series: &Series) -> f64 {
    let (numeric_count, total_count) = count_numeric_values(series);
    if total_count == 0 {
        0.0
    } else {
        numeric_count as f64 / total_count as f64
    }
}

/// Collect the non-null values of a numeric Series as `f64`.
pub fn numeric_values(series: &Series) -> PolarsResult<Vec<f64>> {
    let cast = series.cast(&DataType::Float64)?;
    let ca = cast.f64()?;
    Ok(ca.into_iter().flatten().collect())
}

/// Collect `(row_index, value)` pairs for the non-null values of a numeric
/// Series, preserving original row positions.
pub fn indexed_numeric_values(series: &Series) -> PolarsResult<Vec<(usize, f64)>> {
    let cast = series.cast(&DataType::Float64)?;
    let ca = cast.f64()?;
    Ok(ca
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|val| (i, val)))
        .collect())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_clean_numeric_string() {
        assert_eq!(clean_numeric_string("$1,234.56"), "1234.56");
        assert_eq!(clean_numeric_string("  42%  "), "42");
        assert_eq!(clean_numeric_string("1 000"), "1000");
    }

    #[test]
    fn test_is_missing_marker() {
        assert!(is_missing_marker("N/A"));
        assert!(is_missing_marker("error"));
        assert!(is_missing_marker("  MISSING  "));
        assert!(!is_missing_marker("42"));
        assert!(!is_missing_marker("hello"));
    }

    #[test]
    fn test_parse_numeric_string() {
        assert_eq!(parse_numeric_string("42"), Some(42.0));
        assert_eq!(parse_numeric_string("$1,234.56"), Some(1234.56));
        assert_eq!(parse_numeric_string("-100"), Some(-100.0));
        assert_eq!(parse_numeric_string(""), None);
        assert_eq!(parse_numeric_string("hello"), None);
    }

    #[test]
    fn test_numeric_ratio() {
        let series = Series::new("mixed".into(), &["1", "2.5", "n/a", "abc"]);
        // "n/a" is excluded from the total, so 2 of 3 countable values parse
        let ratio = numeric_ratio(&series);
        assert!((ratio - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_numeric_values_skips_nulls() {
        let series = Series::new("val".into(), &[Some(1.0f64), None, Some(3.0)]);
        let values = numeric_values(&series).unwrap();
        assert_eq!(values, vec![1.0, 3.0]);
    }

    #[test]
    fn test_indexed_numeric_values() {
        let series = Series::new("val".into(), &[Some(1.0f64), None, Some(3.0)]);
        let values = indexed_numeric_values(&series).unwrap();
        assert_eq!(values, vec![(0, 1.0), (2, 3.0)]);
    }
}
