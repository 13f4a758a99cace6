//! Column role heuristics: candidate keys and identifier-like columns.
//!
//! Candidate keys feed the structure report; identifier-looking numeric
//! columns are excluded from the statistics and outlier reports, since an
//! outlier in a surrogate key is meaningless.

use polars::prelude::*;

/// Name fragments that suggest an identifier column.
const ID_NAME_KEYWORDS: [&str; 3] = ["identifier", "uuid", "guid"];

/// Minimum distinct ratio among non-null values for the uniqueness flag.
const ID_UNIQUE_RATIO: f64 = 0.995;

/// Minimum non-null coverage of the column for the uniqueness flag.
const ID_COVERAGE_RATIO: f64 = 0.80;

/// A column is a candidate key when it has no nulls and its distinct count
/// equals the row count, i.e. it uniquely identifies every row by itself.
pub(crate) fn is_candidate_key(series: &Series) -> PolarsResult<bool> {
    if series.is_empty() || series.null_count() > 0 {
        return Ok(false);
    }
    Ok(series.n_unique()? == series.len())
}

/// Check whether a column name suggests an identifier.
///
/// Matches exact "id"/"key" names, `_id`/`_key` suffixes, `id_` prefixes
/// and the longer keywords, but not incidental substrings ("humidity").
pub(crate) fn name_suggests_id(name: &str) -> bool {
    let lower = name.trim().to_ascii_lowercase();

    if lower == "id" || lower == "key" {
        return true;
    }
    if lower.ends_with("_id") || lower.ends_with("_key") || lower.starts_with("id_") {
        return true;
    }
    ID_NAME_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Heuristic to detect identifier-like numeric columns.
///
/// A column qualifies when its name suggests an identifier, or when its
/// non-null values are almost all distinct while covering most rows.
pub(crate) fn is_id_like_column(series: &Series) -> PolarsResult<bool> {
    if name_suggests_id(series.name().as_str()) {
        return Ok(true);
    }

    let non_null = series.drop_nulls();
    if non_null.is_empty() {
        return Ok(false);
    }

    let unique_ratio = non_null.n_unique()? as f64 / non_null.len() as f64;
    let coverage_ratio = non_null.len() as f64 / series.len() as f64;
    Ok(unique_ratio >= ID_UNIQUE_RATIO && coverage_ratio >= ID_COVERAGE_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== candidate key tests ====================

    #[test]
    fn test_candidate_key_all_distinct_no_nulls() {
        let series = Series::new("order_id".into(), &[1i64, 2, 3, 4]);
        assert!(is_candidate_key(&series).unwrap());
    }

    #[test]
    fn test_candidate_key_rejects_duplicates() {
        let series = Series::new("group".into(), &[1i64, 1, 2, 3]);
        assert!(!is_candidate_key(&series).unwrap());
    }

    #[test]
    fn test_candidate_key_rejects_nulls_even_if_distinct() {
        let series = Series::new("code".into(), &[Some(1i64), Some(2), None]);
        assert!(!is_candidate_key(&series).unwrap());
    }

    #[test]
    fn test_candidate_key_empty_series() {
        let series: Series = Series::new("empty".into(), Vec::<i64>::new());
        assert!(!is_candidate_key(&series).unwrap());
    }

    #[test]
    fn test_candidate_key_string_column() {
        let series = Series::new("sku".into(), &["a", "b", "c"]);
        assert!(is_candidate_key(&series).unwrap());
    }

    // ==================== id-like column tests ====================

    #[test]
    fn test_name_suggests_id() {
        assert!(name_suggests_id("id"));
        assert!(name_suggests_id("user_id"));
        assert!(name_suggests_id("ID_customer"));
        assert!(name_suggests_id("session_uuid"));
        assert!(!name_suggests_id("humidity"));
        assert!(!name_suggests_id("temperature"));
    }

    #[test]
    fn test_id_like_by_name() {
        // Non-unique values, but the name gives it away
        let series = Series::new("user_id".into(), &[1i64, 1, 2, 2]);
        assert!(is_id_like_column(&series).unwrap());
    }

    #[test]
    fn test_id_like_by_uniqueness() {
        let values: Vec<i64> = (0..200).collect();
        let series = Series::new("serial".into(), values);
        assert!(is_id_like_column(&series).unwrap());
    }

    #[test]
    fn test_not_id_like_repeated_measurements() {
        let series = Series::new("humidity".into(), &[40.0f64, 41.0, 40.0, 42.0, 41.0]);
        assert!(!is_id_like_column(&series).unwrap());
    }

    #[test]
    fn test_not_id_like_sparse_column() {
        // Distinct but mostly null: coverage too low for the uniqueness flag
        let mut values: Vec<Option<i64>> = vec![None; 8];
        values.push(Some(1));
        values.push(Some(2));
        let series = Series::new("rare".into(), values);
        assert!(!is_id_like_column(&series).unwrap());
    }
}
