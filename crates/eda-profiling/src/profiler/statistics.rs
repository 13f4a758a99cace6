//! Statistical primitives for column profiling.
//!
//! All functions operate on the non-null values of a column, already
//! extracted as `f64` slices. Statistics that are undefined for the given
//! sample size return `None` rather than NaN or zero.

/// Arithmetic mean. `None` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Minimum value. `None` for an empty slice.
pub(crate) fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Maximum value. `None` for an empty slice.
pub(crate) fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Sample standard deviation (N−1 denominator).
///
/// Undefined with fewer than two values; that is a defined edge case, not
/// an error, and is reported as `None`.
pub(crate) fn sample_std(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let m = mean(values)?;
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n - 1) as f64;
    Some(variance.sqrt())
}

/// Variation coefficient `std / mean`. `None` when the mean is zero.
pub(crate) fn variation_coefficient(mean: f64, std: f64) -> Option<f64> {
    if mean == 0.0 {
        None
    } else {
        Some(std / mean)
    }
}

/// Return a sorted copy of the values.
pub(crate) fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Quantile of a sorted slice with linear interpolation between order
/// statistics at rank `p * (n + 1)`, clamped to `[1, n]` (one-based).
///
/// For `[1, 2, 2, 3, 4, 5, 100]` this yields Q1 = 2 and Q3 = 5.
pub(crate) fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }

    let rank = p * (n + 1) as f64;
    if rank <= 1.0 {
        return Some(sorted[0]);
    }
    if rank >= n as f64 {
        return Some(sorted[n - 1]);
    }

    let lower = rank.floor();
    let frac = rank - lower;
    let idx = lower as usize - 1;
    Some(sorted[idx] + frac * (sorted[idx + 1] - sorted[idx]))
}

/// Median over unsorted values. `None` for an empty slice.
pub(crate) fn median(values: &[f64]) -> Option<f64> {
    let sorted = sorted_copy(values);
    quantile(&sorted, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== mean / min / max tests ====================

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_min_max() {
        let values = [3.0, -1.0, 7.0, 2.0];
        assert_eq!(min(&values), Some(-1.0));
        assert_eq!(max(&values), Some(7.0));
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
    }

    // ==================== sample_std tests ====================

    #[test]
    fn test_sample_std_basic() {
        // Values: 1..5, mean 3, variance 10/4 = 2.5, std ~1.5811
        let std = sample_std(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((std - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sample_std_undefined_below_two_values() {
        assert_eq!(sample_std(&[]), None);
        assert_eq!(sample_std(&[5.0]), None);
    }

    #[test]
    fn test_sample_std_identical_values() {
        assert_eq!(sample_std(&[5.0, 5.0, 5.0, 5.0]), Some(0.0));
    }

    #[test]
    fn test_sample_std_non_negative() {
        let std = sample_std(&[-10.0, -20.0, -30.0]).unwrap();
        assert!(std >= 0.0);
    }

    // ==================== variation_coefficient tests ====================

    #[test]
    fn test_variation_coefficient() {
        assert_eq!(variation_coefficient(10.0, 2.0), Some(0.2));
        assert_eq!(variation_coefficient(0.0, 2.0), None);
    }

    // ==================== quantile / median tests ====================

    #[test]
    fn test_quantile_reference_case() {
        // Q1 = 2, Q3 = 5 per the rank p*(n+1) rule
        let sorted = [1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        assert_eq!(quantile(&sorted, 0.25), Some(2.0));
        assert_eq!(quantile(&sorted, 0.75), Some(5.0));
    }

    #[test]
    fn test_quantile_interpolates() {
        // p = 0.5, rank = 2.5: halfway between 2.0 and 3.0
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.5), Some(2.5));
    }

    #[test]
    fn test_quantile_clamps_to_extremes() {
        let sorted = [1.0, 2.0, 3.0];
        assert_eq!(quantile(&sorted, 0.0), Some(1.0));
        assert_eq!(quantile(&sorted, 1.0), Some(3.0));
    }

    #[test]
    fn test_quantile_single_value() {
        assert_eq!(quantile(&[42.0], 0.25), Some(42.0));
        assert_eq!(quantile(&[42.0], 0.75), Some(42.0));
    }

    #[test]
    fn test_quantile_empty() {
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_median_unaffected_by_order() {
        assert_eq!(median(&[100.0, 1.0, 3.0]), median(&[1.0, 3.0, 100.0]));
    }
}
