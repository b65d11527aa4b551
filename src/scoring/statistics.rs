//! Statistical kernels for per-test scoring
//!
//! Contains:
//! - Median over raw frame-time samples (full sort of a copy)
//! - Geometric mean in incremental per-sample form

/// Median of a frame-time sample set.
///
/// Sorts a copy — the caller's ordering is execution order and must survive
/// for the serialized frame-time string. Even counts take the midpoint of
/// the middle pair; odd counts take the middle element (0-indexed integer
/// division). An empty sample set yields 0.0 rather than trapping.
#[must_use]
pub fn median(samples: &[u32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    if n.is_multiple_of(2) {
        f64::midpoint(f64::from(sorted[n / 2 - 1]), f64::from(sorted[n / 2]))
    } else {
        f64::from(sorted[n / 2])
    }
}

/// Geometric mean of a frame-time sample set.
///
/// Incremental form: the accumulator starts at 1.0 and is multiplied by
/// `sample^(1/n)` per sample. This is NOT equivalent in rounding to
/// `exp(mean(ln(samples)))`, and downstream consumers depend on the
/// incremental form's bit-for-bit behavior, so keep it as is.
///
/// The exponent is derived only after the sample count is known to be
/// non-zero; an empty sample set yields 0.0.
#[must_use]
pub fn geometric_mean(samples: &[u32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let exponent = 1.0 / samples.len() as f64;
    let mut accumulator = 1.0_f64;
    for &sample in samples {
        accumulator *= f64::from(sample).powf(exponent);
    }
    accumulator
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Median Tests
    // =========================================================================

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(&[10, 20, 30]), 20.0);
        assert_eq!(median(&[30, 10, 20]), 20.0);
    }

    #[test]
    fn test_median_even_count() {
        // (20 + 30) / 2
        assert_eq!(median(&[10, 20, 30, 40]), 25.0);
        assert_eq!(median(&[40, 10, 30, 20]), 25.0);
    }

    #[test]
    fn test_median_single_sample() {
        assert_eq!(median(&[42]), 42.0);
    }

    #[test]
    fn test_median_two_samples() {
        assert_eq!(median(&[10, 20]), 15.0);
    }

    #[test]
    fn test_median_empty_is_zero() {
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_median_duplicates() {
        assert_eq!(median(&[7, 7, 7, 7, 7]), 7.0);
    }

    #[test]
    fn test_median_large_values_no_overflow() {
        // Midpoint of the middle pair is taken in f64, so u32::MAX pairs
        // cannot overflow
        assert_eq!(
            median(&[u32::MAX, u32::MAX]),
            f64::from(u32::MAX)
        );
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let samples = vec![30, 10, 20];
        let _ = median(&samples);
        assert_eq!(samples, vec![30, 10, 20]);
    }

    #[test]
    fn test_median_idempotent_under_presorting() {
        let unsorted = [1250, 1180, 1203, 1197];
        let mut sorted = unsorted;
        sorted.sort_unstable();
        assert_eq!(median(&unsorted), median(&sorted));
    }

    // =========================================================================
    // Geometric Mean Tests
    // =========================================================================

    #[test]
    fn test_geometric_mean_known_value() {
        // (10 * 20 * 30)^(1/3) = 6000^(1/3)
        let gm = geometric_mean(&[10, 20, 30]);
        assert!((gm - 18.171_205_928).abs() < 1e-6);
    }

    #[test]
    fn test_geometric_mean_single_sample() {
        assert!((geometric_mean(&[42]) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_geometric_mean_uniform_samples() {
        assert!((geometric_mean(&[100, 100, 100, 100]) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_geometric_mean_empty_is_zero() {
        assert_eq!(geometric_mean(&[]), 0.0);
    }

    #[test]
    fn test_geometric_mean_zero_sample_collapses_to_zero() {
        // 0^(1/n) = 0 zeroes the running product
        assert_eq!(geometric_mean(&[0, 100, 200]), 0.0);
    }

    #[test]
    fn test_geometric_mean_below_arithmetic_mean() {
        // AM-GM inequality for non-uniform positive samples
        let samples = [10, 20, 30, 40];
        let gm = geometric_mean(&samples);
        let am = samples.iter().map(|&s| f64::from(s)).sum::<f64>() / samples.len() as f64;
        assert!(gm < am);
    }
}
