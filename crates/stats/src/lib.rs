//! Statistical helper functions for telesim.
//!
//! Everything here works on plain slices. NaN handling is explicit per
//! function: the correlation helpers drop non-finite pairs, the moment
//! helpers propagate NaN like any arithmetic would.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Variance with `n - ddof` denominator.
///
/// `ddof = 0` is the population variance (numpy's default), `ddof = 1` the
/// sample variance. Returns NaN when `n <= ddof`.
pub fn variance_ddof(data: &[f64], ddof: usize) -> f64 {
    let n = data.len();
    if n <= ddof {
        return f64::NAN;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (n - ddof) as f64
}

/// Population standard deviation (N denominator). NaN if empty.
pub fn population_sd(data: &[f64]) -> f64 {
    variance_ddof(data, 0).sqrt()
}

/// Type-7 quantile (linear interpolation between order statistics).
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Copy the finite values of `data` into a new ascending vector.
pub fn sorted_finite(data: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut sorted: Vec<f64> = data.into_iter().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Pearson correlation coefficient.
///
/// Filters to indices where both `x[i]` and `y[i]` are finite.
/// Returns `None` if fewer than 3 finite pairs or if the denominator is zero
/// (constant input).
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(xi, yi)| (*xi, *yi))
        .collect();

    if pairs.len() < 3 {
        return None;
    }

    let n = pairs.len() as f64;
    let mx: f64 = pairs.iter().map(|(xi, _)| xi).sum::<f64>() / n;
    let my: f64 = pairs.iter().map(|(_, yi)| yi).sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for &(xi, yi) in &pairs {
        let dx = xi - mx;
        let dy = yi - my;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denom = (sum_xx * sum_yy).sqrt();
    if denom == 0.0 {
        return None;
    }

    // Rounding can push |r| a hair above 1 for perfectly collinear input.
    Some((sum_xy / denom).clamp(-1.0, 1.0))
}

/// Shannon entropy (natural log) of a set of non-negative weights.
///
/// The weights are normalised to sum to one first, so `[1, 1]` and
/// `[0.4, 0.4]` both give `ln 2`. Zero weights contribute nothing.
/// Returns NaN if any weight is negative or NaN, or if the total is zero.
pub fn entropy(weights: &[f64]) -> f64 {
    if weights.iter().any(|w| w.is_nan() || *w < 0.0) {
        return f64::NAN;
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return f64::NAN;
    }
    weights
        .iter()
        .filter(|&&w| w > 0.0)
        .map(|&w| {
            let p = w / total;
            -p * p.ln()
        })
        .sum()
}

/// Index of the equal-width bin that `value` falls into on `[lo, hi]`.
///
/// The upper edge belongs to the last bin. A degenerate range (`hi <= lo`)
/// puts everything into bin 0.
pub fn equal_width_bin(value: f64, lo: f64, hi: f64, n_bins: usize) -> usize {
    if hi <= lo || n_bins <= 1 {
        return 0;
    }
    let frac = (value - lo) / (hi - lo);
    ((frac * n_bins as f64).floor() as usize).min(n_bins - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_population_sd() {
        // numpy.std([2, 4, 4, 4, 5, 5, 7, 9]) == 2.0
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_sd(&data), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_population_sd_empty_is_nan() {
        assert!(population_sd(&[]).is_nan());
    }

    #[test]
    fn test_variance_two() {
        // [3.0, 7.0]: mean=5, sum_sq=8
        assert_relative_eq!(variance_ddof(&[3.0, 7.0], 1), 8.0, epsilon = 1e-10);
        assert_relative_eq!(variance_ddof(&[3.0, 7.0], 0), 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_quantile_type7_median() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_type7(&sorted, 0.5), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quantile_type7_deciles() {
        // 0..=99: h = 99 * 0.1 = 9.9
        let sorted: Vec<f64> = (0..100).map(f64::from).collect();
        assert_relative_eq!(quantile_type7(&sorted, 0.1), 9.9, epsilon = 1e-10);
        assert_relative_eq!(quantile_type7(&sorted, 0.9), 89.1, epsilon = 1e-10);
    }

    #[test]
    fn test_quantile_type7_bounds() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_type7(&sorted, 0.0), 1.0, epsilon = 1e-10);
        assert_relative_eq!(quantile_type7(&sorted, 1.0), 5.0, epsilon = 1e-10);
    }

    #[test]
    #[should_panic(expected = "quantile_type7: input must not be empty")]
    fn test_quantile_type7_empty_panics() {
        quantile_type7(&[], 0.5);
    }

    #[test]
    fn test_sorted_finite_drops_nan_and_inf() {
        let sorted = sorted_finite([3.0, f64::NAN, 1.0, f64::INFINITY, 2.0]);
        assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_pearson_correlation_perfect() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert_relative_eq!(pearson_correlation(&x, &y).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pearson_correlation_anti() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [4.0, 3.0, 2.0, 1.0];
        assert_relative_eq!(pearson_correlation(&x, &y).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pearson_correlation_insufficient() {
        assert!(pearson_correlation(&[1.0, 2.0], &[3.0, 4.0]).is_none());
    }

    #[test]
    fn test_pearson_correlation_constant() {
        assert!(pearson_correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_pearson_correlation_with_nan() {
        let x = [1.0, f64::NAN, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, f64::NAN, 8.0, 10.0];
        // Finite pairs: (1,2), (4,8), (5,10)
        assert_relative_eq!(pearson_correlation(&x, &y).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_entropy_uniform() {
        assert_relative_eq!(entropy(&[1.0, 1.0]), 2.0_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(entropy(&[0.4, 0.4, 0.4, 0.4]), 4.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_entropy_single_mass_is_zero() {
        assert_relative_eq!(entropy(&[0.0, 0.7, 0.0]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_entropy_invalid() {
        assert!(entropy(&[0.0, 0.0]).is_nan());
        assert!(entropy(&[-0.1, 0.5]).is_nan());
        assert!(entropy(&[f64::NAN, 0.5]).is_nan());
    }

    #[test]
    fn test_equal_width_bin() {
        assert_eq!(equal_width_bin(0.0, 0.0, 1.0, 4), 0);
        assert_eq!(equal_width_bin(0.3, 0.0, 1.0, 4), 1);
        assert_eq!(equal_width_bin(1.0, 0.0, 1.0, 4), 3);
        assert_eq!(equal_width_bin(5.0, 5.0, 5.0, 4), 0);
    }
}
