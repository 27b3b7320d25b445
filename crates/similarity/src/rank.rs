//! Rank correlation.

use statrs::statistics::{Data, OrderStatistics, RankTieBreaker};

use crate::measure::SimilarityMeasure;

/// Spearman's rank correlation: Pearson over average ranks of the finite pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spearman;

impl SimilarityMeasure for Spearman {
    fn name(&self) -> &str {
        "spearman"
    }

    fn evaluate(&self, series: &[f64], reference: &[f64]) -> f64 {
        let (xs, ys): (Vec<f64>, Vec<f64>) = series
            .iter()
            .zip(reference)
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| (x, y))
            .unzip();
        let rx = Data::new(xs).ranks(RankTieBreaker::Average);
        let ry = Data::new(ys).ranks(RankTieBreaker::Average);
        telesim_stats::pearson_correlation(&rx, &ry).unwrap_or(f64::NAN)
    }

    fn min_len(&self) -> usize {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn monotone_nonlinear_is_one() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 8.0, 27.0, 64.0, 125.0];
        assert_relative_eq!(Spearman.evaluate(&x, &y), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn reversed_is_minus_one() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [0.4, 0.3, 0.2, 0.1];
        assert_relative_eq!(Spearman.evaluate(&x, &y), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn ties_use_average_ranks() {
        // ranks x: [1.5, 1.5, 3, 4], ranks y: [1, 2, 3, 4]
        let x = [1.0, 1.0, 2.0, 3.0];
        let y = [1.0, 2.0, 3.0, 4.0];
        let expected =
            telesim_stats::pearson_correlation(&[1.5, 1.5, 3.0, 4.0], &[1.0, 2.0, 3.0, 4.0])
                .unwrap();
        assert_relative_eq!(Spearman.evaluate(&x, &y), expected, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_pairs_dropped() {
        let x = [1.0, f64::NAN, 2.0, 3.0, 4.0];
        let y = [1.0, 100.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(Spearman.evaluate(&x, &y), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn not_already_normalized() {
        assert!(!Spearman.already_normalized());
    }
}
