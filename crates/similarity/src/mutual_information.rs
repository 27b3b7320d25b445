//! Histogram estimate of mutual information.

use telesim_stats::equal_width_bin;

use crate::measure::SimilarityMeasure;

/// Default number of equal-width bins per series.
const DEFAULT_BINS: usize = 8;

/// Mutual information (natural log) of the joint equal-width histogram.
///
/// Each series is binned on its own finite range. Captures non-linear
/// dependency; zero for independent or constant series.
#[derive(Debug, Clone, Copy)]
pub struct MutualInformation {
    n_bins: usize,
}

impl MutualInformation {
    /// Largest bin count accepted from configuration; the joint histogram
    /// holds `n_bins * n_bins` counters.
    pub const MAX_BINS: usize = 1024;

    /// Creates the measure with `n_bins` bins per axis (at least 2).
    pub const fn new(n_bins: usize) -> Self {
        Self {
            n_bins: if n_bins < 2 { 2 } else { n_bins },
        }
    }

    /// Number of bins per axis.
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }
}

impl Default for MutualInformation {
    fn default() -> Self {
        Self::new(DEFAULT_BINS)
    }
}

fn finite_range(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

impl SimilarityMeasure for MutualInformation {
    fn name(&self) -> &str {
        "mutual_information"
    }

    fn evaluate(&self, series: &[f64], reference: &[f64]) -> f64 {
        let (xs, ys): (Vec<f64>, Vec<f64>) = series
            .iter()
            .zip(reference)
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| (x, y))
            .unzip();
        if xs.is_empty() {
            return f64::NAN;
        }

        let n = self.n_bins;
        let (x_lo, x_hi) = finite_range(&xs);
        let (y_lo, y_hi) = finite_range(&ys);

        let mut joint = vec![0usize; n * n];
        let mut px = vec![0usize; n];
        let mut py = vec![0usize; n];
        for (&x, &y) in xs.iter().zip(&ys) {
            let bx = equal_width_bin(x, x_lo, x_hi, n);
            let by = equal_width_bin(y, y_lo, y_hi, n);
            joint[bx * n + by] += 1;
            px[bx] += 1;
            py[by] += 1;
        }

        let total = xs.len() as f64;
        let mut mi = 0.0;
        for bx in 0..n {
            for by in 0..n {
                let c = joint[bx * n + by];
                if c == 0 {
                    continue;
                }
                let pxy = c as f64 / total;
                let marginal = (px[bx] as f64 / total) * (py[by] as f64 / total);
                mi += pxy * (pxy / marginal).ln();
            }
        }
        mi.max(0.0)
    }
}
