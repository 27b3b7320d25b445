//! The similarity measure trait and a closure adapter.

/// Scores the resemblance of a grid-cell series to the reference series.
///
/// Implementations must be pure: the same inputs always give the same score.
/// Degenerate input (constant series, too few finite values) should yield
/// NaN rather than an infinite value; [`compute`](crate::compute) rejects
/// infinite scores as a contract violation.
pub trait SimilarityMeasure: Send + Sync {
    /// Short identifier used in labels and logs.
    fn name(&self) -> &str;

    /// Similarity of `series` to `reference`. Both slices have equal length.
    fn evaluate(&self, series: &[f64], reference: &[f64]) -> f64;

    /// `true` when the native range is already comparable across measures,
    /// so the map should bypass quantile rescaling.
    fn already_normalized(&self) -> bool {
        false
    }

    /// Shortest series the measure accepts.
    fn min_len(&self) -> usize {
        2
    }
}

impl<M: SimilarityMeasure + ?Sized> SimilarityMeasure for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(&self, series: &[f64], reference: &[f64]) -> f64 {
        (**self).evaluate(series, reference)
    }

    fn already_normalized(&self) -> bool {
        (**self).already_normalized()
    }

    fn min_len(&self) -> usize {
        (**self).min_len()
    }
}

/// Wraps a closure as a [`SimilarityMeasure`].
///
/// # Example
///
/// ```
/// use telesim_similarity::{FnMeasure, SimilarityMeasure};
///
/// let dot = FnMeasure::new("dot", |a: &[f64], b: &[f64]| {
///     a.iter().zip(b).map(|(x, y)| x * y).sum()
/// });
/// assert_eq!(dot.evaluate(&[1.0, 2.0], &[3.0, 4.0]), 11.0);
/// ```
pub struct FnMeasure<F> {
    name: String,
    f: F,
    already_normalized: bool,
    min_len: usize,
}

impl<F> FnMeasure<F>
where
    F: Fn(&[f64], &[f64]) -> f64 + Send + Sync,
{
    /// Creates a measure that is rescaled like any other and accepts series of length >= 2.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
            already_normalized: false,
            min_len: 2,
        }
    }

    /// Marks the measure as already normalised.
    pub fn with_already_normalized(mut self, b: bool) -> Self {
        self.already_normalized = b;
        self
    }

    /// Sets the shortest accepted series length.
    pub fn with_min_len(mut self, n: usize) -> Self {
        self.min_len = n;
        self
    }
}

impl<F> SimilarityMeasure for FnMeasure<F>
where
    F: Fn(&[f64], &[f64]) -> f64 + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, series: &[f64], reference: &[f64]) -> f64 {
        (self.f)(series, reference)
    }

    fn already_normalized(&self) -> bool {
        self.already_normalized
    }

    fn min_len(&self) -> usize {
        self.min_len
    }
}

impl<F> std::fmt::Debug for FnMeasure<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnMeasure")
            .field("name", &self.name)
            .field("already_normalized", &self.already_normalized)
            .field("min_len", &self.min_len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_measure_defaults() {
        let m = FnMeasure::new("first", |a: &[f64], _: &[f64]| a[0]);
        assert_eq!(m.name(), "first");
        assert!(!m.already_normalized());
        assert_eq!(m.min_len(), 2);
        assert_eq!(m.evaluate(&[4.0, 5.0], &[0.0, 0.0]), 4.0);
    }

    #[test]
    fn fn_measure_builders() {
        let m = FnMeasure::new("x", |_: &[f64], _: &[f64]| 0.0)
            .with_already_normalized(true)
            .with_min_len(5);
        assert!(m.already_normalized());
        assert_eq!(m.min_len(), 5);
    }

    #[test]
    fn boxed_measure_delegates() {
        let boxed: Box<dyn SimilarityMeasure> = Box::new(
            FnMeasure::new("boxed", |_: &[f64], _: &[f64]| 1.5).with_already_normalized(true),
        );
        assert_eq!(boxed.name(), "boxed");
        assert!(boxed.already_normalized());
        assert_eq!(boxed.evaluate(&[0.0], &[0.0]), 1.5);
    }
}
