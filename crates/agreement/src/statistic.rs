//! Per-cell dispersion statistics over the values of N maps.

use telesim_stats::{entropy, population_sd};

/// Summarises the N values observed at one cell.
pub trait AgreementStatistic: Send + Sync {
    fn name(&self) -> &str;

    fn evaluate(&self, values: &[f64]) -> f64;

    /// `true` when low values mean strong agreement, so renderers should
    /// flip their colour scale.
    fn inverted(&self) -> bool {
        false
    }

    /// `true` when the statistic is undefined for negative values.
    fn requires_non_negative(&self) -> bool {
        false
    }
}

impl<S: AgreementStatistic + ?Sized> AgreementStatistic for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(&self, values: &[f64]) -> f64 {
        (**self).evaluate(values)
    }

    fn inverted(&self) -> bool {
        (**self).inverted()
    }

    fn requires_non_negative(&self) -> bool {
        (**self).requires_non_negative()
    }
}

impl<S: AgreementStatistic + ?Sized> AgreementStatistic for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(&self, values: &[f64]) -> f64 {
        (**self).evaluate(values)
    }

    fn inverted(&self) -> bool {
        (**self).inverted()
    }

    fn requires_non_negative(&self) -> bool {
        (**self).requires_non_negative()
    }
}

/// Population standard deviation. Zero when all maps agree exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdDev;

impl AgreementStatistic for StdDev {
    fn name(&self) -> &str {
        "std"
    }

    fn evaluate(&self, values: &[f64]) -> f64 {
        population_sd(values)
    }

    fn inverted(&self) -> bool {
        true
    }
}

/// Shannon entropy (natural log) of the values treated as weights.
///
/// NaN when a value is negative or all values are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Entropy;

impl AgreementStatistic for Entropy {
    fn name(&self) -> &str {
        "entropy"
    }

    fn evaluate(&self, values: &[f64]) -> f64 {
        entropy(values)
    }

    fn requires_non_negative(&self) -> bool {
        true
    }
}

/// Wraps a closure as an [`AgreementStatistic`].
pub struct FnStatistic<F> {
    name: String,
    f: F,
    inverted: bool,
}

impl<F> FnStatistic<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
            inverted: false,
        }
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }
}

impl<F> AgreementStatistic for FnStatistic<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, values: &[f64]) -> f64 {
        (self.f)(values)
    }

    fn inverted(&self) -> bool {
        self.inverted
    }
}

impl<F> std::fmt::Debug for FnStatistic<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnStatistic")
            .field("name", &self.name)
            .field("inverted", &self.inverted)
            .finish()
    }
}
