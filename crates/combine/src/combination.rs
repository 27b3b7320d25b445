//! Binary combination strategies.

/// Combines two cell values into one.
pub trait CombinationFunction: Send + Sync {
    /// Short identifier used in panel titles.
    fn name(&self) -> &str;

    fn combine(&self, a: f64, b: f64) -> f64;
}

impl<C: CombinationFunction + ?Sized> CombinationFunction for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn combine(&self, a: f64, b: f64) -> f64 {
        (**self).combine(a, b)
    }
}

impl<C: CombinationFunction + ?Sized> CombinationFunction for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn combine(&self, a: f64, b: f64) -> f64 {
        (**self).combine(a, b)
    }
}

/// `a * b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Product;

impl CombinationFunction for Product {
    fn name(&self) -> &str {
        "product"
    }

    fn combine(&self, a: f64, b: f64) -> f64 {
        a * b
    }
}

/// `(a + b) / 2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mean;

impl CombinationFunction for Mean {
    fn name(&self) -> &str {
        "mean"
    }

    fn combine(&self, a: f64, b: f64) -> f64 {
        (a + b) / 2.0
    }
}

/// Smaller of the two values; NaN if either is NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

impl CombinationFunction for Min {
    fn name(&self) -> &str {
        "min"
    }

    fn combine(&self, a: f64, b: f64) -> f64 {
        if a.is_nan() || b.is_nan() {
            f64::NAN
        } else {
            a.min(b)
        }
    }
}

/// Larger of the two values; NaN if either is NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

impl CombinationFunction for Max {
    fn name(&self) -> &str {
        "max"
    }

    fn combine(&self, a: f64, b: f64) -> f64 {
        if a.is_nan() || b.is_nan() {
            f64::NAN
        } else {
            a.max(b)
        }
    }
}

/// Wraps a closure as a [`CombinationFunction`].
pub struct FnCombination<F> {
    name: String,
    f: F,
}

impl<F> FnCombination<F>
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self { name: name.into(), f }
    }
}

impl<F> CombinationFunction for FnCombination<F>
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn combine(&self, a: f64, b: f64) -> f64 {
        (self.f)(a, b)
    }
}

impl<F> std::fmt::Debug for FnCombination<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCombination")
            .field("name", &self.name)
            .finish()
    }
}

/// `f(|p|, s)`: the strength of the correlation `p` combined with `s`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerCombination<C> {
    inner: C,
}

impl<C: CombinationFunction> PowerCombination<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: CombinationFunction> CombinationFunction for PowerCombination<C> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn combine(&self, p: f64, s: f64) -> f64 {
        self.inner.combine(p.abs(), s)
    }
}

/// `sign(p) * f(|p|, |s|)`.
///
/// `sign(0) = 0`. A NaN in either input gives NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignedStrength<C> {
    inner: C,
}

impl<C: CombinationFunction> SignedStrength<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: CombinationFunction> CombinationFunction for SignedStrength<C> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn combine(&self, p: f64, s: f64) -> f64 {
        if p.is_nan() || s.is_nan() {
            return f64::NAN;
        }
        let sign = if p > 0.0 {
            1.0
        } else if p < 0.0 {
            -1.0
        } else {
            0.0
        };
        sign * self.inner.combine(p.abs(), s.abs())
    }
}
