//! Per-value pass/fail predicates used by [`vote`](crate::vote).

pub trait ScoringFunction: Send + Sync {
    fn name(&self) -> &str;

    /// `true` when `value` counts as a vote in favour. NaN must score `false`.
    fn score(&self, value: f64) -> bool;
}

impl<S: ScoringFunction + ?Sized> ScoringFunction for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn score(&self, value: f64) -> bool {
        (**self).score(value)
    }
}

impl<S: ScoringFunction + ?Sized> ScoringFunction for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn score(&self, value: f64) -> bool {
        (**self).score(value)
    }
}

/// Passes values `>= cutoff`. On decile-binned maps `AtLeast(0.8)` selects
/// the top fifth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtLeast(pub f64);

impl ScoringFunction for AtLeast {
    fn name(&self) -> &str {
        "at_least"
    }

    fn score(&self, value: f64) -> bool {
        value >= self.0
    }
}

/// Wraps a closure as a [`ScoringFunction`].
pub struct FnScore<F> {
    name: String,
    f: F,
}

impl<F> FnScore<F>
where
    F: Fn(f64) -> bool + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self { name: name.into(), f }
    }
}

impl<F> ScoringFunction for FnScore<F>
where
    F: Fn(f64) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn score(&self, value: f64) -> bool {
        !value.is_nan() && (self.f)(value)
    }
}

impl<F> std::fmt::Debug for FnScore<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnScore").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_least_is_inclusive() {
        let s = AtLeast(0.8);
        assert!(s.score(0.8));
        assert!(s.score(0.9));
        assert!(!s.score(0.7));
        assert!(!s.score(f64::NAN));
    }

    #[test]
    fn closure_never_sees_nan() {
        let s = FnScore::new("not_positive", |v| !(v > 0.0));
        assert!(s.score(-1.0));
        assert!(!s.score(f64::NAN));
        assert_eq!(s.name(), "not_positive");
    }
}
