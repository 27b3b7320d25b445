//! The scaling trait and the trivial strategies.

use telesim_field::SimilarityMap;

/// Maps a similarity map onto a common scale.
///
/// The result must have the same shape as the input and must not depend on
/// anything but the input map.
pub trait ScalingFunction: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Returns the rescaled map.
    fn scale(&self, map: &SimilarityMap) -> SimilarityMap;
}

impl<S: ScalingFunction + ?Sized> ScalingFunction for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn scale(&self, map: &SimilarityMap) -> SimilarityMap {
        (**self).scale(map)
    }
}

impl<S: ScalingFunction + ?Sized> ScalingFunction for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn scale(&self, map: &SimilarityMap) -> SimilarityMap {
        (**self).scale(map)
    }
}

/// Returns the map unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl ScalingFunction for Identity {
    fn name(&self) -> &str {
        "identity"
    }

    fn scale(&self, map: &SimilarityMap) -> SimilarityMap {
        map.clone()
    }
}

/// Wraps a closure as a [`ScalingFunction`].
pub struct FnScaling<F> {
    name: String,
    f: F,
}

impl<F> FnScaling<F>
where
    F: Fn(&SimilarityMap) -> SimilarityMap + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self { name: name.into(), f }
    }
}

impl<F> ScalingFunction for FnScaling<F>
where
    F: Fn(&SimilarityMap) -> SimilarityMap + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn scale(&self, map: &SimilarityMap) -> SimilarityMap {
        (self.f)(map)
    }
}

impl<F> std::fmt::Debug for FnScaling<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnScaling").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_a_copy() {
        let map = SimilarityMap::from_shape_vec((1, 3), vec![0.2, f64::NAN, -4.0]).unwrap();
        let out = Identity.scale(&map);
        assert_eq!(out.get(0, 0), Some(0.2));
        assert!(out.get(0, 1).unwrap().is_nan());
        assert_eq!(out.get(0, 2), Some(-4.0));
    }

    #[test]
    fn closure_scaler() {
        let halve = FnScaling::new("halve", |m: &SimilarityMap| m.map(|v| v / 2.0));
        let map = SimilarityMap::filled((2, 2), 3.0);
        assert_eq!(halve.name(), "halve");
        assert!(halve.scale(&map).iter().all(|v| v == 1.5));
        assert_eq!(format!("{halve:?}"), "FnScaling { name: \"halve\" }");
    }

    #[test]
    fn boxed_and_borrowed() {
        let boxed: Box<dyn ScalingFunction> = Box::new(Identity);
        assert_eq!(boxed.name(), "identity");
        let by_ref = &Identity;
        assert_eq!(by_ref.name(), "identity");
    }
}
