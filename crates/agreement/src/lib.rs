//! Agreement between several similarity maps of the same grid.
//!
//! Given `N >= 1` maps (usually one per measure, already scaled) this crate
//! answers two questions per cell:
//!
//! - **Vote**: what share of the maps pass a [`ScoringFunction`]?
//!   [`vote`] returns `100 * count / N`.
//! - **Dispersion**: how spread out are the N values? [`dispersion`]
//!   evaluates an [`AgreementStatistic`] and classifies every cell as
//!   [`AgreementClass::High`] (all values `>= 1 - t`), [`AgreementClass::Low`]
//!   (all values `<= t`) or [`AgreementClass::Ambiguous`].
//!
//! The threshold `t` must lie in `[0, 0.5)` so that high and low cannot
//! overlap; [`DEFAULT_THRESHOLD`] is `0.35`.

mod classify;
mod error;
mod scoring;
mod statistic;
mod vote;

pub use classify::{
    AgreementClass, AgreementResult, Classification, DEFAULT_THRESHOLD, classify, dispersion,
    validate_threshold,
};
pub use error::AgreementError;
pub use scoring::{AtLeast, FnScore, ScoringFunction};
pub use statistic::{AgreementStatistic, Entropy, FnStatistic, StdDev};
pub use vote::vote;

use telesim_field::SimilarityMap;

/// Shape shared by every map in `maps`.
///
/// # Errors
///
/// [`AgreementError::Empty`] for an empty slice, [`AgreementError::ShapeMismatch`]
/// naming the first map whose shape differs from the first one.
pub(crate) fn common_shape(maps: &[SimilarityMap]) -> Result<(usize, usize), AgreementError> {
    let first = maps.first().ok_or(AgreementError::Empty)?;
    let expected = first.shape();
    for (index, map) in maps.iter().enumerate().skip(1) {
        if map.shape() != expected {
            return Err(AgreementError::ShapeMismatch {
                index,
                expected,
                got: map.shape(),
            });
        }
    }
    Ok(expected)
}
