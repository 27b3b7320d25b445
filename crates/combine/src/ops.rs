//! Map-level combination.

use ndarray::Zip;
use telesim_field::SimilarityMap;

use crate::combination::{CombinationFunction, PowerCombination, SignedStrength};
use crate::error::CombineError;

fn check_shapes(a: &SimilarityMap, b: &SimilarityMap) -> Result<(), CombineError> {
    if a.shape() == b.shape() {
        Ok(())
    } else {
        Err(CombineError::ShapeMismatch {
            expected: a.shape(),
            got: b.shape(),
        })
    }
}

/// Applies `f` cell by cell: `out[i, j] = f(a[i, j], b[i, j])`.
///
/// # Errors
///
/// Returns [`CombineError::ShapeMismatch`] if the maps differ in shape.
pub fn combine<C>(
    a: &SimilarityMap,
    b: &SimilarityMap,
    f: &C,
) -> Result<SimilarityMap, CombineError>
where
    C: CombinationFunction + ?Sized,
{
    check_shapes(a, b)?;
    let values = Zip::from(a.values())
        .and(b.values())
        .par_map_collect(|&x, &y| f.combine(x, y));
    Ok(SimilarityMap::new(values))
}

/// Combines the strength of `pearson` with `other`, see [`PowerCombination`].
///
/// # Errors
///
/// Returns [`CombineError::ShapeMismatch`] if the maps differ in shape.
pub fn power_combination<C>(
    pearson: &SimilarityMap,
    other: &SimilarityMap,
    f: C,
) -> Result<SimilarityMap, CombineError>
where
    C: CombinationFunction,
{
    combine(pearson, other, &PowerCombination::new(f))
}

/// Combines `pearson` with `other` keeping the correlation's sign, see
/// [`SignedStrength`].
///
/// # Errors
///
/// Returns [`CombineError::ShapeMismatch`] if the maps differ in shape.
pub fn sign_of_correlation_and_combined_strength<C>(
    pearson: &SimilarityMap,
    other: &SimilarityMap,
    f: C,
) -> Result<SimilarityMap, CombineError>
where
    C: CombinationFunction,
{
    combine(pearson, other, &SignedStrength::new(f))
}
