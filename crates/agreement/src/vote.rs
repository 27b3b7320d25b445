//! Vote fractions.

use ndarray::{Array2, Zip};
use telesim_field::SimilarityMap;
use tracing::debug;

use crate::common_shape;
use crate::error::AgreementError;
use crate::scoring::ScoringFunction;

/// Percentage of maps whose value passes `score`, per cell.
///
/// `out[i, j] = 100 * #{k : score(maps[k][i, j])} / N`, so with three maps
/// and one passing value the cell holds `100 / 3`.
///
/// # Errors
///
/// [`AgreementError::Empty`] for no maps, [`AgreementError::ShapeMismatch`]
/// when the shapes differ.
pub fn vote<S>(maps: &[SimilarityMap], score: &S) -> Result<SimilarityMap, AgreementError>
where
    S: ScoringFunction + ?Sized,
{
    let shape = common_shape(maps)?;
    let mut tally = Array2::<u32>::zeros(shape);
    for map in maps {
        Zip::from(&mut tally)
            .and(map.values())
            .for_each(|count, &v| {
                if score.score(v) {
                    *count += 1;
                }
            });
    }
    let n = maps.len() as f64;
    debug!(n_maps = maps.len(), scoring = score.name(), "votes tallied");
    Ok(SimilarityMap::new(
        tally.mapv(|count| 100.0 * f64::from(count) / n),
    ))
}
