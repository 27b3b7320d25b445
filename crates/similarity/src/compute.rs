//! Per-cell similarity computation.

use ndarray::{Array2, ArrayView1, ArrayView4, Axis};
use rayon::prelude::*;
use telesim_field::{SimilarityMap, level_slab};
use tracing::{debug, warn};

use crate::error::SimilarityError;
use crate::measure::SimilarityMeasure;

/// Evaluates `measure` between `reference` and the series of every grid cell
/// on `level`.
///
/// `field` is `[time, level, lat, lon]`; the returned map is `[lat, lon]`.
/// Latitude rows are evaluated in parallel on the rayon pool. The inputs must
/// already be aligned in time (see `telesim-select`); no re-alignment happens
/// here.
///
/// # Errors
///
/// - [`SimilarityError::Field`] with `LevelOutOfRange` if `level` is past the last level.
/// - [`SimilarityError::LengthMismatch`] if `reference` and the time axis differ in length.
/// - [`SimilarityError::UnsupportedMeasure`] if the series is shorter than
///   [`SimilarityMeasure::min_len`] or the measure returns an infinite score.
#[tracing::instrument(skip_all, fields(measure = measure.name(), vertical_level = level))]
pub fn compute<M>(
    field: ArrayView4<'_, f64>,
    reference: ArrayView1<'_, f64>,
    level: usize,
    measure: &M,
) -> Result<SimilarityMap, SimilarityError>
where
    M: SimilarityMeasure + ?Sized,
{
    let slab = level_slab(field, level)?;
    let (n_times, n_lat, n_lon) = slab.dim();

    if reference.len() != n_times {
        return Err(SimilarityError::LengthMismatch {
            field_len: n_times,
            reference_len: reference.len(),
        });
    }
    if n_times < measure.min_len() {
        return Err(SimilarityError::UnsupportedMeasure {
            measure: measure.name().to_string(),
            reason: format!(
                "needs at least {} time steps, got {n_times}",
                measure.min_len()
            ),
        });
    }

    let reference: Vec<f64> = reference.to_vec();

    let rows: Vec<Vec<f64>> = (0..n_lat)
        .into_par_iter()
        .map(|i| {
            let row = slab.index_axis(Axis(1), i);
            let mut series = Vec::with_capacity(n_times);
            (0..n_lon)
                .map(|j| {
                    series.clear();
                    series.extend(row.column(j).iter().copied());
                    measure.evaluate(&series, &reference)
                })
                .collect()
        })
        .collect();

    let values: Vec<f64> = rows.into_iter().flatten().collect();
    if let Some(pos) = values.iter().position(|v| v.is_infinite()) {
        return Err(SimilarityError::UnsupportedMeasure {
            measure: measure.name().to_string(),
            reason: format!(
                "returned {} at cell ({}, {})",
                values[pos],
                pos / n_lon,
                pos % n_lon
            ),
        });
    }

    let map = SimilarityMap::new(
        Array2::from_shape_vec((n_lat, n_lon), values).map_err(telesim_field::FieldError::from)?,
    );
    if map.is_all_nan() {
        warn!(measure = measure.name(), "similarity undefined at every cell");
    }
    debug!(n_lat, n_lon, n_times, "similarity map computed");
    Ok(map)
}
