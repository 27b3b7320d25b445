//! Four-dimensional climate field container.

use ndarray::{Array4, ArrayView3, ArrayView4, Axis};

use crate::error::FieldError;
use crate::validate;

/// Axis positions of a [`Field`].
pub mod axis {
    use ndarray::Axis;

    /// Time steps (monthly, January first).
    pub const TIME: Axis = Axis(0);
    /// Vertical levels.
    pub const LEVEL: Axis = Axis(1);
    /// Latitude rows.
    pub const LAT: Axis = Axis(2);
    /// Longitude columns.
    pub const LON: Axis = Axis(3);
}

const AXIS_NAMES: [&str; 4] = ["time", "level", "lat", "lon"];

/// Gridded field with dimensions `[time, level, lat, lon]`.
///
/// Immutable once constructed. Missing values are represented as NaN and
/// are left to the similarity measures to handle.
#[derive(Debug, Clone)]
pub struct Field {
    data: Array4<f64>,
}

impl Field {
    /// Wraps a 4-D array after checking that no dimension is empty.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Validation`] listing every empty axis.
    pub fn new(data: Array4<f64>) -> Result<Self, FieldError> {
        validate::validate_non_empty_axes(data.shape(), &AXIS_NAMES).finish()?;
        Ok(Self { data })
    }

    /// Builds a field from a flat buffer in row-major `[time, level, lat, lon]` order.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidShape`] if `values.len()` does not match
    /// `shape`, or [`FieldError::Validation`] if an axis is empty.
    pub fn from_shape_vec(
        shape: (usize, usize, usize, usize),
        values: Vec<f64>,
    ) -> Result<Self, FieldError> {
        Self::new(Array4::from_shape_vec(shape, values)?)
    }

    /// Number of time steps.
    pub fn n_times(&self) -> usize {
        self.data.len_of(axis::TIME)
    }

    /// Number of vertical levels.
    pub fn n_levels(&self) -> usize {
        self.data.len_of(axis::LEVEL)
    }

    /// Number of latitude rows.
    pub fn n_lat(&self) -> usize {
        self.data.len_of(axis::LAT)
    }

    /// Number of longitude columns.
    pub fn n_lon(&self) -> usize {
        self.data.len_of(axis::LON)
    }

    /// `(lat, lon)` shape shared by every similarity map computed from this field.
    pub fn spatial_shape(&self) -> (usize, usize) {
        (self.n_lat(), self.n_lon())
    }

    /// Whole-field view.
    pub fn view(&self) -> ArrayView4<'_, f64> {
        self.data.view()
    }

    /// `[time, lat, lon]` slab of one vertical level.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::LevelOutOfRange`] if `level >= n_levels()`.
    pub fn level(&self, level: usize) -> Result<ArrayView3<'_, f64>, FieldError> {
        level_slab(self.view(), level)
    }

    /// Consumes the field and returns the underlying array.
    pub fn into_inner(self) -> Array4<f64> {
        self.data
    }
}

/// `[time, lat, lon]` slab of one vertical level of any field view.
///
/// # Errors
///
/// Returns [`FieldError::LevelOutOfRange`] if `level` is past the last level.
pub fn level_slab(
    field: ArrayView4<'_, f64>,
    level: usize,
) -> Result<ArrayView3<'_, f64>, FieldError> {
    let n_levels = field.len_of(Axis(1));
    if level >= n_levels {
        return Err(FieldError::LevelOutOfRange { level, n_levels });
    }
    Ok(field.index_axis_move(Axis(1), level))
}

impl TryFrom<Array4<f64>> for Field {
    type Error = FieldError;

    fn try_from(data: Array4<f64>) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_field() -> Field {
        let values: Vec<f64> = (0..24 * 2 * 3 * 4).map(f64::from).collect();
        Field::from_shape_vec((24, 2, 3, 4), values).unwrap()
    }

    #[test]
    fn dimensions() {
        let field = ramp_field();
        assert_eq!(field.n_times(), 24);
        assert_eq!(field.n_levels(), 2);
        assert_eq!(field.n_lat(), 3);
        assert_eq!(field.n_lon(), 4);
        assert_eq!(field.spatial_shape(), (3, 4));
    }

    #[test]
    fn empty_axes_rejected() {
        let err = Field::new(Array4::zeros((0, 1, 2, 0))).unwrap_err();
        match err {
            FieldError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert!(details.contains("time axis is empty"));
                assert!(details.contains("lon axis is empty"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn wrong_buffer_length() {
        let err = Field::from_shape_vec((2, 1, 2, 2), vec![0.0; 7]).unwrap_err();
        assert!(matches!(err, FieldError::InvalidShape { .. }));
    }

    #[test]
    fn level_slab_selects_level() {
        let field = ramp_field();
        let slab = field.level(1).unwrap();
        assert_eq!(slab.shape(), &[24, 3, 4]);
        // Row-major: index (t=0, level=1, lat=0, lon=0) = 1 * 12
        assert_eq!(slab[[0, 0, 0]], 12.0);
    }

    #[test]
    fn level_out_of_range() {
        let field = ramp_field();
        assert_eq!(
            field.level(2).unwrap_err(),
            FieldError::LevelOutOfRange {
                level: 2,
                n_levels: 2
            }
        );
    }

    #[test]
    fn try_from_array() {
        let field = Field::try_from(Array4::<f64>::zeros((12, 1, 2, 2))).unwrap();
        assert_eq!(field.n_times(), 12);
    }
}
