//! Two-dimensional `[lat, lon]` similarity map.

use ndarray::{Array2, ArrayView2};
use serde::Serialize;

use crate::error::FieldError;

/// Similarity values on the spatial grid, one per `(lat, lon)` cell.
///
/// Values are unbounded unless the map has been scaled. NaN marks cells where
/// the measure was undefined.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SimilarityMap {
    values: Array2<f64>,
}

impl SimilarityMap {
    /// Wraps a 2-D array.
    pub fn new(values: Array2<f64>) -> Self {
        Self { values }
    }

    /// Builds a map from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidShape`] if `values.len() != lat * lon`.
    pub fn from_shape_vec(shape: (usize, usize), values: Vec<f64>) -> Result<Self, FieldError> {
        Ok(Self::new(Array2::from_shape_vec(shape, values)?))
    }

    /// Map filled with a single value.
    pub fn filled(shape: (usize, usize), value: f64) -> Self {
        Self::new(Array2::from_elem(shape, value))
    }

    /// `(lat, lon)` shape.
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Borrowed view of the values.
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    /// Borrowed reference to the underlying array.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Value at `(lat, lon)`, or `None` outside the grid.
    pub fn get(&self, lat: usize, lon: usize) -> Option<f64> {
        self.values.get((lat, lon)).copied()
    }

    /// Iterator over all cell values in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// `true` when no cell holds a non-NaN value.
    pub fn is_all_nan(&self) -> bool {
        self.values.iter().all(|v| v.is_nan())
    }

    /// Applies `f` to every cell.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> SimilarityMap {
        SimilarityMap::new(self.values.mapv(f))
    }

    /// Consumes the map and returns the underlying array.
    pub fn into_inner(self) -> Array2<f64> {
        self.values
    }
}

impl From<Array2<f64>> for SimilarityMap {
    fn from(values: Array2<f64>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn shape_and_get() {
        let map = SimilarityMap::new(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(map.shape(), (2, 3));
        assert_eq!(map.get(1, 2), Some(6.0));
        assert_eq!(map.get(2, 0), None);
    }

    #[test]
    fn all_nan_detection() {
        assert!(SimilarityMap::filled((2, 2), f64::NAN).is_all_nan());
        let mut values = Array2::from_elem((2, 2), f64::NAN);
        values[[0, 1]] = 0.3;
        assert!(!SimilarityMap::new(values).is_all_nan());
    }

    #[test]
    fn serializes_as_ndarray() {
        let map = SimilarityMap::new(array![[0.5, 1.0]]);
        let json = serde_json::to_string(&map).unwrap();
        assert!(json.contains("\"dim\":[1,2]"));
        assert!(json.contains("\"data\":[0.5,1.0]"));
    }
}
