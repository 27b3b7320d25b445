//! Panel grids: the hand-off between the pipelines and a renderer.

use ndarray::{Array2, Zip};
use serde::Serialize;
use telesim_field::SimilarityMap;

use crate::error::AnalysisError;

/// One map in a [`PanelGrid`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub row: usize,
    pub column: usize,
    pub title: String,
    /// `[lat, lon]` values; NaN where undefined.
    pub values: Array2<f64>,
    /// Cells to draw when present; `false` cells are hidden.
    pub mask: Option<Array2<bool>>,
    /// Low values are the interesting ones; flip the colour scale.
    pub inverted: bool,
}

impl Panel {
    pub fn new(row: usize, column: usize, title: impl Into<String>, map: SimilarityMap) -> Self {
        Self {
            row,
            column,
            title: title.into(),
            values: map.into_inner(),
            mask: None,
            inverted: false,
        }
    }

    pub fn with_mask(mut self, mask: Array2<bool>) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Values with hidden cells replaced by NaN.
    pub fn masked_values(&self) -> Array2<f64> {
        match &self.mask {
            Some(mask) => Zip::from(&self.values)
                .and(mask)
                .map_collect(|&v, &keep| if keep { v } else { f64::NAN }),
            None => self.values.clone(),
        }
    }
}

/// Ordered grid of panels with row and column labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelGrid {
    pub title: String,
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    /// Row-major.
    pub panels: Vec<Panel>,
}

impl PanelGrid {
    pub fn new(
        title: impl Into<String>,
        row_labels: Vec<String>,
        column_labels: Vec<String>,
    ) -> Self {
        let capacity = row_labels.len() * column_labels.len();
        Self {
            title: title.into(),
            row_labels,
            column_labels,
            panels: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    pub fn n_columns(&self) -> usize {
        self.column_labels.len()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Panel> {
        self.panels
            .iter()
            .find(|p| p.row == row && p.column == column)
    }

    /// Hands the grid to `sink`.
    ///
    /// # Errors
    ///
    /// Whatever the sink returns.
    pub fn render<S: PanelSink + ?Sized>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.draw(self)
    }
}

/// Scatter data for measure `row` (y axis) against measure `column` (x axis).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyPair {
    pub row: usize,
    pub column: usize,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// N by N scatter pairs between the raw maps of N measures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyMatrix {
    pub title: String,
    pub labels: Vec<String>,
    /// Row-major.
    pub pairs: Vec<DependencyPair>,
}

impl DependencyMatrix {
    pub fn get(&self, row: usize, column: usize) -> Option<&DependencyPair> {
        self.pairs
            .iter()
            .find(|p| p.row == row && p.column == column)
    }
}

/// Consumer of panel grids, e.g. a map-projection renderer.
pub trait PanelSink {
    type Error;

    fn draw(&mut self, grid: &PanelGrid) -> Result<(), Self::Error>;

    /// Scatter matrices are optional for sinks that only draw maps.
    fn draw_dependencies(&mut self, _matrix: &DependencyMatrix) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Serialise `value` (a [`PanelGrid`] or [`DependencyMatrix`]) to pretty JSON.
///
/// NaN cells become `null`.
///
/// # Errors
///
/// Returns [`AnalysisError::Serialization`] if serde_json fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AnalysisError> {
    serde_json::to_string_pretty(value).map_err(|e| AnalysisError::Serialization {
        reason: e.to_string(),
    })
}
