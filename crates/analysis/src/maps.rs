//! Building blocks shared by the pipelines.

use std::fmt;

use telesim_field::{Field, SimilarityMap};
use telesim_scaling::ScalingFunction;
use telesim_select::{MONTHS_PER_YEAR, Selection, Subset};
use telesim_similarity::{SimilarityMeasure, compute};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;

/// Time subsets shown by [`similarities`](crate::similarities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One row over all time steps.
    #[default]
    WholePeriod,
    /// Twelve rows, January to December.
    PerMonth,
    /// One row over January, February and December.
    WinterOnly,
}

impl Mode {
    /// The selections that make up the rows, in order.
    pub fn selections(self) -> Vec<Selection> {
        match self {
            Mode::WholePeriod => vec![Selection::WholePeriod],
            Mode::PerMonth => (0..MONTHS_PER_YEAR).map(Selection::PerMonth).collect(),
            Mode::WinterOnly => vec![Selection::WinterOnly],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::WholePeriod => write!(f, "whole period"),
            Mode::PerMonth => write!(f, "per month"),
            Mode::WinterOnly => write!(f, "winter only"),
        }
    }
}

/// A labelled field compared against the same reference as its siblings.
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'a> {
    label: &'a str,
    field: &'a Field,
}

impl<'a> Dataset<'a> {
    pub fn new(label: &'a str, field: &'a Field) -> Self {
        Self { label, field }
    }

    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn field(&self) -> &'a Field {
        self.field
    }
}

pub(crate) fn require<T>(items: &[T], what: &'static str) -> Result<(), AnalysisError> {
    if items.is_empty() {
        Err(AnalysisError::EmptyInput { what })
    } else {
        Ok(())
    }
}

pub(crate) fn measure_labels(measures: &[&dyn SimilarityMeasure]) -> Vec<String> {
    measures.iter().map(|m| m.name().to_string()).collect()
}

pub(crate) fn selection_labels(selections: &[Selection]) -> Vec<String> {
    selections.iter().map(ToString::to_string).collect()
}

/// Unscaled similarity of `measure` on the configured level.
pub(crate) fn raw_map(
    subset: &Subset<'_>,
    measure: &dyn SimilarityMeasure,
    config: &AnalysisConfig,
) -> Result<SimilarityMap, AnalysisError> {
    let map = compute(subset.field(), subset.reference(), config.level(), measure)?;
    debug!(measure = measure.name(), n_times = subset.n_times(), "raw map");
    Ok(map)
}

/// Rescales `map` unless `measure` is already normalised and the config
/// keeps normalised maps as they are.
pub(crate) fn comparable<S>(
    map: SimilarityMap,
    measure: &dyn SimilarityMeasure,
    scaler: &S,
    config: &AnalysisConfig,
) -> SimilarityMap
where
    S: ScalingFunction + ?Sized,
{
    if measure.already_normalized() && !config.rescale_normalized() {
        map
    } else {
        scaler.scale(&map)
    }
}

/// `35%`-style label for a threshold.
pub(crate) fn percent(fraction: f64) -> String {
    format!("{}%", (fraction * 1.0e4).round() / 100.0)
}
