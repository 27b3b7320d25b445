//! Panel pipelines over a field and a reference series.
//!
//! Every pipeline computes its maps with `telesim-similarity`, rescales them
//! with a caller-chosen [`ScalingFunction`](telesim_scaling::ScalingFunction),
//! optionally combines or aggregates them, and returns a [`PanelGrid`] (or a
//! [`DependencyMatrix`]) for an external renderer. Nothing here draws.
//!
//! | Pipeline | Rows | Columns |
//! |----------|------|---------|
//! | [`similarities`] | subsets of a [`Mode`] | measures |
//! | [`dependency_matrix`] | measures | measures |
//! | [`combination_matrix`] | measures | measures |
//! | [`combinations_with_pearson`], [`power_of_dependency`], [`sign_of_correlation_strength`] | pearson | measures |
//! | [`level_of_agreement`] | 1 | 1 |
//! | [`agreement_defined_with`], [`std_between_measures`], [`entropy_between_measures`] | 1 | high, low, ambiguous |
//! | [`time_delayed_dependencies`] | shifts | measures |
//! | [`similarities_to_datasets`] | datasets | measures |
//! | [`time_delayed_similarities_to_datasets`] | datasets | shifts |
//! | [`time_delayed_agreeableness_to_datasets`] | datasets | shifts |
//!
//! Pipelines that compare maps against thresholds or across datasets keep
//! maps of normalised measures (Pearson, absolute Pearson) unscaled unless
//! [`AnalysisConfig::rescale_normalized`] is set.
//!
//! # Example
//!
//! ```
//! use ndarray::{Array1, Array4};
//! use telesim_analysis::{AnalysisConfig, Mode, similarities};
//! use telesim_field::{Field, ReferenceSeries};
//! use telesim_similarity::{Pearson, SimilarityMeasure, Spearman};
//!
//! let field = Field::new(Array4::from_shape_fn((48, 1, 2, 3), |(t, _, i, j)| {
//!     ((t * (i + 1)) as f64).sin() + j as f64
//! }))
//! .unwrap();
//! let reference = ReferenceSeries::new(Array1::from_shape_fn(48, |t| (t as f64).sin())).unwrap();
//! let config = AnalysisConfig::new();
//! let measures: [&dyn SimilarityMeasure; 2] = [&Pearson, &Spearman];
//!
//! let grid = similarities(
//!     &field,
//!     &reference,
//!     &measures,
//!     Mode::PerMonth,
//!     &config,
//!     &config.quantile_binning().unwrap(),
//! )
//! .unwrap();
//! assert_eq!(grid.n_rows(), 12);
//! assert_eq!(grid.column_labels, ["pearson", "spearman"]);
//! ```

mod agreement;
mod combinations;
mod config;
mod error;
mod maps;
mod panel;
mod similarities;

pub use agreement::{
    agreement_defined_with, entropy_between_measures, level_of_agreement, std_between_measures,
    time_delayed_agreeableness_to_datasets,
};
pub use combinations::{
    combination_matrix, combinations_with_pearson, dependency_matrix, power_of_dependency,
    sign_of_correlation_strength,
};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, ErrorKind};
pub use maps::{Dataset, Mode};
pub use panel::{DependencyMatrix, DependencyPair, Panel, PanelGrid, PanelSink, to_json};
pub use similarities::{
    similarities, similarities_to_datasets, time_delayed_dependencies,
    time_delayed_similarities_to_datasets,
};
