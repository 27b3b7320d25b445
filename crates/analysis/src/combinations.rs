//! Pairwise dependency and combination panels.

use telesim_combine::{CombinationFunction, PowerCombination, SignedStrength, combine};
use telesim_field::{Field, ReferenceSeries, SimilarityMap};
use telesim_scaling::ScalingFunction;
use telesim_select::{Selection, Subset, select};
use telesim_similarity::{Pearson, SimilarityMeasure};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::maps::{measure_labels, raw_map, require};
use crate::panel::{DependencyMatrix, DependencyPair, Panel, PanelGrid};

fn whole_period<'a>(
    field: &'a Field,
    reference: &'a ReferenceSeries,
) -> Result<Subset<'a>, AnalysisError> {
    Ok(select(field, reference, Selection::WholePeriod)?)
}

fn scaled_maps<S>(
    subset: &Subset<'_>,
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
    scaler: &S,
) -> Result<Vec<SimilarityMap>, AnalysisError>
where
    S: ScalingFunction + ?Sized,
{
    measures
        .iter()
        .map(|&m| raw_map(subset, m, config).map(|map| scaler.scale(&map)))
        .collect()
}

/// Raw values of every measure plotted against every other measure.
///
/// Pair `(i, j)` has measure `j` on the x axis and measure `i` on the y axis.
/// Only cells where both values are finite are kept.
///
/// # Errors
///
/// Fails on an invalid config, an empty measure list, or a failing
/// similarity computation.
#[tracing::instrument(skip_all, fields(n_measures = measures.len()))]
pub fn dependency_matrix(
    field: &Field,
    reference: &ReferenceSeries,
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
) -> Result<DependencyMatrix, AnalysisError> {
    config.validate()?;
    require(measures, "measures")?;

    let subset = whole_period(field, reference)?;
    let maps = measures
        .iter()
        .map(|&m| raw_map(&subset, m, config))
        .collect::<Result<Vec<_>, _>>()?;

    let mut pairs = Vec::with_capacity(maps.len() * maps.len());
    for (row, y_map) in maps.iter().enumerate() {
        for (column, x_map) in maps.iter().enumerate() {
            let (x, y) = x_map
                .iter()
                .zip(y_map.iter())
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .unzip();
            pairs.push(DependencyPair { row, column, x, y });
        }
    }
    Ok(DependencyMatrix {
        title: "Dependency between pairs of similarity measures".to_string(),
        labels: measure_labels(measures),
        pairs,
    })
}

/// `combination(scaled_i, scaled_j)` for every ordered pair of measures.
///
/// # Errors
///
/// As for [`dependency_matrix`].
#[tracing::instrument(
    skip_all,
    fields(n_measures = measures.len(), combination = combination.name())
)]
pub fn combination_matrix<S, C>(
    field: &Field,
    reference: &ReferenceSeries,
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
    scaler: &S,
    combination: &C,
) -> Result<PanelGrid, AnalysisError>
where
    S: ScalingFunction + ?Sized,
    C: CombinationFunction + ?Sized,
{
    config.validate()?;
    require(measures, "measures")?;

    let subset = whole_period(field, reference)?;
    let scaled = scaled_maps(&subset, measures, config, scaler)?;
    let labels = measure_labels(measures);
    let mut grid = PanelGrid::new("Combination of similarity measures", labels.clone(), labels);
    for (row, a) in scaled.iter().enumerate() {
        for (column, b) in scaled.iter().enumerate() {
            let title = format!(
                "{}({}, {})",
                combination.name(),
                measures[row].name(),
                measures[column].name()
            );
            grid.push(Panel::new(row, column, title, combine(a, b, combination)?));
        }
    }
    Ok(grid)
}

/// The raw Pearson map combined with the scaled map of every measure,
/// one column per measure.
///
/// # Errors
///
/// As for [`dependency_matrix`].
#[tracing::instrument(
    skip_all,
    fields(n_measures = measures.len(), combination = combination.name())
)]
pub fn combinations_with_pearson<S, C>(
    field: &Field,
    reference: &ReferenceSeries,
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
    scaler: &S,
    combination: &C,
) -> Result<PanelGrid, AnalysisError>
where
    S: ScalingFunction + ?Sized,
    C: CombinationFunction + ?Sized,
{
    anchored_on_pearson(
        "Combination with Pearson's Correlation",
        field,
        reference,
        measures,
        config,
        scaler,
        combination,
    )
}

/// [`combinations_with_pearson`] through [`PowerCombination`]: only the
/// strength of the correlation enters.
///
/// # Errors
///
/// As for [`dependency_matrix`].
pub fn power_of_dependency<S, C>(
    field: &Field,
    reference: &ReferenceSeries,
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
    scaler: &S,
    combination: C,
) -> Result<PanelGrid, AnalysisError>
where
    S: ScalingFunction + ?Sized,
    C: CombinationFunction,
{
    anchored_on_pearson(
        "Combination with absolute values of Pearson's Correlation",
        field,
        reference,
        measures,
        config,
        scaler,
        &PowerCombination::new(combination),
    )
}

/// [`combinations_with_pearson`] through [`SignedStrength`]: the sign of the
/// correlation times the combined strengths.
///
/// # Errors
///
/// As for [`dependency_matrix`].
pub fn sign_of_correlation_strength<S, C>(
    field: &Field,
    reference: &ReferenceSeries,
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
    scaler: &S,
    combination: C,
) -> Result<PanelGrid, AnalysisError>
where
    S: ScalingFunction + ?Sized,
    C: CombinationFunction,
{
    anchored_on_pearson(
        "Sign of Pearson's and values of both combined",
        field,
        reference,
        measures,
        config,
        scaler,
        &SignedStrength::new(combination),
    )
}

fn anchored_on_pearson<S, C>(
    title: &str,
    field: &Field,
    reference: &ReferenceSeries,
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
    scaler: &S,
    combination: &C,
) -> Result<PanelGrid, AnalysisError>
where
    S: ScalingFunction + ?Sized,
    C: CombinationFunction + ?Sized,
{
    config.validate()?;
    require(measures, "measures")?;

    let subset = whole_period(field, reference)?;
    let scaled = scaled_maps(&subset, measures, config, scaler)?;
    let pearson = raw_map(&subset, &Pearson, config)?;

    let mut grid = PanelGrid::new(
        title,
        vec!["pearson".to_string()],
        measure_labels(measures),
    );
    for (column, map) in scaled.iter().enumerate() {
        let title = format!("{}(pearson, {})", combination.name(), measures[column].name());
        grid.push(Panel::new(0, column, title, combine(&pearson, map, combination)?));
    }
    Ok(grid)
}
