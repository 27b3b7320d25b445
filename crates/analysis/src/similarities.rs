//! Similarity panels: per subset, per time shift and per dataset.

use telesim_field::{Field, ReferenceSeries};
use telesim_scaling::ScalingFunction;
use telesim_select::{Selection, select};
use telesim_similarity::SimilarityMeasure;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::maps::{
    Dataset, Mode, comparable, measure_labels, raw_map, require, selection_labels,
};
use crate::panel::{Panel, PanelGrid};

/// Scaled similarity of every measure, one row per subset of `mode`.
///
/// Every map goes through `scaler`, normalised measures included.
///
/// # Errors
///
/// Fails on an invalid config, an empty measure list, or when a selection or
/// a similarity computation fails.
#[tracing::instrument(skip_all, fields(mode = %mode, n_measures = measures.len()))]
pub fn similarities<S>(
    field: &Field,
    reference: &ReferenceSeries,
    measures: &[&dyn SimilarityMeasure],
    mode: Mode,
    config: &AnalysisConfig,
    scaler: &S,
) -> Result<PanelGrid, AnalysisError>
where
    S: ScalingFunction + ?Sized,
{
    config.validate()?;
    require(measures, "measures")?;

    let selections = mode.selections();
    let mut grid = PanelGrid::new(
        format!("Similarities ({mode})"),
        selection_labels(&selections),
        measure_labels(measures),
    );
    for (row, &selection) in selections.iter().enumerate() {
        let subset = select(field, reference, selection)?;
        for (column, &measure) in measures.iter().enumerate() {
            let map = scaler.scale(&raw_map(&subset, measure, config)?);
            grid.push(Panel::new(
                row,
                column,
                format!("{} ({selection})", measure.name()),
                map,
            ));
        }
    }
    Ok(grid)
}

/// Similarity of every measure with the reference shifted against the field,
/// one row per shift.
///
/// See [`telesim_select::shift_ranges`] for the sign convention.
///
/// # Errors
///
/// As for [`similarities`], plus an empty shift list or a shift at least as
/// long as the series.
#[tracing::instrument(skip_all, fields(n_shifts = shifts.len(), n_measures = measures.len()))]
pub fn time_delayed_dependencies<S>(
    field: &Field,
    reference: &ReferenceSeries,
    shifts: &[isize],
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
    scaler: &S,
) -> Result<PanelGrid, AnalysisError>
where
    S: ScalingFunction + ?Sized,
{
    config.validate()?;
    require(shifts, "shifts")?;
    require(measures, "measures")?;

    let selections: Vec<Selection> = shifts.iter().map(|&k| Selection::Shift(k)).collect();
    let mut grid = PanelGrid::new(
        "Similarities to different time steps",
        selection_labels(&selections),
        measure_labels(measures),
    );
    for (row, &selection) in selections.iter().enumerate() {
        let subset = select(field, reference, selection)?;
        debug!(%selection, "computing shifted similarities");
        for (column, &measure) in measures.iter().enumerate() {
            let map = comparable(raw_map(&subset, measure, config)?, measure, scaler, config);
            grid.push(Panel::new(
                row,
                column,
                format!("{} ({selection})", measure.name()),
                map,
            ));
        }
    }
    Ok(grid)
}

/// Similarity of every measure against every dataset over the whole period,
/// one row per dataset.
///
/// # Errors
///
/// As for [`similarities`], plus an empty dataset list.
#[tracing::instrument(skip_all, fields(n_datasets = datasets.len(), n_measures = measures.len()))]
pub fn similarities_to_datasets<S>(
    datasets: &[Dataset<'_>],
    reference: &ReferenceSeries,
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
    scaler: &S,
) -> Result<PanelGrid, AnalysisError>
where
    S: ScalingFunction + ?Sized,
{
    config.validate()?;
    require(datasets, "datasets")?;
    require(measures, "measures")?;

    let mut grid = PanelGrid::new(
        "Similarities to different datasets",
        dataset_labels(datasets),
        measure_labels(measures),
    );
    for (row, dataset) in datasets.iter().enumerate() {
        let subset = select(dataset.field(), reference, Selection::WholePeriod)?;
        for (column, &measure) in measures.iter().enumerate() {
            let map = comparable(raw_map(&subset, measure, config)?, measure, scaler, config);
            grid.push(Panel::new(
                row,
                column,
                format!("{} ({})", measure.name(), dataset.label()),
                map,
            ));
        }
    }
    Ok(grid)
}

/// Similarity of one measure against every dataset for every shift; rows
/// are datasets, columns are shifts.
///
/// # Errors
///
/// As for [`time_delayed_dependencies`], plus an empty dataset list.
#[tracing::instrument(skip_all, fields(
    measure = measure.name(),
    n_datasets = datasets.len(),
    n_shifts = shifts.len(),
))]
pub fn time_delayed_similarities_to_datasets<S>(
    datasets: &[Dataset<'_>],
    reference: &ReferenceSeries,
    shifts: &[isize],
    measure: &dyn SimilarityMeasure,
    config: &AnalysisConfig,
    scaler: &S,
) -> Result<PanelGrid, AnalysisError>
where
    S: ScalingFunction + ?Sized,
{
    config.validate()?;
    require(datasets, "datasets")?;
    require(shifts, "shifts")?;

    let selections: Vec<Selection> = shifts.iter().map(|&k| Selection::Shift(k)).collect();
    let mut grid = PanelGrid::new(
        format!(
            "Similarities to different datasets for different time delays using {}",
            measure.name()
        ),
        dataset_labels(datasets),
        selection_labels(&selections),
    );
    for (row, dataset) in datasets.iter().enumerate() {
        for (column, &selection) in selections.iter().enumerate() {
            let subset = select(dataset.field(), reference, selection)?;
            let map = comparable(raw_map(&subset, measure, config)?, measure, scaler, config);
            grid.push(Panel::new(
                row,
                column,
                format!("{} ({selection})", dataset.label()),
                map,
            ));
        }
    }
    Ok(grid)
}

pub(crate) fn dataset_labels(datasets: &[Dataset<'_>]) -> Vec<String> {
    datasets.iter().map(|d| d.label().to_string()).collect()
}
