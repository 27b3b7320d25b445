//! Agreement panels across several measures.

use telesim_agreement::{
    AgreementClass, AgreementStatistic, Entropy, ScoringFunction, StdDev, dispersion, vote,
};
use telesim_field::{Field, ReferenceSeries, SimilarityMap};
use telesim_scaling::ScalingFunction;
use telesim_select::{Selection, Subset, select};
use telesim_similarity::SimilarityMeasure;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::maps::{Dataset, comparable, measure_labels, percent, raw_map, require, selection_labels};
use crate::panel::{Panel, PanelGrid};
use crate::similarities::dataset_labels;

/// Comparable maps of every measure, rejected when one of them leaves the
/// domain of `statistic`.
fn comparable_maps<S, A>(
    subset: &Subset<'_>,
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
    scaler: &S,
    statistic: &A,
) -> Result<Vec<SimilarityMap>, AnalysisError>
where
    S: ScalingFunction + ?Sized,
    A: AgreementStatistic + ?Sized,
{
    measures
        .iter()
        .map(|&m| {
            let map = comparable(raw_map(subset, m, config)?, m, scaler, config);
            if statistic.requires_non_negative() {
                let cells = map.iter().filter(|&v| v < 0.0).count();
                if cells > 0 {
                    return Err(AnalysisError::StatisticDomain {
                        statistic: statistic.name().to_string(),
                        measure: m.name().to_string(),
                        cells,
                    });
                }
            }
            Ok(map)
        })
        .collect()
}

fn list(measures: &[&dyn SimilarityMeasure]) -> String {
    format!("[{}]", measure_labels(measures).join(", "))
}

/// Share of measures (in percent) whose scaled value passes `scoring`.
///
/// With decile binning and `AtLeast(0.8)` each cell tells for how many
/// measures it lies in the top fifth of its map.
///
/// # Errors
///
/// Fails on an invalid config, an empty measure list, or a failing
/// similarity computation.
#[tracing::instrument(skip_all, fields(n_measures = measures.len(), scoring = scoring.name()))]
pub fn level_of_agreement<S, F>(
    field: &Field,
    reference: &ReferenceSeries,
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
    scaler: &S,
    scoring: &F,
) -> Result<PanelGrid, AnalysisError>
where
    S: ScalingFunction + ?Sized,
    F: ScoringFunction + ?Sized,
{
    config.validate()?;
    require(measures, "measures")?;

    let subset = select(field, reference, Selection::WholePeriod)?;
    let scaled = measures
        .iter()
        .map(|&m| raw_map(&subset, m, config).map(|map| scaler.scale(&map)))
        .collect::<Result<Vec<_>, _>>()?;
    let votes = vote(&scaled, scoring)?;

    let title = format!("Level of agreement (in %) between {}", list(measures));
    let mut grid = PanelGrid::new(
        title.clone(),
        vec![Selection::WholePeriod.to_string()],
        vec![scoring.name().to_string()],
    );
    grid.push(Panel::new(0, 0, title, votes));
    Ok(grid)
}

/// Dispersion of the comparable maps under `statistic`, shown three times:
/// masked to the high, the low and the ambiguous cells.
///
/// Maps of normalised measures bypass `scaler` unless
/// [`AnalysisConfig::rescale_normalized`] is set.
///
/// # Errors
///
/// As for [`level_of_agreement`], plus [`AnalysisError::StatisticDomain`]
/// when `statistic` needs non-negative values and a bypassed map, such as a
/// signed Pearson map, holds negative cells.
#[tracing::instrument(skip_all, fields(n_measures = measures.len(), statistic = statistic.name()))]
pub fn agreement_defined_with<S, A>(
    field: &Field,
    reference: &ReferenceSeries,
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
    scaler: &S,
    statistic: &A,
) -> Result<PanelGrid, AnalysisError>
where
    S: ScalingFunction + ?Sized,
    A: AgreementStatistic + ?Sized,
{
    config.validate()?;
    require(measures, "measures")?;

    let subset = select(field, reference, Selection::WholePeriod)?;
    let maps = comparable_maps(&subset, measures, config, scaler, statistic)?;
    let result = dispersion(&maps, statistic, config.threshold())?;

    let threshold = percent(config.threshold());
    let titles = [
        format!("Agree high values (Top {threshold})"),
        format!("Agree low values (Lowest {threshold})"),
        "Not sure".to_string(),
    ];
    let mut grid = PanelGrid::new(
        format!(
            "Agreeableness defined with {} between {}",
            statistic.name(),
            list(measures)
        ),
        vec![statistic.name().to_string()],
        AgreementClass::ALL.iter().map(ToString::to_string).collect(),
    );
    for (column, (class, title)) in AgreementClass::ALL.iter().zip(titles).enumerate() {
        debug!(%class, cells = result.classes().count(*class), "agreement class");
        grid.push(
            Panel::new(0, column, title, result.values().clone())
                .with_mask(result.classes().mask(*class).clone())
                .with_inverted(result.inverted()),
        );
    }
    Ok(grid)
}

/// [`agreement_defined_with`] using the population standard deviation.
///
/// # Errors
///
/// As for [`level_of_agreement`].
pub fn std_between_measures<S>(
    field: &Field,
    reference: &ReferenceSeries,
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
    scaler: &S,
) -> Result<PanelGrid, AnalysisError>
where
    S: ScalingFunction + ?Sized,
{
    agreement_defined_with(field, reference, measures, config, scaler, &StdDev)
}

/// [`agreement_defined_with`] using the Shannon entropy.
///
/// # Errors
///
/// As for [`agreement_defined_with`]; a signed Pearson map fails unless
/// [`AnalysisConfig::rescale_normalized`] is set.
pub fn entropy_between_measures<S>(
    field: &Field,
    reference: &ReferenceSeries,
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
    scaler: &S,
) -> Result<PanelGrid, AnalysisError>
where
    S: ScalingFunction + ?Sized,
{
    agreement_defined_with(field, reference, measures, config, scaler, &Entropy)
}

/// Dispersion between the measures for every dataset and shift; rows are
/// datasets, columns are shifts.
///
/// # Errors
///
/// As for [`agreement_defined_with`], plus empty dataset or shift lists and
/// shifts at least as long as the series.
#[tracing::instrument(skip_all, fields(
    n_datasets = datasets.len(),
    n_shifts = shifts.len(),
    n_measures = measures.len(),
    statistic = statistic.name(),
))]
pub fn time_delayed_agreeableness_to_datasets<S, A>(
    datasets: &[Dataset<'_>],
    reference: &ReferenceSeries,
    shifts: &[isize],
    measures: &[&dyn SimilarityMeasure],
    config: &AnalysisConfig,
    scaler: &S,
    statistic: &A,
) -> Result<PanelGrid, AnalysisError>
where
    S: ScalingFunction + ?Sized,
    A: AgreementStatistic + ?Sized,
{
    config.validate()?;
    require(datasets, "datasets")?;
    require(shifts, "shifts")?;
    require(measures, "measures")?;

    let selections: Vec<Selection> = shifts.iter().map(|&k| Selection::Shift(k)).collect();
    let mut grid = PanelGrid::new(
        format!(
            "Agreeableness between {} to different datasets for different time delays using {}",
            list(measures),
            statistic.name()
        ),
        dataset_labels(datasets),
        selection_labels(&selections),
    );
    for (row, dataset) in datasets.iter().enumerate() {
        for (column, &selection) in selections.iter().enumerate() {
            let subset = select(dataset.field(), reference, selection)?;
            let maps = comparable_maps(&subset, measures, config, scaler, statistic)?;
            let result = dispersion(&maps, statistic, config.threshold())?;
            let inverted = result.inverted();
            let (values, _) = result.into_parts();
            grid.push(
                Panel::new(row, column, format!("{} ({selection})", dataset.label()), values)
                    .with_inverted(inverted),
            );
        }
    }
    Ok(grid)
}
