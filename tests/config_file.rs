//! Loading a configuration from disk and running a pipeline with it.

use std::io::Write;

use ndarray::{Array1, Array4};
use telesim::analysis::{level_of_agreement, time_delayed_dependencies};
use telesim::field::{Field, ReferenceSeries};
use telesim::similarity::SimilarityMeasure;
use telesim::{ConfigError, TelesimConfig};

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn inputs() -> (Field, ReferenceSeries) {
    let reference = Array1::from_shape_fn(36, |t| ((t * 7 % 11) as f64).sin());
    let field = Array4::from_shape_fn((36, 1, 3, 4), |(t, _, i, j)| {
        reference[t] * (j as f64 - 1.5) + ((t * (i + 3)) as f64).cos() * 0.3
    });
    (Field::new(field).unwrap(), ReferenceSeries::new(reference).unwrap())
}

#[test]
fn from_path_round_trip() {
    let file = write_config(
        r#"
shifts = [0, 1]

[measures]
names = ["pearson", "spearman", "mutual_information"]
mutual_information_bins = 5
"#,
    );
    let config = TelesimConfig::from_path(file.path()).unwrap();
    assert_eq!(config.shifts, [0, 1]);
    assert_eq!(config.measures.mutual_information_bins, 5);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = TelesimConfig::from_path(&path).unwrap_err();
    match err {
        ConfigError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn configured_pipelines() {
    let file = write_config(
        r#"
shifts = [-1, 0, 2]

[analysis]
n_bins = 5

[measures]
names = ["pearson_abs", "spearman"]

[agreement]
score_at_least = 0.6
"#,
    );
    let config = TelesimConfig::from_path(file.path()).unwrap();
    let analysis = config.analysis_config().unwrap();
    let scaler = analysis.quantile_binning().unwrap();
    let boxed = config.measures().unwrap();
    let measures: Vec<&dyn SimilarityMeasure> = boxed.iter().map(|m| &**m).collect();
    let (field, reference) = inputs();

    let votes = level_of_agreement(
        &field,
        &reference,
        &measures,
        &analysis,
        &scaler,
        &config.scoring(),
    )
    .unwrap();
    assert!(votes.panels[0].values.iter().all(|&v| v == 0.0 || v == 50.0 || v == 100.0));

    let delayed =
        time_delayed_dependencies(&field, &reference, &config.shifts, &measures, &analysis, &scaler)
            .unwrap();
    assert_eq!(delayed.n_rows(), 3);
    assert_eq!(delayed.column_labels, ["pearson_abs", "spearman"]);
}
