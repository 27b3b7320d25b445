//! TOML configuration for telesim analyses.
//!
//! ```toml
//! shifts = [0, 1, 2]
//!
//! [analysis]
//! level = 0
//! threshold = 0.35
//! n_bins = 10
//! rescale_normalized = false
//!
//! [measures]
//! names = ["pearson", "spearman", "mutual_information"]
//! mutual_information_bins = 8
//!
//! [agreement]
//! score_at_least = 0.8
//! statistic = "std"
//! ```
//!
//! Every key is optional.

use std::path::Path;

use serde::Deserialize;
use telesim_agreement::{AgreementStatistic, AtLeast, DEFAULT_THRESHOLD, Entropy, StdDev};
use telesim_analysis::AnalysisConfig;
use telesim_scaling::DEFAULT_BINS;
use telesim_similarity::{MutualInformation, SimilarityMeasure, measure_by_name};
use tracing::debug;

use crate::error::ConfigError;

/// Top-level telesim configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelesimConfig {
    /// Time shifts for the time-delayed pipelines.
    #[serde(default = "default_shifts")]
    pub shifts: Vec<isize>,

    /// Settings read by every pipeline.
    #[serde(default)]
    pub analysis: AnalysisToml,

    /// Measures to compute.
    #[serde(default)]
    pub measures: MeasuresToml,

    /// Agreement scoring.
    #[serde(default)]
    pub agreement: AgreementToml,
}

impl Default for TelesimConfig {
    fn default() -> Self {
        Self {
            shifts: default_shifts(),
            analysis: AnalysisToml::default(),
            measures: MeasuresToml::default(),
            agreement: AgreementToml::default(),
        }
    }
}

fn default_shifts() -> Vec<isize> {
    vec![0]
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    #[serde(default)]
    pub level: usize,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_n_bins")]
    pub n_bins: usize,
    #[serde(default)]
    pub rescale_normalized: bool,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            level: 0,
            threshold: default_threshold(),
            n_bins: default_n_bins(),
            rescale_normalized: false,
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}
fn default_n_bins() -> usize {
    DEFAULT_BINS
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeasuresToml {
    #[serde(default = "default_measure_names")]
    pub names: Vec<String>,
    #[serde(default = "default_mi_bins")]
    pub mutual_information_bins: usize,
}

impl Default for MeasuresToml {
    fn default() -> Self {
        Self {
            names: default_measure_names(),
            mutual_information_bins: default_mi_bins(),
        }
    }
}

fn default_measure_names() -> Vec<String> {
    vec!["pearson".to_string(), "spearman".to_string()]
}
fn default_mi_bins() -> usize {
    8
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgreementToml {
    /// Cutoff of the vote scoring function.
    #[serde(default = "default_score_at_least")]
    pub score_at_least: f64,
    /// `"std"` or `"entropy"`.
    #[serde(default = "default_statistic")]
    pub statistic: String,
}

impl Default for AgreementToml {
    fn default() -> Self {
        Self {
            score_at_least: default_score_at_least(),
            statistic: default_statistic(),
        }
    }
}

fn default_score_at_least() -> f64 {
    0.8
}
fn default_statistic() -> String {
    "std".to_string()
}

impl TelesimConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid configuration.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::from_toml_str(&text)
    }

    /// The validated pipeline configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Analysis`] if a value is out of range.
    pub fn analysis_config(&self) -> Result<AnalysisConfig, ConfigError> {
        let config = AnalysisConfig::new()
            .with_level(self.analysis.level)
            .with_threshold(self.analysis.threshold)
            .with_n_bins(self.analysis.n_bins)
            .with_rescale_normalized(self.analysis.rescale_normalized);
        config.validate()?;
        Ok(config)
    }

    /// The configured measures, in order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Measure`] for an unknown name and
    /// [`ConfigError::MeasureBins`] if `mutual_information_bins` is outside
    /// `2..=MutualInformation::MAX_BINS`.
    pub fn measures(&self) -> Result<Vec<Box<dyn SimilarityMeasure>>, ConfigError> {
        let bins = self.measures.mutual_information_bins;
        if !(2..=MutualInformation::MAX_BINS).contains(&bins) {
            return Err(ConfigError::MeasureBins {
                bins,
                max: MutualInformation::MAX_BINS,
            });
        }
        self.measures
            .names
            .iter()
            .map(|name| match name.as_str() {
                "mutual_information" => {
                    Ok(Box::new(MutualInformation::new(bins)) as Box<dyn SimilarityMeasure>)
                }
                other => measure_by_name(other).map_err(ConfigError::from),
            })
            .collect()
    }

    /// Vote scoring: values at or above `score_at_least`.
    pub fn scoring(&self) -> AtLeast {
        AtLeast(self.agreement.score_at_least)
    }

    /// The configured dispersion statistic.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownStatistic`] for names other than
    /// `std` and `entropy`.
    pub fn statistic(&self) -> Result<Box<dyn AgreementStatistic>, ConfigError> {
        match self.agreement.statistic.as_str() {
            "std" => Ok(Box::new(StdDev)),
            "entropy" => Ok(Box::new(Entropy)),
            other => Err(ConfigError::UnknownStatistic {
                name: other.to_string(),
            }),
        }
    }
}
