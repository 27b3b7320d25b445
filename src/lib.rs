//! # telesim
//!
//! Similarity maps between a one-dimensional reference series and every grid
//! cell of a `[time, level, lat, lon]` climate field.
//!
//! This crate bundles the workspace crates under one roof and adds the TOML
//! configuration layer and logging setup:
//!
//! | Module | Crate | Role |
//! |--------|-------|------|
//! | [`field`] | `telesim-field` | `Field`, `ReferenceSeries`, `SimilarityMap` |
//! | [`select`] | `telesim-select` | whole period, month, winter and shifted subsets |
//! | [`similarity`] | `telesim-similarity` | measures and the per-cell computation |
//! | [`scaling`] | `telesim-scaling` | quantile binning |
//! | [`combine`] | `telesim-combine` | element-wise map combination |
//! | [`agreement`] | `telesim-agreement` | votes, dispersion, high/low/ambiguous masks |
//! | [`analysis`] | `telesim-analysis` | panel pipelines for a renderer |
//! | [`stats`] | `telesim-stats` | statistics helpers |
//!
//! ```
//! use telesim::TelesimConfig;
//!
//! let config = TelesimConfig::from_toml_str("[measures]\nnames = [\"pearson\"]\n").unwrap();
//! assert_eq!(config.measures().unwrap()[0].name(), "pearson");
//! ```

pub mod config;
mod error;
pub mod logging;

pub use config::TelesimConfig;
pub use error::ConfigError;

pub use telesim_agreement as agreement;
pub use telesim_analysis as analysis;
pub use telesim_combine as combine;
pub use telesim_field as field;
pub use telesim_scaling as scaling;
pub use telesim_select as select;
pub use telesim_similarity as similarity;
pub use telesim_stats as stats;
