//! Configuration for the spline report driver, read from TOML.
//!
//! Every field has a default, so an empty file (or no file) reproduces the
//! reference scenario: samples (1, 2), (3, 3), (5, 9), (8, 10), a 100-point
//! dense grid, and a query at x = 4.
//!
//! ```toml
//! x = [1.0, 3.0, 5.0, 8.0]
//! y = [2.0, 3.0, 9.0, 10.0]
//! n_points = 100
//! query = 4.0
//! boundary = "natural"        # natural | not-a-knot | clamped
//! extrapolation = "cubic"     # cubic | linear | hold | reject
//! ```
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use crate::cubic::{BoundaryCondition, Extrapolation};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

fn default_x() -> Vec<f64> {
    vec![1.0, 3.0, 5.0, 8.0]
}
fn default_y() -> Vec<f64> {
    vec![2.0, 3.0, 9.0, 10.0]
}
fn default_n_points() -> usize {
    100
}
fn default_query() -> f64 {
    4.0
}

/// Boundary condition as named in a config file; slopes for `clamped`
/// come from `left_slope` and `right_slope`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryKind {
    #[default]
    Natural,
    NotAKnot,
    Clamped,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default = "default_x")]
    pub x: Vec<f64>,
    #[serde(default = "default_y")]
    pub y: Vec<f64>,
    #[serde(default = "default_n_points")]
    pub n_points: usize,
    #[serde(default = "default_query")]
    pub query: f64,
    #[serde(default)]
    pub boundary: BoundaryKind,
    #[serde(default)]
    pub left_slope: f64,
    #[serde(default)]
    pub right_slope: f64,
    #[serde(default)]
    pub extrapolation: Extrapolation,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            x: default_x(),
            y: default_y(),
            n_points: default_n_points(),
            query: default_query(),
            boundary: BoundaryKind::default(),
            left_slope: 0.0,
            right_slope: 0.0,
            extrapolation: Extrapolation::default(),
        }
    }
}

impl ReportConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let input = fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }

    /// Boundary condition to build the spline with
    pub fn boundary_condition(&self) -> BoundaryCondition<f64> {
        match self.boundary {
            BoundaryKind::Natural => BoundaryCondition::Natural,
            BoundaryKind::NotAKnot => BoundaryCondition::NotAKnot,
            BoundaryKind::Clamped => BoundaryCondition::Clamped {
                left: self.left_slope,
                right: self.right_slope,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::{BoundaryKind, ReportConfig};
    use crate::cubic::{BoundaryCondition, Extrapolation};

    #[test]
    fn test_empty_is_reference_scenario() {
        let cfg = ReportConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, ReportConfig::default());
        assert_eq!(cfg.x, vec![1.0, 3.0, 5.0, 8.0]);
        assert_eq!(cfg.y, vec![2.0, 3.0, 9.0, 10.0]);
        assert_eq!(cfg.n_points, 100);
        assert_eq!(cfg.query, 4.0);
        assert_eq!(cfg.boundary_condition(), BoundaryCondition::Natural);
        assert_eq!(cfg.extrapolation, Extrapolation::Cubic);
    }

    #[test]
    fn test_full_config() {
        let cfg = ReportConfig::from_toml_str(
            r#"
            x = [0.0, 1.0, 2.0]
            y = [0.0, 1.0, 4.0]
            n_points = 5
            query = 1.5
            boundary = "clamped"
            left_slope = 0.0
            right_slope = 4.0
            extrapolation = "hold"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(cfg.n_points, 5);
        assert_eq!(cfg.boundary, BoundaryKind::Clamped);
        assert_eq!(
            cfg.boundary_condition(),
            BoundaryCondition::Clamped {
                left: 0.0,
                right: 4.0
            }
        );
        assert_eq!(cfg.extrapolation, Extrapolation::Hold);

        let cfg = ReportConfig::from_toml_str(r#"boundary = "not-a-knot""#).unwrap();
        assert_eq!(cfg.boundary_condition(), BoundaryCondition::NotAKnot);
    }

    #[test]
    fn test_boundary_kind_names() {
        use clap::ValueEnum;

        assert_eq!(BoundaryKind::from_str("natural", false), Ok(BoundaryKind::Natural));
        assert_eq!(BoundaryKind::from_str("not-a-knot", false), Ok(BoundaryKind::NotAKnot));
        assert_eq!(BoundaryKind::from_str("clamped", false), Ok(BoundaryKind::Clamped));
        assert!(BoundaryKind::from_str("periodic", false).is_err());

        // Command-line and config spellings agree
        for kind in BoundaryKind::value_variants() {
            let name = kind.to_possible_value().unwrap().get_name().to_owned();
            let cfg = ReportConfig::from_toml_str(&format!("boundary = \"{name}\"")).unwrap();
            assert_eq!(cfg.boundary, *kind);
        }
    }

    #[test]
    fn test_rejects_unknown() {
        assert!(ReportConfig::from_toml_str(r#"boundary = "periodic""#).is_err());
        assert!(ReportConfig::from_toml_str("npoints = 3").is_err());
    }
}
