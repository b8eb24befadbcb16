//! Engine and series parameters — defaults, clamping, TOML loading.
//!
//! Out-of-range values never fail: they are rounded/clamped into the valid
//! range when the engine consumes them.

use crate::series::{DEFAULT_LENGTH, DEFAULT_SEED};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const MIN_BASE_PERIOD: f64 = 14.0;
pub const MAX_BASE_PERIOD: f64 = 120.0;
pub const DEFAULT_BASE_PERIOD: f64 = 55.0;

pub const MIN_SENSITIVITY: f64 = 0.10;
pub const MAX_SENSITIVITY: f64 = 0.85;
pub const DEFAULT_SENSITIVITY: f64 = 0.35;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Smoothing parameters: Hull base period and adaptive sensitivity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    pub base_period: f64,
    pub sensitivity: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            base_period: DEFAULT_BASE_PERIOD,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl EngineParams {
    pub fn new(base_period: f64, sensitivity: f64) -> Self {
        Self {
            base_period,
            sensitivity,
        }
        .clamped()
    }

    /// Round the period to the nearest integer and clamp both fields into
    /// their valid ranges.
    pub fn clamped(&self) -> Self {
        Self {
            base_period: self
                .base_period
                .round()
                .clamp(MIN_BASE_PERIOD, MAX_BASE_PERIOD),
            sensitivity: self.sensitivity.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY),
        }
    }
}

/// Synthetic series parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesParams {
    pub length: usize,
    pub seed: f64,
}

impl Default for SeriesParams {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            seed: DEFAULT_SEED,
        }
    }
}

/// Full chart configuration, loadable from TOML:
///
/// ```toml
/// [series]
/// length = 220
/// seed = 35.0
///
/// [engine]
/// base_period = 55.0
/// sensitivity = 0.35
/// ```
///
/// Every section and field is optional; missing values take defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub series: SeriesParams,
    pub engine: EngineParams,
}

impl ChartConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_in_range() {
        let params = EngineParams::default();
        assert_eq!(params, params.clamped());
        assert_eq!(params.base_period, 55.0);
        assert_eq!(params.sensitivity, 0.35);
    }

    #[test]
    fn out_of_range_values_clamp() {
        let params = EngineParams::new(3.0, 2.0);
        assert_eq!(params.base_period, MIN_BASE_PERIOD);
        assert_eq!(params.sensitivity, MAX_SENSITIVITY);

        let params = EngineParams::new(500.0, 0.0);
        assert_eq!(params.base_period, MAX_BASE_PERIOD);
        assert_eq!(params.sensitivity, MIN_SENSITIVITY);
    }

    #[test]
    fn fractional_period_rounds() {
        assert_eq!(EngineParams::new(54.5, 0.35).base_period, 55.0);
        assert_eq!(EngineParams::new(54.4, 0.35).base_period, 54.0);
    }

    #[test]
    fn full_toml_parses() {
        let config = ChartConfig::from_toml(
            r#"
[series]
length = 300
seed = 7.0

[engine]
base_period = 21.0
sensitivity = 0.6
"#,
        )
        .unwrap();
        assert_eq!(config.series.length, 300);
        assert_eq!(config.series.seed, 7.0);
        assert_eq!(config.engine.base_period, 21.0);
        assert_eq!(config.engine.sensitivity, 0.6);
    }

    #[test]
    fn empty_toml_takes_defaults() {
        let config = ChartConfig::from_toml("").unwrap();
        assert_eq!(config, ChartConfig::default());
    }

    #[test]
    fn partial_section_takes_field_defaults() {
        let config = ChartConfig::from_toml("[engine]\nbase_period = 90.0\n").unwrap();
        assert_eq!(config.engine.base_period, 90.0);
        assert_eq!(config.engine.sensitivity, DEFAULT_SENSITIVITY);
        assert_eq!(config.series, SeriesParams::default());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ChartConfig::from_toml("[engine\nbase_period = 90.0").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = ChartConfig::from_file(Path::new("/nonexistent/ahma.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
