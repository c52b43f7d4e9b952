//! Driver configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line arguments. Defaults reproduce the classic batch: the four
//! parity cases, the `S = 102, K = 122` Greek set, the 80..=123 spot mesh,
//! the 8 × 8 × 5 European grid and the `S = 110, K = 100` perpetual.

use optgrid_core::types::{OptionType, ParameterSet};
use optgrid_risk::greeks::{GreeksConfig, DEFAULT_STEPS, DELTA_APPROX_STEP};
use optgrid_risk::mesh::spot_mesh;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::render::TableFormat;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "optgrid.toml";

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "OPTGRID_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// File could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// One or more values are out of range.
    #[error("Invalid configuration: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels accepted by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything, including per-step finite differences.
    Trace,
    /// Sweep summaries.
    Debug,
    /// Command progress.
    Info,
    /// Non-finite results and other anomalies only.
    #[default]
    Warn,
    /// Failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Put-call parity batch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParitySection {
    /// Parameter sets checked in order.
    pub batch: Vec<ParameterSet>,
}

impl Default for ParitySection {
    fn default() -> Self {
        let call = OptionType::Call;
        Self {
            batch: vec![
                ParameterSet::new(102.0, 122.0, 1.65, 0.045, 0.43, 0.0, call),
                ParameterSet::new(100.0, 100.0, 1.0, 0.0, 0.2, 0.0, call),
                ParameterSet::new(5.0, 10.0, 1.0, 0.12, 0.5, 0.12, call),
                ParameterSet::new(100.0, 100.0, 30.0, 0.08, 0.3, 0.08, call),
            ],
        }
    }
}

/// European Greek set, comparison spot and step sizes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GreeksSection {
    /// Base parameters for comparisons, ladders and sensitivities.
    pub params: ParameterSet,
    /// Spot at which analytic and finite-difference Greeks are compared.
    pub spot: f64,
    /// Finite-difference steps.
    pub steps: Vec<f64>,
    /// Step for approximate sensitivities.
    pub approx_step: f64,
}

impl Default for GreeksSection {
    fn default() -> Self {
        Self {
            params: ParameterSet::new(102.0, 122.0, 1.65, 0.045, 0.43, 0.0, OptionType::Call),
            spot: 102.0,
            steps: DEFAULT_STEPS.to_vec(),
            approx_step: DELTA_APPROX_STEP,
        }
    }
}

impl GreeksSection {
    /// Step configuration for the risk layer.
    pub fn greeks_config(&self) -> GreeksConfig {
        GreeksConfig {
            steps: self.steps.clone(),
            approx_step: self.approx_step,
        }
    }
}

/// Spot mesh bounds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MeshSection {
    /// First spot.
    pub start: f64,
    /// Last spot (inclusive when on the mesh).
    pub end: f64,
    /// Spacing.
    pub step: f64,
}

impl Default for MeshSection {
    fn default() -> Self {
        Self {
            start: 80.0,
            end: 123.0,
            step: 1.0,
        }
    }
}

impl MeshSection {
    /// Materialises the mesh.
    pub fn spots(&self) -> Result<Vec<f64>, optgrid_risk::RiskError> {
        spot_mesh(self.start, self.end, self.step)
    }
}

/// European and perpetual matrix axes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridSection {
    /// Fixed spot for European matrices.
    pub spot: f64,
    /// Fixed rate for European matrices.
    pub rate: f64,
    /// Cost of carry; the rate when absent.
    pub cost_of_carry: Option<f64>,
    /// European option type.
    pub option_type: OptionType,
    /// Row labels.
    pub strikes: Vec<f64>,
    /// Column labels.
    pub volatilities: Vec<f64>,
    /// One matrix per expiry.
    pub expiries: Vec<f64>,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            cost_of_carry: None,
            option_type: OptionType::Call,
            strikes: vec![90.0, 95.0, 100.0, 105.0, 110.0, 120.0, 130.0, 140.0],
            volatilities: vec![0.1, 0.15, 0.2, 0.25, 0.3, 0.35, 0.4, 0.5],
            expiries: vec![0.25, 0.5, 0.75, 1.0, 1.5],
        }
    }
}

/// Perpetual American settings (`T = 0`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PerpetualSection {
    /// Spot for the perpetual matrices.
    pub spot: f64,
    /// Strike for the perpetual ladder.
    pub strike: f64,
    /// Risk-free rate.
    pub rate: f64,
    /// Volatility for the perpetual ladder.
    pub volatility: f64,
    /// Cost of carry.
    pub cost_of_carry: f64,
}

impl Default for PerpetualSection {
    fn default() -> Self {
        Self {
            spot: 110.0,
            strike: 100.0,
            rate: 0.1,
            volatility: 0.1,
            cost_of_carry: 0.02,
        }
    }
}

impl PerpetualSection {
    /// Parameters for the ladder model.
    pub fn params(&self, option_type: OptionType) -> ParameterSet {
        ParameterSet::perpetual(
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            self.cost_of_carry,
            option_type,
        )
    }
}

/// Complete driver configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Table layout
    pub format: TableFormat,
    /// Parity batch
    pub parity: ParitySection,
    /// Greek comparison settings
    pub greeks: GreeksSection,
    /// Spot mesh
    pub mesh: MeshSection,
    /// Matrix axes
    pub grid: GridSection,
    /// Perpetual settings
    pub perpetual: PerpetualSection,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply environment overrides
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(p) = cli.price_precision {
            self.format.price_precision = p;
        }
        if let Some(p) = cli.greek_precision {
            self.format.greek_precision = p;
        }
        Ok(())
    }

    /// Validate the configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.format.validate() {
            errors.push(format!("format: {e}"));
        }

        for (i, p) in self.parity.batch.iter().enumerate() {
            if let Err(e) = p.validate_european() {
                errors.push(format!("parity.batch[{i}]: {e}"));
            }
        }

        if let Err(e) = self.greeks.params.validate_european() {
            errors.push(format!("greeks.params: {e}"));
        }
        if !(self.greeks.spot.is_finite() && self.greeks.spot > 0.0) {
            errors.push(format!("greeks.spot must be positive, got {}", self.greeks.spot));
        }
        if let Err(e) = self.greeks.greeks_config().validate() {
            errors.push(format!("greeks: {e}"));
        }

        if let Err(e) = self.mesh.spots() {
            errors.push(format!("mesh: {e}"));
        }

        self.validate_grid(&mut errors);

        for t in [OptionType::Call, OptionType::Put] {
            if let Err(e) = self.perpetual.params(t).validate_perpetual() {
                errors.push(format!("perpetual: {e}"));
                break;
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn validate_grid(&self, errors: &mut Vec<String>) {
        let g = &self.grid;
        if !(g.spot.is_finite() && g.spot > 0.0) {
            errors.push(format!("grid.spot must be positive, got {}", g.spot));
        }
        if !g.rate.is_finite() {
            errors.push(format!("grid.rate must be finite, got {}", g.rate));
        }
        if let Some(b) = g.cost_of_carry {
            if !b.is_finite() {
                errors.push(format!("grid.cost_of_carry must be finite, got {b}"));
            }
        }
        for (name, axis) in [
            ("strikes", &g.strikes),
            ("volatilities", &g.volatilities),
            ("expiries", &g.expiries),
        ] {
            if axis.is_empty() {
                errors.push(format!("grid.{name} must not be empty"));
            } else if let Some(v) = axis.iter().find(|v| !(v.is_finite() && **v > 0.0)) {
                errors.push(format!("grid.{name} must be positive, got {v}"));
            }
        }
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Shorthand for `--log-level debug`
    pub verbose: bool,
    /// Decimals for European price matrices
    pub price_precision: Option<usize>,
    /// Decimals for everything else
    pub greek_precision: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (`--config`, else `optgrid.toml` if present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => AppConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            AppConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => AppConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.parity.batch.len(), 4);
        assert_eq!(config.greeks.spot, 102.0);
        assert_eq!(config.greeks.steps, vec![0.1, 0.01, 0.001, 0.0001]);
        assert_eq!(config.mesh.spots().unwrap().len(), 44);
        assert_eq!(config.grid.strikes.len(), 8);
        assert_eq!(config.grid.volatilities.len(), 8);
        assert_eq!(config.grid.expiries.len(), 5);
        assert_eq!(config.perpetual.spot, 110.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut config = AppConfig::default();
        let cli = CliArgs {
            log_level: Some("info".into()),
            price_precision: Some(3),
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format.price_precision, 3);
        assert_eq!(config.format.greek_precision, 4);
    }

    #[test]
    fn test_verbose_yields_to_explicit_level() {
        let mut config = AppConfig::default();
        let cli = CliArgs {
            verbose: true,
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);

        let cli = CliArgs {
            verbose: true,
            log_level: Some("error".into()),
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_merge_rejects_bad_level() {
        let mut config = AppConfig::default();
        let cli = CliArgs {
            log_level: Some("loud".into()),
            ..Default::default()
        };
        assert!(matches!(
            config.merge_with_cli(&cli),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut config = AppConfig::default();
        config.mesh.step = 0.0;
        config.grid.volatilities.clear();
        config.greeks.steps = vec![0.1, -1.0];

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 3, "{errors:?}");
                assert!(errors.iter().any(|e| e.starts_with("mesh")));
                assert!(errors.iter().any(|e| e.contains("volatilities")));
                assert!(errors.iter().any(|e| e.starts_with("greeks")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_rejects_zero_expiry_in_batch() {
        let mut config = AppConfig::default();
        config.parity.batch[2].expiry = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("parity.batch[2]"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            log_level = "debug"

            [grid]
            strikes = [100.0]
            option_type = "P"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.grid.strikes, vec![100.0]);
        assert_eq!(config.grid.option_type, OptionType::Put);
        assert_eq!(config.grid.expiries.len(), 5);
        assert_eq!(config.mesh, MeshSection::default());
    }

    #[test]
    fn test_toml_rejects_unknown_option_type() {
        let err = AppConfig::from_toml(
            r#"
            [grid]
            option_type = "straddle"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("straddle"));
    }
}
