//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line flags.
//!
//! ```toml
//! log_level = "debug"
//!
//! [contract]
//! spot = 105.0
//! option_type = "put"
//!
//! [implied_vol]
//! tolerance = 1e-6
//!
//! [curve]
//! points = 120
//! ```

use pricer_core::math::solvers::SolverConfig;
use pricer_models::analytical::{AnalyticalError, BlackScholes, CurveSpec};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pricer.toml";

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "PRICER_LOG_LEVEL";

/// Environment variable overriding the option type.
pub const ENV_OPTION_TYPE: &str = "PRICER_OPTION_TYPE";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid solver settings: {0}")]
    InvalidSolver(String),

    #[error("Invalid curve settings: {0}")]
    InvalidCurve(String),

    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by `--log-level` and `PRICER_LOG_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
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
        f.write_str(self.as_filter_str())
    }
}

/// Contract inputs. Defaults to the reference scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Spot price S
    pub spot: f64,
    /// Strike K
    pub strike: f64,
    /// Years to expiry T
    pub expiry: f64,
    /// Risk-free rate r
    pub rate: f64,
    /// Volatility σ
    pub volatility: f64,
    /// "call" or "put", any case
    pub option_type: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            expiry: 1.0,
            rate: 0.05,
            volatility: 0.2,
            option_type: "call".to_string(),
        }
    }
}

impl ContractConfig {
    /// Builds the pricer. Only the option type is checked.
    pub fn pricer(&self) -> Result<BlackScholes<f64>, AnalyticalError> {
        BlackScholes::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            &self.option_type,
        )
    }
}

/// Implied volatility search settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpliedVolConfig {
    /// Price-space convergence tolerance
    pub tolerance: f64,
    /// Newton iteration cap
    pub max_iterations: usize,
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            max_iterations: 100,
        }
    }
}

impl ImpliedVolConfig {
    /// Solver settings, or an error when the tolerance is unusable.
    ///
    /// A zero iteration cap is accepted; the search then never converges.
    pub fn solver_config(&self) -> Result<SolverConfig<f64>, ConfigError> {
        SolverConfig::try_new(self.tolerance, self.max_iterations).ok_or_else(|| {
            ConfigError::InvalidSolver(format!(
                "tolerance must be positive and finite (got {})",
                self.tolerance
            ))
        })
    }
}

/// Full CLI configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Contract to price
    pub contract: ContractConfig,
    /// Implied volatility settings
    pub implied_vol: ImpliedVolConfig,
    /// Value curve sampling
    pub curve: CurveSpec,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl CliConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Applies `PRICER_LOG_LEVEL` and `PRICER_OPTION_TYPE` from the process
    /// environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Applies environment overrides using `lookup` to read variables.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(option_type) = lookup(ENV_OPTION_TYPE) {
            self.contract.option_type = option_type;
        }
        Ok(())
    }

    /// Validate the configuration
    ///
    /// Contract inputs are not checked here; degenerate values price to NaN
    /// and an unknown option type fails when the pricer is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.implied_vol.solver_config()?;
        self.curve
            .validate()
            .map_err(|e| ConfigError::InvalidCurve(e.to_string()))?;
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }

        let contract = &mut self.contract;
        if let Some(spot) = cli.spot {
            contract.spot = spot;
        }
        if let Some(strike) = cli.strike {
            contract.strike = strike;
        }
        if let Some(expiry) = cli.expiry {
            contract.expiry = expiry;
        }
        if let Some(rate) = cli.rate {
            contract.rate = rate;
        }
        if let Some(volatility) = cli.volatility {
            contract.volatility = volatility;
        }
        if let Some(option_type) = &cli.option_type {
            contract.option_type = option_type.clone();
        }

        if let Some(tolerance) = cli.tolerance {
            self.implied_vol.tolerance = tolerance;
        }
        if let Some(max_iterations) = cli.max_iterations {
            self.implied_vol.max_iterations = max_iterations;
        }

        if let Some(lower) = cli.lower {
            self.curve.lower = lower;
        }
        if let Some(upper) = cli.upper {
            self.curve.upper = upper;
        }
        if let Some(points) = cli.points {
            self.curve.points = points;
        }
        Ok(())
    }
}

/// Command-line overrides, independent of the argument parser
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Explicit config file; `None` falls back to `pricer.toml` if present
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Forces the debug log level
    pub verbose: bool,
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub expiry: Option<f64>,
    pub rate: Option<f64>,
    pub volatility: Option<f64>,
    pub option_type: Option<String>,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub points: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an injectable environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, env: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env_with(env)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.contract.spot, 100.0);
        assert_eq!(config.contract.strike, 100.0);
        assert_eq!(config.contract.expiry, 1.0);
        assert_eq!(config.contract.rate, 0.05);
        assert_eq!(config.contract.volatility, 0.2);
        assert_eq!(config.contract.option_type, "call");
        assert_eq!(config.implied_vol.tolerance, 1e-5);
        assert_eq!(config.implied_vol.max_iterations, 100);
        assert_eq!(config.curve, CurveSpec::new(0.5, 1.5, 300));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "WARN"

            [contract]
            spot = 105.0
            strike = 95.0
            expiry = 0.5
            rate = -0.01
            volatility = 0.3
            option_type = "Put"

            [implied_vol]
            tolerance = 1e-8
            max_iterations = 40

            [curve]
            lower = 0.8
            upper = 1.2
            points = 50
        "#;

        let config = CliConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.contract.spot, 105.0);
        assert_eq!(config.contract.strike, 95.0);
        assert_eq!(config.contract.expiry, 0.5);
        assert_eq!(config.contract.rate, -0.01);
        assert_eq!(config.contract.volatility, 0.3);
        assert_eq!(config.contract.option_type, "Put");
        assert_eq!(config.implied_vol.tolerance, 1e-8);
        assert_eq!(config.implied_vol.max_iterations, 40);
        assert_eq!(config.curve, CurveSpec::new(0.8, 1.2, 50));
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config = CliConfig::from_toml_str("[contract]\nspot = 120.0\n").unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.contract.spot, 120.0);
        assert_eq!(config.contract.strike, 100.0);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.curve.points, 300);
    }

    #[test]
    fn test_toml_rejects_bad_log_level() {
        let err = CliConfig::from_toml_str("log_level = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env_with(|key| match key {
                ENV_LOG_LEVEL => Some("error".to_string()),
                ENV_OPTION_TYPE => Some("PUT".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.contract.option_type, "PUT");
        assert!(config.contract.pricer().unwrap().option_type().is_put());
    }

    #[test]
    fn test_env_bad_log_level() {
        let mut config = CliConfig::default();
        let result = config.apply_env_with(|key| {
            (key == ENV_LOG_LEVEL).then(|| "chatty".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidLogLevel(_))));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            log_level: Some("trace".to_string()),
            spot: Some(90.0),
            option_type: Some("put".to_string()),
            tolerance: Some(1e-7),
            points: Some(25),
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.contract.spot, 90.0);
        assert_eq!(config.contract.strike, 100.0);
        assert_eq!(config.contract.option_type, "put");
        assert_eq!(config.implied_vol.tolerance, 1e-7);
        assert_eq!(config.curve.points, 25);
    }

    #[test]
    fn test_verbose_forces_debug() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            log_level: Some("error".to_string()),
            verbose: true,
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_cli_beats_env() {
        let cli = CliArgs {
            config_file: None,
            option_type: Some("call".to_string()),
            ..Default::default()
        };
        let config = build_config_with(&cli, |key| {
            (key == ENV_OPTION_TYPE).then(|| "put".to_string())
        })
        .unwrap();
        assert_eq!(config.contract.option_type, "call");
    }

    #[test]
    fn test_validate_solver_and_curve() {
        let mut config = CliConfig::default();
        config.implied_vol.tolerance = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSolver(_))
        ));

        let mut config = CliConfig::default();
        config.implied_vol.max_iterations = 0;
        assert!(config.validate().is_ok());

        let mut config = CliConfig::default();
        config.curve.points = 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCurve(_))
        ));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("definitely/not/here/pricer.toml")),
            ..Default::default()
        };
        let err = build_config_with(&cli, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
        assert!(err.to_string().contains("definitely/not/here"));
    }

    #[test]
    fn test_contract_pricer_reports_bad_option_type() {
        let contract = ContractConfig {
            option_type: "straddle".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            contract.pricer(),
            Err(AnalyticalError::InvalidOptionType { .. })
        ));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidLogLevel("bad".to_string());
        assert!(err.to_string().contains("Invalid log level"));

        let err = ConfigError::InvalidCurve("need at least 2 points".to_string());
        assert!(err.to_string().contains("Invalid curve settings"));
    }
}
