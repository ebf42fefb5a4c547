//! CLI error types.

use pricer_models::analytical::AnalyticalError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `bsm` commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Pricing error: {0}")]
    Pricing(#[from] AnalyticalError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
