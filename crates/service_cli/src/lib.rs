//! # Black-Scholes CLI (S: Service Layer)
//!
//! Operational front end for `pricer_models`. Loads configuration, sets up
//! logging and dispatches the `bsm` subcommands.
//!
//! # Commands
//!
//! - `bsm price` - Theoretical value of the configured contract
//! - `bsm greeks` - Delta, Gamma, Vega, Theta, Rho
//! - `bsm implied-vol --market-price <P>` - Volatility implied by a price
//! - `bsm plot` - Option value against spot (ASCII, CSV or JSON)
//! - `bsm demo` - Reference scenario end to end

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;

pub use error::{CliError, Result};

use std::io::Write;

use cli::{Cli, Commands};
use config::CliConfig;

/// Runs the parsed command against `config`, writing the report to `out`.
pub fn dispatch<W: Write>(cli: &Cli, config: &CliConfig, out: &mut W) -> Result<()> {
    match &cli.command {
        Commands::Price { format } => commands::price::run(config, format, out),
        Commands::Greeks { format } => commands::greeks::run(config, format, out),
        Commands::ImpliedVol {
            market_price,
            format,
            ..
        } => commands::implied_vol::run(config, *market_price, format, out).map(|_| ()),
        Commands::Plot { format, .. } => commands::plot::run(config, format, out),
        Commands::Demo => commands::demo::run(config, out),
    }
}
