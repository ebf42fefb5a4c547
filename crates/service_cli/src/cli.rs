//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CliArgs;

/// Black-Scholes European option pricer
#[derive(Debug, Parser)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (TOML). Defaults to ./pricer.toml when present
    #[arg(short, long, global = true, value_name = "FILE", env = "PRICER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub contract: ContractArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Contract overrides shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct ContractArgs {
    /// Spot price of the underlying
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub spot: Option<f64>,

    /// Strike price
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub strike: Option<f64>,

    /// Time to expiry in years
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub expiry: Option<f64>,

    /// Continuously compounded risk-free rate
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Volatility of the underlying
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub volatility: Option<f64>,

    /// Option type (call or put)
    #[arg(short = 't', long, global = true)]
    pub option_type: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Price the option
    Price {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Compute Delta, Gamma, Vega, Theta and Rho
    Greeks {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Solve for the volatility matching a market price
    ImpliedVol {
        /// Observed option price
        #[arg(short, long, allow_negative_numbers = true)]
        market_price: f64,

        /// Convergence tolerance on price
        #[arg(long)]
        tolerance: Option<f64>,

        /// Maximum Newton iterations
        #[arg(long)]
        max_iterations: Option<usize>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Chart option value against spot
    Plot {
        /// Number of samples
        #[arg(short, long)]
        points: Option<usize>,

        /// Lowest spot as a multiple of strike
        #[arg(long)]
        lower: Option<f64>,

        /// Highest spot as a multiple of strike
        #[arg(long)]
        upper: Option<f64>,

        /// Output format (ascii, csv, json)
        #[arg(short, long, default_value = "ascii")]
        format: String,
    },

    /// Run the reference scenario end to end
    Demo,
}

impl Cli {
    /// Collects every configuration override carried by the arguments.
    pub fn config_args(&self) -> CliArgs {
        let mut args = CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            verbose: self.verbose,
            spot: self.contract.spot,
            strike: self.contract.strike,
            expiry: self.contract.expiry,
            rate: self.contract.rate,
            volatility: self.contract.volatility,
            option_type: self.contract.option_type.clone(),
            ..Default::default()
        };

        match &self.command {
            Commands::ImpliedVol {
                tolerance,
                max_iterations,
                ..
            } => {
                args.tolerance = *tolerance;
                args.max_iterations = *max_iterations;
            }
            Commands::Plot {
                points,
                lower,
                upper,
                ..
            } => {
                args.points = *points;
                args.lower = *lower;
                args.upper = *upper;
            }
            Commands::Price { .. } | Commands::Greeks { .. } | Commands::Demo => {}
        }

        args
    }
}
