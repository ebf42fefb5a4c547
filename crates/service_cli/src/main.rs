//! `bsm`: Black-Scholes pricing from the command line.

use clap::Parser;
use service_cli::cli::Cli;
use service_cli::config::build_config;
use service_cli::{dispatch, Result};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level.as_filter_str());

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(&cli, &config, &mut out)
}
