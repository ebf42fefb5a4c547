//! Greeks command implementation

use std::io::Write;

use tracing::info;

use super::build_pricer;
use crate::config::CliConfig;
use crate::render::{render_table, OutputFormat};
use crate::Result;

/// Run the greeks command
///
/// Vega and Rho are per percentage point, Theta per calendar day.
pub fn run<W: Write>(config: &CliConfig, format: &str, out: &mut W) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let pricer = build_pricer(&config.contract)?;
    let greeks = pricer.greeks();

    match format {
        OutputFormat::Table => {
            let rows: Vec<(String, String)> = greeks
                .entries()
                .iter()
                .map(|(name, value)| (name.to_string(), format!("{:.4}", value)))
                .collect();
            write!(out, "{}", render_table(("Greek", "Value"), &rows))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &greeks)?;
            writeln!(out)?;
        }
    }

    info!(delta = greeks.delta, gamma = greeks.gamma, "Greeks computed");
    Ok(())
}
