//! Implied volatility command implementation

use std::io::Write;

use serde::Serialize;
use tracing::{info, warn};

use super::build_pricer;
use crate::config::CliConfig;
use crate::render::{render_table, OutputFormat};
use crate::Result;

/// JSON shape of the implied volatility report. `implied_volatility` is
/// `null` when the search does not converge.
#[derive(Debug, Serialize)]
pub struct ImpliedVolReport {
    pub market_price: f64,
    pub implied_volatility: Option<f64>,
    pub tolerance: f64,
    pub max_iterations: usize,
}

/// Run the implied-vol command
///
/// Non-convergence is reported, not treated as an error.
pub fn run<W: Write>(
    config: &CliConfig,
    market_price: f64,
    format: &str,
    out: &mut W,
) -> Result<Option<f64>> {
    let format: OutputFormat = format.parse()?;
    let pricer = build_pricer(&config.contract)?;
    let solver = config.implied_vol.solver_config()?;

    info!(
        market_price,
        tolerance = solver.tolerance,
        max_iterations = solver.max_iterations,
        "Solving for implied volatility"
    );

    let implied = pricer.implied_volatility_with(market_price, solver);
    match implied {
        Some(sigma) => info!(implied_volatility = sigma, "Implied volatility found"),
        None => warn!(market_price, "Implied volatility search did not converge"),
    }

    match format {
        OutputFormat::Table => {
            let shown = implied
                .map(|sigma| format!("{:.4}", sigma))
                .unwrap_or_else(|| "no convergence".to_string());
            let rows = vec![
                ("Market price".to_string(), format!("{:.4}", market_price)),
                ("Implied volatility".to_string(), shown),
            ];
            write!(out, "{}", render_table(("Quantity", "Value"), &rows))?;
        }
        OutputFormat::Json => {
            let report = ImpliedVolReport {
                market_price,
                implied_volatility: implied,
                tolerance: solver.tolerance,
                max_iterations: solver.max_iterations,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(implied)
}
