//! Plot command implementation
//!
//! Samples option value across spot and renders it.

use std::io::Write;

use pricer_models::analytical::ValueCurve;
use tracing::{debug, info};

use super::build_pricer;
use crate::config::CliConfig;
use crate::render::{render_ascii_chart, write_curve_csv, PlotFormat};
use crate::Result;

/// Chart heading, e.g. "Call Option Value vs Underlying (Black-Scholes)".
pub fn chart_title(curve_label: &str) -> String {
    format!("{} Option Value vs Underlying (Black-Scholes)", curve_label)
}

/// Run the plot command
pub fn run<W: Write>(config: &CliConfig, format: &str, out: &mut W) -> Result<()> {
    let format: PlotFormat = format.parse()?;
    let pricer = build_pricer(&config.contract)?;

    let spec = config.curve;
    info!(
        lower = spec.lower,
        upper = spec.upper,
        points = spec.points,
        "Sampling value curve"
    );
    let curve = ValueCurve::sample(&pricer, spec)?;
    debug!(
        atm_index = curve.atm_index(),
        atm_spot = curve.atm_point().spot,
        "ATM sample located"
    );

    match format {
        PlotFormat::Ascii => {
            let title = chart_title(pricer.option_type().label());
            write!(out, "{}", render_ascii_chart(&curve, &title))?;
        }
        PlotFormat::Csv => write_curve_csv(&curve, &mut *out)?,
        PlotFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &curve)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
