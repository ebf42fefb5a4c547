//! Price command implementation
//!
//! Prices the configured contract.

use std::io::Write;

use pricer_models::analytical::OptionType;
use serde::Serialize;
use tracing::{debug, info};

use super::{build_pricer, contract_rows};
use crate::config::CliConfig;
use crate::render::{render_table, OutputFormat};
use crate::Result;

/// JSON shape of the price report.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    pub option_type: OptionType,
    pub spot: f64,
    pub strike: f64,
    pub expiry: f64,
    pub rate: f64,
    pub volatility: f64,
    pub price: f64,
}

/// Run the price command
pub fn run<W: Write>(config: &CliConfig, format: &str, out: &mut W) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let pricer = build_pricer(&config.contract)?;

    let price = pricer.price();
    debug!(d1 = pricer.d1(), d2 = pricer.d2(), price, "Priced");

    match format {
        OutputFormat::Table => {
            let mut rows = contract_rows(&pricer);
            rows.push(("Price".to_string(), format!("{:.4}", price)));
            write!(out, "{}", render_table(("Input", "Value"), &rows))?;
        }
        OutputFormat::Json => {
            let report = PriceReport {
                option_type: pricer.option_type(),
                spot: pricer.spot(),
                strike: pricer.strike(),
                expiry: pricer.expiry(),
                rate: pricer.rate(),
                volatility: pricer.volatility(),
                price,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    info!("Pricing complete");
    Ok(())
}
