//! Demo command: the reference scenario end to end.
//!
//! Prices the configured contract (by default S = K = 100, T = 1, r = 5%,
//! σ = 20% call), lists its Greeks, charts value against spot and backs out
//! the volatility implied by a market price of 10.

use std::io::Write;

use pricer_models::analytical::ValueCurve;
use tracing::info;

use super::{build_pricer, contract_rows, plot::chart_title};
use crate::config::CliConfig;
use crate::render::{render_ascii_chart, render_table};
use crate::Result;

/// Market price used for the implied volatility step.
pub const DEMO_MARKET_PRICE: f64 = 10.0;

/// Runs the demonstration.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    let pricer = build_pricer(&config.contract)?;
    let rule = "=".repeat(40);

    writeln!(out, "{}", rule)?;
    writeln!(out, "Black-Scholes Demo")?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;
    write!(out, "{}", render_table(("Input", "Value"), &contract_rows(&pricer)))?;
    writeln!(out)?;

    let price = pricer.price();
    writeln!(out, "Option Price: {:.4}", price)?;
    writeln!(out)?;

    writeln!(out, "Greeks:")?;
    for (name, value) in pricer.greeks().entries() {
        writeln!(out, "  {:<6} {:>10.4}", name, value)?;
    }
    writeln!(out)?;

    let curve = ValueCurve::sample(&pricer, config.curve)?;
    let title = chart_title(pricer.option_type().label());
    write!(out, "{}", render_ascii_chart(&curve, &title))?;
    writeln!(out)?;

    let solver = config.implied_vol.solver_config()?;
    let implied = pricer.implied_volatility_with(DEMO_MARKET_PRICE, solver);
    match implied {
        Some(sigma) => writeln!(
            out,
            "Implied Vol (from market price {}): {:.4}",
            DEMO_MARKET_PRICE, sigma
        )?,
        None => writeln!(
            out,
            "Implied Vol (from market price {}): no convergence",
            DEMO_MARKET_PRICE
        )?,
    }

    info!(price, implied_volatility = ?implied, "Demo complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_reference_scenario() {
        let mut buffer = Vec::new();
        run(&CliConfig::default(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Option Price: 10.4506"));
        assert!(text.contains("Delta"));
        assert!(text.contains("0.6368"));
        assert!(text.contains("Call Option Value vs Underlying"));
        assert!(text.contains("Implied Vol (from market price 10): 0.18"));
    }

    #[test]
    fn test_demo_sections_in_order() {
        let mut buffer = Vec::new();
        run(&CliConfig::default(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let price = text.find("Option Price").unwrap();
        let greeks = text.find("Greeks:").unwrap();
        let chart = text.find("Option Value vs Underlying").unwrap();
        let iv = text.find("Implied Vol").unwrap();
        assert!(price < greeks && greeks < chart && chart < iv);
    }
}
