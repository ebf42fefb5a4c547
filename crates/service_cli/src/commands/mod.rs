//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! report to the supplied writer and log progress through `tracing`.

pub mod demo;
pub mod greeks;
pub mod implied_vol;
pub mod plot;
pub mod price;

use pricer_models::analytical::BlackScholes;
use tracing::info;

use crate::config::ContractConfig;
use crate::Result;

/// Builds the pricer for `contract` and logs its inputs.
pub(crate) fn build_pricer(contract: &ContractConfig) -> Result<BlackScholes<f64>> {
    let pricer = contract.pricer()?;
    info!(
        spot = contract.spot,
        strike = contract.strike,
        expiry = contract.expiry,
        rate = contract.rate,
        volatility = contract.volatility,
        option_type = %pricer.option_type(),
        "Contract loaded"
    );
    Ok(pricer)
}

/// Table rows describing the contract inputs.
pub(crate) fn contract_rows(pricer: &BlackScholes<f64>) -> Vec<(String, String)> {
    vec![
        ("Option type".to_string(), pricer.option_type().label().to_string()),
        ("Spot (S)".to_string(), format!("{:.4}", pricer.spot())),
        ("Strike (K)".to_string(), format!("{:.4}", pricer.strike())),
        ("Expiry (T)".to_string(), format!("{:.4}", pricer.expiry())),
        ("Rate (r)".to_string(), format!("{:.4}", pricer.rate())),
        ("Volatility (σ)".to_string(), format!("{:.4}", pricer.volatility())),
    ]
}
