//! Error types for analytical pricing operations.

use thiserror::Error;

/// Analytical pricing errors.
///
/// Only [`AnalyticalError::InvalidOptionType`] is raised by the plain
/// constructor; the numeric variants come from
/// [`BlackScholes::new_checked`](super::BlackScholes::new_checked) and
/// [`BlackScholes::validate`](super::BlackScholes::validate).
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidOptionType { value: "straddle".to_string() };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid option type: 'straddle' (expected 'call' or 'put')"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Option type string is neither "call" nor "put" (case-insensitive).
    #[error("Invalid option type: '{value}' (expected 'call' or 'put')")]
    InvalidOptionType {
        /// The rejected input
        value: String,
    },

    /// Invalid spot price (non-positive or non-finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive or non-finite).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry (non-positive or non-finite).
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry in years
        expiry: f64,
    },

    /// Invalid volatility (non-positive or non-finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Non-finite risk-free rate.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Value curve sampling parameters are unusable.
    #[error("Invalid value curve: {reason}")]
    InvalidCurve {
        /// What is wrong with the sampling parameters
        reason: String,
    },
}
