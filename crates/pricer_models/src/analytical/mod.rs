//! Closed-form Black-Scholes pricing for European options.
//!
//! - [`BlackScholes`]: price, d₁/d₂ and analytical Greeks
//! - [`ImpliedVolSolver`]: Newton-Raphson inversion of the price in σ
//! - [`ValueCurve`]: option value sampled across spot
//! - [`norm_cdf`] / [`norm_pdf`]: standard normal Φ and φ
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: the same code prices in `f64` or `f32`
//! - **Value semantics**: pricers are `Copy`; trial inputs are new copies
//! - **Numerical Stability**: erfc-based CDF, symmetric around zero

pub mod black_scholes;
pub mod curve;
pub mod distributions;
pub mod error;
pub mod greeks;
pub mod implied_vol;
pub mod option_type;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use curve::{CurvePoint, CurveSpec, ValueCurve};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::{Greeks, GREEK_NAMES};
pub use implied_vol::ImpliedVolSolver;
pub use option_type::OptionType;
