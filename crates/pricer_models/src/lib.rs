//! # Pricer Models (L2: Business Logic)
//!
//! Black-Scholes valuation of single European options.
//!
//! This crate provides:
//! - The [`BlackScholes`](analytical::BlackScholes) pricer and its Greeks
//! - Implied volatility from a market price
//! - Value-versus-spot curves for charting
//!
//! Root finding and rounding come from `pricer_core`; nothing here logs or
//! performs I/O.
//!
//! ## Quick Start
//!
//! ```
//! use pricer_models::analytical::BlackScholes;
//!
//! let bs = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, "call").unwrap();
//!
//! let greeks = bs.greeks();
//! assert_eq!(greeks.delta, 0.6368);
//!
//! let iv = bs.implied_volatility(10.0).unwrap();
//! assert!(iv > 0.18 && iv < 0.19);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for option types, Greeks
//!   and curves

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
