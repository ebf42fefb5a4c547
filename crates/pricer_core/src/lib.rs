//! # pricer_core: Numerical Foundation for the Black-Scholes Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Newton-Raphson root finding (`math::solvers`)
//! - Fixed decimal-place rounding for reported figures (`math::rounding`)
//! - Error types: `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::rounding::round_to_places;
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 50));
//! let root = solver
//!     .find_root(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0)
//!     .unwrap();
//! assert_eq!(round_to_places(root, 4), 1.4142);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SolverConfig` and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
