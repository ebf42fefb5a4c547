//! Root-finding solvers.
//!
//! [`NewtonRaphsonSolver`] drives the implied volatility search in
//! `pricer_models`: it needs the objective and its derivative, and reports
//! failure through [`SolverError`](crate::types::SolverError) rather than
//! returning a non-finite root.
//!
//! Solvers are configured with [`SolverConfig`]:
//! - `tolerance`: convergence tolerance on `|f(x)|` (default: 1e-10)
//! - `max_iterations`: maximum iteration count (default: 100)
//!
//! ```
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 50));
//!
//! let f = |x: f64| x * x - 2.0;
//! let f_prime = |x: f64| 2.0 * x;
//!
//! let root = solver.find_root(f, f_prime, 1.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod config;
mod newton_raphson;

pub use config::SolverConfig;
pub use newton_raphson::NewtonRaphsonSolver;
