//! Numerical building blocks.
//!
//! - [`rounding`]: fixed decimal-place rounding for reported figures
//! - [`solvers`]: root finding

pub mod rounding;
pub mod solvers;
