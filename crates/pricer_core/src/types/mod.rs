//! Shared error types.
//!
//! - [`SolverError`]: failures reported by the root finders in
//!   [`crate::math::solvers`]

pub mod error;

pub use error::SolverError;
