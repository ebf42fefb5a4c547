//! Solver configuration types.

use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// Holds the convergence tolerance on `|f(x)|` and the iteration cap.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert_eq!(config.max_iterations, 100);
///
/// // Price-space tolerance used for implied volatility searches
/// let iv = SolverConfig::new(1e-5, 100);
/// assert_eq!(iv.max_iterations, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance for root finding.
    ///
    /// The solver stops when `|f(x)| < tolerance`.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values: `tolerance = 1e-10`, `max_iterations = 100`.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0`. Use [`SolverConfig::try_new`] for values
    /// coming from user input.
    ///
    /// A zero `max_iterations` is allowed: a solver with that cap never
    /// evaluates the objective and reports
    /// [`SolverError::MaxIterationsExceeded`](crate::types::SolverError::MaxIterationsExceeded).
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Fallible counterpart of [`SolverConfig::new`].
    ///
    /// Returns `None` when the tolerance is not a positive finite number.
    ///
    /// ```
    /// use pricer_core::math::solvers::SolverConfig;
    ///
    /// assert!(SolverConfig::try_new(1e-5_f64, 100).is_some());
    /// assert!(SolverConfig::try_new(0.0_f64, 100).is_none());
    /// assert!(SolverConfig::try_new(1e-5_f64, 0).is_some());
    /// ```
    pub fn try_new(tolerance: T, max_iterations: usize) -> Option<Self> {
        if tolerance > T::zero() && tolerance.is_finite() {
            Some(Self {
                tolerance,
                max_iterations,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert!((config.tolerance - 1e-10).abs() < 1e-15);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_new_config() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-5, 250);
        assert!((config.tolerance - 1e-5).abs() < 1e-17);
        assert_eq!(config.max_iterations, 250);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_new_config_zero_tolerance_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(0.0, 100);
    }

    #[test]
    fn test_zero_iterations_allowed() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-10, 0);
        assert_eq!(config.max_iterations, 0);
        assert_eq!(SolverConfig::try_new(1e-10_f64, 0), Some(config));
    }

    #[test]
    fn test_try_new_rejects_bad_values() {
        assert!(SolverConfig::try_new(-1e-5_f64, 10).is_none());
        assert!(SolverConfig::try_new(f64::NAN, 10).is_none());
        assert!(SolverConfig::try_new(f64::INFINITY, 10).is_none());
        assert_eq!(
            SolverConfig::try_new(1e-6_f64, 10),
            Some(SolverConfig::new(1e-6, 10))
        );
    }

    #[test]
    fn test_config_with_f32() {
        let config: SolverConfig<f32> = SolverConfig::default();
        assert!(config.tolerance > 0.0);
        assert_eq!(config.max_iterations, 100);
    }
}
