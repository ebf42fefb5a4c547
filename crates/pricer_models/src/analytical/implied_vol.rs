//! Implied volatility by Newton-Raphson.
//!
//! Finds the σ at which the Black-Scholes price equals an observed market
//! price. The search always starts from σ₀ = 0.2, whatever volatility the
//! pricer was built with, and steps with the raw vega `S·φ(d₁)·√T` (not the
//! /100 vega reported in [`Greeks`](super::Greeks)).
//!
//! Failure is reported as `None`. Exhausting the iteration cap (including a
//! cap of zero), a vanishing vega, a step that drives σ to zero or below,
//! and a non-finite trial price all look the same to the caller.

use num_traits::Float;
use pricer_core::math::rounding::round_to_places;
use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
use pricer_core::types::SolverError;

use super::black_scholes::BlackScholes;

/// Default price-space tolerance: stop once |model − market| < 1e-5.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Starting volatility guess.
pub const INITIAL_GUESS: f64 = 0.2;

/// Decimal places of the returned volatility.
pub const IMPLIED_VOL_DECIMALS: i32 = 4;

/// Newton-Raphson search over volatility for a fixed contract.
///
/// # Examples
/// ```
/// use pricer_core::math::solvers::SolverConfig;
/// use pricer_models::analytical::{BlackScholes, ImpliedVolSolver};
///
/// let truth = BlackScholes::new(100.0_f64, 95.0, 0.5, 0.01, 0.31, "put").unwrap();
/// let solver = ImpliedVolSolver::new(SolverConfig::new(1e-10, 50));
///
/// let sigma = solver.solve(&truth, truth.price()).unwrap();
/// assert!((sigma - 0.31).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver<T: Float> {
    solver: NewtonRaphsonSolver<T>,
    initial_guess: T,
}

impl<T: Float> Default for ImpliedVolSolver<T> {
    /// Tolerance 1e-5, at most 100 iterations, starting from σ₀ = 0.2.
    fn default() -> Self {
        Self::new(SolverConfig::new(
            T::from(DEFAULT_TOLERANCE).unwrap(),
            DEFAULT_MAX_ITERATIONS,
        ))
    }
}

impl<T: Float> ImpliedVolSolver<T> {
    /// Creates a solver starting from σ₀ = 0.2.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self {
            solver: NewtonRaphsonSolver::new(config),
            initial_guess: T::from(INITIAL_GUESS).unwrap(),
        }
    }

    /// Replaces the starting guess.
    pub fn with_initial_guess(mut self, initial_guess: T) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Solver configuration in use.
    pub fn config(&self) -> &SolverConfig<T> {
        self.solver.config()
    }

    /// Starting volatility guess.
    pub fn initial_guess(&self) -> T {
        self.initial_guess
    }

    /// Runs the search and returns the unrounded volatility.
    ///
    /// Every trial reprices `pricer` with only the volatility changed.
    ///
    /// # Errors
    /// Any [`SolverError`] from the underlying Newton iteration. A
    /// non-positive trial volatility has no Black-Scholes price and is
    /// reported as [`SolverError::NumericalInstability`].
    pub fn solve(&self, pricer: &BlackScholes<T>, market_price: T) -> Result<T, SolverError> {
        let objective = |sigma: T| {
            if sigma <= T::zero() {
                T::nan()
            } else {
                pricer.price_at(sigma) - market_price
            }
        };
        let vega = |sigma: T| pricer.with_volatility(sigma).vega();

        self.solver.find_root(objective, vega, self.initial_guess)
    }
}

impl<T: Float> BlackScholes<T> {
    /// Implied volatility for `market_price` with the default tolerance
    /// (1e-5) and iteration cap (100), rounded to 4 decimal places.
    ///
    /// Returns `None` when the search does not converge.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let quoted = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.25, "call").unwrap();
    /// let fresh = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.6, "call").unwrap();
    ///
    /// assert_eq!(fresh.implied_volatility(quoted.price()), Some(0.25));
    ///
    /// // Below the no-arbitrage floor S - K·e^(-rT) ≈ 4.88
    /// assert_eq!(fresh.implied_volatility(1.0), None);
    /// ```
    pub fn implied_volatility(&self, market_price: T) -> Option<T> {
        self.implied_volatility_with(market_price, *ImpliedVolSolver::default().config())
    }

    /// Implied volatility with an explicit tolerance and iteration cap,
    /// rounded to 4 decimal places.
    pub fn implied_volatility_with(&self, market_price: T, config: SolverConfig<T>) -> Option<T> {
        ImpliedVolSolver::new(config)
            .solve(self, market_price)
            .ok()
            .map(|sigma| round_to_places(sigma, IMPLIED_VOL_DECIMALS))
    }
}
