//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes pricer for a single European
//! call or put, with analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate inputs
//!
//! [`BlackScholes::new`] only validates the option type. `T <= 0`,
//! `σ <= 0`, `S <= 0` or `K <= 0` are not rejected and surface as NaN or
//! infinite results. Use [`BlackScholes::new_checked`] to reject them up
//! front.

use num_traits::Float;
use pricer_core::math::rounding::round_to_places;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::greeks::Greeks;
use super::option_type::OptionType;

/// Decimal places kept in [`Greeks`].
pub const GREEKS_DECIMALS: i32 = 4;

/// Calendar days used to quote theta per day.
const DAYS_PER_YEAR: f64 = 365.0;

/// Vega and rho are quoted per percentage point.
const PERCENT: f64 = 100.0;

/// Black-Scholes pricer for one European option.
///
/// Holds the five model inputs and the option direction. All queries take
/// `&self`; the pricer never changes after construction.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let call = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, "call").unwrap();
/// let put = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, "put").unwrap();
///
/// assert_eq!((call.price() * 100.0).round() / 100.0, 10.45);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call.price() - put.price() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Strike price (K)
    strike: T,
    /// Time to expiry in years (T)
    expiry: T,
    /// Continuously-compounded risk-free rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
    option_type: OptionType,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a pricer, parsing the option type case-insensitively.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidOptionType` if `option_type` is not
    ///   "call" or "put" in any letter case
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::{AnalyticalError, BlackScholes};
    ///
    /// assert!(BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, "Put").is_ok());
    ///
    /// let err = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, "straddle").unwrap_err();
    /// assert!(matches!(err, AnalyticalError::InvalidOptionType { .. }));
    /// ```
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        option_type: &str,
    ) -> Result<Self, AnalyticalError> {
        let option_type = option_type.parse::<OptionType>()?;
        Ok(Self::from_parts(
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        ))
    }

    /// Creates a pricer from an already-typed option direction.
    pub fn from_parts(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        }
    }

    /// Like [`BlackScholes::new`], but also rejects inputs for which the
    /// formulas are undefined.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidOptionType` for an unknown option type
    /// - the first failure reported by [`BlackScholes::validate`]
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::{AnalyticalError, BlackScholes};
    ///
    /// let err = BlackScholes::new_checked(100.0_f64, 100.0, 0.0, 0.05, 0.2, "call").unwrap_err();
    /// assert_eq!(err, AnalyticalError::InvalidExpiry { expiry: 0.0 });
    ///
    /// // Negative rates are fine
    /// assert!(BlackScholes::new_checked(100.0_f64, 100.0, 1.0, -0.01, 0.2, "call").is_ok());
    /// ```
    pub fn new_checked(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        option_type: &str,
    ) -> Result<Self, AnalyticalError> {
        let pricer = Self::new(spot, strike, expiry, rate, volatility, option_type)?;
        pricer.validate()?;
        Ok(pricer)
    }

    /// Checks that every input lies in the model's domain.
    ///
    /// `S`, `K`, `T` and `σ` must be positive and finite; `r` must be finite.
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        let zero = T::zero();
        let bad = |x: T| !(x > zero && x.is_finite());
        let as_f64 = |x: T| x.to_f64().unwrap_or(f64::NAN);

        if bad(self.spot) {
            return Err(AnalyticalError::InvalidSpot {
                spot: as_f64(self.spot),
            });
        }
        if bad(self.strike) {
            return Err(AnalyticalError::InvalidStrike {
                strike: as_f64(self.strike),
            });
        }
        if bad(self.expiry) {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: as_f64(self.expiry),
            });
        }
        if bad(self.volatility) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: as_f64(self.volatility),
            });
        }
        if !self.rate.is_finite() {
            return Err(AnalyticalError::InvalidRate {
                rate: as_f64(self.rate),
            });
        }
        Ok(())
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the option direction.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Copy of this pricer at another volatility.
    #[inline]
    pub fn with_volatility(&self, volatility: T) -> Self {
        Self { volatility, ..*self }
    }

    /// Copy of this pricer at another spot price.
    #[inline]
    pub fn with_spot(&self, spot: T) -> Self {
        Self { spot, ..*self }
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> T {
        self.d1_d2().0
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> T {
        self.d1_d2().1
    }

    #[inline]
    fn d1_d2(&self) -> (T, T) {
        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = self.volatility * self.expiry.sqrt();

        let log_moneyness = (self.spot / self.strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * self.expiry;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> T {
        (-self.rate * self.expiry).exp()
    }

    /// Theoretical option value.
    ///
    /// - Call: S·N(d₁) - K·e^(-rT)·N(d₂)
    /// - Put: K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let put = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, "put").unwrap();
    /// assert!((put.price() - 5.5735).abs() < 1e-3);
    /// ```
    pub fn price(&self) -> T {
        let (d1, d2) = self.d1_d2();
        let discounted_strike = self.strike * self.discount_factor();

        match self.option_type {
            OptionType::Call => self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionType::Put => discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        }
    }

    /// Price at another volatility, all other inputs unchanged.
    #[inline]
    pub fn price_at(&self, volatility: T) -> T {
        self.with_volatility(volatility).price()
    }

    /// Payoff if exercised now: max(S - K, 0) for a call, max(K - S, 0) for a put.
    pub fn intrinsic_value(&self) -> T {
        let moneyness = match self.option_type {
            OptionType::Call => self.spot - self.strike,
            OptionType::Put => self.strike - self.spot,
        };
        moneyness.max(T::zero())
    }

    /// Delta (∂V/∂S): N(d₁) for a call, -N(-d₁) for a put.
    #[inline]
    pub fn delta(&self) -> T {
        let d1 = self.d1();
        match self.option_type {
            OptionType::Call => norm_cdf(d1),
            OptionType::Put => -norm_cdf(-d1),
        }
    }

    /// Gamma (∂²V/∂S²) = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self) -> T {
        norm_pdf(self.d1()) / (self.spot * self.volatility * self.expiry.sqrt())
    }

    /// Raw vega (∂V/∂σ) = S·φ(d₁)·√T, identical for calls and puts.
    ///
    /// This is the unscaled derivative used by the implied volatility
    /// search; [`Greeks::vega`] reports it divided by 100.
    #[inline]
    pub fn vega(&self) -> T {
        self.spot * norm_pdf(self.d1()) * self.expiry.sqrt()
    }

    /// Theta per year.
    ///
    /// - Call: -(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put: -(S·φ(d₁)·σ)/(2√T) + r·K·e^(-rT)·N(-d₂)
    pub fn theta(&self) -> T {
        let (d1, d2) = self.d1_d2();
        let two = T::from(2.0).unwrap();

        let decay = -(self.spot * norm_pdf(d1) * self.volatility) / (two * self.expiry.sqrt());
        let carry = self.rate * self.strike * self.discount_factor();

        match self.option_type {
            OptionType::Call => decay - carry * norm_cdf(d2),
            OptionType::Put => decay + carry * norm_cdf(-d2),
        }
    }

    /// Raw rho (∂V/∂r).
    ///
    /// - Call: K·T·e^(-rT)·N(d₂)
    /// - Put: -K·T·e^(-rT)·N(-d₂)
    pub fn rho(&self) -> T {
        let d2 = self.d2();
        let scale = self.strike * self.expiry * self.discount_factor();

        match self.option_type {
            OptionType::Call => scale * norm_cdf(d2),
            OptionType::Put => -scale * norm_cdf(-d2),
        }
    }

    /// All five sensitivities, display-scaled and rounded to 4 decimals.
    ///
    /// Vega and rho are divided by 100, theta by 365. See [`Greeks`].
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, "call").unwrap();
    /// let greeks = bs.greeks();
    /// assert_eq!(greeks.delta, 0.6368);
    /// assert_eq!(greeks.vega, 0.3752);
    /// ```
    pub fn greeks(&self) -> Greeks<T> {
        let percent = T::from(PERCENT).unwrap();
        let days = T::from(DAYS_PER_YEAR).unwrap();
        let round = |x: T| round_to_places(x, GREEKS_DECIMALS);

        Greeks {
            delta: round(self.delta()),
            gamma: round(self.gamma()),
            vega: round(self.vega() / percent),
            theta: round(self.theta() / days),
            rho: round(self.rho() / percent),
        }
    }
}
