//! Option value as a function of spot.
//!
//! Samples a [`BlackScholes`] pricer over a band of spot prices around the
//! strike. Everything except the spot is held fixed.

use num_traits::Float;

use super::black_scholes::BlackScholes;
use super::error::AnalyticalError;

/// Sampling band and resolution, expressed in multiples of the strike.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CurveSpec {
    /// Lowest spot as a fraction of strike.
    pub lower: f64,
    /// Highest spot as a fraction of strike.
    pub upper: f64,
    /// Number of samples, both ends included.
    pub points: usize,
}

impl Default for CurveSpec {
    /// 300 samples over `[0.5·K, 1.5·K]`.
    fn default() -> Self {
        Self {
            lower: 0.5,
            upper: 1.5,
            points: 300,
        }
    }
}

impl CurveSpec {
    /// Creates a spec without validating it.
    pub fn new(lower: f64, upper: f64, points: usize) -> Self {
        Self {
            lower,
            upper,
            points,
        }
    }

    /// Checks that the band is finite, positive and non-empty, and that at
    /// least two points are requested.
    ///
    /// # Errors
    /// [`AnalyticalError::InvalidCurve`] describing the first problem found.
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        let invalid = |reason: String| Err(AnalyticalError::InvalidCurve { reason });

        if self.points < 2 {
            return invalid(format!("need at least 2 points, got {}", self.points));
        }
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return invalid(format!(
                "bounds must be finite, got [{}, {}]",
                self.lower, self.upper
            ));
        }
        if self.lower <= 0.0 {
            return invalid(format!("lower bound must be positive, got {}", self.lower));
        }
        if self.upper <= self.lower {
            return invalid(format!(
                "upper bound {} must exceed lower bound {}",
                self.upper, self.lower
            ));
        }
        Ok(())
    }
}

/// One sample of the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint<T: Float> {
    /// Spot price
    pub spot: T,
    /// Option value at that spot
    pub value: T,
}

/// Sampled option value against spot.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{BlackScholes, CurveSpec, ValueCurve};
///
/// let bs = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, "call").unwrap();
/// let curve = ValueCurve::sample(&bs, CurveSpec::default()).unwrap();
///
/// assert_eq!(curve.points().len(), 300);
/// assert_eq!(curve.points()[0].spot, 50.0);
/// assert_eq!(curve.points()[299].spot, 150.0);
///
/// let atm = curve.atm_point();
/// assert!((atm.spot - 100.0).abs() < 0.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValueCurve<T: Float> {
    strike: T,
    atm_index: usize,
    points: Vec<CurvePoint<T>>,
}

/// Deserialised curves must carry an `atm_index` inside `points`.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ValueCurve<T>
where
    T: Float + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct RawCurve<V: Float> {
            strike: V,
            atm_index: usize,
            points: Vec<CurvePoint<V>>,
        }

        let raw = RawCurve::<T>::deserialize(deserializer)?;
        if raw.atm_index >= raw.points.len() {
            return Err(serde::de::Error::custom(AnalyticalError::InvalidCurve {
                reason: format!(
                    "atm_index {} out of range for {} points",
                    raw.atm_index,
                    raw.points.len()
                ),
            }));
        }
        Ok(Self {
            strike: raw.strike,
            atm_index: raw.atm_index,
            points: raw.points,
        })
    }
}

impl<T: Float> ValueCurve<T> {
    /// Prices `pricer` at `spec.points` evenly spaced spots from
    /// `lower·K` to `upper·K` inclusive.
    ///
    /// # Errors
    /// [`AnalyticalError::InvalidCurve`] if `spec` fails
    /// [`CurveSpec::validate`].
    pub fn sample(pricer: &BlackScholes<T>, spec: CurveSpec) -> Result<Self, AnalyticalError> {
        spec.validate()?;

        let strike = pricer.strike();
        let lo = strike * T::from(spec.lower).unwrap();
        let hi = strike * T::from(spec.upper).unwrap();
        let last = spec.points - 1;
        let step = (hi - lo) / T::from(last).unwrap();

        let points: Vec<CurvePoint<T>> = (0..spec.points)
            .map(|i| {
                // Pin the last sample so float drift cannot undershoot the band
                let spot = if i == last {
                    hi
                } else {
                    lo + step * T::from(i).unwrap()
                };
                CurvePoint {
                    spot,
                    value: pricer.with_spot(spot).price(),
                }
            })
            .collect();

        let atm_index = points
            .iter()
            .enumerate()
            .fold((0, T::infinity()), |(best, best_gap), (i, p)| {
                let gap = (p.spot - strike).abs();
                if gap < best_gap {
                    (i, gap)
                } else {
                    (best, best_gap)
                }
            })
            .0;

        Ok(Self {
            strike,
            atm_index,
            points,
        })
    }

    /// Strike the curve was sampled around.
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Index of the sample whose spot is closest to the strike.
    pub fn atm_index(&self) -> usize {
        self.atm_index
    }

    /// Sample closest to the strike.
    pub fn atm_point(&self) -> CurvePoint<T> {
        self.points[self.atm_index]
    }

    /// All samples in increasing spot order.
    pub fn points(&self) -> &[CurvePoint<T>] {
        &self.points
    }

    /// Smallest and largest sampled value.
    pub fn value_range(&self) -> (T, T) {
        self.points.iter().fold(
            (T::infinity(), T::neg_infinity()),
            |(lo, hi), p| (lo.min(p.value), hi.max(p.value)),
        )
    }
}
