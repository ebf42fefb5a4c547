//! Reported option sensitivities.

use num_traits::Float;

/// Display names of the five Greeks, in reporting order.
pub const GREEK_NAMES: [&str; 5] = ["Delta", "Gamma", "Vega", "Theta", "Rho"];

/// Display-scaled Black-Scholes sensitivities.
///
/// Produced by [`BlackScholes::greeks`](super::BlackScholes::greeks). Every
/// value is rounded to 4 decimal places and scaled for quoting:
///
/// | Field   | Meaning                                   |
/// |---------|-------------------------------------------|
/// | `delta` | ∂V/∂S                                     |
/// | `gamma` | ∂²V/∂S²                                   |
/// | `vega`  | value change per 1 vol point (∂V/∂σ / 100) |
/// | `theta` | value change per calendar day (/365)      |
/// | `rho`   | value change per 1% rate move (∂V/∂r / 100) |
///
/// Serialises as a map keyed `Delta`, `Gamma`, `Vega`, `Theta`, `Rho` in that
/// order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// Delta
    #[cfg_attr(feature = "serde", serde(rename = "Delta"))]
    pub delta: T,
    /// Gamma
    #[cfg_attr(feature = "serde", serde(rename = "Gamma"))]
    pub gamma: T,
    /// Vega per vol point
    #[cfg_attr(feature = "serde", serde(rename = "Vega"))]
    pub vega: T,
    /// Theta per calendar day
    #[cfg_attr(feature = "serde", serde(rename = "Theta"))]
    pub theta: T,
    /// Rho per 1% rate move
    #[cfg_attr(feature = "serde", serde(rename = "Rho"))]
    pub rho: T,
}

impl<T: Float> Greeks<T> {
    /// Name/value pairs in reporting order.
    ///
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, "call").unwrap();
    /// let names: Vec<&str> = bs.greeks().entries().iter().map(|(n, _)| *n).collect();
    /// assert_eq!(names, ["Delta", "Gamma", "Vega", "Theta", "Rho"]);
    /// ```
    pub fn entries(&self) -> [(&'static str, T); 5] {
        [
            (GREEK_NAMES[0], self.delta),
            (GREEK_NAMES[1], self.gamma),
            (GREEK_NAMES[2], self.vega),
            (GREEK_NAMES[3], self.theta),
            (GREEK_NAMES[4], self.rho),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Greeks<f64> {
        Greeks {
            delta: 0.6368,
            gamma: 0.0188,
            vega: 0.3752,
            theta: -0.0176,
            rho: 0.5323,
        }
    }

    #[test]
    fn test_entries_order() {
        let entries = sample().entries();
        assert_eq!(entries[0], ("Delta", 0.6368));
        assert_eq!(entries[4], ("Rho", 0.5323));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialises_in_reporting_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"Delta":0.6368,"Gamma":0.0188,"Vega":0.3752,"Theta":-0.0176,"Rho":0.5323}"#
        );
    }
}
