//! Decimal rounding for reported values.

use num_traits::Float;

/// Rounds `value` to `places` decimal places, half away from zero.
///
/// The value is scaled by `10^places`, rounded and scaled back. Exact binary
/// ties therefore go away from zero (`0.03125` becomes `0.0313`), unlike
/// round-half-to-even schemes which give `0.0312`. Non-finite inputs are
/// returned unchanged.
///
/// ```
/// use pricer_core::math::rounding::round_to_places;
///
/// assert_eq!(round_to_places(0.636_830_651_f64, 4), 0.6368);
/// assert_eq!(round_to_places(-0.017_573_f64, 4), -0.0176);
/// assert!(round_to_places(f64::NAN, 4).is_nan());
/// ```
#[inline]
pub fn round_to_places<T: Float>(value: T, places: i32) -> T {
    if !value.is_finite() {
        return value;
    }
    let scale = T::from(10.0).unwrap().powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_positive() {
        assert_eq!(round_to_places(10.450_583_572_185_565_f64, 2), 10.45);
        assert_eq!(round_to_places(0.018_762_017_345_846_895_f64, 4), 0.0188);
    }

    #[test]
    fn test_round_negative() {
        assert_eq!(round_to_places(-0.363_169_348_f64, 4), -0.3632);
    }

    #[test]
    fn test_round_zero_places() {
        assert_eq!(round_to_places(2.5_f64, 0), 3.0);
        assert_eq!(round_to_places(-2.5_f64, 0), -3.0);
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(round_to_places(0.031_25_f64, 4), 0.0313);
        assert_eq!(round_to_places(-0.031_25_f64, 4), -0.0313);
        assert_eq!(round_to_places(0.125_f64, 2), 0.13);
    }

    #[test]
    fn test_round_non_finite_passthrough() {
        assert!(round_to_places(f64::NAN, 4).is_nan());
        assert_eq!(round_to_places(f64::INFINITY, 4), f64::INFINITY);
        assert_eq!(round_to_places(f64::NEG_INFINITY, 4), f64::NEG_INFINITY);
    }

    proptest! {
        #[test]
        fn prop_rounding_error_is_bounded(x in -1.0e6_f64..1.0e6) {
            let rounded = round_to_places(x, 4);
            prop_assert!((rounded - x).abs() <= 0.5e-4 + 1e-9);
        }

        #[test]
        fn prop_rounding_is_idempotent(x in -1.0e6_f64..1.0e6) {
            let once = round_to_places(x, 4);
            prop_assert!((round_to_places(once, 4) - once).abs() < 1e-9);
        }
    }
}
