//! Standard normal distribution functions Φ and φ.
//!
//! Generic over `T: Float`, so the pricer works for `f32` and `f64` alike.
//! Φ is evaluated in `f64` through `statrs`' complementary error function,
//! which is accurate to a few ulps over the whole real line.

use num_traits::Float;
use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function Φ(x) = erfc(-x/√2) / 2.
///
/// NaN input propagates to a NaN result. `Φ(x) + Φ(-x) = 1` holds to
/// rounding error, which put-call parity relies on.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0_f64), 0.5);
/// assert!((norm_cdf(1.0_f64) - 0.841_344_746_068_542_9).abs() < 1e-12);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let Some(x) = x.to_f64() else {
        return T::nan();
    };
    T::from(0.5 * erfc(-x / SQRT_2)).unwrap_or_else(T::nan)
}

/// Standard normal probability density φ(x) = exp(-x²/2) / √(2π).
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// assert!((norm_pdf(1.0_f64) - 0.2419707245).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    frac_1_sqrt_2pi * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_eq!(norm_cdf(0.0_f64), 0.5);
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Φ to 17 significant digits
        let reference = [
            (1.0_f64, 0.841_344_746_068_542_9),
            (-1.0, 0.158_655_253_931_457_05),
            (2.0, 0.977_249_868_051_820_8),
            (-2.0, 0.022_750_131_948_179_22),
            (3.0, 0.998_650_101_968_369_9),
            // d1 and d2 of the reference contract (S=K=100, T=1, r=5%, σ=20%)
            (0.35, 0.636_830_651_175_619),
            (0.15, 0.559_617_692_370_242_5),
        ];
        for (x, expected) in reference {
            assert_relative_eq!(norm_cdf(x), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_norm_cdf_deep_tail_relative_accuracy() {
        assert_relative_eq!(norm_cdf(-5.0_f64), 2.866_515_718_791_946e-7, max_relative = 1e-12);
        assert_relative_eq!(norm_cdf(-10.0_f64), 7.619_853_024_160_593e-24, max_relative = 1e-12);
        assert_relative_eq!(norm_cdf(-6.0_f64), 9.865_876_450_377_012e-10, max_relative = 1e-12);
    }

    #[test]
    fn test_norm_cdf_tails_saturate() {
        assert_eq!(norm_cdf(40.0_f64), 1.0);
        assert_eq!(norm_cdf(-40.0_f64), 0.0);
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_norm_cdf_nan_propagates() {
        assert!(norm_cdf(f64::NAN).is_nan());
        assert!(norm_pdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-60..=60).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) >= norm_cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    #[test]
    fn test_norm_pdf_symmetric() {
        for x in [0.1, 0.5, 1.0, 2.5, 4.0] {
            assert_eq!(norm_pdf(x), norm_pdf(-x));
        }
    }

    #[test]
    fn test_norm_pdf_is_cdf_derivative() {
        let h = 1e-5;
        for x in [-2.0_f64, -0.5, 0.0, 0.7, 1.9] {
            let numeric = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numeric, norm_pdf(x), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_f32_support() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-6);
        assert!((norm_pdf(0.0_f32) - 0.398_942_3).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_cdf_symmetry(x in -10.0_f64..10.0) {
            prop_assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-14);
        }

        #[test]
        fn prop_cdf_in_unit_interval(x in -50.0_f64..50.0) {
            let p = norm_cdf(x);
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}
