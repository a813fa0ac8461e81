//! # BMI Calculator
//!
//! `BMI = weight (kg) / height (m)²`
//!
//! BMI is not defined for non-positive measurements, so [`compute_bmi`]
//! returns `None` instead of an error. The undefined value flows through
//! classification and guidance unchanged.
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::calculations::bmi::{compute_bmi, round_bmi};
//!
//! let bmi = compute_bmi(70.0, 1.70).unwrap();
//! assert!((bmi - 24.221_453).abs() < 1e-6);
//! assert_eq!(round_bmi(bmi), 24.2);
//!
//! assert_eq!(compute_bmi(0.0, 1.70), None);
//! ```

/// Decimal places BMI is reported (and classified) at
pub const BMI_DECIMALS: usize = 1;

/// Compute BMI at full precision.
///
/// Returns `None` when either measurement is non-positive or NaN.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> Option<f64> {
    if weight_kg.is_nan() || height_m.is_nan() || weight_kg <= 0.0 || height_m <= 0.0 {
        return None;
    }
    Some(weight_kg / height_m.powi(2))
}

/// Round a BMI to one decimal place.
///
/// Rounds the exact binary value of `bmi`, not `bmi * 10`: 99.8 / 4 is stored
/// just below 24.95 and rounds to 24.9. Exact ties go to the even neighbour
/// (24.25 -> 24.2).
pub fn round_bmi(bmi: f64) -> f64 {
    format!("{:.*}", BMI_DECIMALS, bmi).parse().unwrap_or(bmi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_formula() {
        let cases = [(70.0, 1.70), (45.0, 1.55), (120.0, 1.92), (0.5, 0.3)];
        for (w, h) in cases {
            let bmi = compute_bmi(w, h).unwrap();
            assert!((bmi - w / (h * h)).abs() < 1e-9, "w={} h={}", w, h);
        }
    }

    #[test]
    fn test_non_positive_inputs_are_undefined() {
        assert_eq!(compute_bmi(0.0, 1.7), None);
        assert_eq!(compute_bmi(-70.0, 1.7), None);
        assert_eq!(compute_bmi(70.0, 0.0), None);
        assert_eq!(compute_bmi(70.0, -1.7), None);
        assert_eq!(compute_bmi(f64::NAN, 1.7), None);
        assert_eq!(compute_bmi(70.0, f64::NAN), None);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_bmi(24.221453), 24.2);
        assert_eq!(round_bmi(24.119636), 24.1);
        assert_eq!(round_bmi(18.449), 18.4);
        assert_eq!(round_bmi(18.451), 18.5);
        assert_eq!(round_bmi(24.25), 24.2);
        assert_eq!(round_bmi(29.96), 30.0);
    }

    #[test]
    fn test_rounding_uses_stored_value() {
        // each of these is stored just below the written tie
        assert_eq!(round_bmi(99.8 / 4.0), 24.9);
        assert_eq!(round_bmi(119.8 / 4.0), 29.9);
        assert_eq!(round_bmi(24.95), 24.9);
        assert_eq!(round_bmi(29.95), 29.9);
        // stored just above
        assert_eq!(round_bmi(10.05), 10.1);
    }
}
