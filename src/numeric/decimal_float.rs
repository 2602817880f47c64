// ============================================================================
// Base-10 Floating Value
// Normalized mantissa/exponent representation of a positive real number
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base-10 floating-point value, stored as `mantissa * 10^exponent`.
///
/// The pair is always normalized: `1.0 <= mantissa < 10.0`. Every arithmetic
/// operation is performed on the real values and the result re-normalized
/// through [`DecimalFloat::new`], never by combining mantissas and exponents
/// symbolically.
///
/// Only strictly positive, finite values are representable; resistances and
/// their parallel combinations never leave that domain.
///
/// # Example
/// ```ignore
/// use e12_approx::numeric::DecimalFloat;
///
/// let value = DecimalFloat::new(4700.0)?;   // 4.7 * 10^3
/// assert_eq!(value.mantissa(), 4.7);
/// assert_eq!(value.exponent(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalFloat {
    mantissa: f64,
    exponent: i32,
}

/// 10^n for the exponent range this crate works in
#[inline]
fn pow10(exponent: i32) -> f64 {
    10f64.powi(exponent)
}

impl DecimalFloat {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Normalize a positive real number into mantissa/exponent form.
    ///
    /// The exponent starts as `floor(log10(value))` and is corrected in both
    /// directions: decremented when `10^exponent` overshoots the input, and
    /// incremented when the derived mantissa lands at `>= 10.0`. libm may
    /// round `log10` to either side of an integer at exact decade
    /// boundaries, so both guards are required for the invariant to hold.
    ///
    /// # Errors
    /// - `NotFinite` if the value is NaN or infinite
    /// - `NonPositive` if the value is zero or negative
    pub fn new(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NotFinite);
        }
        if value <= 0.0 {
            return Err(NumericError::NonPositive);
        }

        let mut exponent = value.log10().floor() as i32;
        if pow10(exponent) > value {
            exponent -= 1;
        }

        let mut mantissa = value / pow10(exponent);
        if mantissa >= 10.0 {
            exponent += 1;
            mantissa = value / pow10(exponent);
        }

        Ok(Self { mantissa, exponent })
    }

    /// Create from an already-normalized pair.
    ///
    /// Caller guarantees `1.0 <= mantissa < 10.0`. Used where the pair is
    /// derived from values that are normalized by construction (e.g. a
    /// snapped standard-series mantissa).
    #[inline]
    pub(crate) const fn from_parts(mantissa: f64, exponent: i32) -> Self {
        Self { mantissa, exponent }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The normalized mantissa, in `[1.0, 10.0)`.
    #[inline]
    pub const fn mantissa(self) -> f64 {
        self.mantissa
    }

    /// The base-10 exponent.
    #[inline]
    pub const fn exponent(self) -> i32 {
        self.exponent
    }

    /// The represented real number, `mantissa * 10^exponent`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.mantissa * pow10(self.exponent)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================
    // Named checked operations instead of operator overloads: each one can
    // fail when the real-valued result leaves the positive finite domain.

    /// `self + rhs`, renormalized.
    ///
    /// # Errors
    /// Fails when the result is not a positive finite number.
    #[inline]
    pub fn checked_add(self, rhs: f64) -> NumericResult<Self> {
        Self::new(self.to_f64() + rhs)
    }

    /// `self - rhs`, renormalized.
    ///
    /// # Errors
    /// Fails when the result is not a positive finite number.
    #[inline]
    pub fn checked_sub(self, rhs: f64) -> NumericResult<Self> {
        Self::new(self.to_f64() - rhs)
    }

    /// Reverse-operand subtraction: `lhs - self`, renormalized.
    ///
    /// Subtraction is not commutative; this is the form used when the
    /// left-hand operand is a bare number.
    #[inline]
    pub fn checked_sub_from(self, lhs: f64) -> NumericResult<Self> {
        Self::new(lhs - self.to_f64())
    }

    /// `self * rhs`, renormalized.
    ///
    /// # Errors
    /// Fails when the result is not a positive finite number.
    #[inline]
    pub fn checked_mul(self, rhs: f64) -> NumericResult<Self> {
        Self::new(self.to_f64() * rhs)
    }

    /// `self / rhs`, renormalized.
    ///
    /// # Errors
    /// Fails when the result is not a positive finite number; dividing by
    /// zero produces an infinity and is reported as `NotFinite`.
    #[inline]
    pub fn checked_div(self, rhs: f64) -> NumericResult<Self> {
        Self::new(self.to_f64() / rhs)
    }

    /// Reverse-operand division: `lhs / self`, renormalized.
    #[inline]
    pub fn checked_div_from(self, lhs: f64) -> NumericResult<Self> {
        Self::new(lhs / self.to_f64())
    }
}

impl From<DecimalFloat> for f64 {
    #[inline]
    fn from(value: DecimalFloat) -> f64 {
        value.to_f64()
    }
}

impl fmt::Display for DecimalFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e{}", self.mantissa, self.exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= expected.abs() * 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_new_normalizes() {
        let x = DecimalFloat::new(4700.0).unwrap();
        assert_eq!(x.mantissa(), 4.7);
        assert_eq!(x.exponent(), 3);

        let y = DecimalFloat::new(123.456).unwrap();
        assert_close(y.mantissa(), 1.23456);
        assert_eq!(y.exponent(), 2);
    }

    #[test]
    fn test_new_exact_decade() {
        // log10(1000) may round to either side of 3.0 depending on libm
        let x = DecimalFloat::new(1000.0).unwrap();
        assert_eq!(x.mantissa(), 1.0);
        assert_eq!(x.exponent(), 3);

        let one = DecimalFloat::new(1.0).unwrap();
        assert_eq!(one.mantissa(), 1.0);
        assert_eq!(one.exponent(), 0);
    }

    #[test]
    fn test_new_sub_unit() {
        let x = DecimalFloat::new(0.05).unwrap();
        assert_close(x.mantissa(), 5.0);
        assert_eq!(x.exponent(), -2);
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert_eq!(DecimalFloat::new(0.0), Err(NumericError::NonPositive));
        assert_eq!(DecimalFloat::new(-4.7), Err(NumericError::NonPositive));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert_eq!(DecimalFloat::new(f64::NAN), Err(NumericError::NotFinite));
        assert_eq!(DecimalFloat::new(f64::INFINITY), Err(NumericError::NotFinite));
    }

    #[test]
    fn test_round_trip() {
        for value in [10.0, 47.0, 820.0, 1234.5, 8.2e8] {
            assert_close(DecimalFloat::new(value).unwrap().to_f64(), value);
        }
    }

    #[test]
    fn test_checked_add() {
        let x = DecimalFloat::new(900.0).unwrap();
        let sum = x.checked_add(100.0).unwrap();
        assert_eq!(sum.mantissa(), 1.0);
        assert_eq!(sum.exponent(), 3);
    }

    #[test]
    fn test_checked_sub_directions() {
        let x = DecimalFloat::new(300.0).unwrap();

        let forward = x.checked_sub(100.0).unwrap();
        assert_close(forward.to_f64(), 200.0);

        let reverse = x.checked_sub_from(1000.0).unwrap();
        assert_close(reverse.to_f64(), 700.0);
    }

    #[test]
    fn test_checked_sub_non_positive_result() {
        let x = DecimalFloat::new(100.0).unwrap();
        assert_eq!(x.checked_sub(100.0), Err(NumericError::NonPositive));
        assert_eq!(x.checked_sub(200.0), Err(NumericError::NonPositive));
    }

    #[test]
    fn test_checked_mul_div() {
        let x = DecimalFloat::new(4.7).unwrap();
        assert_close(x.checked_mul(1000.0).unwrap().to_f64(), 4700.0);
        assert_close(x.checked_div(2.0).unwrap().to_f64(), 2.35);

        let reverse = x.checked_div_from(47.0).unwrap();
        assert_close(reverse.to_f64(), 10.0);
    }

    #[test]
    fn test_checked_div_by_zero() {
        let x = DecimalFloat::new(4.7).unwrap();
        assert_eq!(x.checked_div(0.0), Err(NumericError::NotFinite));
    }

    #[test]
    fn test_display() {
        let x = DecimalFloat::new(4700.0).unwrap();
        assert_eq!(x.to_string(), "4.7e3");
    }

    proptest! {
        #[test]
        fn prop_mantissa_normalized(value in 1e-9f64..1e9) {
            let x = DecimalFloat::new(value).unwrap();
            prop_assert!(x.mantissa() >= 1.0);
            prop_assert!(x.mantissa() < 10.0);
        }

        #[test]
        fn prop_round_trip(value in 1e-9f64..1e9) {
            let x = DecimalFloat::new(value).unwrap();
            let back = x.to_f64();
            prop_assert!((back - value).abs() <= value * 1e-12);
        }
    }
}
