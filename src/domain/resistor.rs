// ============================================================================
// Standardized Resistor
// A resistance snapped up to the nearest E12 value, with parallel operations
// ============================================================================

use super::series;
use crate::numeric::{DecimalFloat, NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit letters per thousands-group: ohms, kilohms, megohms
const UNIT_LETTERS: [&str; 3] = ["R", "K", "M"];

// ============================================================================
// Errors
// ============================================================================

/// Errors that can occur when standardizing a resistance value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResistorError {
    /// Input could not be normalized (zero, negative, NaN or infinite)
    Numeric(NumericError),
    /// The snapped value falls outside the supported decade span.
    ///
    /// The approximation engine treats this variant as its expected
    /// termination condition, not as a failure to report.
    OutOfRange { value: f64 },
}

impl fmt::Display for ResistorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResistorError::Numeric(err) => {
                write!(f, "not a representable resistance: {}", err)
            },
            ResistorError::OutOfRange { value } => {
                write!(f, "resistors must be between 10R and 820M (requested {})", value)
            },
        }
    }
}

impl std::error::Error for ResistorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResistorError::Numeric(err) => Some(err),
            ResistorError::OutOfRange { .. } => None,
        }
    }
}

impl From<NumericError> for ResistorError {
    fn from(err: NumericError) -> Self {
        ResistorError::Numeric(err)
    }
}

/// Result type alias for resistor standardization
pub type ResistorResult<T> = Result<T, ResistorError>;

// ============================================================================
// Parallel Remainder
// ============================================================================

/// Outcome of solving for the missing branch of a parallel combination.
///
/// An explicit tagged result: the caller matches on it instead of probing a
/// sentinel numeric zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParallelRemainder {
    /// The combination already equals the target; nothing left to add
    Settled,
    /// The value that, placed in parallel with the combination, reaches
    /// the target
    Needed(DecimalFloat),
}

// ============================================================================
// Resistor
// ============================================================================

/// A single standardized resistor.
///
/// Wraps a [`DecimalFloat`] whose mantissa is always one of the twelve E12
/// steps and whose exponent lies in `[1, 8]`, spanning 10 Ω to 820 MΩ.
/// Construction rounds *up* to the nearest standard value, so a sum of
/// standardized corrections never undershoots its target indefinitely.
///
/// # Example
/// ```ignore
/// use e12_approx::domain::Resistor;
///
/// let r = Resistor::new(4000.0)?;      // snaps up to 4.7 kΩ
/// assert_eq!(r.ohms(), 4700.0);
/// assert_eq!(r.to_string(), "4K7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Resistor {
    value: DecimalFloat,
}

impl Resistor {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Standardize an arbitrary resistance.
    ///
    /// Normalizes the input, rolls over to the next decade when the mantissa
    /// exceeds the largest E12 step, then snaps the mantissa up to the
    /// nearest step. The whole value is derived before `Resistor` is built;
    /// no partially-constructed state is ever observable.
    ///
    /// # Errors
    /// - `Numeric` if the input is not a positive finite number
    /// - `OutOfRange` if the standardized exponent leaves `[1, 8]`
    pub fn new(value: f64) -> ResistorResult<Self> {
        let normalized = DecimalFloat::new(value)?;

        let (mantissa, exponent) = if normalized.mantissa() > series::E12_MANTISSAS[11] {
            (series::E12_MANTISSAS[0], normalized.exponent() + 1)
        } else {
            (normalized.mantissa(), normalized.exponent())
        };

        if !(series::MIN_EXPONENT..=series::MAX_EXPONENT).contains(&exponent) {
            return Err(ResistorError::OutOfRange { value });
        }

        let snapped = series::snap_up(mantissa).ok_or(ResistorError::OutOfRange { value })?;

        Ok(Self {
            value: DecimalFloat::from_parts(snapped, exponent),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Nominal resistance in ohms.
    #[inline]
    pub fn ohms(&self) -> f64 {
        self.value.to_f64()
    }

    /// The underlying normalized value.
    #[inline]
    pub const fn value(&self) -> DecimalFloat {
        self.value
    }

    /// The E12 mantissa step.
    #[inline]
    pub const fn mantissa(&self) -> f64 {
        self.value.mantissa()
    }

    /// The decade exponent, in `[1, 8]`.
    #[inline]
    pub const fn exponent(&self) -> i32 {
        self.value.exponent()
    }

    // ========================================================================
    // Parallel Operations
    // ========================================================================
    // Named operations rather than `+`/`-` overloads: both compute *parallel*
    // combinations, and overloaded arithmetic would suggest series sums.

    /// Parallel combination with an already-combined value:
    /// `1 / (1/self + 1/other)`.
    ///
    /// Returns a plain [`DecimalFloat`]; combinations are not themselves
    /// standard values and are never re-snapped.
    ///
    /// # Errors
    /// Fails when `other` is not a positive finite number.
    pub fn parallel_with(&self, other: f64) -> NumericResult<DecimalFloat> {
        DecimalFloat::new(1.0 / (1.0 / self.ohms() + 1.0 / other))
    }

    /// Solve for the branch that completes a parallel combination.
    ///
    /// Finds `x` such that `target` is the parallel combination of
    /// `combined` and `x`: `1 / (1/target - 1/combined)`. When the two
    /// values are exactly equal there is no remaining branch and
    /// [`ParallelRemainder::Settled`] is returned.
    ///
    /// # Errors
    /// Fails with `NonPositive` when `combined < target`: no positive
    /// resistance placed in parallel can raise a combination.
    pub fn parallel_remainder(target: f64, combined: f64) -> NumericResult<ParallelRemainder> {
        if combined == target {
            return Ok(ParallelRemainder::Settled);
        }

        DecimalFloat::new(1.0 / (1.0 / target - 1.0 / combined)).map(ParallelRemainder::Needed)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Resistor {
    /// Engineering-notation label: `4700 Ω -> "4K7"`, `100 Ω -> "100R"`.
    ///
    /// The mantissa is shifted so the exponent becomes a multiple of three,
    /// the decimal point is replaced by the thousands-group unit letter, and
    /// trailing zeros are stripped (`"1K0"` renders as `"1K"`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let group = (self.exponent() / 3) as usize;
        let shift = self.exponent() % 3;
        let scaled = self.mantissa() * 10f64.powi(shift);

        // E12 steps have a single fractional digit, so one is always enough
        let digits = format!("{:.1}", scaled);
        let label = digits.replace('.', UNIT_LETTERS[group]);
        f.write_str(label.trim_end_matches('0'))
    }
}
