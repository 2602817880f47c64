// ============================================================================
// Numeric Errors
// Error types for base-10 floating-point operations
// ============================================================================

use std::fmt;

/// Errors that can occur when constructing or combining base-10 floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input was zero or negative; the base-10 logarithm is undefined
    NonPositive,
    /// Input was NaN or infinite
    NotFinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NonPositive => {
                write!(f, "value must be positive: log10 is undefined at or below zero")
            },
            NumericError::NotFinite => write!(f, "value must be finite"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
