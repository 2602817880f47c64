// ============================================================================
// Numeric Module
// Base-10 floating-point representation for resistance values
// ============================================================================
//
// This module provides:
// - DecimalFloat: normalized mantissa/exponent pair, `mantissa * 10^exponent`
// - NumericError: error types for construction and arithmetic
//
// Design principles:
// - Only positive finite values are representable (log10 domain)
// - Every operation recomputes in real arithmetic and renormalizes
// - All fallible paths return Result (no panics)

mod decimal_float;
mod errors;

pub use decimal_float::DecimalFloat;
pub use errors::{NumericError, NumericResult};
