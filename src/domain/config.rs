// ============================================================================
// Approximator Configuration
// Tolerance settings for the greedy approximation search
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relative tolerance used when none is given (1%)
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Configuration for an approximation run.
///
/// The tolerance is the maximum allowed relative error between the parallel
/// combination and the requested target, as a fraction (0.01 = 1%).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApproximatorConfig {
    /// Maximum relative error of the combined result
    pub tolerance: f64,
}

impl ApproximatorConfig {
    /// Create a configuration with the default 1% tolerance.
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Builder method: set the relative tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validate the configuration.
    ///
    /// A tolerance of exactly zero is legal: the search then tightens the
    /// combination until the representable resistor range is exhausted.
    pub fn validate(&self) -> Result<(), String> {
        if !self.tolerance.is_finite() {
            return Err("Tolerance must be a finite number".to_string());
        }
        if self.tolerance < 0.0 {
            return Err("Tolerance cannot be negative".to_string());
        }
        Ok(())
    }
}

impl Default for ApproximatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ApproximatorConfig {
    /// 10% grade, the tolerance the E12 series was laid out for
    pub fn ten_percent() -> Self {
        Self { tolerance: 0.10 }
    }

    /// 5% grade
    pub fn five_percent() -> Self {
        Self { tolerance: 0.05 }
    }

    /// 1% grade (the default)
    pub fn one_percent() -> Self {
        Self { tolerance: 0.01 }
    }
}
