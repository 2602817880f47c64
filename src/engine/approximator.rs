// ============================================================================
// Approximation Engine
// Greedy search for a parallel network of E12 values matching a target
// ============================================================================

use crate::domain::resistor::{ParallelRemainder, Resistor, ResistorError};
use crate::domain::ApproximatorConfig;
use crate::interfaces::{ApproximationEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{DecimalFloat, NumericError};
use chrono::Utc;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Errors
// ============================================================================

/// Errors reported by [`Approximator::approximate`].
///
/// Range exhaustion during the search is deliberately *not* represented
/// here: running out of standard values is the expected way for the search
/// to finish and yields a partial [`Approximation`] instead of an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApproximationError {
    /// Target is NaN, infinite, zero or negative
    InvalidTarget { value: f64 },
    /// Target itself lies outside the representable decade span
    TargetOutOfRange { value: f64 },
    /// Arithmetic failure inside the search loop
    Numeric(NumericError),
}

impl fmt::Display for ApproximationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApproximationError::InvalidTarget { value } => {
                write!(f, "target resistance must be a positive finite number (got {})", value)
            },
            ApproximationError::TargetOutOfRange { value } => {
                write!(f, "target resistance {} is outside the representable range (10R to 820M)", value)
            },
            ApproximationError::Numeric(err) => {
                write!(f, "arithmetic failure during approximation: {}", err)
            },
        }
    }
}

impl std::error::Error for ApproximationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApproximationError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for ApproximationError {
    fn from(err: NumericError) -> Self {
        ApproximationError::Numeric(err)
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// How an approximation run finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// The combination is within the configured tolerance of the target
    WithinTolerance,
    /// The next correction was unrepresentable; the result is the best
    /// network the standard values allow
    RangeExhausted,
}

/// An ordered parallel network of standard values approximating a target.
///
/// Insertion order is preserved for display; the combined value itself is
/// independent of ordering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Approximation {
    target: f64,
    terms: SmallVec<[Resistor; 8]>,
    combined: DecimalFloat,
    outcome: Outcome,
}

impl Approximation {
    /// The requested target resistance, in ohms.
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// The selected standard values, in insertion order.
    #[inline]
    pub fn terms(&self) -> &[Resistor] {
        &self.terms
    }

    /// Parallel combination of all terms, in ohms.
    #[inline]
    pub fn combined_ohms(&self) -> f64 {
        self.combined.to_f64()
    }

    /// Relative error of the combination against the target.
    #[inline]
    pub fn relative_error(&self) -> f64 {
        relative_error(self.target, self.combined.to_f64())
    }

    /// How the search finished.
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// Relative error of a combination against its target
#[inline]
fn relative_error(target: f64, combined: f64) -> f64 {
    (combined - target).abs() / target
}

// ============================================================================
// Approximator
// ============================================================================

/// Outcome of a single search step; the loop matches on this explicitly
/// instead of treating an error as control flow.
enum TermStep {
    /// The combination is close enough; stop without appending
    Converged,
    /// Another standard value is required
    Term(Resistor),
    /// The needed correction is unrepresentable; stop with what we have
    Exhausted,
}

/// Greedy approximation engine.
///
/// Seeds the network with the target snapped up to a standard value, then
/// repeatedly solves for the resistance that, placed in parallel with the
/// running combination, would land exactly on the target, and snaps that
/// correction up to the next standard value. Snapping up means every step
/// overshoots slightly, so the following correction is always positive and
/// strictly larger, marching toward the top of the representable range;
/// the search therefore terminates even at tolerance zero.
pub struct Approximator {
    /// Search configuration
    config: ApproximatorConfig,

    /// Event handler observing the search
    event_handler: Arc<dyn EventHandler>,
}

impl Approximator {
    /// Create a new approximation engine
    pub fn new(config: ApproximatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// The engine's configuration
    pub fn config(&self) -> &ApproximatorConfig {
        &self.config
    }

    /// Approximate a target resistance with a parallel network of standard
    /// values.
    ///
    /// # Errors
    /// - `InvalidTarget` for non-finite or non-positive targets
    /// - `TargetOutOfRange` when the target itself cannot be standardized
    ///   (below 10 Ω or beyond 820 MΩ); a search that *starts* inside the
    ///   range never fails this way, it finishes with
    ///   [`Outcome::RangeExhausted`] instead
    pub fn approximate(&self, target: f64) -> Result<Approximation, ApproximationError> {
        if !target.is_finite() || target <= 0.0 {
            return Err(ApproximationError::InvalidTarget { value: target });
        }

        self.event_handler.on_event(ApproximationEvent::TargetAccepted {
            target,
            tolerance: self.config.tolerance,
            timestamp: Utc::now(),
        });

        let first = match Resistor::new(target) {
            Ok(resistor) => resistor,
            Err(ResistorError::OutOfRange { value }) => {
                return Err(ApproximationError::TargetOutOfRange { value });
            },
            Err(ResistorError::Numeric(err)) => {
                return Err(ApproximationError::Numeric(err));
            },
        };

        let mut terms: SmallVec<[Resistor; 8]> = SmallVec::new();
        let mut combined = first.value();
        terms.push(first);
        self.emit_term(target, first, combined);

        loop {
            match self.next_term(target, combined.to_f64())? {
                TermStep::Converged => {
                    self.event_handler.on_event(ApproximationEvent::ToleranceReached {
                        combined: combined.to_f64(),
                        relative_error: relative_error(target, combined.to_f64()),
                        terms: terms.len(),
                        timestamp: Utc::now(),
                    });
                    return Ok(Approximation {
                        target,
                        terms,
                        combined,
                        outcome: Outcome::WithinTolerance,
                    });
                },
                TermStep::Exhausted => {
                    self.event_handler.on_event(ApproximationEvent::RangeExhausted {
                        combined: combined.to_f64(),
                        relative_error: relative_error(target, combined.to_f64()),
                        terms: terms.len(),
                        timestamp: Utc::now(),
                    });
                    return Ok(Approximation {
                        target,
                        terms,
                        combined,
                        outcome: Outcome::RangeExhausted,
                    });
                },
                TermStep::Term(term) => {
                    combined = term.parallel_with(combined.to_f64())?;
                    terms.push(term);
                    self.emit_term(target, term, combined);
                },
            }
        }
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    /// Decide the next move for the running combination.
    fn next_term(&self, target: f64, combined: f64) -> Result<TermStep, ApproximationError> {
        if relative_error(target, combined) < self.config.tolerance {
            return Ok(TermStep::Converged);
        }

        match Resistor::parallel_remainder(target, combined)? {
            ParallelRemainder::Settled => Ok(TermStep::Converged),
            ParallelRemainder::Needed(difference) => {
                match Resistor::new(difference.to_f64()) {
                    Ok(term) => Ok(TermStep::Term(term)),
                    Err(ResistorError::OutOfRange { .. }) => Ok(TermStep::Exhausted),
                    Err(ResistorError::Numeric(err)) => Err(ApproximationError::Numeric(err)),
                }
            },
        }
    }

    fn emit_term(&self, target: f64, term: Resistor, combined: DecimalFloat) {
        self.event_handler.on_event(ApproximationEvent::TermSelected {
            term,
            combined: combined.to_f64(),
            relative_error: relative_error(target, combined.to_f64()),
            timestamp: Utc::now(),
        });
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Approximate `target` ohms to within `tolerance` relative error.
///
/// Convenience wrapper building a default engine with no event handler;
/// see [`Approximator::approximate`] for the error contract.
pub fn approximate(target: f64, tolerance: f64) -> Result<Approximation, ApproximationError> {
    let config = ApproximatorConfig::new().with_tolerance(tolerance);
    Approximator::new(config, Arc::new(NoOpEventHandler)).approximate(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn labels(approximation: &Approximation) -> Vec<String> {
        approximation.terms().iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_exact_standard_value_single_term() {
        let result = approximate(1000.0, 0.01).unwrap();
        assert_eq!(labels(&result), vec!["1K"]);
        assert_eq!(result.combined_ohms(), 1000.0);
        assert_eq!(result.relative_error(), 0.0);
        assert_eq!(result.outcome(), Outcome::WithinTolerance);
    }

    #[test]
    fn test_non_standard_target_needs_multiple_terms() {
        let result = approximate(1234.0, 0.01).unwrap();
        assert_eq!(labels(&result), vec!["1K5", "8K2", "47K"]);
        assert!(result.relative_error() < 0.01);
        assert_eq!(result.outcome(), Outcome::WithinTolerance);
    }

    #[test]
    fn test_looser_tolerance_needs_fewer_terms() {
        let result = approximate(123_456.0, 0.05).unwrap();
        assert_eq!(labels(&result), vec!["150K", "820K"]);
        assert!(result.relative_error() < 0.05);
    }

    #[test]
    fn test_combined_matches_conductance_sum() {
        let result = approximate(5462.0, 0.01).unwrap();
        let conductance: f64 = result.terms().iter().map(|t| 1.0 / t.ohms()).sum();
        let expected = 1.0 / conductance;
        assert!((result.combined_ohms() - expected).abs() <= expected * 1e-12);
    }

    #[test]
    fn test_zero_tolerance_runs_to_exhaustion() {
        let result = approximate(1234.0, 0.0).unwrap();
        assert_eq!(
            labels(&result),
            vec!["1K5", "8K2", "47K", "2M2", "47M", "470M"]
        );
        assert_eq!(result.outcome(), Outcome::RangeExhausted);
        assert!(result.relative_error() > 0.0);
        assert!(result.relative_error() < 1e-6);
    }

    #[test]
    fn test_exact_target_at_zero_tolerance_settles() {
        let result = approximate(10.0, 0.0).unwrap();
        assert_eq!(labels(&result), vec!["10R"]);
        assert_eq!(result.outcome(), Outcome::WithinTolerance);
    }

    #[test]
    fn test_target_below_minimum_decade() {
        let err = approximate(5.0, 0.01).unwrap_err();
        assert_eq!(err, ApproximationError::TargetOutOfRange { value: 5.0 });
    }

    #[test]
    fn test_target_above_maximum_decade() {
        let err = approximate(9.0e8, 0.01).unwrap_err();
        assert_eq!(err, ApproximationError::TargetOutOfRange { value: 9.0e8 });
    }

    #[test]
    fn test_target_just_under_minimum_rolls_over() {
        // 9.5 exceeds the largest E12 step, so standardization lands on 10R
        let result = approximate(9.5, 0.1).unwrap();
        assert_eq!(labels(&result), vec!["10R"]);
    }

    #[test]
    fn test_invalid_targets() {
        for target in [0.0, -1234.0] {
            assert_eq!(
                approximate(target, 0.01).unwrap_err(),
                ApproximationError::InvalidTarget { value: target }
            );
        }
        assert!(matches!(
            approximate(f64::NAN, 0.01).unwrap_err(),
            ApproximationError::InvalidTarget { .. }
        ));
    }

    #[test]
    fn test_idempotent() {
        let a = approximate(5462.0, 0.01).unwrap();
        let b = approximate(5462.0, 0.01).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_engine_reusable_across_targets() {
        let engine = Approximator::new(
            ApproximatorConfig::five_percent(),
            Arc::new(NoOpEventHandler),
        );
        assert_eq!(engine.config().tolerance, 0.05);

        let first = engine.approximate(1234.0).unwrap();
        let second = engine.approximate(4700.0).unwrap();
        assert_eq!(first.outcome(), Outcome::WithinTolerance);
        assert_eq!(labels(&second), vec!["4K7"]);
    }

    struct CapturingHandler {
        events: Mutex<Vec<ApproximationEvent>>,
    }

    impl EventHandler for CapturingHandler {
        fn on_event(&self, event: ApproximationEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_events_trace_the_search() {
        let handler = Arc::new(CapturingHandler {
            events: Mutex::new(Vec::new()),
        });
        let engine = Approximator::new(ApproximatorConfig::one_percent(), handler.clone());

        let result = engine.approximate(1234.0).unwrap();
        let events = handler.events.lock().unwrap();

        assert!(matches!(
            events.first(),
            Some(ApproximationEvent::TargetAccepted { target, .. }) if *target == 1234.0
        ));
        assert!(matches!(
            events.last(),
            Some(ApproximationEvent::ToleranceReached { terms, .. }) if *terms == result.terms().len()
        ));

        let selected = events
            .iter()
            .filter(|e| matches!(e, ApproximationEvent::TermSelected { .. }))
            .count();
        assert_eq!(selected, result.terms().len());
    }
}
