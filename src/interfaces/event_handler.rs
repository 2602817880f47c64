// ============================================================================
// Event Handler Interface
// Defines the contract for observing approximation progress
// ============================================================================

use crate::domain::Resistor;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the approximation engine
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ApproximationEvent {
    /// Target validated and the search started
    TargetAccepted {
        target: f64,
        tolerance: f64,
        timestamp: DateTime<Utc>,
    },

    /// A standard value was appended to the combination
    TermSelected {
        term: Resistor,
        combined: f64,
        relative_error: f64,
        timestamp: DateTime<Utc>,
    },

    /// The combination reached the requested tolerance
    ToleranceReached {
        combined: f64,
        relative_error: f64,
        terms: usize,
        timestamp: DateTime<Utc>,
    },

    /// The needed correction left the representable range; the partial
    /// result is final
    RangeExhausted {
        combined: f64,
        relative_error: f64,
        terms: usize,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for observing the approximation engine.
/// Implementations can handle logging, metrics, progress display, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an approximation event
    fn on_event(&self, event: ApproximationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ApproximationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ApproximationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ApproximationEvent) {
        tracing::debug!("Approximation event: {:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(ApproximationEvent::TargetAccepted {
            target: 1234.0,
            tolerance: 0.01,
            timestamp: Utc::now(),
        });
        // Should not panic
    }

    #[test]
    fn test_batch_default_delegates() {
        let handler = NoOpEventHandler;
        handler.on_events(vec![
            ApproximationEvent::ToleranceReached {
                combined: 1234.7,
                relative_error: 0.0006,
                terms: 3,
                timestamp: Utc::now(),
            },
            ApproximationEvent::RangeExhausted {
                combined: 1234.0,
                relative_error: 0.0,
                terms: 6,
                timestamp: Utc::now(),
            },
        ]);
    }
}
