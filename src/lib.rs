// ============================================================================
// E12 Approximation Library
// Greedy parallel-network approximation of arbitrary resistance values
// ============================================================================

//! # E12 Approx
//!
//! Approximates an arbitrary target resistance with a parallel network of
//! values drawn from the E12 standard series.
//!
//! ## Features
//!
//! - **Greedy search** that snaps each correction *up* to the next standard
//!   value, so the running combination converges from above
//! - **Normalized base-10 arithmetic** (mantissa/exponent pairs spanning
//!   10 Ω to 820 MΩ)
//! - **Engineering-notation formatting** (`4700 Ω -> "4K7"`)
//! - **Explicit termination states**: within tolerance, or standard range
//!   exhausted with a best-effort partial network
//! - **Pluggable event handlers** for observing each step of the search
//!
//! ## Example
//!
//! ```rust
//! use e12_approx::prelude::*;
//! use std::sync::Arc;
//!
//! // One-call entry point: target ohms and relative tolerance
//! let network = approximate(1234.0, 0.01).unwrap();
//! assert!(network.relative_error() < 0.01);
//!
//! // Or a configured engine with an event handler
//! let engine = Approximator::new(
//!     ApproximatorConfig::one_percent(),
//!     Arc::new(LoggingEventHandler),
//! );
//! let network = engine.approximate(5462.0).unwrap();
//! for term in network.terms() {
//!     println!("{}", term); // "5K6", "270K"
//! }
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ApproximatorConfig, ParallelRemainder, Resistor, ResistorError, DEFAULT_TOLERANCE,
    };
    pub use crate::engine::{
        approximate, create_from_config, Approximation, ApproximationError, Approximator,
        ApproximatorBuilder, Outcome,
    };
    pub use crate::interfaces::{
        ApproximationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{DecimalFloat, NumericError, NumericResult};
}
