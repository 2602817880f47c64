// ============================================================================
// Domain Models Module
// Contains the standardized resistor and its value objects
// ============================================================================

pub mod config;
pub mod resistor;
pub mod series;

pub use config::{ApproximatorConfig, DEFAULT_TOLERANCE};
pub use resistor::{ParallelRemainder, Resistor, ResistorError, ResistorResult};
