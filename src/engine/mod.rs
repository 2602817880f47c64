// ============================================================================
// Engine Module
// Contains the core approximation search logic
// ============================================================================

mod approximator;

pub mod factory;

pub use approximator::{approximate, Approximation, ApproximationError, Approximator, Outcome};
pub use factory::{create_from_config, ApproximatorBuilder};
