// ============================================================================
// Approximator Factory
// Creates approximation engines with validated configuration
// ============================================================================

use crate::domain::ApproximatorConfig;
use crate::engine::Approximator;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an approximation engine from configuration
///
/// # Arguments
/// * `config` - Search configuration
/// * `event_handler` - Event handler observing the search
///
/// # Returns
/// * `Result<Approximator, String>` - Configured engine or validation error
///
/// # Example
/// ```
/// use e12_approx::prelude::*;
/// use e12_approx::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = ApproximatorConfig::five_percent();
/// let engine = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// ```
pub fn create_from_config(
    config: ApproximatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Approximator, String> {
    // Validate configuration first
    config.validate()?;

    Ok(Approximator::new(config, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating approximation engines with fluent API
///
/// # Example
/// ```
/// use e12_approx::prelude::*;
/// use e12_approx::engine::factory::ApproximatorBuilder;
/// use std::sync::Arc;
///
/// let engine = ApproximatorBuilder::new()
///     .with_tolerance(0.02)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// ```
pub struct ApproximatorBuilder {
    config: ApproximatorConfig,
}

impl ApproximatorBuilder {
    /// Create a new builder with the default 1% tolerance
    pub fn new() -> Self {
        Self {
            config: ApproximatorConfig::new(),
        }
    }

    /// Set the relative tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply the 10% tolerance grade
    pub fn ten_percent() -> Self {
        Self {
            config: ApproximatorConfig::ten_percent(),
        }
    }

    /// Apply the 5% tolerance grade
    pub fn five_percent() -> Self {
        Self {
            config: ApproximatorConfig::five_percent(),
        }
    }

    /// Apply the 1% tolerance grade
    pub fn one_percent() -> Self {
        Self {
            config: ApproximatorConfig::one_percent(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the approximation engine
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Approximator, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ApproximatorConfig {
        &self.config
    }
}

impl Default for ApproximatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
