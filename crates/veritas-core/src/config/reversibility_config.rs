use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Reversal planning configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReversibilityConfig {
    /// How long after execution an action may still be reversed.
    pub reversal_window_seconds: u64,
    /// Elapsed time after which reversal complexity is bumped one level.
    pub grace_window_seconds: u64,
    /// Added to the cost estimate per dependent system.
    pub cost_per_dependent_system: f64,
}

impl Default for ReversibilityConfig {
    fn default() -> Self {
        Self {
            reversal_window_seconds: defaults::DEFAULT_REVERSAL_WINDOW_SECONDS,
            grace_window_seconds: defaults::DEFAULT_GRACE_WINDOW_SECONDS,
            cost_per_dependent_system: defaults::DEFAULT_COST_PER_DEPENDENT_SYSTEM,
        }
    }
}

impl ReversibilityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reversal_window_seconds == 0 {
            return Err(ConfigError::invalid(
                "reversibility.reversal_window_seconds",
                "must be greater than 0",
            ));
        }
        if self.reversal_window_seconds > defaults::MAX_REVERSAL_WINDOW_SECONDS {
            return Err(ConfigError::invalid(
                "reversibility.reversal_window_seconds",
                "must not exceed 100 years",
            ));
        }
        if self.grace_window_seconds > self.reversal_window_seconds {
            return Err(ConfigError::invalid(
                "reversibility.grace_window_seconds",
                "must not exceed reversal_window_seconds",
            ));
        }
        if !self.cost_per_dependent_system.is_finite() || self.cost_per_dependent_system < 0.0 {
            return Err(ConfigError::invalid(
                "reversibility.cost_per_dependent_system",
                "must be 0 or greater",
            ));
        }
        Ok(())
    }
}
