use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Source reliability registry configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliabilityConfig {
    /// Sources with fewer observations report the neutral default.
    pub min_observations_for_reliability: u64,
    /// Neutral reliability (0–100) for sparse sources.
    pub neutral_reliability: f64,
}

impl Default for ReliabilityConfig {
    fn default() -> Self {
        Self {
            min_observations_for_reliability: defaults::DEFAULT_MIN_OBSERVATIONS,
            neutral_reliability: defaults::DEFAULT_NEUTRAL_RELIABILITY,
        }
    }
}

impl ReliabilityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.neutral_reliability.is_finite() || !(0.0..=100.0).contains(&self.neutral_reliability) {
            return Err(ConfigError::invalid(
                "reliability.neutral_reliability",
                "must be between 0 and 100",
            ));
        }
        Ok(())
    }
}
