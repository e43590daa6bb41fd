use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Consensus aggregation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusConfig {
    /// Numeric claims agree when within this fraction of the larger magnitude.
    pub relative_tolerance: f64,
    /// Numeric claims always agree when within this absolute distance.
    pub absolute_tolerance: f64,
    /// Minimum cluster size for agreement to be reached.
    pub min_agreeing_claims: usize,
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            relative_tolerance: defaults::DEFAULT_RELATIVE_TOLERANCE,
            absolute_tolerance: defaults::DEFAULT_ABSOLUTE_TOLERANCE,
            min_agreeing_claims: defaults::DEFAULT_MIN_AGREEING_CLAIMS,
        }
    }
}

impl ConsensusConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.relative_tolerance.is_finite() || self.relative_tolerance < 0.0 {
            return Err(ConfigError::invalid("consensus.relative_tolerance", "must be 0 or greater"));
        }
        if !self.absolute_tolerance.is_finite() || self.absolute_tolerance < 0.0 {
            return Err(ConfigError::invalid("consensus.absolute_tolerance", "must be 0 or greater"));
        }
        if self.min_agreeing_claims < 2 {
            return Err(ConfigError::invalid(
                "consensus.min_agreeing_claims",
                "must be at least 2 (single-source data is never consensus)",
            ));
        }
        Ok(())
    }
}
