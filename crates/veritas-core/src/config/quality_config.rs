use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::defaults;
use crate::constants::WEIGHT_SUM_EPSILON;
use crate::errors::ConfigError;

/// Weights of the five decision-quality components. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct QualityWeights {
    pub accuracy: f64,
    pub efficiency: f64,
    pub timeliness: f64,
    pub risk_management: f64,
    pub compliance: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            accuracy: defaults::DEFAULT_QUALITY_WEIGHT_ACCURACY,
            efficiency: defaults::DEFAULT_QUALITY_WEIGHT_EFFICIENCY,
            timeliness: defaults::DEFAULT_QUALITY_WEIGHT_TIMELINESS,
            risk_management: defaults::DEFAULT_QUALITY_WEIGHT_RISK,
            compliance: defaults::DEFAULT_QUALITY_WEIGHT_COMPLIANCE,
        }
    }
}

impl QualityWeights {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            self.accuracy,
            self.efficiency,
            self.timeliness,
            self.risk_management,
            self.compliance,
        ];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::invalid(
                "quality.weights",
                "every weight must be a finite, non-negative number",
            ));
        }
        let sum: f64 = all.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ConfigError::invalid(
                "quality.weights",
                format!("weights must sum to 1.0, got {sum:.6}"),
            ));
        }
        Ok(())
    }
}

/// Decision-quality scoring configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// |variance| above which a metric needs a root-cause entry.
    pub variance_tolerance: f64,
    pub weights: QualityWeights,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            variance_tolerance: defaults::DEFAULT_VARIANCE_TOLERANCE,
            weights: QualityWeights::default(),
        }
    }
}

impl QualityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.variance_tolerance.is_finite() || self.variance_tolerance < 0.0 {
            return Err(ConfigError::invalid("quality.variance_tolerance", "must be 0 or greater"));
        }
        self.weights.validate()
    }
}
