//! Composite weights and grade thresholds for trust scoring.
//!
//! # Examples
//!
//! ```
//! use veritas_core::config::{GradeThresholds, TrustWeights};
//! use veritas_core::models::TrustGrade;
//!
//! assert!(TrustWeights::default().validate().is_ok());
//! let thresholds = GradeThresholds::default();
//! assert_eq!(thresholds.grade_for(95.0), TrustGrade::Excellent);
//! assert_eq!(thresholds.grade_for(94.999), TrustGrade::Good);
//! assert_eq!(thresholds.grade_for(12.0), TrustGrade::Suspect);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::defaults;
use crate::constants::{SCORE_MAX, SCORE_MIN, WEIGHT_SUM_EPSILON};
use crate::errors::ConfigError;
use crate::models::TrustGrade;

/// Weights of the four trust factors. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct TrustWeights {
    pub base: f64,
    pub freshness: f64,
    pub reliability: f64,
    pub consensus: f64,
}

impl Default for TrustWeights {
    fn default() -> Self {
        Self {
            base: defaults::DEFAULT_WEIGHT_BASE,
            freshness: defaults::DEFAULT_WEIGHT_FRESHNESS,
            reliability: defaults::DEFAULT_WEIGHT_RELIABILITY,
            consensus: defaults::DEFAULT_WEIGHT_CONSENSUS,
        }
    }
}

impl TrustWeights {
    pub fn sum(&self) -> f64 {
        self.base + self.freshness + self.reliability + self.consensus
    }

    /// Weights must be finite, non-negative, and sum to 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("trust.weights.base", self.base),
            ("trust.weights.freshness", self.freshness),
            ("trust.weights.reliability", self.reliability),
            ("trust.weights.consensus", self.consensus),
        ];
        for (field, w) in named {
            if !w.is_finite() || w < 0.0 {
                return Err(ConfigError::invalid(field, "must be a finite, non-negative number"));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ConfigError::invalid(
                "trust.weights",
                format!("weights must sum to 1.0, got {sum:.6}"),
            ));
        }
        Ok(())
    }
}

/// Inclusive lower bounds of each trust grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
    pub poor: f64,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            excellent: defaults::DEFAULT_GRADE_EXCELLENT,
            good: defaults::DEFAULT_GRADE_GOOD,
            fair: defaults::DEFAULT_GRADE_FAIR,
            poor: defaults::DEFAULT_GRADE_POOR,
        }
    }
}

impl GradeThresholds {
    /// Map a 0–100 score to its grade. Boundaries are inclusive-lower.
    pub fn grade_for(&self, score: f64) -> TrustGrade {
        if score >= self.excellent {
            TrustGrade::Excellent
        } else if score >= self.good {
            TrustGrade::Good
        } else if score >= self.fair {
            TrustGrade::Fair
        } else if score >= self.poor {
            TrustGrade::Poor
        } else {
            TrustGrade::Suspect
        }
    }

    /// Thresholds must lie in [0, 100] and be strictly decreasing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = [
            ("trust.grade_thresholds.excellent", self.excellent),
            ("trust.grade_thresholds.good", self.good),
            ("trust.grade_thresholds.fair", self.fair),
            ("trust.grade_thresholds.poor", self.poor),
        ];
        for (field, t) in ordered {
            if !t.is_finite() || !(SCORE_MIN..=SCORE_MAX).contains(&t) {
                return Err(ConfigError::invalid(field, "must be between 0 and 100"));
            }
        }
        for pair in ordered.windows(2) {
            let (upper_field, upper) = pair[0];
            let (lower_field, lower) = pair[1];
            if upper <= lower {
                return Err(ConfigError::invalid(
                    "trust.grade_thresholds",
                    format!("thresholds not monotonic: {upper_field} ({upper}) must exceed {lower_field} ({lower})"),
                ));
            }
        }
        Ok(())
    }
}

/// Trust scoring configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    pub weights: TrustWeights,
    pub grade_thresholds: GradeThresholds,
}

impl TrustConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.grade_thresholds.validate()
    }
}
