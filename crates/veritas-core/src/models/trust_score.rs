//! Trust score records produced by the calculator.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::{DecayPolicy, TrustWeights};

/// Letter grade of a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TrustGrade {
    Suspect,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl TrustGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Suspect => "suspect",
        }
    }
}

impl fmt::Display for TrustGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a warning was attached to a score or consensus result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// One factor fell below the "fair" threshold.
    LowFactor,
    /// A numeric input was outside its range and was clamped.
    ClampedInput,
    /// The witness timestamp was in the future.
    ClockSkew,
    /// Only one source reported on the fact.
    SingleSource,
    /// No consensus result was available for scoring.
    NoConsensus,
    /// Claims split evenly; the higher-reliability side was preferred.
    ConsensusTieBreak,
    /// The largest agreeing group was not a majority.
    NoMajority,
    /// The source has too few recorded outcomes; reliability is the neutral default.
    SparseHistory,
}

/// A data-quality warning. Never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrustWarning {
    pub kind: WarningKind,
    pub message: String,
}

impl TrustWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The four inputs to the composite, each on a 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrustFactors {
    pub base_confidence: f64,
    pub freshness_score: f64,
    pub source_reliability: f64,
    pub consensus_score: f64,
}

impl TrustFactors {
    /// Weighted sum, clamped to [0, 100].
    pub fn composite(&self, weights: &TrustWeights) -> f64 {
        let raw = weights.base * self.base_confidence
            + weights.freshness * self.freshness_score
            + weights.reliability * self.source_reliability
            + weights.consensus * self.consensus_score;
        raw.clamp(0.0, 100.0)
    }

    /// Factors paired with their display names, in composite order.
    pub fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("base_confidence", self.base_confidence),
            ("freshness_score", self.freshness_score),
            ("source_reliability", self.source_reliability),
            ("consensus_score", self.consensus_score),
        ]
    }
}

/// Parameters the score was computed with, carried so that explanations can
/// be rendered without recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringModel {
    pub weights: TrustWeights,
    pub decay_policy: DecayPolicy,
    pub half_life_seconds: f64,
    pub grace_period_seconds: f64,
    pub decay_floor: f64,
    /// Lower bound of the "fair" grade at scoring time.
    pub fair_threshold: f64,
}

/// Composite trust score for one data point at one instant.
///
/// A function of the current time; recomputed per request, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrustScore {
    pub data_point_id: String,
    pub source_id: String,
    pub base_confidence: f64,
    pub freshness_score: f64,
    pub source_reliability: f64,
    pub consensus_score: f64,
    pub composite_score: f64,
    pub grade: TrustGrade,
    pub warnings: Vec<TrustWarning>,
    /// Truth age at `evaluated_at`.
    pub truth_age_seconds: f64,
    pub evaluated_at: DateTime<Utc>,
    pub model: ScoringModel,
}

impl TrustScore {
    pub fn factors(&self) -> TrustFactors {
        TrustFactors {
            base_confidence: self.base_confidence,
            freshness_score: self.freshness_score,
            source_reliability: self.source_reliability,
            consensus_score: self.consensus_score,
        }
    }

    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }
}
