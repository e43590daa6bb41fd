//! Audience-specific projections of a trust score.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{TrustFactors, TrustGrade, TrustWarning};
use crate::config::TrustWeights;

/// How much detail an explanation carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationDepth {
    Beginner,
    Intermediate,
    Expert,
}

impl fmt::Display for ExplanationDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        })
    }
}

/// A labelled value shown to intermediate and expert readers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupportingDatum {
    pub label: String,
    pub value: f64,
    pub unit: String,
}

/// Contribution of each factor to the composite (`weight × factor`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FactorContributions {
    pub base_confidence: f64,
    pub freshness_score: f64,
    pub source_reliability: f64,
    pub consensus_score: f64,
}

/// The full factor breakdown, copied verbatim from the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FactorBreakdown {
    pub factors: TrustFactors,
    pub weights: TrustWeights,
    pub contributions: FactorContributions,
    pub composite_score: f64,
    pub grade: TrustGrade,
}

/// Algorithm identifier for one component of the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModelIdentifier {
    pub component: String,
    pub identifier: String,
}

/// Range the composite plausibly lies in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UncertaintyBounds {
    pub lower: f64,
    pub upper: f64,
    pub half_width: f64,
}

/// Rendered explanation. Fields beyond the summary are filled by depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Explanation {
    pub depth: ExplanationDepth,
    pub summary: String,
    /// Beginner only: at most four plain-language points.
    pub bullet_points: Vec<String>,
    pub supporting_data: Vec<SupportingDatum>,
    pub assumptions: Vec<String>,
    pub warnings: Vec<TrustWarning>,
    pub factor_breakdown: Option<FactorBreakdown>,
    pub model_identifiers: Vec<ModelIdentifier>,
    pub uncertainty: Option<UncertaintyBounds>,
    pub limitations: Vec<String>,
}

impl Explanation {
    pub fn factor_breakdown(&self) -> Option<&FactorBreakdown> {
        self.factor_breakdown.as_ref()
    }
}
