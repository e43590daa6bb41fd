//! Claims from multiple sources about the same fact, and their aggregate.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ObservedValue, TrustWarning};

/// One source's claim about a fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Claim {
    pub source_id: String,
    pub value: ObservedValue,
    /// Confidence the source has in the claim (0–100).
    pub confidence: f64,
}

impl Claim {
    pub fn new(source_id: impl Into<String>, value: impl Into<ObservedValue>, confidence: f64) -> Self {
        Self {
            source_id: source_id.into(),
            value: value.into(),
            confidence,
        }
    }
}

/// Result of cross-checking claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsensusResult {
    /// Mean confidence of the agreeing claims (0–100).
    pub consensus_score: f64,
    /// True only when a strict majority of two or more sources agree.
    pub agreement_reached: bool,
    /// Mean value (numeric) or shared state of the agreeing claims.
    pub consensus_value: Option<ObservedValue>,
    pub agreeing: Vec<Claim>,
    /// Claims excluded from the average, kept for audit.
    pub outliers: Vec<Claim>,
    pub warnings: Vec<TrustWarning>,
}

impl ConsensusResult {
    pub fn claim_count(&self) -> usize {
        self.agreeing.len() + self.outliers.len()
    }
}
