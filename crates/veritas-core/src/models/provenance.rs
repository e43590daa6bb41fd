//! Provenance records: the processing stages a data point passed through.
//!
//! # Examples
//!
//! ```
//! use veritas_core::models::provenance::{ProvenanceStage, ProvenanceStep};
//! use chrono::Utc;
//!
//! let step = ProvenanceStep::new(ProvenanceStage::Ingestion, "oracle-feed", Utc::now())
//!     .with_output_digest("ab12");
//! assert_eq!(step.stage, ProvenanceStage::Ingestion);
//! assert!(step.input_digest.is_none());
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Pipeline stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProvenanceStage {
    Ingestion,
    Processing,
    Analysis,
    Decision,
}

impl ProvenanceStage {
    pub const ALL: [ProvenanceStage; 4] = [
        Self::Ingestion,
        Self::Processing,
        Self::Analysis,
        Self::Decision,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ingestion => "ingestion",
            Self::Processing => "processing",
            Self::Analysis => "analysis",
            Self::Decision => "decision",
        }
    }
}

impl fmt::Display for ProvenanceStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One processing step. Digests are optional; only a mismatch is a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProvenanceStep {
    pub stage: ProvenanceStage,
    /// Component or agent that performed the step.
    pub actor: String,
    pub timestamp: DateTime<Utc>,
    pub transformations_applied: Vec<String>,
    pub validations_applied: Vec<String>,
    pub input_digest: Option<String>,
    pub output_digest: Option<String>,
}

impl ProvenanceStep {
    pub fn new(stage: ProvenanceStage, actor: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            stage,
            actor: actor.into(),
            timestamp,
            transformations_applied: Vec::new(),
            validations_applied: Vec::new(),
            input_digest: None,
            output_digest: None,
        }
    }

    pub fn with_transformation(mut self, name: impl Into<String>) -> Self {
        self.transformations_applied.push(name.into());
        self
    }

    pub fn with_validation(mut self, name: impl Into<String>) -> Self {
        self.validations_applied.push(name.into());
        self
    }

    pub fn with_input_digest(mut self, digest: impl Into<String>) -> Self {
        self.input_digest = Some(digest.into());
        self
    }

    pub fn with_output_digest(mut self, digest: impl Into<String>) -> Self {
        self.output_digest = Some(digest.into());
        self
    }
}

/// Lifecycle state of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ChainState {
    Open,
    Closed,
}

/// Integrity verdict, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ChainIntegrity {
    /// A step's input digest doesn't match the previous step's output.
    Broken,
    /// Missing stages, ordering problems, or an orphaned open chain.
    Questionable,
    /// No problem found, but the chain is open or not fully digest-linked.
    Intact,
    /// Closed, complete, ordered, and every link digest-verified.
    Verified,
}

impl ChainIntegrity {
    /// True for `Intact` and `Verified`.
    pub fn is_sound(&self) -> bool {
        matches!(self, Self::Intact | Self::Verified)
    }
}

/// Advisory findings about a chain's shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GapDetection {
    pub has_gaps: bool,
    pub missing_stages: Vec<ProvenanceStage>,
    /// Indices of steps whose stage precedes an earlier step's stage.
    pub stage_regressions: Vec<usize>,
    /// Indices of steps whose timestamp is not after the previous step's.
    pub out_of_order_steps: Vec<usize>,
    /// Indices `i` where `steps[i].output_digest != steps[i + 1].input_digest`.
    pub digest_mismatches: Vec<usize>,
}

impl GapDetection {
    pub fn is_clean(&self) -> bool {
        !self.has_gaps
            && self.stage_regressions.is_empty()
            && self.out_of_order_steps.is_empty()
            && self.digest_mismatches.is_empty()
    }
}

/// Append-only record of a data point's journey through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProvenanceChain {
    pub chain_id: String,
    pub data_point_id: String,
    pub trace_id: String,
    pub state: ChainState,
    pub steps: Vec<ProvenanceStep>,
    pub integrity: ChainIntegrity,
    pub gap_detection: GapDetection,
    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl ProvenanceChain {
    /// Integrity as seen by a reader that does not own the chain.
    ///
    /// A chain still open when read back was abandoned mid-pipeline (the
    /// owner may have crashed), so it can be no better than questionable.
    pub fn integrity_as_read(&self) -> ChainIntegrity {
        match self.state {
            ChainState::Open => self.integrity.min(ChainIntegrity::Questionable),
            ChainState::Closed => self.integrity,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.state == ChainState::Closed
    }
}
