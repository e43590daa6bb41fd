//! ProvenanceChainTracker: `OPEN → (append)* → CLOSED`.
//!
//! Each tracker owns exactly one chain and belongs to one request. Gap and
//! integrity findings are advisory: they downgrade the verdict but never
//! refuse an append or a close. Only lifecycle violations are errors.

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use veritas_core::errors::ChainStateError;
use veritas_core::models::{
    ChainIntegrity, ChainState, GapDetection, ProvenanceChain, ProvenanceStep,
};

use crate::integrity::{detect_gaps, integrity_of};

/// Owns and mutates one provenance chain.
#[derive(Debug, Clone)]
pub struct ProvenanceChainTracker {
    chain: ProvenanceChain,
}

impl ProvenanceChainTracker {
    /// Open a new, empty chain for `data_point_id`.
    pub fn open(
        data_point_id: impl Into<String>,
        trace_id: impl Into<String>,
        opened_at: DateTime<Utc>,
    ) -> Self {
        let chain = ProvenanceChain {
            chain_id: uuid::Uuid::new_v4().to_string(),
            data_point_id: data_point_id.into(),
            trace_id: trace_id.into(),
            state: ChainState::Open,
            steps: Vec::new(),
            integrity: ChainIntegrity::Intact,
            gap_detection: GapDetection::default(),
            opened_at,
            closed_at: None,
        };
        debug!(chain_id = %chain.chain_id, data_point_id = %chain.data_point_id, "provenance chain opened");
        Self { chain }
    }

    pub fn chain_id(&self) -> &str {
        &self.chain.chain_id
    }

    pub fn state(&self) -> ChainState {
        self.chain.state
    }

    pub fn steps(&self) -> &[ProvenanceStep] {
        &self.chain.steps
    }

    pub fn chain(&self) -> &ProvenanceChain {
        &self.chain
    }

    pub fn into_chain(self) -> ProvenanceChain {
        self.chain
    }

    /// Append a step. Fails only when the chain is already closed.
    #[instrument(skip_all, fields(chain_id = %self.chain.chain_id, stage = %step.stage))]
    pub fn append(&mut self, step: ProvenanceStep) -> Result<(), ChainStateError> {
        if self.chain.is_closed() {
            warn!("append rejected: chain closed");
            return Err(ChainStateError::AppendToClosed {
                chain_id: self.chain.chain_id.clone(),
            });
        }
        self.chain.steps.push(step);
        self.refresh();
        debug!(steps = self.chain.steps.len(), integrity = ?self.chain.integrity, "step appended");
        Ok(())
    }

    /// Close the chain and return the final record.
    ///
    /// Missing stages are recorded in `gap_detection` and downgrade the
    /// verdict to questionable; the close itself still succeeds.
    #[instrument(skip_all, fields(chain_id = %self.chain.chain_id))]
    pub fn close(&mut self, closed_at: DateTime<Utc>) -> Result<&ProvenanceChain, ChainStateError> {
        if self.chain.is_closed() {
            return Err(ChainStateError::AlreadyClosed {
                chain_id: self.chain.chain_id.clone(),
            });
        }
        self.chain.state = ChainState::Closed;
        self.chain.closed_at = Some(closed_at);
        self.refresh();

        if self.chain.integrity == ChainIntegrity::Broken {
            warn!(
                mismatches = ?self.chain.gap_detection.digest_mismatches,
                "provenance chain closed broken"
            );
        } else {
            info!(
                integrity = ?self.chain.integrity,
                missing_stages = self.chain.gap_detection.missing_stages.len(),
                "provenance chain closed"
            );
        }
        Ok(&self.chain)
    }

    /// Walk the steps pairwise and return the current verdict.
    pub fn verify_integrity(&self) -> ChainIntegrity {
        let gaps = detect_gaps(&self.chain.steps, self.chain.state);
        integrity_of(&self.chain.steps, self.chain.state, &gaps)
    }

    fn refresh(&mut self) {
        let gaps = detect_gaps(&self.chain.steps, self.chain.state);
        self.chain.integrity = integrity_of(&self.chain.steps, self.chain.state, &gaps);
        self.chain.gap_detection = gaps;
    }
}
