//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// A data point was scored.
pub fn trust_scored(data_point_id: &str, composite: f64, grade: &str, warnings: usize) {
    tracing::info!(
        event = "trust_scored",
        data_point_id = %data_point_id,
        composite = composite,
        grade = %grade,
        warnings = warnings,
        "trust score computed"
    );
}

/// A batch evaluation finished.
pub fn batch_evaluated(requests: usize, scored: usize) {
    tracing::info!(
        event = "batch_evaluated",
        requests = requests,
        scored = scored,
        "batch evaluated"
    );
}

/// Claims about the same fact failed to agree.
pub fn consensus_not_reached(claims: usize, outliers: usize) {
    tracing::warn!(
        event = "consensus_not_reached",
        claims = claims,
        outliers = outliers,
        "consensus not reached"
    );
}

/// A provenance chain was opened.
pub fn chain_opened(chain_id: &str, data_point_id: &str) {
    tracing::info!(
        event = "chain_opened",
        chain_id = %chain_id,
        data_point_id = %data_point_id,
        "provenance chain opened"
    );
}

/// A proposed action was gated against the constraint catalogue.
pub fn action_gated(action_id: &str, passed: bool, safety: &str, failed: usize) {
    if passed {
        tracing::info!(
            event = "action_gated",
            action_id = %action_id,
            safety = %safety,
            "action passed constraint gate"
        );
    } else {
        tracing::warn!(
            event = "action_gated",
            action_id = %action_id,
            safety = %safety,
            failed = failed,
            "action failed constraint gate"
        );
    }
}

/// A decision can no longer be reversed.
pub fn reversal_closed(decision_id: &str, status: &str, reason: &str) {
    tracing::warn!(
        event = "reversal_closed",
        decision_id = %decision_id,
        status = %status,
        reason = %reason,
        "decision can no longer be reversed"
    );
}

/// Ground truth arrived for a decision.
pub fn ground_truth_recorded(decision_id: &str, quality_score: f64, pending_root_causes: usize) {
    tracing::info!(
        event = "ground_truth_recorded",
        decision_id = %decision_id,
        quality_score = quality_score,
        pending_root_causes = pending_root_causes,
        "ground truth recorded"
    );
}
