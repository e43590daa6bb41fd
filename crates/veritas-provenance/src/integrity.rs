//! Gap detection and integrity verdicts.
//!
//! Verdicts, worst first:
//! - `broken`: a step's input digest differs from the previous output digest
//! - `questionable`: missing stages, stage regressions, or timestamps not strictly increasing
//! - `intact`: no problems, but still open or not every link carries digests
//! - `verified`: closed, complete, ordered, every adjacent pair digest-linked

use veritas_core::models::{
    ChainIntegrity, ChainState, GapDetection, ProvenanceChain, ProvenanceStage, ProvenanceStep,
};

/// Inspect a step sequence. While a chain is open only stages skipped
/// before the latest stage reached count as missing; once closed every
/// absent stage does.
pub fn detect_gaps(steps: &[ProvenanceStep], state: ChainState) -> GapDetection {
    let mut gaps = GapDetection::default();

    let mut highest: Option<ProvenanceStage> = None;
    for (i, step) in steps.iter().enumerate() {
        match highest {
            Some(h) if step.stage < h => gaps.stage_regressions.push(i),
            _ => highest = Some(step.stage),
        }
        if i > 0 && step.timestamp <= steps[i - 1].timestamp {
            gaps.out_of_order_steps.push(i);
        }
    }

    for (i, pair) in steps.windows(2).enumerate() {
        if let (Some(out), Some(input)) = (&pair[0].output_digest, &pair[1].input_digest) {
            if out != input {
                gaps.digest_mismatches.push(i);
            }
        }
    }

    gaps.missing_stages = ProvenanceStage::ALL
        .into_iter()
        .filter(|stage| !steps.iter().any(|s| s.stage == *stage))
        .filter(|stage| match state {
            ChainState::Closed => true,
            ChainState::Open => highest.is_some_and(|h| *stage < h),
        })
        .collect();
    gaps.has_gaps = !gaps.missing_stages.is_empty();
    gaps
}

/// Integrity verdict for `steps` given their gap report.
pub fn integrity_of(steps: &[ProvenanceStep], state: ChainState, gaps: &GapDetection) -> ChainIntegrity {
    if !gaps.digest_mismatches.is_empty() {
        return ChainIntegrity::Broken;
    }
    if gaps.has_gaps || !gaps.stage_regressions.is_empty() || !gaps.out_of_order_steps.is_empty() {
        return ChainIntegrity::Questionable;
    }
    let fully_linked = steps.len() > 1
        && steps
            .windows(2)
            .all(|pair| pair[0].output_digest.is_some() && pair[1].input_digest.is_some());
    if state == ChainState::Closed && fully_linked {
        ChainIntegrity::Verified
    } else {
        ChainIntegrity::Intact
    }
}

/// Re-derive the verdict for a chain read back from storage or the wire.
///
/// Ignores the stored `integrity` and applies the detached-reader rule: a
/// chain still open was abandoned mid-pipeline, so it is at best questionable.
pub fn audit(chain: &ProvenanceChain) -> ChainIntegrity {
    let gaps = detect_gaps(&chain.steps, chain.state);
    let verdict = integrity_of(&chain.steps, chain.state, &gaps);
    match chain.state {
        ChainState::Open => verdict.min(ChainIntegrity::Questionable),
        ChainState::Closed => verdict,
    }
}
