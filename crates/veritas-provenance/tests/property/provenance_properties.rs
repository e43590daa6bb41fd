use chrono::{Duration, Utc};
use proptest::prelude::*;
use veritas_core::models::{ChainIntegrity, ProvenanceStage, ProvenanceStep};
use veritas_provenance::{digest_bytes, ProvenanceChainTracker};

// ── Complete, digest-linked chains are verified, never broken ────────────

proptest! {
    #[test]
    fn linked_complete_chain_is_verified(
        payloads in prop::collection::vec(any::<Vec<u8>>(), 4),
        gaps in prop::collection::vec(1i64..3600, 4),
    ) {
        let base = Utc::now();
        let digests: Vec<String> = payloads.iter().map(|p| digest_bytes(p)).collect();
        let mut tracker = ProvenanceChainTracker::open("dp", "trace", base);
        let mut at = base;
        for (i, stage) in ProvenanceStage::ALL.into_iter().enumerate() {
            at += Duration::seconds(gaps[i]);
            let mut step = ProvenanceStep::new(stage, "actor", at).with_output_digest(&digests[i]);
            if i > 0 {
                step = step.with_input_digest(&digests[i - 1]);
            }
            tracker.append(step).unwrap();
        }
        let chain = tracker.close(at + Duration::seconds(1)).unwrap();
        prop_assert_eq!(chain.integrity, ChainIntegrity::Verified);
    }
}

// ── Closed chains reject further appends ─────────────────────────────────

proptest! {
    #[test]
    fn append_after_close_always_fails(n in 0usize..6) {
        let base = Utc::now();
        let mut tracker = ProvenanceChainTracker::open("dp", "trace", base);
        for i in 0..n {
            let stage = ProvenanceStage::ALL[i % 4];
            tracker
                .append(ProvenanceStep::new(stage, "a", base + Duration::seconds(i as i64 + 1)))
                .unwrap();
        }
        tracker.close(base + Duration::seconds(100)).unwrap();
        let res = tracker.append(ProvenanceStep::new(ProvenanceStage::Decision, "late", base + Duration::seconds(200)));
        prop_assert!(res.is_err());
        prop_assert_eq!(tracker.steps().len(), n);
    }
}
