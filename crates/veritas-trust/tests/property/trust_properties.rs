use std::collections::HashMap;

use chrono::{Duration, Utc};
use proptest::prelude::*;
use veritas_core::config::{DecayConfig, TrustConfig, TrustWeights};
use veritas_core::models::{Claim, DataPoint, SourceAuthority, TruthWitness};
use veritas_trust::{ConsensusAggregator, TrustScoreCalculator};

fn arb_weights() -> impl Strategy<Value = TrustWeights> {
    (0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0, 0.01f64..1.0).prop_map(|(a, b, c, d)| {
        let sum = a + b + c + d;
        let base = a / sum;
        let freshness = b / sum;
        let reliability = c / sum;
        TrustWeights {
            base,
            freshness,
            reliability,
            consensus: 1.0 - base - freshness - reliability,
        }
    })
}

fn arb_authority() -> impl Strategy<Value = SourceAuthority> {
    prop::sample::select(SourceAuthority::ALL.to_vec())
}

// ── Composite stays in [0, 100] ──────────────────────────────────────────

proptest! {
    #[test]
    fn composite_is_bounded(
        weights in arb_weights(),
        authority in arb_authority(),
        reported in prop::option::of(-50.0f64..150.0),
        reliability in -50.0f64..150.0,
        age in -600i64..1_000_000,
    ) {
        let trust = TrustConfig { weights, ..TrustConfig::default() };
        let calc = TrustScoreCalculator::new(trust, DecayConfig::default()).unwrap();
        let now = Utc::now();
        let mut dp = DataPoint::new(1.0.into(), "u", "s", now, "c");
        dp.reported_confidence = reported;
        let witness = TruthWitness::new(authority, now - Duration::seconds(age));
        let score = calc.score(&dp, &witness, reliability, None, now);
        prop_assert!((0.0..=100.0).contains(&score.composite_score));
        prop_assert!((0.0..=100.0).contains(&score.base_confidence));
        prop_assert!((0.0..=100.0).contains(&score.source_reliability));
    }
}

// ── Single-claim consensus never agrees ──────────────────────────────────

proptest! {
    #[test]
    fn single_claim_never_agrees(value in -1e6f64..1e6, confidence in 0.0f64..100.0) {
        let agg = ConsensusAggregator::new(Default::default()).unwrap();
        let result = agg
            .aggregate(&[Claim::new("s", value, confidence)], &HashMap::new())
            .unwrap();
        prop_assert!(!result.agreement_reached);
    }
}

// ── Outliers plus agreeing claims account for every claim ────────────────

proptest! {
    #[test]
    fn every_claim_is_accounted_for(values in prop::collection::vec(0.0f64..1000.0, 1..12)) {
        let agg = ConsensusAggregator::new(Default::default()).unwrap();
        let claims: Vec<Claim> = values
            .iter()
            .enumerate()
            .map(|(i, v)| Claim::new(format!("s{i}"), *v, 80.0))
            .collect();
        let result = agg.aggregate(&claims, &HashMap::new()).unwrap();
        prop_assert_eq!(result.claim_count(), claims.len());
        prop_assert!(!result.agreeing.is_empty());
        if result.agreement_reached {
            prop_assert!(result.agreeing.len() * 2 > claims.len());
        }
    }
}
