use chrono::{Duration, Utc};
use proptest::prelude::*;
use veritas_core::config::VeritasConfig;
use veritas_core::models::{DataPoint, ExplanationDepth, SourceAuthority, TruthWitness};
use veritas_explain::ExplainabilityRenderer;
use veritas_trust::TrustScoreCalculator;

// ── Expert breakdown reproduces the score's factors exactly ─────────────

proptest! {
    #[test]
    fn expert_breakdown_matches_factors(
        reported in 0.0f64..100.0,
        reliability in 0.0f64..100.0,
        age in 0i64..200_000,
    ) {
        let calc = TrustScoreCalculator::from_config(&VeritasConfig::default()).unwrap();
        let now = Utc::now();
        let dp = DataPoint::new(1.0.into(), "u", "s", now, "c").with_reported_confidence(reported);
        let witness = TruthWitness::new(SourceAuthority::Indexer, now - Duration::seconds(age));
        let score = calc.score(&dp, &witness, reliability, None, now);
        let e = ExplainabilityRenderer::new().render(&score, ExplanationDepth::Expert);
        prop_assert_eq!(e.factor_breakdown().unwrap().factors, score.factors());
    }
}

// ── Beginner bullets never contain figures ───────────────────────────────

proptest! {
    #[test]
    fn beginner_bullets_have_no_digits(
        reported in 0.0f64..100.0,
        reliability in 0.0f64..100.0,
        age in 0i64..200_000,
    ) {
        let calc = TrustScoreCalculator::from_config(&VeritasConfig::default()).unwrap();
        let now = Utc::now();
        let dp = DataPoint::new(1.0.into(), "u", "s9", now, "c").with_reported_confidence(reported);
        let witness = TruthWitness::new(SourceAuthority::Rpc, now - Duration::seconds(age));
        let score = calc.score(&dp, &witness, reliability, None, now);
        let e = ExplainabilityRenderer::new().render(&score, ExplanationDepth::Beginner);
        prop_assert!(e.bullet_points.len() <= 4);
        for bullet in &e.bullet_points {
            prop_assert!(!bullet.chars().any(|c| c.is_ascii_digit()));
        }
        let digits_runs = e.summary
            .split(|c: char| !c.is_ascii_digit())
            .filter(|s| !s.is_empty())
            .count();
        prop_assert_eq!(digits_runs, 1);
    }
}
