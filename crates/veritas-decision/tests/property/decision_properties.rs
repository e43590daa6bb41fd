use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use veritas_core::models::{
    Constraint, Decision, DecisionStatus, PointOfNoReturn, ProposedAction, SafetyStatus, Severity,
    ThresholdOp,
};
use veritas_decision::{validate, ReversibilityAssessor};

fn executed(dependents: usize) -> Decision {
    let executed_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let mut action = ProposedAction::new("migrate", "move shard");
    for i in 0..dependents {
        action = action.with_dependent_system(format!("dep-{i}"));
    }
    let mut decision = Decision::new("agent", action, 80.0, executed_at);
    decision.status = DecisionStatus::Executed { executed_at };
    decision
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(vec![
        Severity::Info,
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ])
}

fn arb_op() -> impl Strategy<Value = ThresholdOp> {
    prop::sample::select(vec![ThresholdOp::Above, ThresholdOp::Below, ThresholdOp::Equals])
}

// ── Point of no return is permanent ──────────────────────────────────────

proptest! {
    #[test]
    fn ponr_blocks_every_later_assessment(
        dependents in 0usize..10,
        first_at in 0i64..10_000,
        later in prop::collection::vec(0i64..20_000, 1..8),
    ) {
        let assessor = ReversibilityAssessor::default();
        let decision = executed(dependents);
        let base = decision.timestamp;

        let ponr = PointOfNoReturn::reached(base + Duration::seconds(first_at), "committed");
        let plan = assessor.assess(&decision, &ponr, base + Duration::seconds(first_at));
        prop_assert!(!plan.can_reverse);

        for offset in later {
            let plan = assessor.assess(&decision, &PointOfNoReturn::not_reached(), base + Duration::seconds(offset));
            prop_assert!(!plan.can_reverse);
            prop_assert_eq!(plan.time_window_seconds, 0);
        }
    }

    #[test]
    fn remaining_window_never_exceeds_configured(
        dependents in 0usize..10,
        elapsed in 0i64..5_000,
    ) {
        let assessor = ReversibilityAssessor::default();
        let decision = executed(dependents);
        let plan = assessor.assess(&decision, &PointOfNoReturn::not_reached(), decision.timestamp + Duration::seconds(elapsed));
        prop_assert!(plan.time_window_seconds <= assessor.config().reversal_window_seconds);
        prop_assert_eq!(plan.can_reverse, elapsed < 3600);
        prop_assert!(plan.cost_estimate >= 0.0);
    }
}

// ── Validation report is consistent ──────────────────────────────────────

proptest! {
    #[test]
    fn safety_status_matches_failures(
        actual in -1_000.0f64..1_000.0,
        specs in prop::collection::vec((arb_op(), -1_000.0f64..1_000.0, arb_severity()), 0..12),
    ) {
        let action = ProposedAction::new("probe", "").with_metric("m", actual);
        let constraints: Vec<_> = specs
            .iter()
            .enumerate()
            .map(|(i, (op, t, s))| Constraint::new(format!("c{i}"), "m", *op, *t, *s))
            .collect();
        let report = validate(&action, &constraints, Utc::now());

        prop_assert_eq!(report.checks.len(), constraints.len());
        prop_assert_eq!(report.all_passed, report.safety_status == SafetyStatus::Safe);
        let critical_failed = report.failed().any(|c| c.severity == Severity::Critical);
        prop_assert_eq!(critical_failed, report.safety_status == SafetyStatus::Critical);
        for check in &report.checks {
            let margin = check.margin_percent.unwrap();
            prop_assert_eq!(check.passed, match constraints.iter().find(|c| c.id == check.constraint_id).unwrap().threshold_op {
                ThresholdOp::Equals => margin >= 0.0,
                _ => margin > 0.0,
            });
        }
    }
}
