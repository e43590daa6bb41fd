use chrono::{Duration, TimeZone, Utc};
use veritas_core::config::{ConstraintSpec, TrustWeights};
use veritas_core::models::*;

#[test]
fn observed_value_is_untagged_on_the_wire() {
    let numeric: ObservedValue = serde_json::from_str("41.5").unwrap();
    assert_eq!(numeric, ObservedValue::Numeric(41.5));
    let state: ObservedValue = serde_json::from_str("\"open\"").unwrap();
    assert_eq!(state.as_state(), Some("open"));
    assert_eq!(serde_json::to_string(&ObservedValue::from(2.0)).unwrap(), "2.0");
}

#[test]
fn data_point_parses_iso8601_and_skips_missing_confidence() {
    let json = r#"{
        "id": "dp-1",
        "value": 1850.25,
        "unit": "usd",
        "source_id": "chainlink-eth-usd",
        "observed_at": "2024-05-01T12:00:00Z",
        "causal_origin": "price update"
    }"#;
    let dp: DataPoint = serde_json::from_str(json).unwrap();
    assert_eq!(dp.observed_at, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
    assert!(dp.reported_confidence.is_none());
    let out = serde_json::to_value(&dp).unwrap();
    assert!(out.get("reported_confidence").is_none());
}

#[test]
fn data_point_new_assigns_unique_ids() {
    let now = Utc::now();
    let a = DataPoint::new(1.0.into(), "u", "s", now, "c");
    let b = DataPoint::new(1.0.into(), "u", "s", now, "c");
    assert_ne!(a.id, b.id);
    assert_eq!(a.with_reported_confidence(88.0).reported_confidence, Some(88.0));
}

#[test]
fn authority_defaults_are_ordered_by_strength() {
    assert_eq!(SourceAuthority::Onchain.default_confidence(), 95.0);
    assert_eq!(SourceAuthority::Oracle.default_confidence(), 90.0);
    assert_eq!(SourceAuthority::HumanOperator.default_confidence(), 85.0);
    assert_eq!(SourceAuthority::Indexer.default_confidence(), 80.0);
    assert_eq!(SourceAuthority::Rpc.default_confidence(), 75.0);
    assert_eq!(SourceAuthority::Agent.default_confidence(), 70.0);
    assert_eq!(
        serde_json::to_string(&SourceAuthority::HumanOperator).unwrap(),
        "\"human_operator\""
    );
}

#[test]
fn truth_age_is_derived_and_skew_detected() {
    let now = Utc::now();
    let witness = TruthWitness::new(SourceAuthority::Oracle, now - Duration::milliseconds(1500));
    assert_eq!(witness.truth_age_seconds(now), 1.5);
    assert!(!witness.is_clock_skewed(now));
    // Age grows with the reader's clock; nothing is cached.
    assert_eq!(witness.truth_age_seconds(now + Duration::seconds(10)), 11.5);

    let future = TruthWitness::new(SourceAuthority::Rpc, now + Duration::seconds(3));
    assert_eq!(future.truth_age_seconds(now), 0.0);
    assert!(future.is_clock_skewed(now));
}

#[test]
fn witness_snapshot_serializes_truth_age() {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let witness = TruthWitness::with_trace(SourceAuthority::Onchain, "trace-3", now - Duration::seconds(42));
    let json = serde_json::to_value(witness.snapshot(now)).unwrap();

    assert_eq!(json["truth_age_seconds"], 42.0);
    assert_eq!(json["global_trace_id"], "trace-3");
    assert_eq!(json["source_authority"], "onchain");
    assert_eq!(witness.snapshot(now + Duration::seconds(8)).truth_age_seconds, 50.0);
}

#[test]
fn witness_with_trace_keeps_trace_id() {
    let w = TruthWitness::with_trace(SourceAuthority::Agent, "trace-9", Utc::now());
    assert_eq!(w.global_trace_id, "trace-9");
}

#[test]
fn trust_grade_orders_suspect_lowest() {
    assert!(TrustGrade::Suspect < TrustGrade::Poor);
    assert!(TrustGrade::Good < TrustGrade::Excellent);
    assert_eq!(TrustGrade::Fair.to_string(), "fair");
}

#[test]
fn trust_factors_composite_is_weighted_and_clamped() {
    let factors = TrustFactors {
        base_confidence: 90.0,
        freshness_score: 80.0,
        source_reliability: 70.0,
        consensus_score: 60.0,
    };
    let composite = factors.composite(&TrustWeights::default());
    let expected = 0.25 * 90.0 + 0.25 * 80.0 + 0.30 * 70.0 + 0.20 * 60.0;
    assert!((composite - expected).abs() < 1e-9);

    let hot = TrustFactors {
        base_confidence: 500.0,
        ..factors
    };
    assert_eq!(hot.composite(&TrustWeights::default()), 100.0);
    assert_eq!(factors.named()[2], ("source_reliability", 70.0));
}

#[test]
fn warning_kinds_serialize_snake_case() {
    let w = TrustWarning::new(WarningKind::ConsensusTieBreak, "even split");
    let json = serde_json::to_value(&w).unwrap();
    assert_eq!(json["kind"], "consensus_tie_break");
    assert_eq!(
        serde_json::to_value(WarningKind::SparseHistory).unwrap(),
        "sparse_history"
    );
}

#[test]
fn claim_accepts_numeric_and_state_values() {
    let a = Claim::new("s1", 90.0, 80.0);
    let b = Claim::new("s2", "halted", 60.0);
    assert_eq!(a.value.as_numeric(), Some(90.0));
    assert_eq!(b.value.as_state(), Some("halted"));
}

#[test]
fn open_chain_reads_as_questionable_at_best() {
    let now = Utc::now();
    let mut chain = ProvenanceChain {
        chain_id: "c".into(),
        data_point_id: "dp".into(),
        trace_id: "t".into(),
        state: ChainState::Open,
        steps: vec![ProvenanceStep::new(ProvenanceStage::Ingestion, "feed", now)],
        integrity: ChainIntegrity::Intact,
        gap_detection: GapDetection::default(),
        opened_at: now,
        closed_at: None,
    };
    assert_eq!(chain.integrity_as_read(), ChainIntegrity::Questionable);

    chain.integrity = ChainIntegrity::Broken;
    assert_eq!(chain.integrity_as_read(), ChainIntegrity::Broken);

    chain.state = ChainState::Closed;
    chain.integrity = ChainIntegrity::Verified;
    assert_eq!(chain.integrity_as_read(), ChainIntegrity::Verified);
    assert!(chain.is_closed());
}

#[test]
fn chain_integrity_orders_worst_first() {
    assert!(ChainIntegrity::Broken < ChainIntegrity::Questionable);
    assert!(ChainIntegrity::Questionable < ChainIntegrity::Intact);
    assert!(ChainIntegrity::Intact < ChainIntegrity::Verified);
    assert!(ChainIntegrity::Intact.is_sound());
    assert!(!ChainIntegrity::Questionable.is_sound());
}

#[test]
fn constraint_from_spec_validates_operator_and_severity() {
    let spec = ConstraintSpec {
        id: "cpu".into(),
        description: String::new(),
        metric: "cpu_pct".into(),
        threshold_op: "Below".into(),
        threshold_value: 85.0,
        severity: "CRITICAL".into(),
        tolerance: None,
    };
    let c = Constraint::from_spec(&spec).unwrap();
    assert_eq!(c.threshold_op, ThresholdOp::Below);
    assert_eq!(c.severity, Severity::Critical);
    assert_eq!(c.tolerance, 1e-9);

    let bad = ConstraintSpec {
        severity: "apocalyptic".into(),
        ..spec.clone()
    };
    assert!(Constraint::from_spec(&bad).is_err());

    let nan = ConstraintSpec {
        threshold_value: f64::NAN,
        ..spec
    };
    assert!(Constraint::from_spec(&nan).is_err());
}

#[test]
fn severity_orders_critical_highest() {
    assert!(Severity::Critical > Severity::High);
    assert!(Severity::Info < Severity::Low);
    assert!(SafetyStatus::Critical > SafetyStatus::Warning);
}

#[test]
fn decision_status_is_tagged() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let json = serde_json::to_value(DecisionStatus::Executed { executed_at: at }).unwrap();
    assert_eq!(json["status"], "executed");
    let json = serde_json::to_value(DecisionStatus::Proposed).unwrap();
    assert_eq!(json["status"], "proposed");
}

#[test]
fn decision_tracks_execution() {
    let action = ProposedAction::new("rebalance", "shift 10% to stables")
        .with_metric("drawdown_pct", 4.0)
        .with_prediction("slippage_bps", 12.0)
        .with_dependent_system("vault")
        .with_rollback_step("reverse swap");
    let mut decision = Decision::new("agent-7", action, 88.0, Utc::now());
    assert!(!decision.is_executed());
    let at = Utc::now();
    decision.status = DecisionStatus::Executed { executed_at: at };
    assert_eq!(decision.executed_at(), Some(at));
    assert_eq!(decision.proposed_action.dependent_systems, vec!["vault"]);
}

#[test]
fn proposed_action_deserializes_with_defaults() {
    let action: ProposedAction = serde_json::from_str(r#"{"kind": "pause"}"#).unwrap();
    assert_eq!(action.kind, "pause");
    assert!(action.metrics.is_empty());
    assert_eq!(action.rollback_cost, 0.0);
    assert!(action.estimated_cost.is_none());
}

#[test]
fn reversal_complexity_bumps_and_saturates() {
    assert_eq!(ReversalComplexity::Trivial.bumped(), ReversalComplexity::Simple);
    assert_eq!(ReversalComplexity::Complex.bumped(), ReversalComplexity::Expert);
    assert_eq!(ReversalComplexity::Expert.bumped(), ReversalComplexity::Expert);
    assert_eq!(ReversalComplexity::Simple.cost_multiplier(), 1.5);
    assert!(ReversalStatus::Expired.is_terminal());
    assert!(!ReversalStatus::Reversible.is_terminal());
}

#[test]
fn point_of_no_return_constructors() {
    assert!(!PointOfNoReturn::not_reached().reached);
    let ponr = PointOfNoReturn::reached(Utc::now(), "funds bridged");
    assert!(ponr.reached);
    assert_eq!(ponr.reason.as_deref(), Some("funds bridged"));
}

#[test]
fn source_record_hit_rate() {
    let rec = SourceRecord {
        source_id: "s".into(),
        total_observations: 4,
        validated_observations: 3,
        rolling_reliability: 70.0,
    };
    assert_eq!(rec.hit_rate(), Some(0.75));
    let empty = SourceRecord {
        total_observations: 0,
        validated_observations: 0,
        ..rec
    };
    assert_eq!(empty.hit_rate(), None);
}

#[test]
fn outcome_observation_builders() {
    let obs = OutcomeObservation::new("d-1", Utc::now())
        .with_actual("slippage_bps", 15.0)
        .with_root_cause("slippage_bps", "thin liquidity");
    assert_eq!(obs.actual["slippage_bps"], 15.0);
    assert_eq!(obs.root_causes["slippage_bps"], "thin liquidity");
    assert_eq!(obs.compliance_violations, 0);
}
