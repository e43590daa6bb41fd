use veritas_core::config::{DecayConfig, DecayPolicy};
use veritas_core::traits::FreshnessModel;
use veritas_decay::{decay, DecayModel};

const HL: f64 = 1200.0;
const GRACE: f64 = 30.0;
const FLOOR: f64 = 0.05;

fn model(policy: DecayPolicy) -> DecayModel {
    DecayModel::new(DecayConfig {
        policy,
        ..DecayConfig::default()
    })
    .unwrap()
}

// ── Grace period ─────────────────────────────────────────────────────────

#[test]
fn fresh_data_inside_grace_is_fully_fresh() {
    for policy in [DecayPolicy::Exponential, DecayPolicy::Linear, DecayPolicy::Step] {
        assert_eq!(decay(0.0, HL, GRACE, policy, FLOOR), 1.0);
        assert_eq!(decay(29.9, HL, GRACE, policy, FLOOR), 1.0);
        assert_eq!(decay(30.0, HL, GRACE, policy, FLOOR), 1.0);
    }
}

#[test]
fn negative_age_counts_as_zero() {
    assert_eq!(decay(-500.0, HL, GRACE, DecayPolicy::Exponential, FLOOR), 1.0);
}

// ── Curves ───────────────────────────────────────────────────────────────

#[test]
fn exponential_at_400_seconds_matches_half_life_formula() {
    let m = decay(400.0, HL, GRACE, DecayPolicy::Exponential, FLOOR);
    let expected = 0.5_f64.powf(370.0 / 1200.0);
    assert!((m - expected).abs() < 1e-12);
    assert!((m - 0.808).abs() < 1e-3);
}

#[test]
fn exponential_halves_at_one_half_life_past_grace() {
    let m = decay(GRACE + HL, HL, GRACE, DecayPolicy::Exponential, FLOOR);
    assert!((m - 0.5).abs() < 1e-12);
}

#[test]
fn linear_reaches_half_at_one_half_life() {
    let m = decay(GRACE + HL, HL, GRACE, DecayPolicy::Linear, FLOOR);
    assert!((m - 0.5).abs() < 1e-12);
    let quarter = decay(GRACE + HL / 2.0, HL, GRACE, DecayPolicy::Linear, FLOOR);
    assert!((quarter - 0.75).abs() < 1e-12);
}

#[test]
fn linear_hits_floor_after_two_half_lives() {
    assert_eq!(decay(GRACE + 2.0 * HL, HL, GRACE, DecayPolicy::Linear, FLOOR), FLOOR);
    assert_eq!(decay(GRACE + 10.0 * HL, HL, GRACE, DecayPolicy::Linear, FLOOR), FLOOR);
}

#[test]
fn step_holds_until_each_half_life_completes() {
    assert_eq!(decay(GRACE + HL - 1.0, HL, GRACE, DecayPolicy::Step, FLOOR), 1.0);
    assert_eq!(decay(GRACE + HL, HL, GRACE, DecayPolicy::Step, FLOOR), 0.5);
    assert_eq!(decay(GRACE + 2.5 * HL, HL, GRACE, DecayPolicy::Step, FLOOR), 0.25);
}

// ── Floor and degenerate inputs ──────────────────────────────────────────

#[test]
fn very_old_data_is_floored() {
    let m = decay(1e9, HL, GRACE, DecayPolicy::Exponential, FLOOR);
    assert_eq!(m, FLOOR);
}

#[test]
fn non_finite_age_decays_to_floor() {
    assert_eq!(decay(f64::NAN, HL, GRACE, DecayPolicy::Exponential, FLOOR), FLOOR);
    assert_eq!(decay(f64::INFINITY, HL, GRACE, DecayPolicy::Step, FLOOR), FLOOR);
}

#[test]
fn non_positive_half_life_decays_to_floor_beyond_grace() {
    assert_eq!(decay(31.0, 0.0, GRACE, DecayPolicy::Exponential, FLOOR), FLOOR);
    assert_eq!(decay(31.0, -5.0, GRACE, DecayPolicy::Linear, FLOOR), FLOOR);
    // Still fully fresh inside grace.
    assert_eq!(decay(10.0, 0.0, GRACE, DecayPolicy::Step, FLOOR), 1.0);
}

// ── Model ────────────────────────────────────────────────────────────────

#[test]
fn model_rejects_invalid_parameters() {
    let bad = DecayConfig {
        half_life_seconds: 0.0,
        ..DecayConfig::default()
    };
    assert!(DecayModel::new(bad).is_err());
    let bad_floor = DecayConfig {
        floor: 1.0,
        ..DecayConfig::default()
    };
    assert!(DecayModel::new(bad_floor).is_err());
}

#[test]
fn model_is_deterministic_and_swappable() {
    let m = model(DecayPolicy::Exponential);
    assert_eq!(m.decay(777.0), m.decay(777.0));
    assert_eq!(m.freshness_score(0.0), 100.0);

    let boxed: Box<dyn FreshnessModel> = Box::new(model(DecayPolicy::Step));
    assert_eq!(boxed.policy(), DecayPolicy::Step);
    assert_eq!(boxed.freshness(GRACE + HL), 0.5);
}

#[test]
fn decay_batch_preserves_order() {
    let m = model(DecayPolicy::Linear);
    let out = m.decay_batch(&[0.0, GRACE + HL, GRACE + 2.0 * HL]);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0], 1.0);
    assert!((out[1] - 0.5).abs() < 1e-12);
    assert_eq!(out[2], FLOOR);
}
