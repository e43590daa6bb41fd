use proptest::prelude::*;
use veritas_core::config::DecayPolicy;
use veritas_decay::decay;

fn arb_policy() -> impl Strategy<Value = DecayPolicy> {
    prop_oneof![
        Just(DecayPolicy::Exponential),
        Just(DecayPolicy::Linear),
        Just(DecayPolicy::Step),
    ]
}

// ── Monotonically non-increasing beyond grace ────────────────────────────

proptest! {
    #[test]
    fn monotonically_non_increasing(
        policy in arb_policy(),
        grace in 0.0f64..600.0,
        half_life in 1.0f64..10_000.0,
        a1_offset in 0.0f64..100_000.0,
        delta in 0.001f64..100_000.0,
        floor in 0.0f64..0.99,
    ) {
        let a1 = grace + a1_offset;
        let a2 = a1 + delta;
        let d1 = decay(a1, half_life, grace, policy, floor);
        let d2 = decay(a2, half_life, grace, policy, floor);
        prop_assert!(d2 <= d1, "decay({a2}) = {d2} > decay({a1}) = {d1}");
    }
}

// ── Fresh data is fully fresh ────────────────────────────────────────────

proptest! {
    #[test]
    fn zero_age_is_one(
        policy in arb_policy(),
        grace in 0.0f64..600.0,
        half_life in 1.0f64..10_000.0,
        floor in 0.0f64..0.99,
    ) {
        prop_assert_eq!(decay(0.0, half_life, grace, policy, floor), 1.0);
    }
}

// ── Bounded by floor and 1.0 ─────────────────────────────────────────────

proptest! {
    #[test]
    fn bounded_by_floor_and_one(
        policy in arb_policy(),
        age in -1_000.0f64..1e7,
        grace in 0.0f64..600.0,
        half_life in 1.0f64..10_000.0,
        floor in 0.0f64..0.99,
    ) {
        let d = decay(age, half_life, grace, policy, floor);
        prop_assert!(d >= floor && d <= 1.0, "{d} outside [{floor}, 1]");
    }
}
