use veritas_core::config::DecayPolicy;

use crate::policies;

/// Freshness multiplier for data `age_seconds` old.
///
/// ```text
/// age ≤ grace          → 1.0
/// t = age − grace
/// exponential          → 0.5^(t / half_life)
/// linear               → 1 − t / (2 · half_life)
/// step                 → 0.5^floor(t / half_life)
/// ```
///
/// Result is clamped to `[floor, 1.0]`. Negative ages count as zero,
/// non-finite ages decay straight to the floor, and a non-positive half-life
/// decays to the floor as soon as the grace period ends.
///
/// ```
/// use veritas_core::config::DecayPolicy;
/// use veritas_decay::decay;
///
/// let m = decay(400.0, 1200.0, 30.0, DecayPolicy::Exponential, 0.05);
/// assert!((m - 0.5_f64.powf(370.0 / 1200.0)).abs() < 1e-12);
/// assert_eq!(decay(10.0, 1200.0, 30.0, DecayPolicy::Linear, 0.05), 1.0);
/// ```
pub fn decay(
    age_seconds: f64,
    half_life_seconds: f64,
    grace_period_seconds: f64,
    policy: DecayPolicy,
    floor: f64,
) -> f64 {
    compute_breakdown(age_seconds, half_life_seconds, grace_period_seconds, policy, floor).multiplier
}

/// Every intermediate value of one decay computation, for debugging/observability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayBreakdown {
    pub policy: DecayPolicy,
    /// Age as supplied by the caller.
    pub age_seconds: f64,
    pub grace_period_seconds: f64,
    pub half_life_seconds: f64,
    /// Age past the grace period (`t`), 0 inside it.
    pub effective_age_seconds: f64,
    /// `t / half_life`. Infinite for a non-positive half-life.
    pub half_lives_elapsed: f64,
    pub within_grace: bool,
    /// Curve output before clamping.
    pub raw_multiplier: f64,
    pub floor: f64,
    /// True when the floor, not the curve, produced `multiplier`.
    pub floored: bool,
    pub multiplier: f64,
}

/// Compute decay with a full breakdown of each intermediate value.
pub fn compute_breakdown(
    age_seconds: f64,
    half_life_seconds: f64,
    grace_period_seconds: f64,
    policy: DecayPolicy,
    floor: f64,
) -> DecayBreakdown {
    let floor = if floor.is_finite() { floor.clamp(0.0, 1.0) } else { 0.0 };
    let grace = grace_period_seconds.max(0.0);

    let mut out = DecayBreakdown {
        policy,
        age_seconds,
        grace_period_seconds: grace,
        half_life_seconds,
        effective_age_seconds: 0.0,
        half_lives_elapsed: 0.0,
        within_grace: false,
        raw_multiplier: 1.0,
        floor,
        floored: false,
        multiplier: 1.0,
    };

    if !age_seconds.is_finite() {
        out.effective_age_seconds = f64::INFINITY;
        out.half_lives_elapsed = f64::INFINITY;
        out.raw_multiplier = 0.0;
        out.floored = true;
        out.multiplier = floor;
        return out;
    }

    let age = age_seconds.max(0.0);
    if age <= grace {
        out.within_grace = true;
        return out;
    }

    let t = age - grace;
    out.effective_age_seconds = t;
    out.half_lives_elapsed = if half_life_seconds.is_finite() && half_life_seconds > 0.0 {
        t / half_life_seconds
    } else {
        f64::INFINITY
    };

    out.raw_multiplier = if out.half_lives_elapsed.is_finite() {
        policies::curve(policy, out.half_lives_elapsed)
    } else {
        0.0
    };
    out.multiplier = out.raw_multiplier.clamp(floor, 1.0);
    out.floored = out.raw_multiplier < floor;
    out
}
