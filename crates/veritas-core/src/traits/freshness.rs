use crate::config::DecayPolicy;

/// Maps data age to a freshness multiplier in `[floor, 1]`.
pub trait FreshnessModel: Send + Sync {
    /// Multiplier for data that is `age_seconds` old.
    fn freshness(&self, age_seconds: f64) -> f64;

    /// The curve this model applies beyond the grace period.
    fn policy(&self) -> DecayPolicy;
}
