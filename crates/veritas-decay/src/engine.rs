use veritas_core::config::{DecayConfig, DecayPolicy};
use veritas_core::errors::ConfigError;
use veritas_core::traits::FreshnessModel;

use crate::formula::{self, DecayBreakdown};

/// Decay model over validated parameters.
///
/// Pure and deterministic: the same age always yields the same multiplier.
/// Swappable behind [`FreshnessModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayModel {
    config: DecayConfig,
}

impl DecayModel {
    /// Build a model, rejecting a non-positive half-life, negative grace or
    /// a floor outside `[0, 1)`.
    pub fn new(config: DecayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Multiplier in `[floor, 1.0]`.
    pub fn decay(&self, age_seconds: f64) -> f64 {
        formula::decay(
            age_seconds,
            self.config.half_life_seconds,
            self.config.grace_period_seconds,
            self.config.policy,
            self.config.floor,
        )
    }

    /// Multiplier scaled to a 0–100 freshness score.
    pub fn freshness_score(&self, age_seconds: f64) -> f64 {
        self.decay(age_seconds) * 100.0
    }

    pub fn breakdown(&self, age_seconds: f64) -> DecayBreakdown {
        formula::compute_breakdown(
            age_seconds,
            self.config.half_life_seconds,
            self.config.grace_period_seconds,
            self.config.policy,
            self.config.floor,
        )
    }

    /// Multipliers for a batch of ages, in order.
    pub fn decay_batch(&self, ages: &[f64]) -> Vec<f64> {
        ages.iter().map(|&age| self.decay(age)).collect()
    }
}

impl Default for DecayModel {
    fn default() -> Self {
        Self {
            config: DecayConfig::default(),
        }
    }
}

impl FreshnessModel for DecayModel {
    fn freshness(&self, age_seconds: f64) -> f64 {
        self.decay(age_seconds)
    }

    fn policy(&self) -> DecayPolicy {
        self.config.policy
    }
}
