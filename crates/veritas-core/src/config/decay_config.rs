use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::defaults;
use crate::errors::ConfigError;

/// Curve applied to data older than the grace period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DecayPolicy {
    Linear,
    #[default]
    Exponential,
    Step,
}

impl DecayPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Exponential => "exponential",
            Self::Step => "step",
        }
    }

    /// Identifier stamped into expert explanations.
    pub fn model_id(&self) -> &'static str {
        match self {
            Self::Linear => "decay:linear-half-life/v1",
            Self::Exponential => "decay:exponential-half-life/v1",
            Self::Step => "decay:step-half-life/v1",
        }
    }
}

impl fmt::Display for DecayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecayPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "exponential" => Ok(Self::Exponential),
            "step" => Ok(Self::Step),
            other => Err(ConfigError::invalid(
                "decay.policy",
                format!("unknown decay policy '{other}' (expected linear, exponential or step)"),
            )),
        }
    }
}

/// Freshness decay configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    pub policy: DecayPolicy,
    pub half_life_seconds: f64,
    /// Age below which data carries no freshness penalty.
    pub grace_period_seconds: f64,
    /// Lowest multiplier the decay curve may return.
    pub floor: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            policy: DecayPolicy::default(),
            half_life_seconds: defaults::DEFAULT_HALF_LIFE_SECONDS,
            grace_period_seconds: defaults::DEFAULT_GRACE_PERIOD_SECONDS,
            floor: defaults::DEFAULT_DECAY_FLOOR,
        }
    }
}

impl DecayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.half_life_seconds.is_finite() || self.half_life_seconds <= 0.0 {
            return Err(ConfigError::invalid("decay.half_life_seconds", "must be greater than 0"));
        }
        if !self.grace_period_seconds.is_finite() || self.grace_period_seconds < 0.0 {
            return Err(ConfigError::invalid("decay.grace_period_seconds", "must be 0 or greater"));
        }
        if !self.floor.is_finite() || !(0.0..1.0).contains(&self.floor) {
            return Err(ConfigError::invalid("decay.floor", "must be in [0.0, 1.0)"));
        }
        Ok(())
    }
}
