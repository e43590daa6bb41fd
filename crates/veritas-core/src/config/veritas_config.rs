//! Top-level Veritas configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    defaults, ConsensusConfig, ConstraintSpec, DecayConfig, ObservabilityConfig, QualityConfig,
    ReliabilityConfig, ReversibilityConfig, TrustConfig,
};
use crate::errors::ConfigError;
use crate::models::Constraint;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VERITAS_*`)
/// 2. Config file (`veritas.toml`)
/// 3. Compiled defaults
///
/// Loaded once at startup. Every section is validated before the engine is
/// built, so bad configuration never surfaces mid-request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VeritasConfig {
    pub trust: TrustConfig,
    pub decay: DecayConfig,
    pub reliability: ReliabilityConfig,
    pub consensus: ConsensusConfig,
    pub reversibility: ReversibilityConfig,
    pub quality: QualityConfig,
    pub observability: ObservabilityConfig,
    /// Constraint catalogue used to gate autonomous actions.
    pub constraints: Vec<ConstraintSpec>,
}

impl VeritasConfig {
    /// Load configuration from `path` (or `veritas.toml` in `root` when the
    /// path is a directory), apply environment overrides, then validate.
    /// A missing file falls back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = if path.is_dir() {
            path.join(defaults::DEFAULT_CONFIG_FILENAME)
        } else {
            path.to_path_buf()
        };

        let mut config = if file.exists() {
            let content = std::fs::read_to_string(&file).map_err(|_| ConfigError::FileNotFound {
                path: file.display().to_string(),
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: file.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `VERITAS_*` overrides read through `lookup`.
    ///
    /// Takes a lookup function instead of reading the process environment
    /// directly so tests don't race on global state.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", defaults::ENV_PREFIX, name));

        if let Some(val) = var("DECAY_POLICY") {
            self.decay.policy = val.parse()?;
        }
        if let Some(val) = var("HALF_LIFE_SECONDS") {
            self.decay.half_life_seconds = parse_env("VERITAS_HALF_LIFE_SECONDS", &val)?;
        }
        if let Some(val) = var("GRACE_PERIOD_SECONDS") {
            self.decay.grace_period_seconds = parse_env("VERITAS_GRACE_PERIOD_SECONDS", &val)?;
        }
        if let Some(val) = var("MIN_OBSERVATIONS") {
            self.reliability.min_observations_for_reliability =
                parse_env("VERITAS_MIN_OBSERVATIONS", &val)?;
        }
        if let Some(val) = var("LOG") {
            self.observability.log_filter = val;
        }
        Ok(())
    }

    /// Validate every section, including the constraint catalogue.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.trust.validate()?;
        self.decay.validate()?;
        self.reliability.validate()?;
        self.consensus.validate()?;
        self.reversibility.validate()?;
        self.quality.validate()?;
        Constraint::catalogue_from_specs(&self.constraints)?;
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::invalid(field, format!("cannot parse '{raw}'")))
}
