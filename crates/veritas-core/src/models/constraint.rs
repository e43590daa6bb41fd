//! Declarative safety/operational constraints and their check results.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::defaults::DEFAULT_EQUALS_TOLERANCE;
use crate::config::ConstraintSpec;
use crate::errors::ConfigError;

/// Comparison a constraint applies to the observed metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdOp {
    Above,
    Below,
    Equals,
}

impl FromStr for ThresholdOp {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "above" => Ok(Self::Above),
            "below" => Ok(Self::Below),
            "equals" => Ok(Self::Equals),
            other => Err(ConfigError::invalid(
                "constraints.threshold_op",
                format!("unknown operator '{other}' (expected above, below or equals)"),
            )),
        }
    }
}

impl fmt::Display for ThresholdOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Above => "above",
            Self::Below => "below",
            Self::Equals => "equals",
        })
    }
}

/// Constraint severity, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(ConfigError::invalid(
                "constraints.severity",
                format!("unknown severity '{other}'"),
            )),
        }
    }
}

/// A validated constraint from the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Constraint {
    pub id: String,
    pub description: String,
    pub metric: String,
    pub threshold_op: ThresholdOp,
    pub threshold_value: f64,
    pub severity: Severity,
    pub tolerance: f64,
}

impl Constraint {
    pub fn new(
        id: impl Into<String>,
        metric: impl Into<String>,
        threshold_op: ThresholdOp,
        threshold_value: f64,
        severity: Severity,
    ) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            metric: metric.into(),
            threshold_op,
            threshold_value,
            severity,
            tolerance: DEFAULT_EQUALS_TOLERANCE,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate a raw catalogue entry.
    pub fn from_spec(spec: &ConstraintSpec) -> Result<Self, ConfigError> {
        if spec.id.trim().is_empty() {
            return Err(ConfigError::invalid("constraints.id", "must not be empty"));
        }
        let threshold_op = spec.threshold_op.parse().map_err(|e| with_id(e, &spec.id))?;
        let severity = spec.severity.parse().map_err(|e| with_id(e, &spec.id))?;
        if !spec.threshold_value.is_finite() {
            return Err(ConfigError::invalid(
                format!("constraints.{}.threshold_value", spec.id),
                "must be finite",
            ));
        }
        let tolerance = spec.tolerance.unwrap_or(DEFAULT_EQUALS_TOLERANCE);
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::invalid(
                format!("constraints.{}.tolerance", spec.id),
                "must be 0 or greater",
            ));
        }
        Ok(Self {
            id: spec.id.clone(),
            description: spec.description.clone(),
            metric: spec.metric.clone(),
            threshold_op,
            threshold_value: spec.threshold_value,
            severity,
            tolerance,
        })
    }

    /// Validate a whole catalogue. Constraint IDs must be unique.
    pub fn catalogue_from_specs(specs: &[ConstraintSpec]) -> Result<Vec<Self>, ConfigError> {
        let mut seen = HashSet::new();
        specs
            .iter()
            .map(|spec| {
                if !seen.insert(spec.id.as_str()) {
                    return Err(ConfigError::invalid(
                        "constraints.id",
                        format!("duplicate constraint id '{}'", spec.id),
                    ));
                }
                Self::from_spec(spec)
            })
            .collect()
    }
}

fn with_id(err: ConfigError, id: &str) -> ConfigError {
    match err {
        ConfigError::InvalidConfiguration { field, message } => ConfigError::InvalidConfiguration {
            field: field.replacen("constraints.", &format!("constraints.{id}."), 1),
            message,
        },
        other => other,
    }
}

/// Outcome of evaluating one constraint against one action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConstraintCheck {
    pub constraint_id: String,
    pub description: String,
    pub threshold: f64,
    /// `None` when the action did not report the metric.
    pub actual_value: Option<f64>,
    pub passed: bool,
    /// Signed distance to the threshold in the passing direction, in percent.
    pub margin_percent: Option<f64>,
    pub severity: Severity,
}

/// Overall safety verdict for a proposed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SafetyStatus {
    Safe,
    Warning,
    Critical,
}

impl SafetyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// Full audit of a validation call: every check, not just the first failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub all_passed: bool,
    pub checks: Vec<ConstraintCheck>,
    pub safety_status: SafetyStatus,
    pub validated_at: DateTime<Utc>,
}

impl ValidationReport {
    pub fn failed(&self) -> impl Iterator<Item = &ConstraintCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }
}
