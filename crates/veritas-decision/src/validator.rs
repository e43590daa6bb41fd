//! ConstraintValidator: check every constraint, report every result.
//!
//! No short-circuit: a failed check never hides the ones after it. The
//! safety verdict is `critical` if any critical constraint fails, `warning`
//! if only lower severities fail, else `safe`.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use veritas_core::config::{ConstraintSpec, VeritasConfig};
use veritas_core::errors::ConfigError;
use veritas_core::models::{
    Constraint, ConstraintCheck, SafetyStatus, Severity, ThresholdOp, ValidationReport,
};
use veritas_core::traits::ConstraintSubject;

/// Holds the validated constraint catalogue, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct ConstraintValidator {
    catalogue: Vec<Constraint>,
}

impl ConstraintValidator {
    pub fn new(catalogue: Vec<Constraint>) -> Self {
        Self { catalogue }
    }

    /// Build from raw catalogue entries. Unknown operators or severities,
    /// duplicate ids and non-finite thresholds are configuration errors.
    pub fn from_specs(specs: &[ConstraintSpec]) -> Result<Self, ConfigError> {
        Ok(Self::new(Constraint::catalogue_from_specs(specs)?))
    }

    pub fn from_config(config: &VeritasConfig) -> Result<Self, ConfigError> {
        Self::from_specs(&config.constraints)
    }

    pub fn catalogue(&self) -> &[Constraint] {
        &self.catalogue
    }

    /// Validate `subject` against the whole catalogue.
    pub fn validate<S>(&self, subject: &S, now: DateTime<Utc>) -> ValidationReport
    where
        S: ConstraintSubject + ?Sized,
    {
        validate(subject, &self.catalogue, now)
    }
}

/// Evaluate every constraint in `constraints` against `subject`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use veritas_core::models::{Constraint, ProposedAction, SafetyStatus, Severity, ThresholdOp};
/// use veritas_decision::validate;
///
/// let action = ProposedAction::new("scale_out", "add replicas").with_metric("uptime_pct", 75.0);
/// let c = Constraint::new("uptime", "uptime_pct", ThresholdOp::Above, 50.0, Severity::Critical);
/// let report = validate(&action, &[c], Utc::now());
/// assert!(report.all_passed);
/// assert_eq!(report.checks[0].margin_percent, Some(50.0));
/// assert_eq!(report.safety_status, SafetyStatus::Safe);
/// ```
pub fn validate<S>(subject: &S, constraints: &[Constraint], now: DateTime<Utc>) -> ValidationReport
where
    S: ConstraintSubject + ?Sized,
{
    let checks: Vec<ConstraintCheck> = constraints.iter().map(|c| check(c, subject)).collect();

    let worst_failure = checks.iter().filter(|c| !c.passed).map(|c| c.severity).max();
    let safety_status = match worst_failure {
        None => SafetyStatus::Safe,
        Some(Severity::Critical) => SafetyStatus::Critical,
        Some(_) => SafetyStatus::Warning,
    };

    for failed in checks.iter().filter(|c| !c.passed && c.severity == Severity::Critical) {
        warn!(
            constraint_id = %failed.constraint_id,
            actual = ?failed.actual_value,
            threshold = failed.threshold,
            "critical constraint failed"
        );
    }
    debug!(checks = checks.len(), safety = ?safety_status, "constraints validated");

    ValidationReport {
        all_passed: worst_failure.is_none(),
        checks,
        safety_status,
        validated_at: now,
    }
}

/// Evaluate one constraint. A missing metric fails with `actual_value = None`.
pub fn check<S>(constraint: &Constraint, subject: &S) -> ConstraintCheck
where
    S: ConstraintSubject + ?Sized,
{
    let actual = subject.metric(&constraint.metric);
    let threshold = constraint.threshold_value;

    let (passed, margin_percent) = match actual {
        Some(value) if value.is_finite() => {
            let distance = match constraint.threshold_op {
                ThresholdOp::Above => value - threshold,
                ThresholdOp::Below => threshold - value,
                ThresholdOp::Equals => constraint.tolerance - (value - threshold).abs(),
            };
            let passed = match constraint.threshold_op {
                ThresholdOp::Above | ThresholdOp::Below => distance > 0.0,
                ThresholdOp::Equals => distance >= 0.0,
            };
            let denominator = if threshold == 0.0 { 1.0 } else { threshold.abs() };
            (passed, Some(distance / denominator * 100.0))
        }
        _ => (false, None),
    };

    ConstraintCheck {
        constraint_id: constraint.id.clone(),
        description: constraint.description.clone(),
        threshold,
        actual_value: actual,
        passed,
        margin_percent,
        severity: constraint.severity,
    }
}
