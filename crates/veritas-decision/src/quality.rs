//! DecisionQualityScorer: grade an executed decision against ground truth.
//!
//! Five components on a 0–100 scale, combined with the configured weights.
//! A component with no evidence (no cost data, no duration, no checks)
//! scores 100.

use std::collections::BTreeMap;

use tracing::{debug, info};

use veritas_core::config::QualityConfig;
use veritas_core::constants::{SCORE_MAX, SCORE_MIN};
use veritas_core::errors::{ConfigError, VeritasError, VeritasResult};
use veritas_core::models::{
    Decision, DecisionOutcome, MetricVariance, OutcomeObservation, QualityComponents, RootCause,
};

/// Penalty per compliance violation.
const COMPLIANCE_PENALTY_PER_VIOLATION: f64 = 25.0;

#[derive(Debug, Clone, Default)]
pub struct DecisionQualityScorer {
    config: QualityConfig,
}

impl DecisionQualityScorer {
    pub fn new(config: QualityConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// Score `decision` against `observation`.
    ///
    /// Fails with `InsufficientData` if the observation belongs to another
    /// decision and with `DecisionState` if the decision never executed.
    pub fn score(
        &self,
        decision: &Decision,
        observation: &OutcomeObservation,
    ) -> VeritasResult<DecisionOutcome> {
        if observation.decision_id != decision.decision_id {
            return Err(VeritasError::insufficient(format!(
                "observation is for decision '{}', not '{}'",
                observation.decision_id, decision.decision_id
            )));
        }
        let Some(executed_at) = decision.executed_at() else {
            return Err(VeritasError::decision_state(
                &decision.decision_id,
                "only executed decisions can be scored",
            ));
        };

        let action = &decision.proposed_action;
        let variance_by_metric: BTreeMap<String, MetricVariance> = action
            .predicted_outcomes
            .iter()
            .map(|(metric, predicted)| {
                let actual = observation.actual.get(metric).copied();
                (metric.clone(), self.variance(*predicted, actual))
            })
            .collect();

        let actual_duration = observation
            .completed_at
            .map(|done| (done - executed_at).num_milliseconds() as f64 / 1000.0);

        let components = QualityComponents {
            accuracy: accuracy(&variance_by_metric),
            efficiency: ratio_component(action.estimated_cost, observation.actual_cost),
            timeliness: ratio_component(action.expected_duration_seconds, actual_duration),
            risk_management: risk_management(decision),
            compliance: (SCORE_MAX
                - COMPLIANCE_PENALTY_PER_VIOLATION * f64::from(observation.compliance_violations))
            .max(SCORE_MIN),
        };

        let w = &self.config.weights;
        let quality_score = (w.accuracy * components.accuracy
            + w.efficiency * components.efficiency
            + w.timeliness * components.timeliness
            + w.risk_management * components.risk_management
            + w.compliance * components.compliance)
            .clamp(SCORE_MIN, SCORE_MAX);

        let mut root_causes = Vec::new();
        let mut pending_root_causes = Vec::new();
        for (metric, variance) in variance_by_metric.iter().filter(|(_, v)| v.exceeds_tolerance) {
            match observation.root_causes.get(metric).map(|t| t.trim()) {
                Some(text) if !text.is_empty() => root_causes.push(RootCause {
                    metric: metric.clone(),
                    variance: variance.variance,
                    explanation: text.to_string(),
                }),
                _ => pending_root_causes.push(metric.clone()),
            }
        }

        debug!(decision_id = %decision.decision_id, ?components, "quality components");
        info!(
            decision_id = %decision.decision_id,
            quality_score,
            pending_root_causes = pending_root_causes.len(),
            "decision outcome scored"
        );

        Ok(DecisionOutcome {
            decision_id: decision.decision_id.clone(),
            predicted: action.predicted_outcomes.clone(),
            actual: observation.actual.clone(),
            variance_by_metric,
            quality_score,
            components,
            root_causes,
            pending_root_causes,
            scored_at: observation.observed_at,
        })
    }

    fn variance(&self, predicted: f64, actual: Option<f64>) -> MetricVariance {
        let Some(actual) = actual else {
            return MetricVariance {
                predicted,
                actual: None,
                variance: None,
                exceeds_tolerance: false,
            };
        };
        let variance = if !actual.is_finite() || !predicted.is_finite() {
            None
        } else if predicted == 0.0 {
            (actual == 0.0).then_some(0.0)
        } else {
            Some((actual - predicted) / predicted)
        };
        let exceeds_tolerance = match variance {
            Some(v) => v.abs() > self.config.variance_tolerance,
            None => true,
        };
        MetricVariance {
            predicted,
            actual: Some(actual),
            variance,
            exceeds_tolerance,
        }
    }
}

/// `100 × (1 − mean |variance|)` over measured metrics; undefined variances count as 1.
fn accuracy(variances: &BTreeMap<String, MetricVariance>) -> f64 {
    let magnitudes: Vec<f64> = variances
        .values()
        .filter(|v| v.is_measured())
        .map(|v| v.variance.map_or(1.0, f64::abs))
        .collect();
    if magnitudes.is_empty() {
        return SCORE_MAX;
    }
    let mean = magnitudes.iter().sum::<f64>() / magnitudes.len() as f64;
    (SCORE_MAX * (1.0 - mean)).clamp(SCORE_MIN, SCORE_MAX)
}

/// `100 × min(1, expected / actual)`; missing or non-positive inputs give 100.
fn ratio_component(expected: Option<f64>, actual: Option<f64>) -> f64 {
    match (expected, actual) {
        (Some(expected), Some(actual)) if actual > 0.0 && expected.is_finite() && actual.is_finite() => {
            (SCORE_MAX * (expected / actual).min(1.0)).clamp(SCORE_MIN, SCORE_MAX)
        }
        _ => SCORE_MAX,
    }
}

fn risk_management(decision: &Decision) -> f64 {
    let checks = &decision.constraint_checks;
    if checks.is_empty() {
        return SCORE_MAX;
    }
    let passed = checks.iter().filter(|c| c.passed).count();
    SCORE_MAX * passed as f64 / checks.len() as f64
}
