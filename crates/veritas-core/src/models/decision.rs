//! Autonomous decisions and the actions they propose.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ConstraintCheck;

/// An action an agent wants to take.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ProposedAction {
    pub action_id: String,
    /// Short machine name, e.g. `scale_out`.
    pub kind: String,
    pub description: String,
    /// Current metric values the constraint catalogue is checked against.
    pub metrics: BTreeMap<String, f64>,
    /// Quantitative predictions, compared to ground truth after execution.
    pub predicted_outcomes: BTreeMap<String, f64>,
    /// Systems that change state when this action runs.
    pub dependent_systems: Vec<String>,
    /// Ordered undo steps.
    pub rollback_steps: Vec<String>,
    /// Base cost of undoing the action.
    pub rollback_cost: f64,
    pub expected_duration_seconds: Option<f64>,
    pub estimated_cost: Option<f64>,
}

impl ProposedAction {
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            action_id: uuid::Uuid::new_v4().to_string(),
            kind: kind.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    pub fn with_prediction(mut self, name: impl Into<String>, value: f64) -> Self {
        self.predicted_outcomes.insert(name.into(), value);
        self
    }

    pub fn with_dependent_system(mut self, system: impl Into<String>) -> Self {
        self.dependent_systems.push(system.into());
        self
    }

    pub fn with_rollback_step(mut self, step: impl Into<String>) -> Self {
        self.rollback_steps.push(step.into());
        self
    }
}

/// Lifecycle of a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DecisionStatus {
    Proposed,
    Executed { executed_at: DateTime<Utc> },
    Rejected { reason: String },
}

/// A decision backed by scored data. Immutable once executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Decision {
    pub decision_id: String,
    pub agent_id: String,
    pub proposed_action: ProposedAction,
    /// IDs of the data points the decision relied on.
    pub supporting_data_points: Vec<String>,
    pub constraint_checks: Vec<ConstraintCheck>,
    /// Composite trust score of the supporting data at decision time.
    pub trust_score_at_decision: f64,
    pub timestamp: DateTime<Utc>,
    pub status: DecisionStatus,
}

impl Decision {
    pub fn new(
        agent_id: impl Into<String>,
        proposed_action: ProposedAction,
        trust_score_at_decision: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            decision_id: uuid::Uuid::new_v4().to_string(),
            agent_id: agent_id.into(),
            proposed_action,
            supporting_data_points: Vec::new(),
            constraint_checks: Vec::new(),
            trust_score_at_decision,
            timestamp,
            status: DecisionStatus::Proposed,
        }
    }

    pub fn executed_at(&self) -> Option<DateTime<Utc>> {
        match self.status {
            DecisionStatus::Executed { executed_at } => Some(executed_at),
            _ => None,
        }
    }

    pub fn is_executed(&self) -> bool {
        self.executed_at().is_some()
    }
}

/// Whether an executed action has passed the point beyond which it cannot be undone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointOfNoReturn {
    pub reached: bool,
    pub reached_at: Option<DateTime<Utc>>,
    pub reason: Option<String>,
}

impl PointOfNoReturn {
    pub fn not_reached() -> Self {
        Self::default()
    }

    pub fn reached(at: DateTime<Utc>, reason: impl Into<String>) -> Self {
        Self {
            reached: true,
            reached_at: Some(at),
            reason: Some(reason.into()),
        }
    }
}
