//! Ground truth for executed decisions and the resulting quality record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What actually happened after a decision executed. Supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutcomeObservation {
    pub decision_id: String,
    /// Measured values, keyed like `ProposedAction::predicted_outcomes`.
    pub actual: BTreeMap<String, f64>,
    pub observed_at: DateTime<Utc>,
    /// When the action finished running.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub actual_cost: Option<f64>,
    #[serde(default)]
    pub compliance_violations: u32,
    /// Caller-provided explanation per metric. The scorer never invents these.
    #[serde(default)]
    pub root_causes: BTreeMap<String, String>,
}

impl OutcomeObservation {
    pub fn new(decision_id: impl Into<String>, observed_at: DateTime<Utc>) -> Self {
        Self {
            decision_id: decision_id.into(),
            actual: BTreeMap::new(),
            observed_at,
            completed_at: None,
            actual_cost: None,
            compliance_violations: 0,
            root_causes: BTreeMap::new(),
        }
    }

    pub fn with_actual(mut self, metric: impl Into<String>, value: f64) -> Self {
        self.actual.insert(metric.into(), value);
        self
    }

    pub fn with_root_cause(mut self, metric: impl Into<String>, text: impl Into<String>) -> Self {
        self.root_causes.insert(metric.into(), text.into());
        self
    }
}

/// Prediction error for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricVariance {
    pub predicted: f64,
    /// `None` when ground truth for the metric was not observed.
    pub actual: Option<f64>,
    /// `(actual - predicted) / predicted`. `None` when undefined
    /// (unmeasured, or predicted zero with a non-zero actual).
    pub variance: Option<f64>,
    /// |variance| exceeded tolerance, or was undefined for a measured metric.
    pub exceeds_tolerance: bool,
}

impl MetricVariance {
    pub fn is_measured(&self) -> bool {
        self.actual.is_some()
    }
}

/// Five quality components, each 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualityComponents {
    pub accuracy: f64,
    pub efficiency: f64,
    pub timeliness: f64,
    pub risk_management: f64,
    pub compliance: f64,
}

/// Caller-supplied explanation for a metric that missed its prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RootCause {
    pub metric: String,
    pub variance: Option<f64>,
    pub explanation: String,
}

/// After-the-fact quality record for a decision. Terminal and immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecisionOutcome {
    pub decision_id: String,
    pub predicted: BTreeMap<String, f64>,
    pub actual: BTreeMap<String, f64>,
    pub variance_by_metric: BTreeMap<String, MetricVariance>,
    /// Weighted combination of `components`, 0–100.
    pub quality_score: f64,
    pub components: QualityComponents,
    pub root_causes: Vec<RootCause>,
    /// Flagged metrics still waiting for a root-cause entry from the caller.
    pub pending_root_causes: Vec<String>,
    pub scored_at: DateTime<Utc>,
}
