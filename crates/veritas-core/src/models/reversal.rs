use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How hard an undo is, easiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReversalComplexity {
    Trivial,
    Simple,
    Complex,
    Expert,
}

impl ReversalComplexity {
    /// One level harder, saturating at `Expert`.
    pub fn bumped(self) -> Self {
        match self {
            Self::Trivial => Self::Simple,
            Self::Simple => Self::Complex,
            Self::Complex | Self::Expert => Self::Expert,
        }
    }

    /// Multiplier applied to the rollback cost estimate.
    pub fn cost_multiplier(self) -> f64 {
        match self {
            Self::Trivial => 1.0,
            Self::Simple => 1.5,
            Self::Complex => 2.5,
            Self::Expert => 4.0,
        }
    }
}

/// Whether a plan can still be acted on. `Expired` and `Irreversible` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReversalStatus {
    Reversible,
    /// The reversal window lapsed.
    Expired,
    /// The point of no return was reached, or the decision was rejected.
    Irreversible,
}

impl ReversalStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Reversible)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reversible => "reversible",
            Self::Expired => "expired",
            Self::Irreversible => "irreversible",
        }
    }
}

/// Undo plan for a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReversalPlan {
    pub decision_id: String,
    pub can_reverse: bool,
    pub complexity: ReversalComplexity,
    /// Seconds left in the reversal window (0 once terminal).
    pub time_window_seconds: u64,
    pub steps: Vec<String>,
    pub cost_estimate: f64,
    pub status: ReversalStatus,
    pub expires_at: Option<DateTime<Utc>>,
    pub assessed_at: DateTime<Utc>,
    /// Why the plan is terminal, if it is.
    pub reason: Option<String>,
}
