//! Truth-witness metadata: who vouches for a data point and when.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The kind of authority that witnessed a data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SourceAuthority {
    Oracle,
    Onchain,
    Rpc,
    Indexer,
    HumanOperator,
    Agent,
}

impl SourceAuthority {
    pub const ALL: [SourceAuthority; 6] = [
        Self::Oracle,
        Self::Onchain,
        Self::Rpc,
        Self::Indexer,
        Self::HumanOperator,
        Self::Agent,
    ];

    /// Base confidence (0–100) used when the data point carries no reported confidence.
    pub fn default_confidence(&self) -> f64 {
        match self {
            Self::Onchain => 95.0,
            Self::Oracle => 90.0,
            Self::HumanOperator => 85.0,
            Self::Indexer => 80.0,
            Self::Rpc => 75.0,
            Self::Agent => 70.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oracle => "oracle",
            Self::Onchain => "onchain",
            Self::Rpc => "rpc",
            Self::Indexer => "indexer",
            Self::HumanOperator => "human_operator",
            Self::Agent => "agent",
        }
    }
}

impl fmt::Display for SourceAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Witness attached to a data point.
///
/// Truth age is never stored; it is derived from `witnessed_at` on every read
/// so it can't go stale.
///
/// # Examples
///
/// ```
/// use veritas_core::models::{SourceAuthority, TruthWitness};
/// use chrono::{Duration, Utc};
///
/// let now = Utc::now();
/// let witness = TruthWitness::new(SourceAuthority::Oracle, now - Duration::seconds(90));
/// assert_eq!(witness.truth_age_seconds(now), 90.0);
/// // Clock skew: a witness from the future has age zero.
/// let skewed = TruthWitness::new(SourceAuthority::Rpc, now + Duration::seconds(5));
/// assert_eq!(skewed.truth_age_seconds(now), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TruthWitness {
    pub source_authority: SourceAuthority,
    /// Trace ID shared by every record derived from the same observation.
    pub global_trace_id: String,
    pub witnessed_at: DateTime<Utc>,
}

impl TruthWitness {
    /// Create a witness with a fresh global trace ID.
    pub fn new(source_authority: SourceAuthority, witnessed_at: DateTime<Utc>) -> Self {
        Self {
            source_authority,
            global_trace_id: uuid::Uuid::new_v4().to_string(),
            witnessed_at,
        }
    }

    /// Create a witness that joins an existing trace.
    pub fn with_trace(
        source_authority: SourceAuthority,
        global_trace_id: impl Into<String>,
        witnessed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            source_authority,
            global_trace_id: global_trace_id.into(),
            witnessed_at,
        }
    }

    /// Seconds between witnessing and `now`, floored at zero.
    pub fn truth_age_seconds(&self, now: DateTime<Utc>) -> f64 {
        self.raw_age_seconds(now).max(0.0)
    }

    /// Read-time view with the truth age filled in, for serializing to clients.
    pub fn snapshot(&self, now: DateTime<Utc>) -> WitnessSnapshot {
        WitnessSnapshot {
            source_authority: self.source_authority,
            truth_age_seconds: self.truth_age_seconds(now),
            global_trace_id: self.global_trace_id.clone(),
            witnessed_at: self.witnessed_at,
        }
    }

    /// True when the witness timestamp lies in the future relative to `now`.
    pub fn is_clock_skewed(&self, now: DateTime<Utc>) -> bool {
        self.raw_age_seconds(now) < 0.0
    }

    fn raw_age_seconds(&self, now: DateTime<Utc>) -> f64 {
        (now - self.witnessed_at).num_milliseconds() as f64 / 1000.0
    }
}

/// A [`TruthWitness`] as seen at one instant, carrying the derived truth age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WitnessSnapshot {
    pub source_authority: SourceAuthority,
    pub truth_age_seconds: f64,
    pub global_trace_id: String,
    pub witnessed_at: DateTime<Utc>,
}
