//! Observations entering the engine from an ingestion collaborator.
//!
//! # Examples
//!
//! ```
//! use veritas_core::models::{DataPoint, ObservedValue};
//! use chrono::Utc;
//!
//! let dp = DataPoint::new(ObservedValue::Numeric(41.5), "celsius", "sensor-7", Utc::now(), "rack-3 probe");
//! assert_eq!(dp.source_id, "sensor-7");
//! assert_eq!(dp.value.as_numeric(), Some(41.5));
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The value a source reported: a number or a discrete state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum ObservedValue {
    Numeric(f64),
    State(String),
}

impl ObservedValue {
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            Self::State(_) => None,
        }
    }

    pub fn as_state(&self) -> Option<&str> {
        match self {
            Self::Numeric(_) => None,
            Self::State(s) => Some(s),
        }
    }
}

impl fmt::Display for ObservedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(v) => write!(f, "{v}"),
            Self::State(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ObservedValue {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for ObservedValue {
    fn from(value: &str) -> Self {
        Self::State(value.to_string())
    }
}

/// A single observation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DataPoint {
    /// Unique ID (UUID v4 unless supplied by the ingestion layer).
    pub id: String,
    pub value: ObservedValue,
    pub unit: String,
    /// Named source that produced the value.
    pub source_id: String,
    /// When the source observed the value (ISO-8601 on the wire).
    pub observed_at: DateTime<Utc>,
    /// Free-text description of what caused this observation.
    pub causal_origin: String,
    /// Source-reported confidence (0–100), if the feed provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_confidence: Option<f64>,
}

impl DataPoint {
    pub fn new(
        value: ObservedValue,
        unit: impl Into<String>,
        source_id: impl Into<String>,
        observed_at: DateTime<Utc>,
        causal_origin: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            value,
            unit: unit.into(),
            source_id: source_id.into(),
            observed_at,
            causal_origin: causal_origin.into(),
            reported_confidence: None,
        }
    }

    /// Attach a source-reported confidence.
    pub fn with_reported_confidence(mut self, confidence: f64) -> Self {
        self.reported_confidence = Some(confidence);
        self
    }
}
