use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Point-in-time snapshot of a source's track record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SourceRecord {
    pub source_id: String,
    pub total_observations: u64,
    pub validated_observations: u64,
    /// Reliability (0–100) as reported at snapshot time.
    pub rolling_reliability: f64,
}

impl SourceRecord {
    /// Fraction of outcomes that were validated, or `None` with no history.
    pub fn hit_rate(&self) -> Option<f64> {
        (self.total_observations > 0)
            .then(|| self.validated_observations as f64 / self.total_observations as f64)
    }
}
