use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use veritas_core::models::{DataPoint, ObservedValue, SourceAuthority, TruthWitness};

use super::{FeedKind, IngestionSource, Observation};

/// One price round published by an oracle network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleReading {
    /// Asset pair, e.g. `ETH/USD`.
    pub pair: String,
    pub answer: f64,
    pub round_id: u64,
    pub updated_at: DateTime<Utc>,
    /// Share of oracle nodes that reported within the deviation bound (0–100).
    pub node_agreement: Option<f64>,
}

/// Buffers rounds from one oracle feed.
#[derive(Debug, Clone)]
pub struct OracleFeed {
    feed_id: String,
    pending: Vec<OracleReading>,
}

impl OracleFeed {
    pub fn new(feed_id: impl Into<String>) -> Self {
        Self {
            feed_id: feed_id.into(),
            pending: Vec::new(),
        }
    }

    pub fn push(&mut self, reading: OracleReading) {
        self.pending.push(reading);
    }

    pub fn feed_id(&self) -> &str {
        &self.feed_id
    }
}

impl IngestionSource for OracleFeed {
    fn kind(&self) -> FeedKind {
        FeedKind::Oracle
    }

    fn drain(&mut self) -> Vec<Observation> {
        self.pending
            .drain(..)
            .map(|r| {
                let unit = r.pair.rsplit('/').next().unwrap_or_default().to_ascii_lowercase();
                let mut data_point = DataPoint::new(
                    ObservedValue::Numeric(r.answer),
                    unit,
                    self.feed_id.clone(),
                    r.updated_at,
                    format!("oracle round {} for {}", r.round_id, r.pair),
                );
                data_point.reported_confidence = r.node_agreement;
                Observation {
                    data_point,
                    witness: TruthWitness::new(SourceAuthority::Oracle, r.updated_at),
                }
            })
            .collect()
    }
}
