use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use veritas_core::models::{DataPoint, ObservedValue, SourceAuthority, TruthWitness};

use super::{FeedKind, IngestionSource, Observation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub value: ObservedValue,
    pub unit: String,
    pub read_at: DateTime<Utc>,
    /// Self-reported confidence (0–100), if the device provides one.
    pub confidence: Option<f64>,
}

/// Buffers readings from one sensor. The authority vouching for the sensor
/// is configurable: a monitoring agent, an indexer, a human operator...
#[derive(Debug, Clone)]
pub struct SensorFeed {
    sensor_id: String,
    authority: SourceAuthority,
    pending: Vec<SensorReading>,
}

impl SensorFeed {
    pub fn new(sensor_id: impl Into<String>, authority: SourceAuthority) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            authority,
            pending: Vec::new(),
        }
    }

    pub fn push(&mut self, reading: SensorReading) {
        self.pending.push(reading);
    }

    pub fn authority(&self) -> SourceAuthority {
        self.authority
    }
}

impl IngestionSource for SensorFeed {
    fn kind(&self) -> FeedKind {
        FeedKind::Sensor
    }

    fn drain(&mut self) -> Vec<Observation> {
        self.pending
            .drain(..)
            .map(|r| {
                let mut data_point = DataPoint::new(
                    r.value,
                    r.unit,
                    self.sensor_id.clone(),
                    r.read_at,
                    format!("reading from sensor {}", self.sensor_id),
                );
                data_point.reported_confidence = r.confidence;
                Observation {
                    data_point,
                    witness: TruthWitness::new(self.authority, r.read_at),
                }
            })
            .collect()
    }
}
