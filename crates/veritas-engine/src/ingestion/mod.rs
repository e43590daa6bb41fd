//! Ingestion feeds.
//!
//! Each feed buffers readings in its native shape and converts them into
//! [`Observation`]s on [`drain`](IngestionSource::drain). Feeds are a closed
//! set, wrapped by [`IngestionFeed`].

pub mod ledger;
pub mod oracle;
pub mod sensor;

use std::fmt;

use serde::{Deserialize, Serialize};

use veritas_core::models::{DataPoint, TruthWitness};

pub use ledger::{LedgerEntry, LedgerFeed};
pub use oracle::{OracleFeed, OracleReading};
pub use sensor::{SensorFeed, SensorReading};

/// A data point together with the witness that vouches for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub data_point: DataPoint,
    pub witness: TruthWitness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    Oracle,
    Ledger,
    Sensor,
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Oracle => "oracle",
            Self::Ledger => "ledger",
            Self::Sensor => "sensor",
        })
    }
}

/// Anything that produces observations for the engine.
pub trait IngestionSource: Send {
    fn kind(&self) -> FeedKind;

    /// Take every buffered reading, oldest first, as observations.
    fn drain(&mut self) -> Vec<Observation>;
}

/// The supported feed types.
#[derive(Debug, Clone)]
pub enum IngestionFeed {
    Oracle(OracleFeed),
    Ledger(LedgerFeed),
    Sensor(SensorFeed),
}

impl IngestionSource for IngestionFeed {
    fn kind(&self) -> FeedKind {
        match self {
            Self::Oracle(_) => FeedKind::Oracle,
            Self::Ledger(_) => FeedKind::Ledger,
            Self::Sensor(_) => FeedKind::Sensor,
        }
    }

    fn drain(&mut self) -> Vec<Observation> {
        match self {
            Self::Oracle(feed) => feed.drain(),
            Self::Ledger(feed) => feed.drain(),
            Self::Sensor(feed) => feed.drain(),
        }
    }
}

impl From<OracleFeed> for IngestionFeed {
    fn from(feed: OracleFeed) -> Self {
        Self::Oracle(feed)
    }
}

impl From<LedgerFeed> for IngestionFeed {
    fn from(feed: LedgerFeed) -> Self {
        Self::Ledger(feed)
    }
}

impl From<SensorFeed> for IngestionFeed {
    fn from(feed: SensorFeed) -> Self {
        Self::Sensor(feed)
    }
}
