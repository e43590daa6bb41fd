use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use veritas_core::models::{DataPoint, ObservedValue, SourceAuthority, TruthWitness};

use super::{FeedKind, IngestionSource, Observation};

/// A value read from a finalized ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub tx_hash: String,
    pub block_number: u64,
    /// Which field of the entry the value came from, e.g. `reserve0`.
    pub field: String,
    pub value: ObservedValue,
    pub unit: String,
    pub block_time: DateTime<Utc>,
}

/// Buffers entries read from one ledger.
#[derive(Debug, Clone)]
pub struct LedgerFeed {
    ledger_id: String,
    pending: Vec<LedgerEntry>,
}

impl LedgerFeed {
    pub fn new(ledger_id: impl Into<String>) -> Self {
        Self {
            ledger_id: ledger_id.into(),
            pending: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: LedgerEntry) {
        self.pending.push(entry);
    }

    pub fn ledger_id(&self) -> &str {
        &self.ledger_id
    }
}

impl IngestionSource for LedgerFeed {
    fn kind(&self) -> FeedKind {
        FeedKind::Ledger
    }

    fn drain(&mut self) -> Vec<Observation> {
        self.pending
            .drain(..)
            .map(|e| Observation {
                data_point: DataPoint::new(
                    e.value,
                    e.unit,
                    self.ledger_id.clone(),
                    e.block_time,
                    format!("{} of tx {} in block {}", e.field, e.tx_hash, e.block_number),
                ),
                // Ledger entries share the transaction hash as trace.
                witness: TruthWitness::with_trace(SourceAuthority::Onchain, e.tx_hash, e.block_time),
            })
            .collect()
    }
}
