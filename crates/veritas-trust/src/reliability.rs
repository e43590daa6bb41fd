//! SourceReliabilityRegistry: rolling accuracy per source.
//!
//! Reliability formula: `validated / total × 100`, reported only once a
//! source has `min_observations_for_reliability` outcomes. Sparse sources
//! report the neutral default instead.
//!
//! # Examples
//!
//! ```
//! use veritas_core::config::ReliabilityConfig;
//! use veritas_trust::SourceReliabilityRegistry;
//!
//! let registry = SourceReliabilityRegistry::new(ReliabilityConfig::default());
//! assert_eq!(registry.reliability_of("new-source"), 70.0);
//! for i in 0..10 {
//!     registry.record_outcome("feed-a", i < 8);
//! }
//! assert_eq!(registry.reliability_of("feed-a"), 80.0);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::debug;

use veritas_core::config::ReliabilityConfig;
use veritas_core::models::SourceRecord;
use veritas_core::traits::ReliabilitySource;

#[derive(Debug, Default)]
struct Counters {
    total: AtomicU64,
    validated: AtomicU64,
}

impl Counters {
    /// Reads `validated` before `total`. Writers bump `total` first, so the
    /// pair never shows `validated > total`.
    fn snapshot(&self) -> (u64, u64) {
        let validated = self.validated.load(Ordering::Acquire);
        let total = self.total.load(Ordering::Acquire);
        (total, validated.min(total))
    }
}

/// Thread-safe, append-only registry of source outcomes.
///
/// The only shared mutable state in the engine. Counters are never
/// decremented; reads may lag concurrent writes slightly.
#[derive(Debug)]
pub struct SourceReliabilityRegistry {
    config: ReliabilityConfig,
    sources: DashMap<String, Counters>,
}

impl SourceReliabilityRegistry {
    pub fn new(config: ReliabilityConfig) -> Self {
        Self {
            config,
            sources: DashMap::new(),
        }
    }

    pub fn config(&self) -> &ReliabilityConfig {
        &self.config
    }

    /// Record whether a source's claim was later confirmed.
    pub fn record_outcome(&self, source_id: &str, was_accurate: bool) {
        // Existing sources only need a shard read lock. The guard must be
        // released before `entry` takes the write lock on the same shard.
        let known = self
            .sources
            .get(source_id)
            .map(|counters| Self::bump(&counters, was_accurate))
            .is_some();
        if !known {
            let counters = self.sources.entry(source_id.to_string()).or_default();
            Self::bump(&counters, was_accurate);
        }
        debug!(source_id, was_accurate, "source outcome recorded");
    }

    fn bump(counters: &Counters, was_accurate: bool) {
        counters.total.fetch_add(1, Ordering::AcqRel);
        if was_accurate {
            counters.validated.fetch_add(1, Ordering::AcqRel);
        }
    }

    /// Reliability in [0, 100].
    pub fn reliability_of(&self, source_id: &str) -> f64 {
        match self.sources.get(source_id) {
            Some(counters) => {
                let (total, validated) = counters.snapshot();
                self.reliability_from(total, validated)
            }
            None => self.config.neutral_reliability,
        }
    }

    fn reliability_from(&self, total: u64, validated: u64) -> f64 {
        if total == 0 || total < self.config.min_observations_for_reliability {
            return self.config.neutral_reliability;
        }
        (validated as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// True when the source has fewer outcomes than the reporting minimum.
    pub fn is_sparse(&self, source_id: &str) -> bool {
        let total = self
            .sources
            .get(source_id)
            .map(|c| c.snapshot().0)
            .unwrap_or(0);
        total == 0 || total < self.config.min_observations_for_reliability
    }

    /// Snapshot of one source, if it has any recorded outcomes.
    pub fn record(&self, source_id: &str) -> Option<SourceRecord> {
        self.sources.get(source_id).map(|counters| {
            let (total, validated) = counters.snapshot();
            SourceRecord {
                source_id: source_id.to_string(),
                total_observations: total,
                validated_observations: validated,
                rolling_reliability: self.reliability_from(total, validated),
            }
        })
    }

    /// Snapshots of every known source, sorted by source id.
    pub fn records(&self) -> Vec<SourceRecord> {
        let mut out: Vec<SourceRecord> = self
            .sources
            .iter()
            .map(|entry| {
                let (total, validated) = entry.value().snapshot();
                SourceRecord {
                    source_id: entry.key().clone(),
                    total_observations: total,
                    validated_observations: validated,
                    rolling_reliability: self.reliability_from(total, validated),
                }
            })
            .collect();
        out.sort_by(|a, b| a.source_id.cmp(&b.source_id));
        out
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceReliabilityRegistry {
    fn default() -> Self {
        Self::new(ReliabilityConfig::default())
    }
}

impl ReliabilitySource for SourceReliabilityRegistry {
    fn reliability_of(&self, source_id: &str) -> f64 {
        SourceReliabilityRegistry::reliability_of(self, source_id)
    }

    fn is_sparse(&self, source_id: &str) -> bool {
        SourceReliabilityRegistry::is_sparse(self, source_id)
    }
}
