//! # veritas-trust
//!
//! Turns a data point plus its witness into a composite trust score.
//!
//! ## Modules
//!
//! - [`reliability`]: Per-source track record, lock-free counters
//! - [`consensus`]: Cross-check claims from independent sources
//! - [`calculator`]: Weighted composite of base, freshness, reliability, consensus

pub mod calculator;
pub mod consensus;
pub mod reliability;

pub use calculator::TrustScoreCalculator;
pub use consensus::ConsensusAggregator;
pub use reliability::SourceReliabilityRegistry;
