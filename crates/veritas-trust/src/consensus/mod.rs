//! Multi-source consensus.
//!
//! Claims agree pairwise under a numeric tolerance or case-insensitive state
//! match. The largest group of claims agreeing with a common claim wins;
//! everything else is an outlier, kept for audit but excluded from the mean.

pub mod agreement;
pub mod aggregator;

pub use aggregator::ConsensusAggregator;
pub use agreement::values_agree;
