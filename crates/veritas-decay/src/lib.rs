//! # veritas-decay
//!
//! Freshness decay for trust scoring. Data younger than the grace period is
//! fully fresh; beyond it one of three curves applies, never dropping below
//! a configured floor.

pub mod engine;
pub mod formula;
pub mod policies;

pub use engine::DecayModel;
pub use formula::{decay, DecayBreakdown};
