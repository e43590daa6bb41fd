//! # veritas-core
//!
//! Foundation crate for the Veritas trust and provenance engine.
//! Defines all records, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VeritasConfig;
pub use errors::{ChainStateError, ConfigError, VeritasError, VeritasResult};
pub use models::{
    DataPoint, ObservedValue, SourceAuthority, TrustGrade, TrustScore, TrustWarning,
    TruthWitness, WarningKind,
};
