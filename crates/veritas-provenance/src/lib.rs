//! # veritas-provenance
//!
//! Records the processing stages a data point passes through
//! (ingestion → processing → analysis → decision) and judges how far the
//! resulting chain can be trusted.
//!
//! ## Modules
//!
//! - [`tracker`]: Open/append/close state machine for one chain
//! - [`integrity`]: Gap detection and integrity verdicts
//! - [`digest`]: BLAKE3 content digests for step inputs and outputs

pub mod digest;
pub mod integrity;
pub mod tracker;

pub use digest::{digest_bytes, digest_json};
pub use integrity::{audit, detect_gaps, integrity_of};
pub use tracker::ProvenanceChainTracker;
