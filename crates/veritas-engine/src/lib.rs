//! # veritas-engine
//!
//! Request-scoped facade over the trust pipeline.
//!
//! ## Modules
//!
//! - [`ingestion`]: Feed adapters turning native readings into observations
//! - [`request`]: Evaluation requests and results
//! - [`engine`]: [`TrustEngine`], wiring scoring, provenance and decisions together

pub mod engine;
pub mod ingestion;
pub mod request;

pub use engine::{SourceVerdict, TrustEngine};
pub use ingestion::{FeedKind, IngestionFeed, IngestionSource, Observation};
pub use request::{Evaluation, EvaluationRequest};
