//! # veritas-observability
//!
//! Structured logging for the trust engine: one idempotent subscriber
//! initializer, span macros per operation and named structured events.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, resolve_filter, LOG_ENV_VAR};
