//! Error handling for Veritas.
//! One error enum per concern, `thiserror` only, aggregated into [`VeritasError`].

pub mod chain_error;
pub mod config_error;
pub mod veritas_error;

pub use chain_error::ChainStateError;
pub use config_error::ConfigError;
pub use veritas_error::{VeritasError, VeritasResult};
