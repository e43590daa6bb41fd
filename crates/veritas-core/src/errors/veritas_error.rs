use super::{ChainStateError, ConfigError};

/// Top-level error for every fallible engine operation.
///
/// Only validation-class problems and missing prerequisites are errors.
/// Low trust, stale data and weak consensus are ordinary scores with warnings.
#[derive(Debug, thiserror::Error)]
pub enum VeritasError {
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigError),

    #[error("insufficient data: {reason}")]
    InsufficientData { reason: String },

    #[error(transparent)]
    ChainState(#[from] ChainStateError),

    #[error("decision {decision_id}: {reason}")]
    DecisionState { decision_id: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VeritasError {
    pub fn insufficient(reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            reason: reason.into(),
        }
    }

    pub fn decision_state(decision_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DecisionState {
            decision_id: decision_id.into(),
            reason: reason.into(),
        }
    }
}

pub type VeritasResult<T> = Result<T, VeritasError>;
