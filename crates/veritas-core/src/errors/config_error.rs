//! Configuration errors. Raised at load time, never mid-request.

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A value is out of range, weights don't sum to 1.0, thresholds are not
    /// monotonic, or a constraint names an unknown operator.
    #[error("invalid configuration for {field}: {message}")]
    InvalidConfiguration { field: String, message: String },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },
}

impl ConfigError {
    /// Shorthand for an [`ConfigError::InvalidConfiguration`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }
}
