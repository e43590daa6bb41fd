use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration consumed by `veritas-observability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `VERITAS_LOG` is unset.
    pub log_filter: String,
    /// Emit structured JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: defaults::DEFAULT_LOG_FILTER.to_string(),
            json: defaults::DEFAULT_LOG_JSON,
        }
    }
}
