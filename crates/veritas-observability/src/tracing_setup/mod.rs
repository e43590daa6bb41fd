//! Tracing setup: subscriber initialization, spans and events.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use veritas_core::config::defaults::DEFAULT_LOG_FILTER;
use veritas_core::config::ObservabilityConfig;

/// Environment variable holding `EnvFilter` directives,
/// e.g. `VERITAS_LOG=veritas_trust=debug,veritas_provenance=info`.
pub const LOG_ENV_VAR: &str = "VERITAS_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `VERITAS_LOG` wins over `config.log_filter`. Output is JSON lines when
/// `config.json` is set, human-readable otherwise. Idempotent; if another
/// subscriber is already installed the call is a no-op.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let directive = resolve_filter(std::env::var(LOG_ENV_VAR).ok().as_deref(), config);
        let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let json_layer = config.json.then(|| {
            fmt::layer()
                .json()
                .with_target(true)
                .with_thread_ids(true)
                .with_current_span(true)
        });
        let text_layer = (!config.json).then(|| {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
        });

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .with(text_layer)
            .try_init();
    });
}

/// Pick the filter directive: a non-blank env value, else the configured
/// filter, else the built-in default. Invalid directives fall back to the
/// next candidate.
pub fn resolve_filter(env_value: Option<&str>, config: &ObservabilityConfig) -> String {
    [env_value, Some(config.log_filter.as_str())]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|d| !d.is_empty() && EnvFilter::try_new(d).is_ok())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_string()
}
