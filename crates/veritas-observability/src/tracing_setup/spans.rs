//! Span definitions per operation: scoring, provenance chains, decisions.

/// Span around one trust evaluation.
#[macro_export]
macro_rules! scoring_span {
    ($data_point_id:expr, $source_id:expr) => {
        tracing::info_span!(
            "veritas.scoring",
            data_point_id = %$data_point_id,
            source_id = %$source_id
        )
    };
}

/// Span around provenance chain work.
#[macro_export]
macro_rules! chain_span {
    ($chain_id:expr) => {
        tracing::info_span!("veritas.chain", chain_id = %$chain_id)
    };
}

/// Span around gating, reversal or outcome work for a decision.
#[macro_export]
macro_rules! decision_span {
    ($decision_id:expr, $stage:expr) => {
        tracing::info_span!("veritas.decision", decision_id = %$decision_id, stage = %$stage)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORING: &str = "veritas.scoring";
    pub const CHAIN: &str = "veritas.chain";
    pub const DECISION: &str = "veritas.decision";
}
