use veritas_core::config::ObservabilityConfig;
use veritas_observability::tracing_setup::{events, spans};
use veritas_observability::{chain_span, decision_span, init_tracing, resolve_filter, scoring_span};

fn config(filter: &str) -> ObservabilityConfig {
    ObservabilityConfig {
        log_filter: filter.to_string(),
        json: true,
    }
}

#[test]
fn env_value_wins_over_config() {
    let directive = resolve_filter(Some("veritas_trust=debug"), &config("veritas=warn"));
    assert_eq!(directive, "veritas_trust=debug");
}

#[test]
fn blank_env_value_falls_back_to_config() {
    assert_eq!(resolve_filter(Some("   "), &config("veritas=warn")), "veritas=warn");
    assert_eq!(resolve_filter(None, &config("veritas=warn")), "veritas=warn");
}

#[test]
fn invalid_directives_fall_back_to_default() {
    let directive = resolve_filter(Some("veritas=loud"), &config("veritas=verbose"));
    assert_eq!(directive, "veritas=info");
}

#[test]
fn init_is_idempotent() {
    init_tracing(&ObservabilityConfig::default());
    init_tracing(&config("veritas=debug"));
    tracing::info!("still logging after second init");
}

#[test]
fn spans_and_events_emit_under_a_scoped_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let span = scoring_span!("dp-1", "chainlink");
        let _entered = span.enter();
        events::trust_scored("dp-1", 91.5, "excellent", 0);
        events::consensus_not_reached(2, 2);

        let _chain = chain_span!("chain-1").entered();
        events::chain_opened("chain-1", "dp-1");

        let _decision = decision_span!("dec-1", "gate").entered();
        events::action_gated("act-1", false, "critical", 1);
        events::reversal_closed("dec-1", "irreversible", "funds settled");
        events::ground_truth_recorded("dec-1", 83.0, 1);
        events::batch_evaluated(4, 4);
    });
}

#[test]
fn span_names_are_namespaced() {
    for name in [spans::names::SCORING, spans::names::CHAIN, spans::names::DECISION] {
        assert!(name.starts_with("veritas."));
    }
}
