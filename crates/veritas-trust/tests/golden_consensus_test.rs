use std::collections::HashMap;

use veritas_core::config::ConsensusConfig;
use veritas_core::models::ObservedValue;
use veritas_trust::ConsensusAggregator;

fn expected_value(value: &serde_json::Value) -> Option<ObservedValue> {
    match value {
        serde_json::Value::Number(n) => n.as_f64().map(ObservedValue::Numeric),
        serde_json::Value::String(s) => Some(ObservedValue::State(s.clone())),
        _ => None,
    }
}

#[test]
fn golden_consensus_scenarios() {
    let aggregator = ConsensusAggregator::new(ConsensusConfig::default()).unwrap();
    let no_history: HashMap<String, f64> = HashMap::new();

    for case in test_fixtures::consensus_cases() {
        let result = aggregator.aggregate(&case.claims, &no_history).unwrap();
        assert_eq!(
            result.agreement_reached, case.expected.agreement_reached,
            "{}: agreement",
            case.name
        );
        let outliers: Vec<_> = result.outliers.iter().map(|c| c.source_id.clone()).collect();
        assert_eq!(outliers, case.expected.outlier_sources, "{}: outliers", case.name);

        if let Some(expected) = case.expected.consensus_value.as_ref().and_then(expected_value) {
            match (&result.consensus_value, &expected) {
                (Some(ObservedValue::Numeric(a)), ObservedValue::Numeric(e)) => {
                    assert!((a - e).abs() < 1e-9, "{}: value {a} != {e}", case.name)
                }
                (actual, _) => assert_eq!(actual.as_ref(), Some(&expected), "{}: value", case.name),
            }
        }
    }
}
