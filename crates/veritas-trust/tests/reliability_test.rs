use rayon::prelude::*;
use veritas_core::config::ReliabilityConfig;
use veritas_core::traits::ReliabilitySource;
use veritas_trust::SourceReliabilityRegistry;

#[test]
fn unknown_source_reports_neutral_default() {
    let registry = SourceReliabilityRegistry::default();
    assert_eq!(registry.reliability_of("ghost"), 70.0);
    assert!(registry.is_sparse("ghost"));
    assert!(registry.record("ghost").is_none());
    assert!(registry.is_empty());
}

#[test]
fn sparse_source_reports_neutral_until_minimum() {
    let registry = SourceReliabilityRegistry::default();
    for _ in 0..9 {
        registry.record_outcome("feed", true);
    }
    assert_eq!(registry.reliability_of("feed"), 70.0);
    assert!(registry.is_sparse("feed"));

    registry.record_outcome("feed", false);
    assert_eq!(registry.reliability_of("feed"), 90.0);
    assert!(!registry.is_sparse("feed"));
}

#[test]
fn custom_minimum_and_neutral_are_honoured() {
    let registry = SourceReliabilityRegistry::new(ReliabilityConfig {
        min_observations_for_reliability: 2,
        neutral_reliability: 50.0,
    });
    registry.record_outcome("a", false);
    assert_eq!(registry.reliability_of("a"), 50.0);
    registry.record_outcome("a", false);
    assert_eq!(registry.reliability_of("a"), 0.0);
}

#[test]
fn records_are_sorted_snapshots() {
    let registry = SourceReliabilityRegistry::default();
    registry.record_outcome("zeta", true);
    registry.record_outcome("alpha", false);
    registry.record_outcome("alpha", true);

    let records = registry.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].source_id, "alpha");
    assert_eq!(records[0].total_observations, 2);
    assert_eq!(records[0].validated_observations, 1);
    assert_eq!(records[0].rolling_reliability, 70.0);
    assert_eq!(records[1].source_id, "zeta");
    assert_eq!(registry.len(), 2);
}

#[test]
fn concurrent_updates_are_not_lost() {
    let registry = SourceReliabilityRegistry::default();
    (0..10_000u32).into_par_iter().for_each(|i| {
        let source = format!("source-{}", i % 4);
        registry.record_outcome(&source, i % 5 != 0);
    });

    let total: u64 = registry.records().iter().map(|r| r.total_observations).sum();
    let validated: u64 = registry
        .records()
        .iter()
        .map(|r| r.validated_observations)
        .sum();
    assert_eq!(total, 10_000);
    assert_eq!(validated, 8_000);
    for record in registry.records() {
        assert!(record.validated_observations <= record.total_observations);
    }
}

#[test]
fn readers_never_see_validated_above_total() {
    let registry = SourceReliabilityRegistry::default();
    registry.record_outcome("hot", true);
    std::thread::scope(|s| {
        s.spawn(|| {
            for _ in 0..20_000 {
                registry.record_outcome("hot", true);
            }
        });
        s.spawn(|| {
            for _ in 0..20_000 {
                if let Some(rec) = registry.record("hot") {
                    assert!(rec.validated_observations <= rec.total_observations);
                    assert!((0.0..=100.0).contains(&rec.rolling_reliability));
                }
            }
        });
    });
    assert_eq!(registry.record("hot").unwrap().total_observations, 20_001);
}

#[test]
fn registry_is_a_reliability_source() {
    let registry = SourceReliabilityRegistry::default();
    let source: &dyn ReliabilitySource = &registry;
    assert_eq!(source.reliability_of("x"), 70.0);
    assert!(source.is_sparse("x"));
}
