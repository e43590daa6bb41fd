use chrono::Utc;
use veritas_core::models::{ObservedValue, SourceAuthority};
use veritas_engine::ingestion::{
    LedgerEntry, LedgerFeed, OracleFeed, OracleReading, SensorFeed, SensorReading,
};
use veritas_engine::{FeedKind, IngestionFeed, IngestionSource};

#[test]
fn oracle_rounds_become_oracle_witnessed_points() {
    let at = Utc::now();
    let mut feed = OracleFeed::new("chainlink-eth-usd");
    feed.push(OracleReading {
        pair: "ETH/USD".to_string(),
        answer: 1850.25,
        round_id: 42,
        updated_at: at,
        node_agreement: Some(97.0),
    });

    let observations = feed.drain();
    assert_eq!(observations.len(), 1);
    let obs = &observations[0];
    assert_eq!(obs.data_point.source_id, "chainlink-eth-usd");
    assert_eq!(obs.data_point.unit, "usd");
    assert_eq!(obs.data_point.value, ObservedValue::Numeric(1850.25));
    assert_eq!(obs.data_point.reported_confidence, Some(97.0));
    assert_eq!(obs.witness.source_authority, SourceAuthority::Oracle);
    assert_eq!(obs.witness.witnessed_at, at);
    assert!(feed.drain().is_empty());
}

#[test]
fn ledger_entries_share_the_transaction_trace() {
    let at = Utc::now();
    let mut feed = LedgerFeed::new("ethereum-mainnet");
    for field in ["reserve0", "reserve1"] {
        feed.push(LedgerEntry {
            tx_hash: "0xabc123".to_string(),
            block_number: 19_000_000,
            field: field.to_string(),
            value: ObservedValue::Numeric(1_000.0),
            unit: "weth".to_string(),
            block_time: at,
        });
    }

    let observations = feed.drain();
    assert_eq!(observations.len(), 2);
    for obs in &observations {
        assert_eq!(obs.witness.source_authority, SourceAuthority::Onchain);
        assert_eq!(obs.witness.global_trace_id, "0xabc123");
    }
    assert!(observations[0].data_point.causal_origin.starts_with("reserve0"));
    assert_ne!(observations[0].data_point.id, observations[1].data_point.id);
}

#[test]
fn sensor_authority_is_configurable() {
    let mut feed = SensorFeed::new("rack-3-temp", SourceAuthority::HumanOperator);
    feed.push(SensorReading {
        value: "nominal".into(),
        unit: "state".to_string(),
        read_at: Utc::now(),
        confidence: None,
    });

    let obs = feed.drain().remove(0);
    assert_eq!(obs.witness.source_authority, SourceAuthority::HumanOperator);
    assert_eq!(obs.data_point.value.as_state(), Some("nominal"));
    assert_eq!(obs.data_point.reported_confidence, None);
}

#[test]
fn feed_union_reports_its_kind_and_drains_in_order() {
    let mut sensor = SensorFeed::new("s1", SourceAuthority::Agent);
    for v in [1.0, 2.0, 3.0] {
        sensor.push(SensorReading {
            value: v.into(),
            unit: "rps".to_string(),
            read_at: Utc::now(),
            confidence: Some(80.0),
        });
    }
    let mut feeds: Vec<IngestionFeed> = vec![
        OracleFeed::new("o").into(),
        LedgerFeed::new("l").into(),
        sensor.into(),
    ];

    let kinds: Vec<_> = feeds.iter().map(IngestionSource::kind).collect();
    assert_eq!(kinds, vec![FeedKind::Oracle, FeedKind::Ledger, FeedKind::Sensor]);
    assert_eq!(FeedKind::Ledger.to_string(), "ledger");

    let values: Vec<_> = feeds[2]
        .drain()
        .into_iter()
        .filter_map(|o| o.data_point.value.as_numeric())
        .collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0]);
    assert!(feeds[0].drain().is_empty());
}
