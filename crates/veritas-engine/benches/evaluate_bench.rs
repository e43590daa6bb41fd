use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use veritas_core::config::VeritasConfig;
use veritas_core::models::{Claim, DataPoint, SourceAuthority, TruthWitness};
use veritas_engine::{EvaluationRequest, TrustEngine};

fn requests(n: usize) -> Vec<EvaluationRequest> {
    let now = Utc::now();
    (0..n)
        .map(|i| {
            let observed = now - Duration::seconds((i % 3600) as i64);
            EvaluationRequest::new(
                DataPoint::new((1850.0 + i as f64 * 0.01).into(), "usd", format!("src-{}", i % 16), observed, "bench"),
                TruthWitness::new(SourceAuthority::Oracle, observed),
            )
            .with_sibling_claims(vec![
                Claim::new("pyth", 1851.0, 88.0),
                Claim::new("dex-twap", 1712.0, 70.0),
            ])
        })
        .collect()
}

fn bench_single(c: &mut Criterion) {
    let engine = TrustEngine::from_config(VeritasConfig::default()).unwrap();
    let req = requests(1).remove(0);
    c.bench_function("evaluate_with_consensus_single", |b| {
        b.iter(|| engine.evaluate(black_box(&req), Utc::now()))
    });
}

fn bench_batch_1k(c: &mut Criterion) {
    let engine = TrustEngine::from_config(VeritasConfig::default()).unwrap();
    let batch = requests(1_000);
    c.bench_function("evaluate_batch_1k", |b| {
        b.iter(|| engine.evaluate_batch(black_box(&batch), Utc::now()))
    });
}

criterion_group!(benches, bench_single, bench_batch_1k);
criterion_main!(benches);
