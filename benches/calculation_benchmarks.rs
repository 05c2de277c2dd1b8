//! Performance benchmarks for the tax engine.
//!
//! Covers the bracket integrator, a single-regime PIT run, the full
//! old-vs-new comparison, and the HTTP round trip through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;

use nigeria_tax_engine::api::{AppState, CalculationRequest, create_router};
use nigeria_tax_engine::calculation::{calculate_pit, compare_regimes, compute_progressive_tax};
use nigeria_tax_engine::config::{ConfigLoader, TaxRules};
use nigeria_tax_engine::models::{CitInput, PitInput, Regime, TaxInput};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn salary(basic: i64) -> PitInput {
    PitInput {
        basic_salary: Decimal::from(basic),
        housing_allowance: Decimal::from(basic / 2),
        transport_allowance: Decimal::from(basic / 10),
        pension: Decimal::from(basic / 12),
        capital_gains: Decimal::from(250_000),
        ..PitInput::default()
    }
}

/// Benchmark: Bracket integration across the income range.
fn bench_progressive_tax(c: &mut Criterion) {
    let rules = TaxRules::builtin();
    let mut group = c.benchmark_group("progressive_tax");

    for amount in [500_000i64, 5_000_000, 50_000_000] {
        let amount = Decimal::from(amount);
        for regime in Regime::ALL {
            let brackets = &rules.for_regime(regime).pit.brackets;
            group.bench_with_input(
                BenchmarkId::new(regime.label(), amount),
                &amount,
                |b, amount| b.iter(|| compute_progressive_tax(black_box(*amount), brackets)),
            );
        }
    }

    group.finish();
}

/// Benchmark: One PIT calculation under one regime.
fn bench_single_pit(c: &mut Criterion) {
    let rules = TaxRules::builtin();
    let input = salary(6_000_000);

    c.bench_function("single_pit_new", |b| {
        b.iter(|| calculate_pit(black_box(&input), rules.for_regime(Regime::New)))
    });
}

/// Benchmark: Full comparison for both tax types.
fn bench_comparison(c: &mut Criterion) {
    let rules = TaxRules::builtin();
    let pit = TaxInput::Pit(salary(6_000_000));
    let cit = TaxInput::Cit(CitInput {
        turnover: Decimal::from(80_000_000),
        profit: Decimal::from(10_000_000),
    });

    let mut group = c.benchmark_group("comparison");
    group.bench_function("pit", |b| b.iter(|| compare_regimes(black_box(&pit), &rules)));
    group.bench_function("cit", |b| b.iter(|| compare_regimes(black_box(&cit), &rules)));
    group.finish();
}

/// Benchmark: POST /calculate through the router.
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(ConfigLoader::builtin()));
    let request = CalculationRequest::from_input(&TaxInput::Pit(salary(6_000_000)));
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("http_calculate_pit", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 1000 comparisons with varied salaries.
fn bench_batch_1000(c: &mut Criterion) {
    let rules = TaxRules::builtin();
    let inputs: Vec<TaxInput> = (0..1000i64)
        .map(|i| {
            if i % 4 == 0 {
                TaxInput::Cit(CitInput {
                    turnover: Decimal::from(i * 250_000),
                    profit: Decimal::from(i * 25_000),
                })
            } else {
                TaxInput::Pit(salary(i * 50_000))
            }
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(inputs.len() as u64));

    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            let results: Vec<_> = inputs
                .iter()
                .map(|input| compare_regimes(input, &rules))
                .collect();
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_progressive_tax,
    bench_single_pit,
    bench_comparison,
    bench_http_round_trip,
    bench_batch_1000,
);
criterion_main!(benches);
