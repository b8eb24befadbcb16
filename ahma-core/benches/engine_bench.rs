//! Criterion benchmarks for engine hot paths.
//!
//! Benchmarks:
//! 1. Synthetic series generation
//! 2. Hull smoothing pass (the O(N·period) core)
//! 3. Full dataset assembly (hull + volatility + blend + bias)

use ahma_core::config::EngineParams;
use ahma_core::dataset::compute_ahma_dataset;
use ahma_core::indicators::hull::hull_series;
use ahma_core::series::generate_price_series_at;
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_price_series");
    for &length in &[220usize, 1_000, 5_000] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            b.iter(|| generate_price_series_at(black_box(length), black_box(35.0), anchor()));
        });
    }
    group.finish();
}

fn bench_hull(c: &mut Criterion) {
    let closes: Vec<f64> = generate_price_series_at(1_000, 35.0, anchor())
        .iter()
        .map(|p| p.close)
        .collect();

    let mut group = c.benchmark_group("hull_series");
    for &period in &[14.0, 55.0, 120.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(period as usize),
            &period,
            |b, &period| {
                b.iter(|| hull_series(black_box(&closes), black_box(period)));
            },
        );
    }
    group.finish();
}

fn bench_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_ahma_dataset");
    for &length in &[220usize, 1_000] {
        let series = generate_price_series_at(length, 35.0, anchor());
        let params = EngineParams::default();
        group.bench_with_input(BenchmarkId::from_parameter(length), &series, |b, series| {
            b.iter(|| compute_ahma_dataset(black_box(series), black_box(&params)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_hull, bench_dataset);
criterion_main!(benches);
