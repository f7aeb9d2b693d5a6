//! Cosine benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 1M elements)
//! - Chunk size of the parallel pass
//! - Labeled collections
//! - Dynamic value dispatch
//!
//! For serial execution, use `FASTCOSINE_MODE=serial cargo bench`.
//! For parallel execution, use `FASTCOSINE_MODE=parallel cargo bench` (default).

#![allow(non_snake_case)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastCosine::internals::engine::executor::{element_pass_parallel, element_pass_sequential};
use fastCosine::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::f64::consts::PI;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTCOSINE_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniform angles over several periods.
fn generate_angles(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(-8.0 * PI, 8.0 * PI).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Large-magnitude angles, which are slower to range-reduce.
fn generate_large_angles(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1e6).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Labeled angles with keys `k0`, `k1`, ...
fn generate_labeled(size: usize, seed: u64) -> LabeledMap<f64> {
    generate_angles(size, seed)
        .into_iter()
        .enumerate()
        .map(|(i, x)| (format!("k{i}"), x))
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000, 1_000_000] {
        let x = generate_angles(size, 42);
        let model = Cosine::<f64>::new()
            .adapter(Array)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("array", size), &x, |b, x| {
            b.iter(|| model.evaluate(black_box(x)).unwrap())
        });
    }
    group.finish();
}

fn bench_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("element_pass");
    group.sample_size(50);

    let size = 1_000_000;
    let x = generate_large_angles(size, 7);
    let mut out = vec![0.0; size];
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| element_pass_sequential(black_box(&x), &mut out, 1024))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| element_pass_parallel(black_box(&x), &mut out, 1024))
    });
    group.finish();
}

fn bench_chunk_size(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("chunk_size_{}", mode_name));
    group.sample_size(50);

    let x = generate_angles(500_000, 42);

    for chunk in [64, 256, 1024, 4096, 16384] {
        let model = Cosine::<f64>::new()
            .chunk_size(chunk)
            .adapter(Array)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("array", chunk), &chunk, |b, _| {
            b.iter(|| model.evaluate(black_box(&x)).unwrap())
        });
    }
    group.finish();
}

fn bench_labeled(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("labeled_{}", mode_name));
    group.sample_size(30);

    for size in [100, 10_000, 100_000] {
        let input = generate_labeled(size, 42);
        let model = Cosine::<f64>::new()
            .adapter(Labeled)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("btreemap", size), &input, |b, input| {
            b.iter(|| model.evaluate(black_box(input)))
        });
    }
    group.finish();
}

fn bench_dynamic(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic");
    group.sample_size(50);

    let size = 10_000;
    let value = Value::from(generate_angles(size, 42));
    let model = Cosine::<f64>::new().adapter(Dynamic).build().unwrap();

    group.throughput(Throughput::Elements(size as u64));
    group.bench_function("evaluate_value", |b| {
        b.iter(|| model.evaluate_value(black_box(&value)).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_passes,
    bench_chunk_size,
    bench_labeled,
    bench_dynamic
);
criterion_main!(benches);
