//! Criterion benchmarks for Sobol sequence generation.
//!
//! Measures the two access modes separately: per-point cost of the
//! stateful producer and end-to-end cost of bulk matrix generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gsa_directions::JoeKuoD6;
use gsa_sampling::sobol::{SobolConfig, SobolSequence};

fn config(n_samples: usize, n_dimensions: usize) -> SobolConfig {
    SobolConfig::builder()
        .n_samples(n_samples)
        .n_dimensions(n_dimensions)
        .build()
        .expect("valid benchmark configuration")
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for n_dimensions in [2, 8, 21] {
        group.bench_with_input(
            BenchmarkId::from_parameter(n_dimensions),
            &n_dimensions,
            |b, &n_dimensions| {
                let config = config(1 << 16, n_dimensions);
                b.iter(|| SobolSequence::new(black_box(config), &JoeKuoD6).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_sequential_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_advance");

    for n_dimensions in [2, 8, 21] {
        let n_samples = 1 << 14;
        group.throughput(Throughput::Elements(n_samples as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_dimensions),
            &n_dimensions,
            |b, &n_dimensions| {
                b.iter(|| {
                    let mut seq =
                        SobolSequence::new(config(n_samples, n_dimensions), &JoeKuoD6).unwrap();
                    for _ in 0..n_samples {
                        black_box(seq.advance().unwrap());
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_bulk_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_generation");

    for n_samples in [1 << 10, 1 << 14] {
        let seq = SobolSequence::new(config(n_samples, 8), &JoeKuoD6).unwrap();
        group.throughput(Throughput::Elements(n_samples as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            &seq,
            |b, seq| {
                b.iter(|| black_box(seq.sample_all()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_sequential_advance,
    bench_bulk_generation
);
criterion_main!(benches);
