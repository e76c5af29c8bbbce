//! Digest throughput benchmarks

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use omnihash_core::{AlgorithmRegistry, DigestEngine};
use std::hint::black_box;

fn bench_compute_all(c: &mut Criterion) {
    let engine = DigestEngine::new();
    let data = vec![0xa5u8; 1024 * 1024];

    let mut group = c.benchmark_group("compute_all");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("1MiB_all_algorithms", |b| {
        b.iter(|| engine.compute_all(black_box(&data), false).unwrap());
    });
    group.finish();
}

fn bench_single_algorithms(c: &mut Criterion) {
    let registry = AlgorithmRegistry::global();
    let data = vec![0xa5u8; 1024 * 1024];

    let mut group = c.benchmark_group("single_algorithm");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for entry in registry.entries() {
        group.bench_function(entry.algorithm().to_string(), |b| {
            b.iter(|| entry.compute_bytes(black_box(&data)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_all, bench_single_algorithms);
criterion_main!(benches);
