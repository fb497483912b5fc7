//! Peer Comparison Benchmark
//!
//! FarmHash64 against other fast non-cryptographic fingerprints
//! (XXH3, gxhash) at matched sizes.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn bench_peers(c: &mut Criterion) {
    let sizes = [
        (16, "16B"),
        (64, "64B"),
        (KB, "1KB"),
        (64 * KB, "64KB"),
        (MB, "1MB"),
    ];

    for (size, name) in sizes {
        let mut group = c.benchmark_group(format!("Peers-{name}"));
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function("farmhash64", |b| {
            b.iter(|| farmhash64::hash64(black_box(&input)))
        });
        group.bench_function("xxh3", |b| {
            b.iter(|| xxhash_rust::xxh3::xxh3_64(black_box(&input)))
        });
        group.bench_function("gxhash", |b| {
            b.iter(|| gxhash::gxhash64(black_box(&input), 0))
        });

        group.finish();
    }
}

criterion_group!(benches, bench_peers);
criterion_main!(benches);
