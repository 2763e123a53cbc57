//! Huffman codec benchmarks.
//!
//! Covers session construction (frequency scan, tree merge, table
//! derivation), encoding, and decoding across input sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vapula_huffman::HuffmanCodec;

/// Letter soup with an English-like skew toward the front of the pool.
fn generate_text(len: usize) -> Vec<u8> {
    const POOL: &[u8] = b"etaoin shrdlu cmfwyp vbgkjq xz.\n";
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| {
            let a = rng.gen_range(0..POOL.len());
            let b = rng.gen_range(0..POOL.len());
            POOL[a.min(b)]
        })
        .collect()
}

fn bench_session_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_build");
    for size in [1 << 10, 1 << 14, 1 << 17] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| HuffmanCodec::from_input(black_box(text)).unwrap())
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for size in [1 << 10, 1 << 14, 1 << 17] {
        let text = generate_text(size);
        let codec = HuffmanCodec::from_input(&text).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| codec.encode(black_box(text)).unwrap())
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for size in [1 << 10, 1 << 14, 1 << 17] {
        let text = generate_text(size);
        let codec = HuffmanCodec::from_input(&text).unwrap();
        let encoded = codec.encode(&text).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| codec.decode(black_box(encoded)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_session_build, bench_encode, bench_decode);
criterion_main!(benches);
