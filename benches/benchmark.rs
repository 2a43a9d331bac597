//! Benchmarks for the chaos image cipher.
//!
//! Measures keystream construction, single-grid encrypt/decrypt
//! throughput, and encrypt scaling across image sizes.

use chaos_image_crypt::{correlate, ChaosImageCipher, KeystreamBuilder, PixelGrid, SeedSet};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Side length of the square grid used by the fixed-size benchmarks.
const BENCH_SIDE: usize = 256;

/// Builds a square grid with a smooth gradient in every channel.
fn gradient(side: usize) -> PixelGrid {
    let pixels = (0..side * side)
        .map(|i| {
            let (r, c) = (i / side, i % side);
            [(r + c) as u8, (r * 2 + c) as u8, (r + c * 2) as u8]
        })
        .collect();
    PixelGrid::new(side, side, pixels).unwrap()
}

/// Benchmarks `KeystreamBuilder::build()` for a 1024-byte keystream.
fn bench_keystream_build(c: &mut Criterion) {
    let builder = KeystreamBuilder::new(SeedSet::default());
    c.bench_function("keystream_build_1024", |b| {
        b.iter(|| builder.build(black_box(1024)).unwrap());
    });
}

/// Benchmarks `encrypt()` on a 256×256 RGB grid.
fn bench_encrypt(c: &mut Criterion) {
    let grid = gradient(BENCH_SIDE);
    let cipher = ChaosImageCipher::from_seeds(SeedSet::default(), BENCH_SIDE).unwrap();

    let mut group = c.benchmark_group("encrypt_grid");
    group.throughput(Throughput::Bytes((BENCH_SIDE * BENCH_SIDE * 3) as u64));
    group.bench_function("256x256", |b| {
        b.iter(|| cipher.encrypt(black_box(&grid)).unwrap());
    });
    group.finish();
}

/// Benchmarks `decrypt()` on a 256×256 RGB grid.
fn bench_decrypt(c: &mut Criterion) {
    let grid = gradient(BENCH_SIDE);
    let cipher = ChaosImageCipher::from_seeds(SeedSet::default(), BENCH_SIDE).unwrap();
    let encrypted = cipher.encrypt(&grid).unwrap();

    let mut group = c.benchmark_group("decrypt_grid");
    group.throughput(Throughput::Bytes((BENCH_SIDE * BENCH_SIDE * 3) as u64));
    group.bench_function("256x256", |b| {
        b.iter(|| cipher.decrypt(black_box(&encrypted)).unwrap());
    });
    group.finish();
}

/// Benchmarks `encrypt()` across square grid sizes.
fn bench_encrypt_scaling(c: &mut Criterion) {
    let sides: &[usize] = &[64, 256, 1024];

    let mut group = c.benchmark_group("encrypt_scaling");
    for &side in sides {
        let grid = gradient(side);
        let cipher = ChaosImageCipher::from_seeds(SeedSet::default(), side).unwrap();
        group.throughput(Throughput::Bytes((side * side * 3) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| cipher.encrypt(black_box(&grid)).unwrap());
        });
    }
    group.finish();
}

/// Benchmarks `correlate()` on a 256×256 RGB grid.
fn bench_correlate(c: &mut Criterion) {
    let grid = gradient(BENCH_SIDE);
    c.bench_function("correlate_256x256", |b| {
        b.iter(|| correlate(black_box(&grid)));
    });
}

criterion_group!(
    benches,
    bench_keystream_build,
    bench_encrypt,
    bench_decrypt,
    bench_encrypt_scaling,
    bench_correlate,
);
criterion_main!(benches);
