//! Benchmarks for the cipher and normalizer hot paths.
//!
//! Measures encrypt/decrypt throughput over a paragraph-sized message and
//! normalization cost on a whitespace-heavy guess.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use cipherplay_core::{decrypt, encrypt, normalize, Shift};

const BENCH_MESSAGE: &str = "Fortune favors the bold. The eagle has landed, \
all roads lead to Rome; carpe diem, seize the day! Knowledge is power and \
the die is cast; beware the ides of March.";

const BENCH_GUESS: &str = "  Fortune   FAVORS\tthe   bold.  The EAGLE has \
landed,  all roads   lead to Rome  ";

fn bench_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt");
    group.throughput(Throughput::Bytes(BENCH_MESSAGE.len() as u64));
    group.bench_function("shift_13", |b| {
        b.iter(|| encrypt(black_box(BENCH_MESSAGE), Shift::new(13)));
    });
    group.finish();
}

fn bench_decrypt(c: &mut Criterion) {
    let ciphertext = encrypt(BENCH_MESSAGE, Shift::new(13));
    let mut group = c.benchmark_group("decrypt");
    group.throughput(Throughput::Bytes(ciphertext.len() as u64));
    group.bench_function("shift_13", |b| {
        b.iter(|| decrypt(black_box(&ciphertext), Shift::new(13)));
    });
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Bytes(BENCH_GUESS.len() as u64));
    group.bench_function("messy_guess", |b| {
        b.iter(|| normalize(black_box(BENCH_GUESS)));
    });
    group.finish();
}

criterion_group!(benches, bench_encrypt, bench_decrypt, bench_normalize);
criterion_main!(benches);
