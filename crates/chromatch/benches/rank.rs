use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use chromatch::{rank, tailwind, NearestColorRanker, Rgb};

pub fn run_benchmarks(c: &mut Criterion) {
    let palette = tailwind::palette();
    let ranker = NearestColorRanker::new(palette);
    let red = Rgb::new(0xff, 0, 0).to_lab();
    let blue = Rgb::new(0x3b, 0x82, 0xf6).to_lab();

    let mut group = c.benchmark_group("rank");

    group.bench_function("delta-e-2000", |b| {
        b.iter(|| black_box(&red).delta_e(black_box(&blue)))
    });

    group.bench_function("to-lab", |b| {
        b.iter(|| black_box(Rgb::new(0x12, 0x34, 0x56)).to_lab())
    });

    group.bench_function("tailwind-top-5", |b| {
        b.iter(|| rank(black_box("#ff0000"), palette, 5))
    });

    group.bench_function("tailwind-matches", |b| {
        b.iter(|| ranker.matches(black_box("#123456")))
    });

    group.bench_function("invalid-query", |b| {
        b.iter(|| rank(black_box("#12345"), palette, 5))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
