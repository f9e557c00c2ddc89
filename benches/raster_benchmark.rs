#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmarks for the line and circle rasterizers.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pixeltrace::prelude::*;
use pixeltrace::raster;

fn line_rasterizer_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_rasterizers");

    for length in [10, 100, 1_000, 10_000] {
        let segment = Segment::new(0, 0, length, length / 2);

        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), length),
                &segment,
                |b, &segment| {
                    b.iter(|| rasterize_line(black_box(algorithm), black_box(segment)));
                },
            );
        }
    }

    group.finish();
}

fn circle_rasterizer_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_rasterizer");

    for radius in [8, 64, 512, 4_096] {
        let circle = Circle::new(0, 0, radius);

        group.bench_with_input(BenchmarkId::from_parameter(radius), &circle, |b, &circle| {
            b.iter(|| raster::bresenham_circle(black_box(circle)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    line_rasterizer_benchmark,
    circle_rasterizer_benchmark
);
criterion_main!(benches);
