//! Benchmarks for the statistics reduction.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use signal_lab::dsp::compute_stats;

use crate::WINDOW_LENS;

pub fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/stats");

    for &(_, len) in WINDOW_LENS {
        let buffer: Vec<f32> = (0..len).map(|i| (i as f32 * 0.01).sin()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &buffer, |b, buffer| {
            b.iter(|| compute_stats(black_box(buffer)))
        });
    }

    group.finish();
}
