//! Benchmarks for waveform decimation into the plot surface.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use signal_lab::plot::{waveform_segments, PlotArea, AMPLITUDE_SCALE};

use crate::WINDOW_LENS;

pub fn bench_plot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/plot");
    let area = PlotArea::STANDARD;

    // Recordings can run far longer than a generated window
    let lens = WINDOW_LENS.iter().map(|&(_, len)| len).chain([480_000]);

    for len in lens {
        let buffer: Vec<f32> = (0..len).map(|i| (i as f32 * 0.003).sin() * 2.0).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &buffer, |b, buffer| {
            b.iter(|| waveform_segments(black_box(buffer), &area, AMPLITUDE_SCALE))
        });
    }

    group.finish();
}
