//! Benchmarks for one-window signal generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use signal_lab::dsp::{generate, Params, SignalKind};

use crate::WINDOW_LENS;

pub fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/generate");
    let params = Params::default();
    let mut rng = StdRng::seed_from_u64(0);

    for &(rate, len) in WINDOW_LENS {
        for kind in SignalKind::ALL {
            // Polyharmonic: two sines + one uniform draw per sample
            // AM Noise: one sine + one uniform draw
            // Pulse: one exp, no randomness
            group.bench_with_input(BenchmarkId::new(kind.label(), len), &rate, |b, &rate| {
                b.iter(|| generate(black_box(kind), black_box(&params), rate, 1.0, &mut rng))
            });
        }
    }

    group.finish();
}
