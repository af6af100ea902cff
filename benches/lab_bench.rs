//! Benchmarks for signal generation, statistics and plot decimation.
//!
//! Run with: cargo bench
//!
//! Every user action regenerates a full window and recomputes statistics
//! synchronously on the UI thread, and the plot is rebuilt every frame, so
//! all three should finish comfortably inside one 60 fps frame (16.7ms).
//!
//! Benchmark groups:
//!   - dsp/generate   One window per signal kind
//!   - dsp/stats      Single-pass reduction
//!   - dsp/plot       Decimated waveform segments

use criterion::{criterion_group, criterion_main};

mod dsp;

/// One-second windows at common rates: (sample rate, samples).
pub const WINDOW_LENS: &[(u32, usize)] = &[(8_000, 8_000), (44_100, 44_100), (48_000, 48_000)];

criterion_group!(
    benches,
    dsp::bench_generate,
    dsp::bench_stats,
    dsp::bench_plot,
);
criterion_main!(benches);
