//! Signal synthesis and analysis.
//!
//! Both halves are pure functions over plain sample buffers: the generator
//! fills a fresh `Vec<f32>` for one window of time and the statistics reducer
//! summarises any slice. Neither touches the audio device, so the UI and the
//! tests can call them directly.

/// Polyharmonic, AM-noise and Gaussian pulse test signals.
pub mod generator;
/// Max/min/mean/variance/power reduction.
pub mod stats;

pub use generator::{generate, window_len, Params, SignalKind};
pub use stats::{compute_stats, Stats};
