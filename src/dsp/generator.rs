use rand::Rng;
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Test Signals
============

Every generated signal covers one fixed window of `duration` seconds sampled
at `sample_rate`. The time axis is

    n   = floor(sample_rate * duration)
    t_i = i * duration / n              for i in 0..n

so it starts at 0 and stops one sample short of `duration`. Frequencies are
therefore "cycles per second of window", the same thing as Hz when the window
is one second long.

POLYHARMONIC
    A fundamental plus its second harmonic at half the amplitude, with
    additive white noise:

        amp * sin(2πft) + 0.5 * amp * sin(4πft) + noise * U(-1, 1)

    With noise = 0 the peak is not `1.5 * amp`: the two sines never peak
    together. The maximum of sin θ + 0.5 sin 2θ sits at θ = 60°, giving
    ≈ 1.299 * amp.

AM NOISE
    White noise whose level is swept by a slow sine carrier:

        carrier = 1 + 0.5 * sin(2πft)           (range 0.5 .. 1.5)
        out     = amp * carrier * U(-1, 1) * noise

    Amplitude and the noise setting multiply together, so with the defaults
    (amp 0.5, noise 0.1) the envelope never exceeds 0.075.

PULSE
    A single Gaussian bump centred in the window:

        μ   = duration / 2
        σ   = 0.05 * duration
        out = amp * exp(-0.5 * ((t - μ) / σ)²)

    The noise setting is ignored.

Negative amplitudes invert the signal and negative frequencies flip the phase;
neither is rejected.
*/

/// The three signal shapes the lab can synthesize.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Polyharmonic,
    AmNoise,
    Pulse,
}

impl SignalKind {
    /// All kinds, in button order.
    pub const ALL: [SignalKind; 3] = [
        SignalKind::Polyharmonic,
        SignalKind::AmNoise,
        SignalKind::Pulse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SignalKind::Polyharmonic => "Polyharmonic",
            SignalKind::AmNoise => "AM Noise",
            SignalKind::Pulse => "Pulse",
        }
    }
}

/// User-adjustable generator parameters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Peak level of the clean signal
    pub amplitude: f64,
    /// Cycles per second of window
    pub frequency: f64,
    /// Scale of the uniform noise term
    pub noise: f64,
}

impl Params {
    pub fn new(amplitude: f64, frequency: f64, noise: f64) -> Self {
        Self {
            amplitude,
            frequency,
            noise,
        }
    }

    /// Noise-free copy, handy for deterministic shapes.
    pub fn without_noise(self) -> Self {
        Self { noise: 0.0, ..self }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new(0.5, 10.0, 0.1)
    }
}

/// Number of samples in a window of `duration` seconds.
pub fn window_len(sample_rate: u32, duration: f64) -> usize {
    let n = (sample_rate as f64 * duration).floor();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Synthesize one window of `kind`.
///
/// `rng` supplies the uniform draws for the noisy shapes; pass a seeded
/// generator for reproducible output.
pub fn generate<R: Rng + ?Sized>(
    kind: SignalKind,
    params: &Params,
    sample_rate: u32,
    duration: f64,
    rng: &mut R,
) -> Vec<f32> {
    let n = window_len(sample_rate, duration);
    if n == 0 {
        return Vec::new();
    }

    let dt = duration / n as f64;
    let Params {
        amplitude: amp,
        frequency: freq,
        noise,
    } = *params;

    match kind {
        SignalKind::Polyharmonic => (0..n)
            .map(|i| {
                let t = i as f64 * dt;
                let clean = amp * (2.0 * PI * freq * t).sin() + 0.5 * amp * (4.0 * PI * freq * t).sin();
                (clean + noise * rng.random_range(-1.0..1.0)) as f32
            })
            .collect(),
        SignalKind::AmNoise => (0..n)
            .map(|i| {
                let t = i as f64 * dt;
                let carrier = 1.0 + 0.5 * (2.0 * PI * freq * t).sin();
                (amp * carrier * rng.random_range(-1.0..1.0) * noise) as f32
            })
            .collect(),
        SignalKind::Pulse => {
            let mu = duration / 2.0;
            let sigma = 0.05 * duration;
            (0..n)
                .map(|i| {
                    let t = i as f64 * dt;
                    let z = (t - mu) / sigma;
                    (amp * (-0.5 * z * z).exp()) as f32
                })
                .collect()
        }
    }
}
