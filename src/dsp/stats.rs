#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Summary statistics of a signal buffer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    /// Population variance (divides by N)
    pub variance: f64,
    /// Mean square
    pub power: f64,
}

impl Stats {
    /// Labelled values in display order.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("Max", self.max),
            ("Min", self.min),
            ("Mean", self.mean),
            ("Variance", self.variance),
            ("Power", self.power),
        ]
    }
}

/// Compute [`Stats`] in a single pass, or `None` for an empty buffer.
///
/// Accumulates in `f64` and uses Welford's update for the mean and variance.
pub fn compute_stats(samples: &[f32]) -> Option<Stats> {
    if samples.is_empty() {
        return None;
    }

    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    let mut mean = 0.0f64;
    let mut m2 = 0.0f64;
    let mut sum_sq = 0.0f64;

    for (i, &s) in samples.iter().enumerate() {
        let x = s as f64;
        max = max.max(x);
        min = min.min(x);
        sum_sq += x * x;

        let delta = x - mean;
        mean += delta / (i + 1) as f64;
        m2 += delta * (x - mean);
    }

    let n = samples.len() as f64;
    Some(Stats {
        max,
        min,
        mean,
        variance: m2 / n,
        power: sum_sq / n,
    })
}
