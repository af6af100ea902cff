//! Lab configuration
//!
//! Everything here is fixed for the lifetime of the process and set in code
//! by the binary; there are no flags or config files.

use std::path::PathBuf;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::Params;
use crate::DEFAULT_SAMPLE_RATE;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LabConfig {
    /// Sample rate for generation, capture and export (Hz)
    pub sample_rate: u32,
    /// Length of a generated window (seconds)
    pub duration: f64,
    /// Where "Save WAV" writes; overwritten every time
    pub output_path: PathBuf,
    /// Parameters at startup
    pub params: Params,
    /// Amplitude change per Up/Down key event
    pub amplitude_step: f64,
    /// Frequency change per Left/Right key event
    pub frequency_step: f64,
    /// Target UI frame rate
    pub frame_rate: u32,
    /// Capacity of the capture queue, in driver chunks
    pub capture_queue_chunks: usize,
    /// Seed for the noise generator. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl LabConfig {
    pub fn new() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration: 1.0,
            output_path: PathBuf::from("output.wav"),
            params: Params::default(),
            amplitude_step: 0.01,
            frequency_step: 0.5,
            frame_rate: 60,
            capture_queue_chunks: 1024,
            seed: None,
        }
    }

    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn frame_rate(mut self, fps: u32) -> Self {
        self.frame_rate = fps;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Time budget of one UI frame.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }
}

impl Default for LabConfig {
    fn default() -> Self {
        Self::new()
    }
}
