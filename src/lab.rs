//! Application state
//!
//! `SignalLab` owns everything the UI reads and mutates: the current sample
//! buffer, its statistics, the generator parameters and the recorder. Every
//! handler takes it by `&mut`, and every operation that replaces the buffer
//! recomputes the statistics before returning.

use rand::{rngs::StdRng, SeedableRng};
use std::path::Path;

use crate::config::LabConfig;
use crate::dsp::{compute_stats, generate, window_len, Params, SignalKind, Stats};
use crate::error::LabError;
use crate::io::{save_wav, CpalInput, InputBackend, Recorder};

/// Outcome of the record toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordEvent {
    Started,
    /// Recording ended; `frames` is 0 when nothing was captured and the
    /// previous buffer was kept.
    Stopped { frames: usize },
}

pub struct SignalLab<B: InputBackend = CpalInput> {
    config: LabConfig,
    params: Params,
    signal: Vec<f32>,
    stats: Option<Stats>,
    recorder: Recorder<B>,
    rng: StdRng,
}

impl SignalLab<CpalInput> {
    /// Lab recording from the default microphone.
    pub fn new(config: LabConfig) -> Self {
        Self::with_backend(config, CpalInput)
    }
}

impl<B: InputBackend> SignalLab<B> {
    pub fn with_backend(config: LabConfig, backend: B) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let signal = vec![0.0; window_len(config.sample_rate, config.duration)];
        let stats = compute_stats(&signal);
        let recorder = Recorder::new(backend, config.sample_rate, config.capture_queue_chunks);

        Self {
            params: config.params,
            config,
            signal,
            stats,
            recorder,
            rng,
        }
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn signal(&self) -> &[f32] {
        &self.signal
    }

    /// Statistics of the current buffer; `None` while it is empty.
    pub fn stats(&self) -> Option<&Stats> {
        self.stats.as_ref()
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_recording()
    }

    pub fn captured_frames(&self) -> usize {
        self.recorder.captured_frames()
    }

    pub fn dropped_chunks(&self) -> usize {
        self.recorder.dropped_chunks()
    }

    /// Change amplitude by `steps` key presses (negative to decrease).
    pub fn nudge_amplitude(&mut self, steps: f64) {
        self.params.amplitude += steps * self.config.amplitude_step;
    }

    /// Change frequency by `steps` key presses (negative to decrease).
    pub fn nudge_frequency(&mut self, steps: f64) {
        self.params.frequency += steps * self.config.frequency_step;
    }

    /// Replace the buffer with a fresh window of `kind`.
    pub fn generate(&mut self, kind: SignalKind) {
        let signal = generate(
            kind,
            &self.params,
            self.config.sample_rate,
            self.config.duration,
            &mut self.rng,
        );
        tracing::info!(
            kind = kind.label(),
            amplitude = self.params.amplitude,
            frequency = self.params.frequency,
            noise = self.params.noise,
            "generated signal"
        );
        self.set_signal(signal);
    }

    /// Replace the buffer wholesale and refresh the statistics.
    pub fn set_signal(&mut self, samples: Vec<f32>) {
        self.signal = samples;
        self.stats = compute_stats(&self.signal);
    }

    pub fn start_recording(&mut self) -> Result<(), LabError> {
        self.recorder.start()?;
        tracing::info!("recording started");
        Ok(())
    }

    /// End the session. The buffer is replaced only if frames were captured.
    ///
    /// Returns the number of frames now in the buffer from this session.
    pub fn stop_recording(&mut self) -> Result<usize, LabError> {
        let frames = match self.recorder.stop()? {
            Some(samples) => {
                let frames = samples.len();
                self.set_signal(samples);
                frames
            }
            None => 0,
        };
        tracing::info!(frames, "recording stopped");
        Ok(frames)
    }

    /// Start when idle, stop when recording.
    pub fn toggle_record(&mut self) -> Result<RecordEvent, LabError> {
        if self.recorder.is_recording() {
            let frames = self.stop_recording()?;
            Ok(RecordEvent::Stopped { frames })
        } else {
            self.start_recording()?;
            Ok(RecordEvent::Started)
        }
    }

    /// Drain captured audio; call once per frame.
    pub fn poll(&mut self) -> usize {
        self.recorder.poll()
    }

    /// Write the buffer to the configured output path.
    pub fn save(&self) -> Result<&Path, LabError> {
        let path = self.config.output_path.as_path();
        save_wav(&self.signal, self.config.sample_rate, path)?;
        Ok(path)
    }
}
