pub mod config;
pub mod dsp; // Signal generation and statistics
pub mod error;
pub mod io; // Microphone capture and WAV export
pub mod lab; // Application state shared by every handler
pub mod plot; // Waveform screen mapping

pub use config::LabConfig;
pub use error::LabError;
pub use lab::SignalLab;

pub const DEFAULT_SAMPLE_RATE: u32 = 8_000;
