//! Error types for the signal lab

use std::path::PathBuf;

/// Errors surfaced by recording and export.
///
/// Statistics on an empty buffer are not an error; see
/// [`compute_stats`](crate::dsp::compute_stats).
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    /// No default input device is present
    #[error("no audio input device available")]
    DeviceUnavailable,

    /// The device refused the requested stream configuration
    #[error("failed to open input stream: {0}")]
    Stream(#[from] cpal::BuildStreamError),

    /// The stream was built but could not be started
    #[error("failed to start input stream: {0}")]
    Play(#[from] cpal::PlayStreamError),

    /// `start` was called while a session is active
    #[error("already recording")]
    AlreadyRecording,

    /// `stop` was called with no active session
    #[error("not recording")]
    NotRecording,

    /// Writing the WAV file failed
    #[error("export to {} failed: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    /// Reading a WAV file back failed
    #[error("failed to read {}: {source}", .path.display())]
    Import {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    /// The WAV file is readable but not a mono file
    #[error("unsupported WAV layout: {channels} channels")]
    UnsupportedWav { channels: u16 },
}
