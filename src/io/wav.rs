//! WAV export

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

use crate::error::LabError;

/// Mono 32-bit float at `sample_rate`.
pub fn mono_float_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    }
}

/// Write `samples` to `path` as a mono float WAV, replacing any existing file.
///
/// Samples are written as-is: nothing is normalized or clipped, so values
/// outside [-1, 1] survive in the file and are left to the player.
pub fn save_wav(samples: &[f32], sample_rate: u32, path: &Path) -> Result<(), LabError> {
    let export_err = |source| LabError::Export {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WavWriter::create(path, mono_float_spec(sample_rate)).map_err(export_err)?;
    for &s in samples {
        writer.write_sample(s).map_err(export_err)?;
    }
    writer.finalize().map_err(export_err)?;

    tracing::info!(path = %path.display(), frames = samples.len(), sample_rate, "saved wav");
    Ok(())
}

/// Read a mono WAV back as `f32` samples and its sample rate.
///
/// Integer files are scaled to [-1, 1).
pub fn load_wav(path: &Path) -> Result<(Vec<f32>, u32), LabError> {
    let import_err = |source| LabError::Import {
        path: path.to_path_buf(),
        source,
    };

    let reader = WavReader::open(path).map_err(import_err)?;
    let spec = reader.spec();
    if spec.channels != 1 {
        return Err(LabError::UnsupportedWav {
            channels: spec.channels,
        });
    }

    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(import_err)?,
        SampleFormat::Int => {
            let scale = 1.0 / (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<Result<Vec<_>, _>>()
                .map_err(import_err)?
        }
    };

    Ok((samples, spec.sample_rate))
}
