//! A full lab session driven through the public API with a scripted
//! microphone.

use signal_lab::{
    dsp::{Params, SignalKind},
    io::{
        capture::{ChunkSink, InputStream},
        load_wav, InputBackend,
    },
    lab::RecordEvent,
    LabConfig, LabError, SignalLab,
};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

/// Stands in for the audio driver: the test pushes chunks whenever it likes.
#[derive(Clone, Default)]
struct ScriptedMic {
    sink: Arc<Mutex<Option<ChunkSink>>>,
    unplugged: bool,
}

impl ScriptedMic {
    fn deliver(&self, chunk: &[f32]) {
        if let Some(sink) = self.sink.lock().unwrap().as_mut() {
            sink.push(chunk);
        }
    }
}

struct ScriptedStream(Arc<Mutex<Option<ChunkSink>>>);

impl InputStream for ScriptedStream {
    fn close(self: Box<Self>) {
        self.0.lock().unwrap().take();
    }
}

impl InputBackend for ScriptedMic {
    fn open(&mut self, _sample_rate: u32, sink: ChunkSink) -> Result<Box<dyn InputStream>, LabError> {
        if self.unplugged {
            return Err(LabError::DeviceUnavailable);
        }
        *self.sink.lock().unwrap() = Some(sink);
        Ok(Box::new(ScriptedStream(Arc::clone(&self.sink))))
    }
}

#[test]
fn generate_record_and_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.wav");
    let mic = ScriptedMic::default();
    let config = LabConfig::new()
        .output_path(&path)
        .params(Params::new(0.5, 10.0, 0.0))
        .seed(99);
    let mut lab = SignalLab::with_backend(config, mic.clone());

    lab.generate(SignalKind::Pulse);
    assert_eq!(lab.signal().len(), 8_000);
    assert!((lab.stats().unwrap().max - 0.5).abs() < 1e-6);

    assert_eq!(lab.toggle_record().unwrap(), RecordEvent::Started);
    let chunks: Vec<Vec<f32>> = (0..10).map(|i| vec![i as f32 * 0.1; 64 + i]).collect();
    for (i, chunk) in chunks.iter().enumerate() {
        mic.deliver(chunk);
        if i % 3 == 0 {
            lab.poll();
        }
    }
    let expected_len: usize = chunks.iter().map(Vec::len).sum();
    assert_eq!(
        lab.toggle_record().unwrap(),
        RecordEvent::Stopped {
            frames: expected_len
        }
    );

    assert_eq!(lab.signal(), chunks.concat().as_slice());
    let stats = lab.stats().unwrap();
    assert!((stats.max - 0.9).abs() < 1e-6);
    assert_eq!(stats.min, 0.0);

    lab.save().unwrap();
    let (read, rate) = load_wav(&path).unwrap();
    assert_eq!(rate, 8_000);
    assert_eq!(read.len(), expected_len);
}

#[test]
fn unplugged_microphone_is_recoverable() {
    let mic = ScriptedMic {
        unplugged: true,
        ..ScriptedMic::default()
    };
    let mut lab = SignalLab::with_backend(LabConfig::new().seed(1), mic);
    lab.generate(SignalKind::Polyharmonic);
    let before = lab.signal().to_vec();

    assert!(matches!(
        lab.toggle_record(),
        Err(LabError::DeviceUnavailable)
    ));
    assert!(!lab.is_recording());
    assert_eq!(lab.signal(), before.as_slice());

    // still usable afterwards
    lab.generate(SignalKind::AmNoise);
    assert_eq!(lab.signal().len(), 8_000);
}
