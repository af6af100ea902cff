//! Microphone capture
//!
//! The audio driver calls back on its own thread with small chunks of
//! samples. Each chunk is copied into a single-producer/single-consumer ring
//! (`rtrb`) without blocking; the UI thread drains the ring once per frame
//! through [`Recorder::poll`] and keeps the chunks in arrival order until
//! [`Recorder::stop`] glues them into one buffer.
//!
//! ```text
//!   driver thread                      UI thread
//!   ─────────────                      ─────────
//!   callback(&[f32]) ──push──▶ [ ring of Vec<f32> ] ──pop──▶ Session.chunks
//! ```

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer, PushError, RingBuffer};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use crate::error::LabError;

/// One block of mono samples as delivered by the driver.
pub type Chunk = Vec<f32>;

/// Producer half of the capture queue, handed to the driver callback.
pub struct ChunkSink {
    producer: Producer<Chunk>,
    dropped: Arc<AtomicUsize>,
}

impl ChunkSink {
    /// Copy `data` into the queue. Never blocks; drops the chunk if the
    /// queue is full.
    pub fn push(&mut self, data: &[f32]) {
        if let Err(PushError::Full(_)) = self.producer.push(data.to_vec()) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// A source of input streams.
pub trait InputBackend {
    /// Open a mono stream at `sample_rate` that feeds `sink` until closed.
    fn open(&mut self, sample_rate: u32, sink: ChunkSink) -> Result<Box<dyn InputStream>, LabError>;
}

/// A running input stream.
pub trait InputStream {
    /// Stop delivering chunks and release the device.
    fn close(self: Box<Self>);
}

/// Default system microphone through `cpal`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpalInput;

struct CpalStream(cpal::Stream);

impl InputStream for CpalStream {
    fn close(self: Box<Self>) {
        if let Err(err) = self.0.pause() {
            tracing::debug!("pausing input stream failed: {err}");
        }
    }
}

impl InputBackend for CpalInput {
    fn open(&mut self, sample_rate: u32, mut sink: ChunkSink) -> Result<Box<dyn InputStream>, LabError> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or(LabError::DeviceUnavailable)?;

        tracing::info!(
            device = %device.name().unwrap_or_else(|_| "unknown".to_string()),
            sample_rate,
            "opening input stream"
        );

        let config = cpal::StreamConfig {
            channels: 1,
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let stream = device.build_input_stream(
            &config,
            move |data: &[f32], _: &cpal::InputCallbackInfo| sink.push(data),
            |err| tracing::warn!("input stream error: {err}"),
            None,
        )?;
        stream.play()?;

        Ok(Box::new(CpalStream(stream)))
    }
}

/// Whether a recording session is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    Idle,
    Recording,
}

/// An active recording: the open stream plus everything captured so far.
struct Session {
    stream: Box<dyn InputStream>,
    rx: Consumer<Chunk>,
    chunks: Vec<Chunk>,
    frames: usize,
    dropped: Arc<AtomicUsize>,
}

impl Session {
    fn drain(&mut self) {
        while let Ok(chunk) = self.rx.pop() {
            self.frames += chunk.len();
            self.chunks.push(chunk);
        }
    }
}

/// Idle/Recording state machine over an [`InputBackend`].
pub struct Recorder<B: InputBackend = CpalInput> {
    backend: B,
    sample_rate: u32,
    queue_chunks: usize,
    session: Option<Session>,
}

impl<B: InputBackend> Recorder<B> {
    pub fn new(backend: B, sample_rate: u32, queue_chunks: usize) -> Self {
        Self {
            backend,
            sample_rate,
            queue_chunks: queue_chunks.max(1),
            session: None,
        }
    }

    pub fn state(&self) -> RecorderState {
        if self.session.is_some() {
            RecorderState::Recording
        } else {
            RecorderState::Idle
        }
    }

    pub fn is_recording(&self) -> bool {
        self.session.is_some()
    }

    /// Open the input stream and begin a session.
    ///
    /// On error the recorder stays idle.
    pub fn start(&mut self) -> Result<(), LabError> {
        if self.session.is_some() {
            return Err(LabError::AlreadyRecording);
        }

        let (producer, rx) = RingBuffer::<Chunk>::new(self.queue_chunks);
        let dropped = Arc::new(AtomicUsize::new(0));
        let sink = ChunkSink {
            producer,
            dropped: Arc::clone(&dropped),
        };
        let stream = self.backend.open(self.sample_rate, sink)?;

        self.session = Some(Session {
            stream,
            rx,
            chunks: Vec::new(),
            frames: 0,
            dropped,
        });
        Ok(())
    }

    /// Move queued chunks into the session. Call once per frame.
    ///
    /// Returns the number of frames captured so far (0 when idle).
    pub fn poll(&mut self) -> usize {
        match &mut self.session {
            Some(session) => {
                session.drain();
                session.frames
            }
            None => 0,
        }
    }

    /// Frames moved out of the queue so far.
    pub fn captured_frames(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.frames)
    }

    /// Chunks the driver delivered while the queue was full.
    pub fn dropped_chunks(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |s| s.dropped.load(Ordering::Relaxed))
    }

    /// Close the stream and return everything captured, in arrival order.
    ///
    /// Returns `Ok(None)` when the session captured no frames.
    pub fn stop(&mut self) -> Result<Option<Vec<f32>>, LabError> {
        let Session {
            stream,
            mut rx,
            mut chunks,
            mut frames,
            dropped,
        } = self.session.take().ok_or(LabError::NotRecording)?;
        stream.close();
        while let Ok(chunk) = rx.pop() {
            frames += chunk.len();
            chunks.push(chunk);
        }

        let dropped = dropped.load(Ordering::Relaxed);
        if dropped > 0 {
            tracing::warn!(dropped, "capture queue overflowed during recording");
        }

        if frames == 0 {
            return Ok(None);
        }
        Ok(Some(chunks.concat()))
    }
}
