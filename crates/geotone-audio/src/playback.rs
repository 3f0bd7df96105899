use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{BufferSize, Device, Host, SampleRate, Stream, StreamConfig};

use crate::error::PlaybackError;

/// Format of an interleaved f32 buffer handed to [`PlaybackContext::play`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamFormat {
    pub sample_rate_hz: u32,
    pub channels: u16,
}

/// Owns the output host and device for the lifetime of the application.
///
/// Constructed once and passed by reference wherever playback is needed, so
/// there is no process-wide mutable engine state. Playing a new buffer
/// replaces (and thereby stops) any stream still draining a previous one.
pub struct PlaybackContext {
    #[allow(dead_code)]
    host: Host,
    device: Device,
    stream: Option<Stream>,
}

impl PlaybackContext {
    pub fn new() -> Result<Self, PlaybackError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(PlaybackError::DeviceNotFound)?;
        if let Ok(name) = device.name() {
            tracing::info!(device = %name, "opened output device");
        }
        Ok(Self {
            host,
            device,
            stream: None,
        })
    }

    /// Schedule an interleaved buffer for playback and return immediately.
    ///
    /// The stream keeps running after the buffer drains, emitting silence;
    /// an empty buffer is a no-op. Errors during playback are logged by the
    /// stream's error callback and not observed by the caller.
    pub fn play(&mut self, buffer: Vec<f32>, format: StreamFormat) -> Result<(), PlaybackError> {
        if buffer.is_empty() {
            tracing::debug!("empty buffer, nothing to play");
            return Ok(());
        }

        let config = StreamConfig {
            channels: format.channels,
            sample_rate: SampleRate(format.sample_rate_hz),
            buffer_size: BufferSize::Default,
        };

        let source = Arc::new(buffer);
        let position = Arc::new(AtomicUsize::new(0));
        let stream = self.device.build_output_stream(
            &config,
            {
                let source = source.clone();
                let position = position.clone();
                move |data: &mut [f32], _| {
                    fill_output(data, &source, &position);
                }
            },
            |err| tracing::error!("output stream error: {err}"),
            None,
        )?;
        stream.play()?;

        tracing::info!(
            samples = source.len(),
            rate = format.sample_rate_hz,
            channels = format.channels,
            "playback started"
        );

        // dropping the previous stream stops it
        self.stream = Some(stream);
        Ok(())
    }

    /// Stop whatever is currently playing.
    pub fn stop(&mut self) {
        self.stream = None;
    }
}

/// Copy the next run of `source` into `data`, zero-filling past the end.
fn fill_output(data: &mut [f32], source: &[f32], position: &AtomicUsize) {
    let start = position.fetch_add(data.len(), Ordering::Relaxed).min(source.len());
    let end = (start + data.len()).min(source.len());
    let available = end - start;

    data[..available].copy_from_slice(&source[start..end]);
    data[available..].fill(0.0);
}
