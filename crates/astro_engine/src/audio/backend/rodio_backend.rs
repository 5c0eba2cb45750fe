//! Rodio audio backend implementation
//!
//! Uses the Rodio library for cross-platform audio playback. Each request
//! decodes the preloaded bytes into a fresh sink which is detached, so the
//! sound plays to completion without the caller holding anything.

use crate::audio::{AudioError, AudioOutput, SoundManager};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::io::Cursor;

/// Rodio-based audio backend
pub struct RodioBackend {
    /// Audio output stream (must be kept alive)
    _output_stream: OutputStream,
    /// Output stream handle for creating sinks
    stream_handle: OutputStreamHandle,
    /// Preloaded sounds
    sounds: SoundManager,
    /// Volume applied to every sink
    volume: f32,
}

impl RodioBackend {
    /// Open the default output device
    ///
    /// # Errors
    /// - `PlaybackFailed` if no output device can be opened
    pub fn new(sounds: SoundManager, volume: f32) -> Result<Self, AudioError> {
        let (output_stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to open output stream: {}", e)))?;
        log::info!("Rodio audio backend initialized with {} sounds", sounds.len());
        Ok(Self {
            _output_stream: output_stream,
            stream_handle,
            sounds,
            volume,
        })
    }
}

impl AudioOutput for RodioBackend {
    fn play(&mut self, sound: &str) -> Result<(), AudioError> {
        let data = self.sounds.get(sound)?;

        // Create sink for this sound
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to create sink: {}", e)))?;

        // Decode audio data
        let source = Decoder::new(Cursor::new(data))
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to decode {}: {}", sound, e)))?;

        sink.set_volume(self.volume);
        sink.append(source);
        sink.detach();
        Ok(())
    }
}
