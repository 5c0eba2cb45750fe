//! Audio system
//!
//! Sounds are loaded once at start-up and triggered by name. Playback is
//! fire-and-forget: callers never wait for, or track, a playing sound.

pub mod backend;
pub mod sound_manager;

pub use sound_manager::{SoundId, SoundManager};

use thiserror::Error;

/// Fire-and-forget sound output
pub trait AudioOutput {
    /// Start playing the sound registered under `sound`
    fn play(&mut self, sound: &str) -> Result<(), AudioError>;
}

/// Output that accepts every request and plays nothing
///
/// Used when audio is disabled in configuration or the build has no audio
/// backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioOutput for SilentAudio {
    fn play(&mut self, sound: &str) -> Result<(), AudioError> {
        log::trace!("(silent) play {}", sound);
        Ok(())
    }
}

/// Audio errors
#[derive(Error, Debug)]
pub enum AudioError {
    /// No sound registered under that name
    #[error("Unknown sound: {0}")]
    UnknownSound(String),

    /// Sound file could not be read
    #[error("Failed to load sound {name}: {source}")]
    LoadFailed {
        /// Sound name
        name: String,
        /// Underlying IO failure
        source: std::io::Error,
    },

    /// Playback could not be started
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}
