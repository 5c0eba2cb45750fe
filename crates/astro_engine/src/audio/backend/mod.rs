//! Audio backend implementations
//!
//! Platform-independent abstraction over audio playback libraries.

#[cfg(feature = "audio")]
pub mod rodio_backend;

use super::{AudioError, AudioOutput, SilentAudio, SoundManager};
use crate::core::config::AudioConfig;

/// Create the audio output for the configuration
///
/// Disabled audio, or a build without the `audio` feature, yields
/// [`SilentAudio`]. With the feature enabled a device that cannot be opened is
/// an error, like a missing sound file.
pub fn create_output(config: &AudioConfig, sounds: SoundManager) -> Result<Box<dyn AudioOutput>, AudioError> {
    if !config.enabled {
        log::info!("Audio disabled by configuration");
        return Ok(Box::new(SilentAudio));
    }

    #[cfg(feature = "audio")]
    {
        let backend = rodio_backend::RodioBackend::new(sounds, config.volume)?;
        Ok(Box::new(backend))
    }

    #[cfg(not(feature = "audio"))]
    {
        log::warn!("Built without the `audio` feature; {} sounds loaded but muted", sounds.len());
        Ok(Box::new(SilentAudio))
    }
}
