//! Platform collaborators borrowed by the running screens

use astro_engine::audio::AudioOutput;
use astro_engine::input::{DigitalInput, KeySource};
use astro_engine::render::Renderer;
use astro_engine::sensor::OrientationSource;

/// Everything a screen talks to besides the game state
pub struct Devices<'d> {
    /// Presentation and frame pacing
    pub renderer: &'d mut dyn Renderer,
    /// Keyboard
    pub keys: &'d mut dyn KeySource,
    /// Button pins
    pub pins: &'d mut dyn DigitalInput,
    /// Sound output
    pub audio: &'d mut dyn AudioOutput,
    /// Fused orientation
    pub sensor: &'d mut dyn OrientationSource,
}

impl Devices<'_> {
    /// Trigger a sound; failures are logged and otherwise ignored
    pub fn play_sound(&mut self, sound: &str) {
        if let Err(e) = self.audio.play(sound) {
            log::warn!("Could not play {}: {}", sound, e);
        }
    }

    /// Stop the sensor, close the keyboard and destroy the display
    ///
    /// Returns whether this call stopped the sensor.
    pub fn teardown(&mut self) -> bool {
        let stopped = self.sensor.stop();
        self.keys.close();
        self.renderer.destroy();
        log::info!("Devices torn down");
        stopped
    }
}
