//! Game-level errors

use astro_engine::assets::AssetError;
use astro_engine::audio::AudioError;
use astro_engine::config::ConfigError;
use astro_engine::input::InputError;
use astro_engine::render::RenderError;
use astro_engine::sensor::SensorError;
use thiserror::Error;

/// Errors that end start-up or a running screen
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Models could not be loaded
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Sounds or audio device unavailable
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    /// Input device setup failed
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Orientation sensor could not be started
    #[error("Sensor error: {0}")]
    Sensor(#[from] SensorError),

    /// Presentation failed mid-loop
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
