//! Start-up state shared by every screen

use crate::config::{Controls, GameConfig, GameplayConfig};
use astro_engine::assets::ModelCatalog;
use astro_engine::config::ConfigError;

/// Configuration and loaded models, built once and passed by reference
#[derive(Debug, Clone)]
pub struct GameContext {
    config: GameConfig,
    controls: Controls,
    catalog: ModelCatalog,
}

impl GameContext {
    /// Bundle a validated configuration with the model catalog
    pub fn new(config: GameConfig, catalog: ModelCatalog) -> Result<Self, ConfigError> {
        let controls = config.controls.resolve()?;
        Ok(Self {
            config,
            controls,
            catalog,
        })
    }

    /// Full configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Gameplay tuning
    pub fn gameplay(&self) -> &GameplayConfig {
        &self.config.gameplay
    }

    /// Resolved key bindings
    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Loaded asteroid models
    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }
}
