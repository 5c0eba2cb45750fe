//! # Core Engine Module
//!
//! Shared configuration types for the platform subsystems. The game crate
//! embeds [`config::EngineConfig`] in its own top-level configuration.

pub mod config;

// Re-export commonly used config types
pub use config::{
    EngineConfig,
    LoggingConfig,
    DisplayConfig,
    AssetConfig,
    AudioConfig,
    InputConfig,
    SensorConfig,
    SensorDeviceConfig,
};
