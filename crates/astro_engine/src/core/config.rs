//! # Platform Configuration
//!
//! Configuration for every collaborator the game loop talks to: logging,
//! display pacing, asset locations, audio, input pins and the orientation
//! sensor. All sections deserialize with defaults so a partial file is
//! enough.

use serde::{Serialize, Deserialize};
use std::path::PathBuf;
use std::time::Duration;

pub use crate::config::{Config, ConfigError};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

/// Display pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Target frame rate of the presentation loop
    pub frames_per_second: u32,
    /// Stop after this many frames (headless runs and soak tests)
    pub max_frames: Option<u64>,
    /// Clear colour between frames
    pub background: [f32; 4],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frames_per_second: 30,
            max_frames: None,
            background: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl DisplayConfig {
    /// Duration of one frame at the target rate
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frames_per_second.max(1)))
    }
}

/// # Asset Configuration
///
/// Where models are read from and where the pre-built model catalog is cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory containing the OBJ models
    pub models_dir: PathBuf,
    /// Variable-data directory holding the catalog cache
    pub var_dir: PathBuf,
    /// File name of the catalog cache inside `var_dir`
    pub cache_file: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from("../media/models"),
            var_dir: PathBuf::from("var"),
            cache_file: "asteroids.ron".to_string(),
        }
    }
}

impl AssetConfig {
    /// Full path of the catalog cache
    pub fn cache_path(&self) -> PathBuf {
        self.var_dir.join(&self.cache_file)
    }
}

/// Audio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Audio enabled
    pub enabled: bool,
    /// Directory containing the sound files
    pub sounds_dir: PathBuf,
    /// Playback volume (0.0 - 1.0)
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sounds_dir: PathBuf::from("../media/sounds"),
            volume: 1.0,
        }
    }
}

/// Input configuration
///
/// Pin numbers use BCM numbering. Buttons are wired active-low with pull-ups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Read buttons through the sysfs GPIO interface
    pub use_gpio: bool,
    /// Root of the sysfs GPIO tree
    pub gpio_root: PathBuf,
    /// START button input pin
    pub start_pin: u32,
    /// Trigger button input pin
    pub fire_pin: u32,
    /// Trigger button lamp output pin
    pub fire_lamp_pin: u32,
    /// Rumble motor output pin
    pub rumble_pin: u32,
    /// Read keys from standard input
    pub use_keyboard: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            use_gpio: true,
            gpio_root: PathBuf::from("/sys/class/gpio"),
            start_pin: 22,
            fire_pin: 23,
            fire_lamp_pin: 24,
            rumble_pin: 25,
            use_keyboard: true,
        }
    }
}

/// Which orientation device to open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SensorDeviceConfig {
    /// Deterministic sway, for running without hardware
    Simulated {
        /// Peak yaw deflection in degrees
        sway_degrees: f32,
        /// Seconds per full sway
        period_secs: f32,
    },
    /// Recorded `roll,pitch,yaw` trace, one row per poll
    Replay {
        /// Trace file path
        path: PathBuf,
    },
}

impl Default for SensorDeviceConfig {
    fn default() -> Self {
        Self::Simulated {
            sway_degrees: 30.0,
            period_secs: 12.0,
        }
    }
}

/// Orientation sensor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Device to open
    pub device: SensorDeviceConfig,
    /// Override of the device's own poll interval, in milliseconds
    pub poll_interval_ms: Option<u64>,
}

/// # Complete Platform Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Display pacing
    pub display: DisplayConfig,
    /// Asset locations
    pub assets: AssetConfig,
    /// Audio output
    pub audio: AudioConfig,
    /// Buttons and keyboard
    pub input: InputConfig,
    /// Orientation sensor
    pub sensor: SensorConfig,
}

impl EngineConfig {
    /// Validate the platform configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.frames_per_second == 0 {
            return Err(ConfigError::Invalid("display.frames_per_second must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(ConfigError::Invalid(format!("audio.volume {} outside 0.0..=1.0", self.audio.volume)));
        }
        if self.sensor.poll_interval_ms == Some(0) {
            return Err(ConfigError::Invalid("sensor.poll_interval_ms must be positive".to_string()));
        }
        Ok(())
    }
}

impl Config for EngineConfig {}
