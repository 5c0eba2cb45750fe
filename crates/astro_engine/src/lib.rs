//! # Astro Engine
//!
//! Platform layer for a motion-aimed handheld shooter running on Raspberry Pi
//! class hardware.
//!
//! ## Features
//!
//! - **Sensor Fusion**: Background-polled IMU orientation with latest-value sharing
//! - **Input**: Non-blocking keyboard and GPIO button reads with edge detection
//! - **Audio**: Named, preloaded sounds with fire-and-forget playback
//! - **Assets**: OBJ model catalog with an on-disk cache
//! - **Rendering Seam**: A `Renderer` trait plus a frame-paced headless backend
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use astro_engine::prelude::*;
//! use astro_engine::sensor::SimulatedImu;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut reader = FusionReader::start(SimulatedImu::default())?;
//!     let sample = reader.latest();
//!     println!("pitch {} yaw {}", sample.pitch, sample.yaw);
//!     reader.stop();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod assets;
pub mod render;
pub mod input;
pub mod audio;
pub mod physics;
pub mod sensor;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        foundation::{
            math::{Vec3, Transform},
            time::{Clock, SystemClock, Stopwatch},
        },
        assets::{ModelCatalog, Model, ModelSpec, AssetError},
        render::{Renderer, RenderError, DrawCommand, CameraOrientation},
        input::{KeySource, DigitalInput, KeyCode, ButtonEdge},
        audio::{AudioOutput, AudioError},
        sensor::{FusionReader, OrientationSource, SensorDevice, SensorSample, SensorError},
        config::{Config, ConfigError},
        core::config::EngineConfig,
    };
}
