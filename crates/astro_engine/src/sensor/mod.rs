//! Orientation sensing
//!
//! An IMU is polled on its own thread at the cadence the device asks for,
//! and the game loop samples the most recent fused orientation once per
//! frame without waiting on the producer.
//!
//! - [`SensorDevice`] is the driver seam (init, poll hint, read, fused pose)
//! - [`SampleCell`] carries the latest sample between the two threads
//! - [`FusionReader`] owns the polling thread and its stop signal
//! - [`SimulatedImu`] and [`ReplayImu`] stand in for real hardware

mod cell;
mod reader;
mod replay;
mod simulated;

pub use cell::SampleCell;
pub use reader::FusionReader;
pub use replay::ReplayImu;
pub use simulated::SimulatedImu;

use crate::core::config::{SensorConfig, SensorDeviceConfig};
use std::time::Duration;
use thiserror::Error;

/// One fused orientation estimate, in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorSample {
    /// Rotation about the forward axis (unused by the game)
    pub roll: f32,
    /// Rotation about the lateral axis
    pub pitch: f32,
    /// Rotation about the vertical axis
    pub yaw: f32,
}

impl SensorSample {
    /// Create a sample from its three angles
    pub fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self { roll, pitch, yaw }
    }
}

/// Driver interface for an orientation sensor
pub trait SensorDevice: Send + 'static {
    /// Human readable device name
    fn name(&self) -> &str;

    /// Bring the device up; failure means the game cannot start
    fn init(&mut self) -> Result<(), SensorError>;

    /// Minimum interval between polls the device supports
    fn poll_interval(&self) -> Duration;

    /// Attempt one read; `true` when a fresh fused pose is available
    fn read(&mut self) -> bool;

    /// Most recent fused pose
    fn fusion_pose(&self) -> SensorSample;
}

/// Consumer side of an orientation stream
pub trait OrientationSource {
    /// Latest available sample; never blocks
    fn latest(&self) -> SensorSample;

    /// Halt the producer; returns `true` only for the call that stopped it
    fn stop(&mut self) -> bool;
}

/// Sensor errors
#[derive(Error, Debug)]
pub enum SensorError {
    /// Device failed to initialise
    #[error("Sensor {device} failed to initialise: {reason}")]
    InitFailed {
        /// Device name
        device: String,
        /// Why initialisation failed
        reason: String,
    },

    /// Reader thread could not be spawned
    #[error("Failed to spawn sensor thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Open the device described by the configuration
pub fn open_device(config: &SensorConfig) -> Box<dyn SensorDevice> {
    let interval = config.poll_interval_ms.map(Duration::from_millis);
    match &config.device {
        SensorDeviceConfig::Simulated { sway_degrees, period_secs } => {
            let mut device = SimulatedImu::new(*sway_degrees, *period_secs);
            if let Some(interval) = interval {
                device = device.with_poll_interval(interval);
            }
            Box::new(device)
        }
        SensorDeviceConfig::Replay { path } => {
            let mut device = ReplayImu::new(path.clone());
            if let Some(interval) = interval {
                device = device.with_poll_interval(interval);
            }
            Box::new(device)
        }
    }
}

impl SensorDevice for Box<dyn SensorDevice> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn init(&mut self) -> Result<(), SensorError> {
        (**self).init()
    }

    fn poll_interval(&self) -> Duration {
        (**self).poll_interval()
    }

    fn read(&mut self) -> bool {
        (**self).read()
    }

    fn fusion_pose(&self) -> SensorSample {
        (**self).fusion_pose()
    }
}
