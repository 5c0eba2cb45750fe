//! Hardware-free orientation source

use super::{SensorDevice, SensorError, SensorSample};
use crate::foundation::math::utils::deg_to_rad;
use std::time::{Duration, Instant};

/// Sways the yaw back and forth and nods the pitch gently
///
/// The pose is a pure function of the time since `init`, so a player on a
/// desktop sees asteroids drift through the sight without any device.
pub struct SimulatedImu {
    sway: f32,
    period: f32,
    poll_interval: Duration,
    started: Option<Instant>,
    pose: SensorSample,
}

impl SimulatedImu {
    /// Create a simulator with the given peak yaw (degrees) and sway period (seconds)
    pub fn new(sway_degrees: f32, period_secs: f32) -> Self {
        Self {
            sway: deg_to_rad(sway_degrees),
            period: period_secs.max(f32::EPSILON),
            poll_interval: Duration::from_millis(4),
            started: None,
            pose: SensorSample::default(),
        }
    }

    /// Override the poll interval the simulator reports
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Pose the simulator reports `elapsed` seconds after init
    pub fn pose_at(&self, elapsed: f32) -> SensorSample {
        let phase = std::f32::consts::TAU * elapsed / self.period;
        SensorSample {
            roll: 0.0,
            pitch: 0.25 * self.sway * (2.0 * phase).sin(),
            yaw: self.sway * phase.sin(),
        }
    }
}

impl Default for SimulatedImu {
    fn default() -> Self {
        Self::new(30.0, 12.0)
    }
}

impl SensorDevice for SimulatedImu {
    fn name(&self) -> &str {
        "simulated"
    }

    fn init(&mut self) -> Result<(), SensorError> {
        self.started = Some(Instant::now());
        Ok(())
    }

    fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    fn read(&mut self) -> bool {
        let Some(started) = self.started else {
            return false;
        };
        self.pose = self.pose_at(started.elapsed().as_secs_f32());
        true
    }

    fn fusion_pose(&self) -> SensorSample {
        self.pose
    }
}
