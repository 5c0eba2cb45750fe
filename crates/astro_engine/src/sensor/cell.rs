//! Latest-value cell shared between the sensor thread and the game loop

use super::SensorSample;
use std::sync::atomic::{AtomicU32, Ordering};

/// Single-writer, single-reader holder of the most recent sample
///
/// Each angle is an independent atomic. A reader racing a writer can observe
/// a mix of two consecutive samples. Starts at (0, 0, 0).
#[derive(Debug, Default)]
pub struct SampleCell {
    roll: AtomicU32,
    pitch: AtomicU32,
    yaw: AtomicU32,
}

impl SampleCell {
    /// Create a cell holding the zero orientation
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored sample
    pub fn store(&self, sample: SensorSample) {
        self.roll.store(sample.roll.to_bits(), Ordering::Relaxed);
        self.pitch.store(sample.pitch.to_bits(), Ordering::Relaxed);
        self.yaw.store(sample.yaw.to_bits(), Ordering::Relaxed);
    }

    /// Read the stored sample
    pub fn load(&self) -> SensorSample {
        SensorSample {
            roll: f32::from_bits(self.roll.load(Ordering::Relaxed)),
            pitch: f32::from_bits(self.pitch.load(Ordering::Relaxed)),
            yaw: f32::from_bits(self.yaw.load(Ordering::Relaxed)),
        }
    }
}
