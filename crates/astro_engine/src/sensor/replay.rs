//! Orientation trace playback

use super::{SensorDevice, SensorError, SensorSample};
use std::path::PathBuf;
use std::time::Duration;

/// Plays back a recorded `roll,pitch,yaw` trace (radians), one row per poll
///
/// Blank lines and `#` comments are skipped. The trace loops when it runs
/// out. Rows that fail to parse count as failed reads, which leaves the
/// previous pose in place just like a dropped sample on real hardware.
pub struct ReplayImu {
    path: PathBuf,
    rows: Vec<Option<SensorSample>>,
    cursor: usize,
    poll_interval: Duration,
    pose: SensorSample,
}

impl ReplayImu {
    /// Create a replay device for the trace at `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            rows: Vec::new(),
            cursor: 0,
            poll_interval: Duration::from_millis(10),
            pose: SensorSample::default(),
        }
    }

    /// Override the playback interval
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    fn parse_row(line: &str) -> Option<SensorSample> {
        let mut fields = line.split(',').map(|field| field.trim().parse::<f32>());
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(Ok(roll)), Some(Ok(pitch)), Some(Ok(yaw)), None) => {
                Some(SensorSample::new(roll, pitch, yaw))
            }
            _ => None,
        }
    }
}

impl SensorDevice for ReplayImu {
    fn name(&self) -> &str {
        "replay"
    }

    fn init(&mut self) -> Result<(), SensorError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| SensorError::InitFailed {
            device: format!("replay:{}", self.path.display()),
            reason: e.to_string(),
        })?;

        self.rows = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(Self::parse_row)
            .collect();

        if self.rows.is_empty() {
            return Err(SensorError::InitFailed {
                device: format!("replay:{}", self.path.display()),
                reason: "trace has no samples".to_string(),
            });
        }
        self.cursor = 0;
        Ok(())
    }

    fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    fn read(&mut self) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        let row = self.rows[self.cursor];
        self.cursor = (self.cursor + 1) % self.rows.len();
        match row {
            Some(sample) => {
                self.pose = sample;
                true
            }
            None => false,
        }
    }

    fn fusion_pose(&self) -> SensorSample {
        self.pose
    }
}
