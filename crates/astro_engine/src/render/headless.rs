//! Frame-paced renderer without a display
//!
//! Keeps the frame cadence and bookkeeping of a real backend and logs the
//! draw traffic at trace level. Used on headless boards and in soak runs.

use super::{CameraOrientation, DrawCommand, RenderError, Renderer};
use crate::core::config::DisplayConfig;
use std::time::{Duration, Instant};

/// Renderer that draws nothing
pub struct HeadlessRenderer {
    frame_duration: Option<Duration>,
    max_frames: Option<u64>,
    frame_started: Option<Instant>,
    frames: u64,
    draws_this_frame: usize,
    total_draws: u64,
    background: [f32; 4],
    camera: CameraOrientation,
    destroyed: bool,
}

impl HeadlessRenderer {
    /// Create a renderer paced by the display configuration
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            frame_duration: Some(config.frame_duration()),
            max_frames: config.max_frames,
            frame_started: None,
            frames: 0,
            draws_this_frame: 0,
            total_draws: 0,
            background: config.background,
            camera: CameraOrientation::default(),
            destroyed: false,
        }
    }

    /// Create a renderer that never sleeps
    pub fn unpaced(max_frames: Option<u64>) -> Self {
        Self {
            frame_duration: None,
            max_frames,
            ..Self::new(&DisplayConfig::default())
        }
    }

    /// Frames started so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draws submitted over the renderer's lifetime
    pub fn total_draws(&self) -> u64 {
        self.total_draws
    }

    /// Current clear colour
    pub fn background(&self) -> [f32; 4] {
        self.background
    }

    /// Current 3D camera orientation
    pub fn camera(&self) -> CameraOrientation {
        self.camera
    }

    /// Whether `destroy` was called
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn pace(&mut self) {
        if let (Some(duration), Some(started)) = (self.frame_duration, self.frame_started) {
            let elapsed = started.elapsed();
            if elapsed < duration {
                std::thread::sleep(duration - elapsed);
            }
        }
        self.frame_started = Some(Instant::now());
    }
}

impl Renderer for HeadlessRenderer {
    fn loop_running(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        if self.max_frames.is_some_and(|max| self.frames >= max) {
            log::debug!("Frame limit of {} reached", self.frames);
            return false;
        }

        self.pace();
        if self.frames > 0 {
            log::trace!("Frame {} presented {} draws", self.frames, self.draws_this_frame);
        }
        self.frames += 1;
        self.draws_this_frame = 0;
        true
    }

    fn set_background(&mut self, rgba: [f32; 4]) {
        self.background = rgba;
    }

    fn set_camera(&mut self, orientation: CameraOrientation) {
        self.camera = orientation;
    }

    fn submit(&mut self, command: DrawCommand<'_>) -> Result<(), RenderError> {
        if self.destroyed {
            return Err(RenderError::Destroyed);
        }
        log::trace!("draw {:?}", command);
        self.draws_this_frame += 1;
        self.total_draws += 1;
        Ok(())
    }

    fn destroy(&mut self) {
        if !self.destroyed {
            log::info!(
                "Headless renderer destroyed after {} frames, {} draws",
                self.frames,
                self.total_draws
            );
        }
        self.destroyed = true;
    }
}
