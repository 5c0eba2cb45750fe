//! # Rendering Seam
//!
//! The game core never talks to a graphics API. It describes each frame as a
//! stream of [`DrawCommand`]s submitted to a [`Renderer`], which owns pacing,
//! the two cameras and the clear colour.
//!
//! ## Cameras
//!
//! - **3D camera**: at the origin, oriented by [`CameraOrientation`]; used by
//!   [`DrawCommand::Model`].
//! - **2D camera**: fixed screen-space overlay; used by sprites and text.

pub mod commands;
pub mod headless;

pub use commands::{CameraOrientation, DrawCommand};
pub use headless::HeadlessRenderer;

use thiserror::Error;

/// Presentation backend driven once per frame by a screen loop
pub trait Renderer {
    /// Advance to the next frame
    ///
    /// Blocks for frame pacing and returns `false` once the display wants the
    /// loop to end (window closed, frame limit reached, destroyed).
    fn loop_running(&mut self) -> bool;

    /// Set the clear colour as RGBA in `[0, 1]`
    fn set_background(&mut self, rgba: [f32; 4]);

    /// Orient the 3D camera
    fn set_camera(&mut self, orientation: CameraOrientation);

    /// Queue one draw for the current frame
    fn submit(&mut self, command: DrawCommand<'_>) -> Result<(), RenderError>;

    /// Release display resources; later frames are refused
    fn destroy(&mut self);
}

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Draw submitted after `destroy`
    #[error("Renderer has been destroyed")]
    Destroyed,
}
