//! Draw commands submitted by screens
//!
//! Commands borrow their names from the caller so a frame can be described
//! without allocating. The variant selects the camera: models go through the
//! 3D camera, sprites and text through the 2D overlay camera.

use crate::foundation::math::{Transform, Vec3};

/// Orientation of the 3D camera, in degrees
///
/// The camera is first pitched by `inclination` around X and then turned by
/// `azimuth` around Y.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraOrientation {
    /// Rotation around the X axis
    pub inclination: f32,
    /// Rotation around the Y axis
    pub azimuth: f32,
}

impl CameraOrientation {
    /// Create an orientation
    pub fn new(inclination: f32, azimuth: f32) -> Self {
        Self { inclination, azimuth }
    }
}

/// One draw in the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand<'a> {
    /// Catalog model drawn with the 3D camera
    Model {
        /// Catalog model name
        model: &'a str,
        /// World placement
        transform: Transform,
        /// Explosion progress in seconds, `None` for an intact model
        explosion: Option<f32>,
    },

    /// Bitmap drawn with the 2D camera
    Sprite {
        /// Sprite name
        sprite: &'a str,
        /// Screen-space position
        position: Vec3,
        /// Per-axis scale
        scale: Vec3,
        /// Opacity in `[0, 1]`
        alpha: f32,
    },

    /// String drawn with the 2D camera
    Text {
        /// Font name
        font: &'a str,
        /// Text to draw
        text: &'a str,
        /// Screen-space position
        position: Vec3,
        /// Uniform glyph scale
        scale: f32,
        /// Opacity in `[0, 1]`
        alpha: f32,
    },
}

impl DrawCommand<'_> {
    /// Whether the command is drawn with the 3D camera
    pub fn is_3d(&self) -> bool {
        matches!(self, Self::Model { .. })
    }

    /// Name of the model, sprite or font used
    pub fn asset(&self) -> &str {
        match self {
            Self::Model { model, .. } => model,
            Self::Sprite { sprite, .. } => sprite,
            Self::Text { font, .. } => font,
        }
    }
}
