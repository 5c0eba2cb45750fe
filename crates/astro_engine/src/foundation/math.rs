//! Math utilities and types
//!
//! Provides the small set of vector helpers the game core relies on. All
//! angles crossing module boundaries are in degrees, matching the camera and
//! sensor conventions; radians stay internal to the trigonometry.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Placement of a drawable object
///
/// Rotation is stored as Euler angles in degrees (X, Y, Z) because that is
/// what the draw collaborators consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Euler rotation in degrees
    pub rotation: Vec3,

    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: 1.0,
        }
    }
}

impl Transform {
    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec2, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Squared distance of a point from the world origin
    pub fn distance2(point: &Vec3) -> f32 {
        point.dot(point)
    }

    /// Unit vector for a heading and an elevation, both in degrees
    ///
    /// Azimuth 0 / inclination 0 looks down +Z. Positive azimuth turns
    /// toward +X, positive inclination toward +Y.
    pub fn direction_from_angles(azimuth: f32, inclination: f32) -> Vec3 {
        let (sin_az, cos_az) = deg_to_rad(azimuth).sin_cos();
        let (sin_incl, cos_incl) = deg_to_rad(inclination).sin_cos();
        Vec3::new(sin_az * cos_incl, sin_incl, cos_az * cos_incl)
    }

    /// Point at `radius` along `angle` degrees in a plane
    pub fn polar_offset(radius: f32, angle: f32) -> Vec2 {
        let (sin, cos) = deg_to_rad(angle).sin_cos();
        Vec2::new(radius * cos, radius * sin)
    }
}
