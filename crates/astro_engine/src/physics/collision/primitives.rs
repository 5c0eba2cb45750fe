//! Primitive collision shapes and intersection algorithms
//!
//! Provides rays and bounding spheres with the line/sphere incidence test
//! used for bullet targeting.

use crate::foundation::math::Vec3;

/// A ray for ray casting and targeting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and (normalized) direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Creates a ray starting at the world origin
    pub fn from_origin(direction: Vec3) -> Self {
        Self::new(Vec3::zeros(), direction)
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Term under the square root of the line/sphere intersection solution
    ///
    /// `(I·c)² − (I·I)(c·c − r²)` with `c` taken relative to the ray origin.
    /// The full `I·I` factor is kept so callers passing a non-normalized
    /// direction still get a correct sign.
    pub fn incidence_discriminant(&self, ray: &Ray) -> f32 {
        let c = self.center - ray.origin;
        let i = ray.direction;
        let i_dot_c = i.dot(&c);
        i_dot_c * i_dot_c - i.dot(&i) * (c.dot(&c) - self.radius * self.radius)
    }

    /// Whether the infinite line through the ray touches or crosses the sphere
    ///
    /// Tangency (`discriminant == 0`) counts as incidence. The test is on the
    /// line, not the half-line: spheres behind the origin also qualify.
    pub fn is_incident(&self, ray: &Ray) -> bool {
        self.incidence_discriminant(ray) >= 0.0
    }
}
