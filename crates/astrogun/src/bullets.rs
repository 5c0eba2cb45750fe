//! Bullets and their generator

use crate::asteroids::AsteroidId;
use astro_engine::foundation::math::{utils, Transform, Vec3};

/// Model name bullets are drawn with
pub const BULLET_MODEL: &str = "bullet";

/// Predicted target of a bullet, fixed when the bullet is fired
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Destination {
    /// Target in the active pool at fire time
    pub id: AsteroidId,
    /// Target's squared distance from the origin at fire time
    pub distance2_at_fire: f32,
}

/// A bullet travelling out from the origin
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    direction: Vec3,
    speed: f32,
    travelled: f32,
    last_move: f64,
    destination: Option<Destination>,
}

impl Bullet {
    /// Unit travel direction
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Distance covered so far
    pub fn travelled(&self) -> f32 {
        self.travelled
    }

    /// Current position
    pub fn position(&self) -> Vec3 {
        self.direction * self.travelled
    }

    /// Squared distance from the origin
    pub fn distance2(&self) -> f32 {
        self.travelled * self.travelled
    }

    /// Predicted target, if any
    pub fn destination(&self) -> Option<Destination> {
        self.destination
    }

    /// Record the predicted target
    ///
    /// Called once at fire time. A closer asteroid entering the path later
    /// does not retarget the bullet.
    pub fn set_destination(&mut self, destination: Option<Destination>) {
        self.destination = destination;
    }

    /// Forget the target after it left the active pool
    pub fn clear_destination(&mut self) {
        self.destination = None;
    }

    /// Advance to `now` at constant speed
    pub fn move_to(&mut self, now: f64) {
        let dt = (now - self.last_move).max(0.0) as f32;
        self.travelled += self.speed * dt;
        self.last_move = now;
    }

    /// Let `now` pass without moving (game paused)
    pub fn hold(&mut self, now: f64) {
        self.last_move = self.last_move.max(now);
    }

    /// Placement for drawing
    pub fn transform(&self) -> Transform {
        Transform::from_position(self.position())
    }
}

/// Creates bullets at a fixed speed
#[derive(Debug, Clone, Copy)]
pub struct BulletGenerator {
    speed: f32,
}

impl BulletGenerator {
    /// Create a generator firing at `speed` units per second
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    /// Fire a bullet along the aim angles, in degrees
    pub fn generate(&self, azimuth: f32, inclination: f32, now: f64) -> Bullet {
        Bullet {
            direction: utils::direction_from_angles(azimuth, inclination),
            speed: self.speed,
            travelled: 0.0,
            last_move: now,
            destination: None,
        }
    }
}
