//! Physics module for collision detection
//!
//! Only constant-velocity motion exists in the game, so this module is
//! limited to geometric queries over primitive shapes.

pub mod collision;

pub use collision::{BoundingSphere, Ray};
