//! Collision detection over primitive shapes
//!
//! # Module Organization
//!
//! - [`primitives`] - Basic geometric primitives (rays, spheres)

pub mod primitives;

// Re-export commonly used types
pub use primitives::{Ray, BoundingSphere};
