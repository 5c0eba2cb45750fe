//! # Astrogun
//!
//! Aim-by-motion asteroid shooter. The player turns the device to aim, the
//! orientation sensor steers the camera, and the trigger button fires.
//! Asteroids close in from every direction and cost a life when they reach
//! the player.
//!
//! The crate holds the game core: entity pools, targeting, the round
//! countdown and the per-frame orchestration in [`level::GameLevel`].
//! Platform collaborators come from `astro_engine` behind traits and are
//! handed to the screens as [`devices::Devices`].

pub mod asteroids;
pub mod bullets;
pub mod config;
pub mod context;
pub mod devices;
pub mod error;
pub mod hud;
pub mod level;
pub mod opening;
pub mod round;
pub mod screen;
pub mod session;
pub mod targeting;

#[cfg(test)]
mod testing;

pub use config::GameConfig;
pub use context::GameContext;
pub use error::GameError;
pub use level::{GameLevel, RoundSummary};
