//! Heads-up display
//!
//! Fixed overlay drawn with the 2D camera every frame: the aiming sight, the
//! radar with one blip per active asteroid, the life bar and the score.

use crate::asteroids::Asteroid;
use crate::session::GameSession;
use astro_engine::foundation::math::{utils, Vec3};
use astro_engine::render::{DrawCommand, RenderError, Renderer};

const SIGHT_POSITION: [f32; 3] = [0.0, 0.0, 4.0];
const SIGHT_SCALE: [f32; 3] = [0.5, 0.5, 1.0];
const RADAR_PANEL_POSITION: [f32; 3] = [-1.2, -0.6, 4.0];
const RADAR_PANEL_SCALE: [f32; 3] = [0.8, 0.8, 1.0];
const TARGET_CENTER_POSITION: [f32; 3] = [-1.2, -0.6, 3.9];
const TARGET_SCALE: [f32; 3] = [0.05, 0.05, 1.0];
const LIFE_BAR_POSITION: [f32; 3] = [1.4, -0.8, 4.0];
const LIFE_BAR_SCALE: [f32; 3] = [0.1, 0.1, 1.0];
const LIFE_BAR_STEP: f32 = 0.12;
const SCORE_POSITION: [f32; 3] = [1.2, 0.9, 4.0];
const SCORE_SCALE: f32 = 0.01;

/// Font used for the score
pub const SCORE_FONT: &str = "computer";

/// Radar geometry
#[derive(Debug, Clone, Copy)]
pub struct Radar {
    /// Distance mapped to `scale` on the panel
    pub reference_distance: f32,
    /// Blip radius for an asteroid at `reference_distance`
    pub scale: f32,
}

impl Radar {
    /// Blip position for an asteroid seen with the camera at `camera_azimuth`
    ///
    /// Radius is the asteroid's distance over the reference distance, times
    /// the scale. The angle is the asteroid azimuth plus the camera azimuth
    /// plus 90 degrees, so straight ahead points up on the panel.
    pub fn blip(&self, asteroid: &Asteroid, camera_azimuth: f32) -> Vec3 {
        let radius = asteroid.distance2().sqrt() / self.reference_distance * self.scale;
        let offset = utils::polar_offset(radius, asteroid.azimuth() + camera_azimuth + 90.0);
        Vec3::from(TARGET_CENTER_POSITION) + Vec3::new(offset.x, offset.y, 0.0)
    }

    /// Draw the blip for `asteroid`
    pub fn draw_blip(&self, renderer: &mut dyn Renderer, asteroid: &Asteroid, camera_azimuth: f32) -> Result<(), RenderError> {
        renderer.submit(sprite("radar_target", self.blip(asteroid, camera_azimuth), TARGET_SCALE))
    }
}

fn sprite(name: &str, position: impl Into<Vec3>, scale: [f32; 3]) -> DrawCommand<'_> {
    DrawCommand::Sprite {
        sprite: name,
        position: position.into(),
        scale: Vec3::from(scale),
        alpha: 1.0,
    }
}

/// Score as shown on screen
pub fn score_text(score: u32) -> String {
    format!("{:03}", score)
}

/// Draw the sight, radar panel, life bar and score
pub fn draw(renderer: &mut dyn Renderer, session: &GameSession, life_slots: u32) -> Result<(), RenderError> {
    renderer.submit(sprite("sight", SIGHT_POSITION, SIGHT_SCALE))?;
    renderer.submit(sprite("radar_panel", RADAR_PANEL_POSITION, RADAR_PANEL_SCALE))?;

    let base = Vec3::from(LIFE_BAR_POSITION);
    for slot in 0..life_slots {
        let name = if slot < session.lives() { "life_full" } else { "life_empty" };
        let position = base + Vec3::y() * (slot as f32 * LIFE_BAR_STEP);
        renderer.submit(sprite(name, position, LIFE_BAR_SCALE))?;
    }

    let score = score_text(session.score());
    renderer.submit(DrawCommand::Text {
        font: SCORE_FONT,
        text: &score,
        position: Vec3::from(SCORE_POSITION),
        scale: SCORE_SCALE,
        alpha: 1.0,
    })
}
