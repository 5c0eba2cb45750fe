//! Title screen shown before the round

use crate::devices::Devices;
use crate::error::GameError;
use crate::hud::SCORE_FONT;
use crate::screen::{self, Flow, Screen};
use astro_engine::foundation::math::Vec3;
use astro_engine::foundation::time::Clock;
use astro_engine::render::DrawCommand;

const PROMPT: &str = "Press the START Button to Begin";
const PULSE_STEP: f32 = 0.1;

/// Title bitmap with a pulsing prompt, held until START or any key
pub struct OpeningScreen {
    start_pin: u32,
    pulse: f32,
}

impl OpeningScreen {
    /// Create the screen watching `start_pin` (pulled up, 0 when pressed)
    pub fn new(start_pin: u32) -> Self {
        Self { start_pin, pulse: 0.0 }
    }

    /// Show the screen; `true` when the player asked to start
    pub fn show(&mut self, clock: &dyn Clock, devices: &mut Devices<'_>) -> Result<bool, GameError> {
        log::info!("Waiting for START");
        Ok(screen::run(self, clock, devices)?.is_some())
    }

    /// Prompt opacity for the current frame
    pub fn prompt_alpha(&self) -> f32 {
        self.pulse.sin().abs()
    }
}

impl Screen for OpeningScreen {
    type Outcome = ();

    fn update(&mut self, _now: f64, devices: &mut Devices<'_>) -> Result<Flow<()>, GameError> {
        devices.renderer.submit(DrawCommand::Sprite {
            sprite: "opening",
            position: Vec3::new(0.0, 0.0, 4.0),
            scale: Vec3::new(3.7, 3.7, 1.0),
            alpha: 1.0,
        })?;

        self.pulse += PULSE_STEP;
        devices.renderer.submit(DrawCommand::Text {
            font: SCORE_FONT,
            text: PROMPT,
            position: Vec3::new(0.0, 0.5, 3.9),
            scale: 0.005,
            alpha: self.prompt_alpha(),
        })?;

        if devices.pins.read(self.start_pin) == 0 {
            return Ok(Flow::Done(()));
        }
        if devices.keys.read_key().is_some() {
            return Ok(Flow::Done(()));
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Rig;
    use astro_engine::foundation::time::SteppedClock;
    use astro_engine::input::KeyCode;

    #[test]
    fn test_start_button_ends_screen() {
        let mut rig = Rig::new();
        rig.pins.script(22, &[1, 1, 0]);
        let mut opening = OpeningScreen::new(22);

        assert!(opening.show(&SteppedClock::new(0.0, 0.1), &mut rig.devices()).unwrap());
        assert_eq!(rig.renderer.frames, 3);
    }

    #[test]
    fn test_any_key_ends_screen() {
        let mut rig = Rig::new();
        rig.keys.script(&[None, Some(KeyCode::Char('x'))]);
        let mut opening = OpeningScreen::new(22);

        assert!(opening.show(&SteppedClock::new(0.0, 0.1), &mut rig.devices()).unwrap());
        assert_eq!(rig.renderer.frames, 2);
    }

    #[test]
    fn test_closed_display_is_not_a_start() {
        let mut rig = Rig::new();
        rig.renderer.max_frames = Some(4);
        let mut opening = OpeningScreen::new(22);

        assert!(!opening.show(&SteppedClock::new(0.0, 0.1), &mut rig.devices()).unwrap());
    }

    #[test]
    fn test_prompt_pulses() {
        let mut rig = Rig::new();
        let mut opening = OpeningScreen::new(22);
        let mut devices = rig.devices();
        let mut alphas = Vec::new();
        for _ in 0..40 {
            opening.update(0.0, &mut devices).unwrap();
            alphas.push(opening.prompt_alpha());
        }
        assert!(alphas.iter().all(|a| (0.0..=1.0).contains(a)));
        assert!(alphas.iter().any(|&a| a > 0.95));
        assert!(alphas.iter().any(|&a| a < 0.1));
    }
}
