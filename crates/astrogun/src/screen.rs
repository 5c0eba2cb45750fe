//! Frame loop shared by the opening screen and the level

use crate::devices::Devices;
use crate::error::GameError;
use astro_engine::foundation::time::Clock;

/// Result of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow<T> {
    /// Keep going
    Continue,
    /// The screen is finished
    Done(T),
}

/// Something driven once per display frame
pub trait Screen {
    /// What the screen reports when it finishes
    type Outcome;

    /// Run one frame at time `now`
    fn update(&mut self, now: f64, devices: &mut Devices<'_>) -> Result<Flow<Self::Outcome>, GameError>;
}

/// Drive `screen` until it finishes or the display stops the loop
///
/// `Ok(None)` means the display ended the loop first.
pub fn run<S: Screen + ?Sized>(
    screen: &mut S,
    clock: &dyn Clock,
    devices: &mut Devices<'_>,
) -> Result<Option<S::Outcome>, GameError> {
    while devices.renderer.loop_running() {
        if let Flow::Done(outcome) = screen.update(clock.now(), devices)? {
            return Ok(Some(outcome));
        }
    }
    Ok(None)
}
