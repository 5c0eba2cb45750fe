//! Input management system
//!
//! Two kinds of input reach the game loop: discrete key presses, read
//! without blocking, and digital pins sampled once per frame.

mod gpio;
mod keyboard;

pub use gpio::{PinDirection, SysfsGpio};
pub use keyboard::TerminalKeys;

use std::str::FromStr;
use thiserror::Error;

/// Logic level of an idle (released) button with a pull-up
pub const IDLE_LEVEL: u8 = 1;

/// Non-blocking source of key presses
pub trait KeySource {
    /// Next pending key, or `None` when nothing is queued
    fn read_key(&mut self) -> Option<KeyCode>;

    /// Release the underlying device
    fn close(&mut self) {}
}

/// Digital pin reader
pub trait DigitalInput {
    /// Current level of `pin`, 0 or 1
    fn read(&mut self, pin: u32) -> u8;
}

/// Pins that always read the idle level
///
/// Stands in for the button board when GPIO is disabled or unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdlePins;

impl DigitalInput for IdlePins {
    fn read(&mut self, _pin: u32) -> u8 {
        IDLE_LEVEL
    }
}

/// Key source that never produces a key
#[derive(Debug, Default, Clone, Copy)]
pub struct NoKeys;

impl KeySource for NoKeys {
    fn read_key(&mut self) -> Option<KeyCode> {
        None
    }
}

/// Rising-edge detector for a digital pin
///
/// Reports `true` on the frame where the level goes from 0 to 1. The
/// previous level starts at the idle level, so a button already released at
/// start-up does not fire.
#[derive(Debug, Clone, Copy)]
pub struct ButtonEdge {
    previous: u8,
}

impl ButtonEdge {
    /// Create a detector that assumes the idle level was last seen
    pub fn new() -> Self {
        Self { previous: IDLE_LEVEL }
    }

    /// Feed the current level; `true` on a 0 -> 1 transition
    pub fn update(&mut self, level: u8) -> bool {
        let rising = level == 1 && self.previous == 0;
        self.previous = level;
        rising
    }
}

impl Default for ButtonEdge {
    fn default() -> Self {
        Self::new()
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A letter key, lower case
    Char(char),
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
}

impl FromStr for KeyCode {
    type Err = InputError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "space" => Ok(Self::Space),
            "enter" | "return" => Ok(Self::Enter),
            "escape" | "esc" => Ok(Self::Escape),
            single if single.chars().count() == 1 => {
                let c = single.chars().next().ok_or_else(|| InputError::UnknownKey(name.to_string()))?;
                if c.is_ascii_alphanumeric() {
                    Ok(Self::Char(c))
                } else {
                    Err(InputError::UnknownKey(name.to_string()))
                }
            }
            _ => Err(InputError::UnknownKey(name.to_string())),
        }
    }
}

/// Input errors
#[derive(Error, Debug)]
pub enum InputError {
    /// Key name in configuration not recognised
    #[error("Unknown key name: {0}")]
    UnknownKey(String),

    /// GPIO sysfs access failed
    #[error("GPIO pin {pin}: {source}")]
    Gpio {
        /// Pin number
        pin: u32,
        /// Underlying IO failure
        source: std::io::Error,
    },

    /// Terminal could not be switched to raw mode
    #[error("Terminal keyboard unavailable: {0}")]
    Terminal(std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_fires_only_on_rising_transition() {
        let mut edge = ButtonEdge::new();
        let fired: Vec<bool> = [1, 0, 0, 1, 1, 0, 1].iter().map(|&l| edge.update(l)).collect();
        assert_eq!(fired, vec![false, false, false, true, false, false, true]);
    }

    #[test]
    fn test_key_names_parse() {
        assert_eq!("Space".parse::<KeyCode>().unwrap(), KeyCode::Space);
        assert_eq!("P".parse::<KeyCode>().unwrap(), KeyCode::Char('p'));
        assert_eq!("Escape".parse::<KeyCode>().unwrap(), KeyCode::Escape);
        assert!("Hyper".parse::<KeyCode>().is_err());
        assert!("%".parse::<KeyCode>().is_err());
    }

    #[test]
    fn test_idle_pins_read_high() {
        assert_eq!(IdlePins.read(23), IDLE_LEVEL);
    }
}
