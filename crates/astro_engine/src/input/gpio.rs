//! GPIO access through the Linux sysfs interface

use super::{DigitalInput, InputError, IDLE_LEVEL};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Direction of an exported pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinDirection {
    /// Input pin
    In,
    /// Output pin
    Out,
}

impl PinDirection {
    fn as_sysfs(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

/// Pins exported under `/sys/class/gpio`
///
/// Pull-ups for the buttons are expected to be configured by the board
/// (device tree overlay); sysfs cannot set them.
pub struct SysfsGpio {
    root: PathBuf,
    exported: Vec<u32>,
    failing: HashSet<u32>,
}

impl SysfsGpio {
    /// Open the sysfs GPIO tree at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exported: Vec::new(),
            failing: HashSet::new(),
        }
    }

    fn pin_dir(&self, pin: u32) -> PathBuf {
        self.root.join(format!("gpio{pin}"))
    }

    fn write(path: &Path, value: &str, pin: u32) -> Result<(), InputError> {
        fs::write(path, value).map_err(|source| InputError::Gpio { pin, source })
    }

    /// Export `pin` (if needed) and set its direction
    pub fn setup(&mut self, pin: u32, direction: PinDirection) -> Result<(), InputError> {
        if !self.pin_dir(pin).exists() {
            Self::write(&self.root.join("export"), &pin.to_string(), pin)?;
            self.exported.push(pin);
        }
        Self::write(&self.pin_dir(pin).join("direction"), direction.as_sysfs(), pin)?;
        log::debug!("GPIO {} configured as {}", pin, direction.as_sysfs());
        Ok(())
    }

    /// Drive an output pin
    pub fn set(&mut self, pin: u32, level: u8) -> Result<(), InputError> {
        let value = if level == 0 { "0" } else { "1" };
        Self::write(&self.pin_dir(pin).join("value"), value, pin)
    }

    /// Read a pin, surfacing IO failures
    pub fn try_read(&self, pin: u32) -> Result<u8, InputError> {
        let raw = fs::read_to_string(self.pin_dir(pin).join("value"))
            .map_err(|source| InputError::Gpio { pin, source })?;
        Ok(u8::from(raw.trim() != "0"))
    }
}

impl DigitalInput for SysfsGpio {
    fn read(&mut self, pin: u32) -> u8 {
        match self.try_read(pin) {
            Ok(level) => {
                self.failing.remove(&pin);
                level
            }
            Err(e) => {
                // Log once per failure streak, then read as released
                if self.failing.insert(pin) {
                    log::warn!("{}; treating pin as idle", e);
                }
                IDLE_LEVEL
            }
        }
    }
}

impl Drop for SysfsGpio {
    fn drop(&mut self) {
        for pin in self.exported.drain(..) {
            if let Err(e) = fs::write(self.root.join("unexport"), pin.to_string()) {
                log::debug!("Failed to unexport GPIO {}: {}", pin, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("astro_engine_gpio_{}_{}", name, std::process::id()));
        fs::create_dir_all(root.join("gpio23")).unwrap();
        root
    }

    #[test]
    fn test_reads_value_file() {
        let root = fake_root("read");
        fs::write(root.join("gpio23/value"), "0\n").unwrap();
        let mut gpio = SysfsGpio::new(&root);
        assert_eq!(gpio.read(23), 0);
        fs::write(root.join("gpio23/value"), "1\n").unwrap();
        assert_eq!(gpio.read(23), 1);
        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_missing_pin_reads_idle() {
        let root = fake_root("missing");
        let mut gpio = SysfsGpio::new(&root);
        assert_eq!(gpio.read(5), IDLE_LEVEL);
        assert!(gpio.try_read(5).is_err());
        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_setup_writes_direction_for_present_pin() {
        let root = fake_root("setup");
        let mut gpio = SysfsGpio::new(&root);
        gpio.setup(23, PinDirection::Out).unwrap();
        gpio.set(23, 0).unwrap();
        assert_eq!(fs::read_to_string(root.join("gpio23/direction")).unwrap(), "out");
        assert_eq!(fs::read_to_string(root.join("gpio23/value")).unwrap(), "0");
        fs::remove_dir_all(root).ok();
    }
}
