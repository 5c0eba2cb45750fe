//! Keyboard input from the controlling terminal

use super::{InputError, KeyCode, KeySource};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::time::Duration;

/// Keys pressed on the terminal the game was started from
///
/// The terminal is switched to raw mode while this source is open, so each
/// press is available on the next poll without waiting for Enter. Raw mode
/// also swallows Ctrl+C, which is reported as [`KeyCode::Escape`].
pub struct TerminalKeys {
    raw: bool,
}

impl TerminalKeys {
    /// Put the terminal in raw mode and start reading keys
    pub fn open() -> Result<Self, InputError> {
        terminal::enable_raw_mode().map_err(InputError::Terminal)?;
        log::debug!("Terminal switched to raw mode");
        Ok(Self { raw: true })
    }

    fn restore(&mut self) {
        if !self.raw {
            return;
        }
        self.raw = false;
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Could not restore the terminal: {}", e);
        }
    }
}

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> Option<KeyCode> {
        if !self.raw {
            return None;
        }
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    log::warn!("Keyboard poll failed: {}", e);
                    return None;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) => {
                    if let Some(code) = translate(&key) {
                        return Some(code);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Keyboard read failed: {}", e);
                    return None;
                }
            }
        }
    }

    fn close(&mut self) {
        self.restore();
    }
}

impl Drop for TerminalKeys {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Map a terminal key press to a game key; releases and other keys are dropped
fn translate(key: &KeyEvent) -> Option<KeyCode> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        event::KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(KeyCode::Escape),
        event::KeyCode::Char(' ') => Some(KeyCode::Space),
        event::KeyCode::Char(c) if c.is_ascii_alphanumeric() => Some(KeyCode::Char(c.to_ascii_lowercase())),
        event::KeyCode::Enter => Some(KeyCode::Enter),
        event::KeyCode::Esc => Some(KeyCode::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: event::KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_presses_map_to_game_keys() {
        assert_eq!(translate(&press(event::KeyCode::Char(' '))), Some(KeyCode::Space));
        assert_eq!(translate(&press(event::KeyCode::Char('P'))), Some(KeyCode::Char('p')));
        assert_eq!(translate(&press(event::KeyCode::Esc)), Some(KeyCode::Escape));
        assert_eq!(translate(&press(event::KeyCode::Enter)), Some(KeyCode::Enter));
        assert_eq!(translate(&press(event::KeyCode::Tab)), None);
        assert_eq!(translate(&press(event::KeyCode::Char('%'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(event::KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate(&key), Some(KeyCode::Escape));
    }

    #[test]
    fn test_releases_are_ignored() {
        let key = KeyEvent {
            code: event::KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(&key), None);
    }

    #[test]
    fn test_closed_source_reads_nothing() {
        let mut keys = TerminalKeys { raw: false };
        keys.close();
        assert_eq!(keys.read_key(), None);
    }
}
