//! Per-round player state

/// Lives, score and toggles for the round being played
#[derive(Debug, Clone)]
pub struct GameSession {
    lives: u32,
    score: u32,
    pause: bool,
    free_play: bool,
    frames: u64,
    started_at: f64,
    flash: Option<u32>,
}

impl GameSession {
    /// Fresh session starting at `now`
    pub fn new(initial_lives: u32, now: f64) -> Self {
        Self {
            lives: initial_lives,
            score: 0,
            pause: false,
            free_play: false,
            frames: 0,
            started_at: now,
            flash: None,
        }
    }

    /// Lives left
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Asteroids shot
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether movement and spawning are suspended
    pub fn is_paused(&self) -> bool {
        self.pause
    }

    /// Whether self-impacts cost nothing
    pub fn is_free_play(&self) -> bool {
        self.free_play
    }

    /// Frames played
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Seconds since the session started
    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.started_at
    }

    /// Count one frame
    pub fn count_frame(&mut self) {
        self.frames += 1;
    }

    /// Take one life unless in free play; `true` if a life was lost
    pub fn lose_life(&mut self) -> bool {
        if self.free_play || self.lives == 0 {
            return false;
        }
        self.lives -= 1;
        true
    }

    /// Score one hit
    pub fn add_point(&mut self) {
        self.score += 1;
    }

    /// Flip the pause flag
    pub fn toggle_pause(&mut self) -> bool {
        self.pause = !self.pause;
        self.pause
    }

    /// Flip free play
    pub fn toggle_free_play(&mut self) -> bool {
        self.free_play = !self.free_play;
        self.free_play
    }

    /// No lives left
    pub fn is_over(&self) -> bool {
        self.lives == 0
    }

    /// Whether the self-impact flash is running
    pub fn is_flashing(&self) -> bool {
        self.flash.is_some()
    }

    /// (Re)start the red self-impact flash
    pub fn start_flash(&mut self) {
        self.flash = Some(1);
    }

    /// Background for this frame while the flash runs
    ///
    /// Steps 1 to `frames - 1` give a red of `step / frames`; the final step
    /// restores `base` and ends the flash. `None` when no flash is running.
    pub fn advance_flash(&mut self, frames: u32, base: [f32; 4]) -> Option<[f32; 4]> {
        let step = self.flash?;
        if step < frames {
            self.flash = Some(step + 1);
            Some([step as f32 / frames as f32, 0.0, 0.0, 1.0])
        } else {
            self.flash = None;
            Some(base)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_free_play_keeps_lives() {
        let mut session = GameSession::new(5, 0.0);
        assert!(session.lose_life());
        assert_eq!(session.lives(), 4);

        session.toggle_free_play();
        assert!(!session.lose_life());
        assert_eq!(session.lives(), 4);
    }

    #[test]
    fn test_session_ends_at_zero_lives() {
        let mut session = GameSession::new(2, 0.0);
        session.lose_life();
        assert!(!session.is_over());
        session.lose_life();
        assert!(session.is_over());
        assert!(!session.lose_life());
        assert_eq!(session.lives(), 0);
    }

    #[test]
    fn test_flash_ramps_red_then_restores() {
        let mut session = GameSession::new(5, 0.0);
        assert!(session.advance_flash(10, BLACK).is_none());

        session.start_flash();
        let reds: Vec<f32> = (0..9).map(|_| session.advance_flash(10, BLACK).unwrap()[0]).collect();
        assert_relative_eq!(reds[0], 0.1);
        assert_relative_eq!(reds[8], 0.9);

        assert_eq!(session.advance_flash(10, BLACK), Some(BLACK));
        assert!(!session.is_flashing());
    }

    #[test]
    fn test_toggles() {
        let mut session = GameSession::new(5, 3.0);
        assert!(session.toggle_pause());
        assert!(!session.toggle_pause());
        session.add_point();
        session.add_point();
        assert_eq!(session.score(), 2);
        assert_relative_eq!(session.elapsed(5.0), 2.0);
    }
}
