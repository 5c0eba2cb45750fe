//! Round countdown
//!
//! A round opens with a "READY?" banner that cross-fades into "GO!", which
//! then fades away and leaves the round in play. Each state holds for a
//! fixed number of frames; the machine only ever moves forward.

use astro_engine::foundation::math::Vec3;

/// Frames of each cross-fade
pub const FLOURISH_TICKS: u32 = 5;

/// Depth the banners slide per flourish frame
const SLIDE_PER_TICK: f32 = 0.5;

const READY_TEXT: &str = "READY?";
const GO_TEXT: &str = "GO!";
const READY_POSITION: [f32; 3] = [-0.3, 1.0, 3.9];
const GO_POSITION: [f32; 3] = [-0.2, 0.8, 3.9];

/// Countdown state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundMode {
    /// "READY?" held
    Ready,
    /// "READY?" fades out while "GO!" fades in
    ReadyGo,
    /// "GO!" held
    Go,
    /// "GO!" fades out
    GoOut,
    /// Countdown over
    Play,
}

/// Banner to draw this frame, in 2D camera space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    /// Banner text
    pub text: &'static str,
    /// Position
    pub position: Vec3,
    /// Opacity in `[0, 1]`
    pub alpha: f32,
}

/// Countdown state machine for one round
#[derive(Debug, Clone)]
pub struct GameRound {
    mode: RoundMode,
    remaining: u32,
    go_time: u32,
}

impl GameRound {
    /// Start in `Ready` for `ready_time` frames; `Go` will last `go_time`
    pub fn new(ready_time: u32, go_time: u32) -> Self {
        Self {
            mode: RoundMode::Ready,
            remaining: ready_time.max(1),
            go_time: go_time.max(1),
        }
    }

    /// Current state
    pub fn mode(&self) -> RoundMode {
        self.mode
    }

    /// Frames left in the current state; zero once playing
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the countdown is over
    pub fn is_playing(&self) -> bool {
        self.mode == RoundMode::Play
    }

    /// Banners for this frame, then advance one frame
    pub fn tick(&mut self) -> Vec<Overlay> {
        let overlays = self.overlays();

        if self.mode != RoundMode::Play {
            self.remaining -= 1;
            if self.remaining == 0 {
                let (mode, remaining) = match self.mode {
                    RoundMode::Ready => (RoundMode::ReadyGo, FLOURISH_TICKS),
                    RoundMode::ReadyGo => (RoundMode::Go, self.go_time),
                    RoundMode::Go => (RoundMode::GoOut, FLOURISH_TICKS),
                    RoundMode::GoOut | RoundMode::Play => (RoundMode::Play, 0),
                };
                log::debug!("Round {:?} -> {:?}", self.mode, mode);
                self.mode = mode;
                self.remaining = remaining;
            }
        }

        overlays
    }

    fn overlays(&self) -> Vec<Overlay> {
        let fade = self.remaining as f32 / FLOURISH_TICKS as f32;
        // Slides already applied, counting this frame's
        let slid = (FLOURISH_TICKS + 1).saturating_sub(self.remaining) as f32 * SLIDE_PER_TICK;
        let ready = Vec3::from(READY_POSITION);
        let go = Vec3::from(GO_POSITION);
        let go_start = FLOURISH_TICKS as f32 * SLIDE_PER_TICK;

        match self.mode {
            RoundMode::Ready => vec![Overlay {
                text: READY_TEXT,
                position: ready,
                alpha: 1.0,
            }],
            RoundMode::ReadyGo => vec![
                Overlay {
                    text: READY_TEXT,
                    position: ready + Vec3::z() * slid,
                    alpha: fade,
                },
                Overlay {
                    text: GO_TEXT,
                    position: go + Vec3::z() * (go_start - slid),
                    alpha: 1.0 - fade,
                },
            ],
            RoundMode::Go => vec![Overlay {
                text: GO_TEXT,
                position: go,
                alpha: 1.0,
            }],
            RoundMode::GoOut => vec![Overlay {
                text: GO_TEXT,
                position: go + Vec3::z() * slid,
                alpha: fade,
            }],
            RoundMode::Play => Vec::new(),
        }
    }
}
