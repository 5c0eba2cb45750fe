//! Time management utilities

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of the game's notion of "now", in seconds
///
/// The game loop samples the clock once per frame and threads that value
/// through every movement call, so entity motion depends only on the
/// sequence of sampled times.
pub trait Clock {
    /// Seconds elapsed since the clock's epoch
    fn now(&self) -> f64;
}

/// Wall clock anchored at construction
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    /// Create a clock whose epoch is the current instant
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

/// Clock that advances a fixed step every time it is read
///
/// Used for deterministic replays and tests of loops that read the clock
/// internally.
pub struct SteppedClock {
    current: Cell<f64>,
    step: f64,
}

impl SteppedClock {
    /// Create a clock starting at `start` that advances `step` seconds per read
    pub fn new(start: f64, step: f64) -> Self {
        Self {
            current: Cell::new(start),
            step,
        }
    }
}

impl Clock for SteppedClock {
    fn now(&self) -> f64 {
        let now = self.current.get();
        self.current.set(now + self.step);
        now
    }
}

/// Simple stopwatch for measuring elapsed time
pub struct Stopwatch {
    start_time: Option<Instant>,
    elapsed: Duration,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a new stopped stopwatch
    pub fn new() -> Self {
        Self {
            start_time: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start the stopwatch
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Stop the stopwatch and accumulate elapsed time
    pub fn stop(&mut self) {
        if let Some(start) = self.start_time {
            self.elapsed += start.elapsed();
            self.start_time = None;
        }
    }

    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        let current_elapsed = self.start_time.map_or(Duration::ZERO, |start| start.elapsed());
        self.elapsed + current_elapsed
    }

    /// Get the elapsed time in seconds
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }
}
