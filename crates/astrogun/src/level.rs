//! The game level: one round from countdown to the last life
//!
//! Three pools of transient entities live here. Active asteroids sit in a
//! slot map keyed by [`AsteroidId`]; shot asteroids move to the hit pool for
//! their explosion and are recycled after `hit_linger_secs`; bullets are a
//! plain list. Entries leaving a pool are marked during the scan and removed
//! in a compaction pass afterwards.
//!
//! Within a frame, self-impacts are resolved before bullets. An asteroid that
//! reaches the player is gone from the active pool by the time bullets are
//! checked, so no asteroid is ever both lost to the player and scored.

use crate::asteroids::{Asteroid, AsteroidGenerator, AsteroidId};
use crate::bullets::{Bullet, BulletGenerator, BULLET_MODEL};
use crate::config::sounds;
use crate::context::GameContext;
use crate::devices::Devices;
use crate::error::GameError;
use crate::hud::{self, Radar};
use crate::round::GameRound;
use crate::screen::{self, Flow, Screen};
use crate::session::GameSession;
use crate::targeting;
use astro_engine::foundation::math::utils;
use astro_engine::foundation::time::Clock;
use astro_engine::input::ButtonEdge;
use astro_engine::render::{CameraOrientation, DrawCommand};
use rand::rngs::StdRng;
use rand::Rng;
use slotmap::SlotMap;

/// Font used for the round banners
pub const BANNER_FONT: &str = "balls";
const BANNER_SCALE: f32 = 0.018;

/// What a frame decided about the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep playing
    Continue,
    /// Quit key pressed
    Quit,
    /// Last life lost
    OutOfLives,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Quit key pressed
    Quit,
    /// Last life lost
    OutOfLives,
    /// Display stopped the loop
    DisplayClosed,
}

/// Statistics of a finished round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSummary {
    /// Why the round ended
    pub end: EndReason,
    /// Frames played
    pub frames: u64,
    /// Asteroids shot
    pub score: u32,
    /// Lives left
    pub lives: u32,
    /// Wall time of the round in seconds
    pub elapsed_secs: f64,
    /// Frames per second over the round
    pub average_fps: f64,
}

/// One round of play
pub struct GameLevel<'a, R = StdRng> {
    context: &'a GameContext,
    generator: AsteroidGenerator<'a, R>,
    bullet_gen: BulletGenerator,
    radar: Radar,
    active: SlotMap<AsteroidId, Asteroid>,
    hit: Vec<(AsteroidId, Asteroid)>,
    bullets: Vec<Bullet>,
    round: GameRound,
    session: GameSession,
    fire_button: ButtonEdge,
    azimuth: f32,
    inclination: f32,
}

impl<'a> GameLevel<'a> {
    /// Create a level seeded from the OS
    pub fn new(context: &'a GameContext, now: f64) -> Self {
        let generator = AsteroidGenerator::new(context.catalog(), context.gameplay());
        Self::with_generator(context, generator, now)
    }
}

impl<'a, R: Rng> GameLevel<'a, R> {
    /// Create a level around an existing generator
    pub fn with_generator(context: &'a GameContext, generator: AsteroidGenerator<'a, R>, now: f64) -> Self {
        let gameplay = context.gameplay();
        Self {
            context,
            generator,
            bullet_gen: BulletGenerator::new(gameplay.bullet_speed),
            radar: Radar {
                reference_distance: gameplay.initial_distance,
                scale: gameplay.radar_scale,
            },
            active: SlotMap::with_key(),
            hit: Vec::new(),
            bullets: Vec::new(),
            round: GameRound::new(gameplay.ready_time, gameplay.go_time),
            session: GameSession::new(gameplay.initial_lives, now),
            fire_button: ButtonEdge::new(),
            azimuth: 0.0,
            inclination: 0.0,
        }
    }

    /// Player state
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Countdown state
    pub fn round(&self) -> &GameRound {
        &self.round
    }

    /// Asteroids in flight
    pub fn active(&self) -> &SlotMap<AsteroidId, Asteroid> {
        &self.active
    }

    /// Asteroids exploding
    pub fn hit_pool(&self) -> &[(AsteroidId, Asteroid)] {
        &self.hit
    }

    /// Bullets in flight
    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    /// Asteroid generator
    pub fn generator(&self) -> &AsteroidGenerator<'a, R> {
        &self.generator
    }

    /// Generator, for placing asteroids by hand
    pub fn generator_mut(&mut self) -> &mut AsteroidGenerator<'a, R> {
        &mut self.generator
    }

    /// Put an asteroid into the active pool
    pub fn insert_asteroid(&mut self, asteroid: Asteroid) -> AsteroidId {
        self.active.insert(asteroid)
    }

    /// Current aim as (azimuth, inclination) in degrees
    pub fn aim(&self) -> (f32, f32) {
        (self.azimuth, self.inclination)
    }

    /// Fire a bullet along the current aim
    ///
    /// The bullet's destination is the nearest active asteroid on its line
    /// at this instant.
    pub fn fire(&mut self, now: f64, devices: &mut Devices<'_>) {
        let mut bullet = self.bullet_gen.generate(self.azimuth, self.inclination, now);
        devices.play_sound(sounds::SHOT);
        bullet.set_destination(targeting::select_destination(&self.active, &bullet.direction()));
        log::debug!("Fired at azimuth {:.1} inclination {:.1}, target {:?}", self.azimuth, self.inclination, bullet.destination());
        self.bullets.push(bullet);
    }

    /// Run one frame at time `now`
    pub fn frame(&mut self, now: f64, devices: &mut Devices<'_>) -> Result<FrameOutcome, GameError> {
        let context = self.context;
        let gameplay = context.gameplay();
        let catalog = context.catalog();
        let paused = self.session.is_paused();
        self.session.count_frame();

        // Self-impact flash
        if let Some(background) = self
            .session
            .advance_flash(gameplay.flash_frames, context.config().engine.display.background)
        {
            devices.renderer.set_background(background);
        }

        // Spawn
        if !paused {
            if let Some(asteroid) = self.generator.generate_asteroid(now) {
                self.active.insert(asteroid);
            }
        }

        // Active asteroids: move, radar, self-impact
        let mut impacted = Vec::new();
        for (id, asteroid) in &mut self.active {
            if paused {
                asteroid.hold(now);
            } else {
                asteroid.move_to(now);
            }
            self.radar.draw_blip(devices.renderer, asteroid, self.azimuth)?;

            if asteroid.distance2() < gameplay.self_impact_radius2 {
                impacted.push(id);
                continue;
            }
            devices.renderer.submit(DrawCommand::Model {
                model: catalog.get(asteroid.model()).map_or("asteroid", |m| m.name.as_str()),
                transform: asteroid.transform(),
                explosion: None,
            })?;
        }
        for id in impacted {
            if let Some(asteroid) = self.active.remove(id) {
                self.generator.return_asteroid(&asteroid);
                self.session.start_flash();
                devices.play_sound(sounds::SELF_HIT);
                let lost = self.session.lose_life();
                log::debug!("Self impact by model {}, life lost: {}", asteroid.model(), lost);
            }
        }

        // Recycle finished explosions
        let linger = gameplay.hit_linger_secs;
        let generator = &mut self.generator;
        self.hit.retain(|(_, asteroid)| {
            if asteroid.hit_time().is_some_and(|t| t > linger) {
                generator.return_asteroid(asteroid);
                false
            } else {
                true
            }
        });

        // Explosions
        for (_, asteroid) in &mut self.hit {
            asteroid.move_to(now);
            devices.renderer.submit(DrawCommand::Model {
                model: catalog.get(asteroid.model()).map_or("asteroid", |m| m.name.as_str()),
                transform: asteroid.transform(),
                explosion: asteroid.hit_time(),
            })?;
        }

        // Bullets
        let max_distance2 = gameplay.bullet_max_distance2();
        let mut spent = vec![false; self.bullets.len()];
        for (index, bullet) in self.bullets.iter_mut().enumerate() {
            if paused {
                bullet.hold(now);
            } else {
                bullet.move_to(now);
            }

            let target = bullet
                .destination()
                .and_then(|dest| self.active.get(dest.id).map(|asteroid| (dest.id, asteroid.distance2())));
            if target.is_none() && bullet.destination().is_some() {
                log::trace!("Bullet target left the active pool");
                bullet.clear_destination();
            }

            match target {
                Some((id, target_distance2)) => {
                    if bullet.distance2() > target_distance2 {
                        if let Some(mut asteroid) = self.active.remove(id) {
                            asteroid.hit(now);
                            self.hit.push((id, asteroid));
                        }
                        self.session.add_point();
                        devices.play_sound(sounds::ASTRO_HIT);
                        log::debug!("Hit, score {}", self.session.score());
                        spent[index] = true;
                        continue;
                    }
                }
                None => {
                    if bullet.distance2() > max_distance2 {
                        spent[index] = true;
                        continue;
                    }
                }
            }

            devices.renderer.submit(DrawCommand::Model {
                model: BULLET_MODEL,
                transform: bullet.transform(),
                explosion: None,
            })?;
        }
        let mut index = 0;
        self.bullets.retain(|_| {
            let keep = !spent[index];
            index += 1;
            keep
        });

        // HUD and countdown banners
        hud::draw(devices.renderer, &self.session, gameplay.initial_lives)?;
        for overlay in self.round.tick() {
            devices.renderer.submit(DrawCommand::Text {
                font: BANNER_FONT,
                text: overlay.text,
                position: overlay.position,
                scale: BANNER_SCALE,
                alpha: overlay.alpha,
            })?;
        }

        // Aim
        let sample = devices.sensor.latest();
        self.inclination = -utils::rad_to_deg(sample.pitch);
        self.azimuth = utils::rad_to_deg(sample.yaw);

        // Input
        let controls = context.controls();
        let mut quit = false;
        if let Some(key) = devices.keys.read_key() {
            if key == controls.pause {
                let paused = self.session.toggle_pause();
                log::info!("Paused: {}", paused);
            } else if key == controls.free_play {
                let free_play = self.session.toggle_free_play();
                log::info!("Free play: {}", free_play);
            } else if key == controls.fire {
                self.fire(now, devices);
            } else if key == controls.quit {
                quit = true;
            }
        }
        let trigger = devices.pins.read(context.config().engine.input.fire_pin);
        if self.fire_button.update(trigger) {
            self.fire(now, devices);
        }

        devices
            .renderer
            .set_camera(CameraOrientation::new(self.inclination, self.azimuth));

        if quit {
            Ok(FrameOutcome::Quit)
        } else if self.session.is_over() {
            Ok(FrameOutcome::OutOfLives)
        } else {
            Ok(FrameOutcome::Continue)
        }
    }

    /// Play the round until quit, last life, or the display closes
    ///
    /// Whatever ends the loop, including an error, the sensor is stopped
    /// once, the keyboard closed and the display destroyed before returning.
    pub fn play(&mut self, clock: &dyn Clock, devices: &mut Devices<'_>) -> Result<RoundSummary, GameError> {
        log::info!("Round started");
        let result = screen::run(self, clock, devices);
        let ended = clock.now();

        if let Ok(Some(EndReason::OutOfLives)) = result {
            devices.play_sound(sounds::LOSE);
        }
        devices.teardown();

        let end = result?.unwrap_or(EndReason::DisplayClosed);
        let elapsed_secs = self.session.elapsed(ended);
        let frames = self.session.frames();
        let summary = RoundSummary {
            end,
            frames,
            score: self.session.score(),
            lives: self.session.lives(),
            elapsed_secs,
            average_fps: if elapsed_secs > 0.0 { frames as f64 / elapsed_secs } else { 0.0 },
        };
        log::info!(
            "Round over ({:?}): score {}, {} frames, {:.1} fps",
            summary.end,
            summary.score,
            summary.frames,
            summary.average_fps
        );
        Ok(summary)
    }
}

impl<R: Rng> Screen for GameLevel<'_, R> {
    type Outcome = EndReason;

    fn update(&mut self, now: f64, devices: &mut Devices<'_>) -> Result<Flow<EndReason>, GameError> {
        Ok(match self.frame(now, devices)? {
            FrameOutcome::Continue => Flow::Continue,
            FrameOutcome::Quit => Flow::Done(EndReason::Quit),
            FrameOutcome::OutOfLives => Flow::Done(EndReason::OutOfLives),
        })
    }
}
