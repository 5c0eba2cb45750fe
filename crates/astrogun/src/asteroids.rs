//! Asteroid entities and their generator
//!
//! Every catalog model backs at most one live asteroid. The generator hands
//! out a model claim with each spawn and takes it back when the asteroid is
//! destroyed, so the free pool is simply the set of unclaimed models.

use crate::config::GameplayConfig;
use astro_engine::assets::ModelCatalog;
use astro_engine::foundation::math::{utils, Transform, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slotmap::new_key_type;

new_key_type! {
    /// Identity of an asteroid while it is active
    pub struct AsteroidId;
}

/// Explosion state of an asteroid that was shot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitState {
    /// Time of the hit
    pub at: f64,
    /// Seconds since the hit, never decreasing
    pub hit_time: f32,
}

/// A single asteroid
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub(crate) model: usize,
    pub(crate) position: Vec3,
    /// Outward unit vector; the asteroid travels against it
    pub(crate) heading: Vec3,
    pub(crate) azimuth: f32,
    pub(crate) elevation: f32,
    pub(crate) speed: f32,
    pub(crate) radius: f32,
    pub(crate) rotation: Vec3,
    pub(crate) spin: Vec3,
    pub(crate) last_move: f64,
    pub(crate) hit: Option<HitState>,
}

impl Asteroid {
    /// Catalog index of the model
    pub fn model(&self) -> usize {
        self.model
    }

    /// Current position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Spawn azimuth in degrees
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Spawn elevation in degrees
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Inbound speed
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Collision sphere radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Squared distance from the origin
    pub fn distance2(&self) -> f32 {
        utils::distance2(&self.position)
    }

    /// Seconds since the asteroid was shot, `None` while intact
    pub fn hit_time(&self) -> Option<f32> {
        self.hit.map(|h| h.hit_time)
    }

    /// Placement for drawing
    pub fn transform(&self) -> Transform {
        Transform::from_position_rotation(self.position, self.rotation)
    }

    /// Advance to `now`
    ///
    /// An intact asteroid moves toward the origin by `speed * (now - last)`
    /// and keeps spinning. A hit asteroid stays in place and only its
    /// `hit_time` advances.
    pub fn move_to(&mut self, now: f64) {
        let dt = (now - self.last_move).max(0.0) as f32;
        self.last_move = now;

        match &mut self.hit {
            Some(hit) => {
                hit.hit_time = hit.hit_time.max((now - hit.at) as f32);
            }
            None => {
                // Never carried past the origin, however long the frame
                let step = (self.speed * dt).min(self.position.dot(&self.heading).max(0.0));
                self.position -= self.heading * step;
                self.rotation += self.spin * dt;
            }
        }
    }

    /// Let `now` pass without moving (game paused)
    pub fn hold(&mut self, now: f64) {
        self.last_move = self.last_move.max(now);
    }

    /// Enter the exploding state
    pub fn hit(&mut self, now: f64) {
        self.hit = Some(HitState { at: now, hit_time: 0.0 });
        self.last_move = now;
    }
}

/// Spawns asteroids and recycles their model claims
pub struct AsteroidGenerator<'a, R = StdRng> {
    catalog: &'a ModelCatalog,
    settings: &'a GameplayConfig,
    free: Vec<bool>,
    last_spawn: Option<f64>,
    rng: R,
}

impl<'a> AsteroidGenerator<'a> {
    /// Create a generator seeded from the OS
    pub fn new(catalog: &'a ModelCatalog, settings: &'a GameplayConfig) -> Self {
        Self::with_rng(catalog, settings, StdRng::from_entropy())
    }
}

impl<'a, R: Rng> AsteroidGenerator<'a, R> {
    /// Create a generator drawing from `rng`
    pub fn with_rng(catalog: &'a ModelCatalog, settings: &'a GameplayConfig, rng: R) -> Self {
        let capacity = catalog.len().min(settings.asteroid_models);
        Self {
            catalog,
            settings,
            free: vec![true; capacity],
            last_spawn: None,
            rng,
        }
    }

    /// Number of models that can back a live asteroid
    pub fn capacity(&self) -> usize {
        self.free.len()
    }

    /// Models currently unclaimed
    pub fn free_count(&self) -> usize {
        self.free.iter().filter(|&&free| free).count()
    }

    /// Whether `model` is unclaimed
    pub fn is_free(&self, model: usize) -> bool {
        self.free.get(model).copied().unwrap_or(false)
    }

    /// Possibly spawn one asteroid
    ///
    /// Returns `None` while the spawn interval has not elapsed since the last
    /// spawn, when spawning is disabled, or when every model is claimed.
    pub fn generate_asteroid(&mut self, now: f64) -> Option<Asteroid> {
        let interval = self.settings.spawn_interval()?;
        if self.last_spawn.is_some_and(|last| now - last < interval) {
            return None;
        }

        let free: Vec<usize> = (0..self.free.len()).filter(|&m| self.free[m]).collect();
        if free.is_empty() {
            return None;
        }

        let settings = self.settings;
        let model = free[self.rng.gen_range(0..free.len())];
        let azimuth = self.rng.gen_range(0.0_f32..360.0);
        let elevation = self
            .rng
            .gen_range(-settings.max_elevation_deg..=settings.max_elevation_deg);
        let speed = self
            .rng
            .gen_range(settings.asteroid_speed_min..=settings.asteroid_speed_max);
        let mut spin = Vec3::zeros();
        for axis in spin.iter_mut() {
            *axis = self.rng.gen_range(-settings.max_spin_deg..=settings.max_spin_deg);
        }

        let mut asteroid = self.spawn_at(now, model, azimuth, elevation, speed)?;
        asteroid.spin = spin;
        log::debug!(
            "Spawned asteroid model {} at azimuth {:.1} elevation {:.1} speed {:.2}",
            model,
            azimuth,
            elevation,
            speed
        );
        Some(asteroid)
    }

    /// Spawn an asteroid from `model` at the given angles
    ///
    /// Bypasses the spawn interval but not the free pool: `None` if the model
    /// is already claimed or outside the catalog.
    pub fn spawn_at(&mut self, now: f64, model: usize, azimuth: f32, elevation: f32, speed: f32) -> Option<Asteroid> {
        if !self.is_free(model) {
            return None;
        }
        let radius = self.catalog.get(model)?.radius;
        self.free[model] = false;
        self.last_spawn = Some(now);

        let heading = utils::direction_from_angles(azimuth, elevation);
        Some(Asteroid {
            model,
            position: heading * self.settings.initial_distance,
            heading,
            azimuth,
            elevation,
            speed,
            radius,
            rotation: Vec3::zeros(),
            spin: Vec3::zeros(),
            last_move: now,
            hit: None,
        })
    }

    /// Release the model claim held by `asteroid`
    ///
    /// Returns `false`, and changes nothing, when the claim was already
    /// released.
    pub fn return_asteroid(&mut self, asteroid: &Asteroid) -> bool {
        match self.free.get_mut(asteroid.model) {
            Some(free) if !*free => {
                *free = true;
                true
            }
            _ => {
                log::warn!("Asteroid model {} returned twice", asteroid.model);
                false
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::catalog;
    use super::*;
    use approx::assert_relative_eq;

    fn settings() -> GameplayConfig {
        GameplayConfig {
            spawn_rate: 1.0,
            ..GameplayConfig::default()
        }
    }

    #[test]
    fn test_spawn_interval_gates_generation() {
        let catalog = catalog(5, 5.0);
        let settings = settings();
        let mut gen = AsteroidGenerator::with_rng(&catalog, &settings, StdRng::seed_from_u64(7));

        assert!(gen.generate_asteroid(0.0).is_some());
        assert!(gen.generate_asteroid(0.5).is_none());
        assert!(gen.generate_asteroid(1.0).is_some());
        assert_eq!(gen.free_count(), 3);
    }

    #[test]
    fn test_free_pool_caps_live_asteroids() {
        let catalog = catalog(3, 5.0);
        let settings = settings();
        let mut gen = AsteroidGenerator::with_rng(&catalog, &settings, StdRng::seed_from_u64(1));

        let spawned: Vec<Asteroid> = (0..6).filter_map(|t| gen.generate_asteroid(f64::from(t) * 2.0)).collect();
        assert_eq!(spawned.len(), 3);
        let mut models: Vec<usize> = spawned.iter().map(Asteroid::model).collect();
        models.sort_unstable();
        assert_eq!(models, vec![0, 1, 2]);

        assert!(gen.return_asteroid(&spawned[1]));
        let next = gen.generate_asteroid(20.0).unwrap();
        assert_eq!(next.model(), spawned[1].model());
    }

    #[test]
    fn test_asteroid_models_limits_capacity() {
        let catalog = catalog(8, 5.0);
        let settings = GameplayConfig {
            asteroid_models: 5,
            ..settings()
        };
        let gen = AsteroidGenerator::with_rng(&catalog, &settings, StdRng::seed_from_u64(1));
        assert_eq!(gen.capacity(), 5);
    }

    #[test]
    fn test_double_return_is_ignored() {
        let catalog = catalog(2, 5.0);
        let settings = settings();
        let mut gen = AsteroidGenerator::with_rng(&catalog, &settings, StdRng::seed_from_u64(1));
        let asteroid = gen.spawn_at(0.0, 1, 0.0, 0.0, 1.0).unwrap();

        assert!(gen.return_asteroid(&asteroid));
        assert!(!gen.return_asteroid(&asteroid));
        assert_eq!(gen.free_count(), 2);
    }

    #[test]
    fn test_spawn_at_respects_claims() {
        let catalog = catalog(2, 5.0);
        let settings = settings();
        let mut gen = AsteroidGenerator::with_rng(&catalog, &settings, StdRng::seed_from_u64(1));
        assert!(gen.spawn_at(0.0, 0, 0.0, 0.0, 1.0).is_some());
        assert!(gen.spawn_at(0.0, 0, 90.0, 0.0, 1.0).is_none());
        assert!(gen.spawn_at(0.0, 5, 0.0, 0.0, 1.0).is_none());
    }

    #[test]
    fn test_spawned_asteroid_is_placed_at_initial_distance() {
        let catalog = catalog(5, 4.0);
        let settings = settings();
        let mut gen = AsteroidGenerator::with_rng(&catalog, &settings, StdRng::seed_from_u64(42));
        for t in 0..5 {
            let asteroid = gen.generate_asteroid(f64::from(t) * 10.0).unwrap();
            assert_relative_eq!(asteroid.distance2().sqrt(), 100.0, epsilon = 1e-3);
            assert!(asteroid.elevation().abs() <= settings.max_elevation_deg);
            assert!((0.0..360.0).contains(&asteroid.azimuth()));
            assert!(asteroid.speed() >= settings.asteroid_speed_min && asteroid.speed() <= settings.asteroid_speed_max);
            assert_relative_eq!(asteroid.radius(), 4.0);
        }
    }

    #[test]
    fn test_move_is_deterministic_in_elapsed_time() {
        let catalog = catalog(2, 5.0);
        let settings = settings();
        let mut gen = AsteroidGenerator::with_rng(&catalog, &settings, StdRng::seed_from_u64(1));
        let mut stepped = gen.spawn_at(0.0, 0, 0.0, 0.0, 10.0).unwrap();
        let mut jumped = stepped.clone();

        for i in 1..=10 {
            stepped.move_to(f64::from(i) * 0.1);
        }
        jumped.move_to(1.0);

        assert_relative_eq!(stepped.position().z, 90.0, epsilon = 1e-3);
        assert_relative_eq!(stepped.position(), jumped.position(), epsilon = 1e-3);
    }

    #[test]
    fn test_long_frame_stops_at_origin() {
        let catalog = catalog(1, 5.0);
        let settings = settings();
        let mut gen = AsteroidGenerator::with_rng(&catalog, &settings, StdRng::seed_from_u64(1));
        let mut asteroid = gen.spawn_at(0.0, 0, 30.0, 10.0, 50.0).unwrap();

        asteroid.move_to(10.0);
        assert_relative_eq!(asteroid.distance2(), 0.0, epsilon = 1e-6);
        asteroid.move_to(20.0);
        assert_relative_eq!(asteroid.distance2(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_hold_skips_paused_time() {
        let catalog = catalog(1, 5.0);
        let settings = settings();
        let mut gen = AsteroidGenerator::with_rng(&catalog, &settings, StdRng::seed_from_u64(1));
        let mut asteroid = gen.spawn_at(0.0, 0, 0.0, 0.0, 10.0).unwrap();

        asteroid.hold(5.0);
        asteroid.move_to(6.0);
        assert_relative_eq!(asteroid.position().z, 90.0, epsilon = 1e-3);
    }

    #[test]
    fn test_hit_time_is_monotonic_and_position_frozen() {
        let catalog = catalog(1, 5.0);
        let settings = settings();
        let mut gen = AsteroidGenerator::with_rng(&catalog, &settings, StdRng::seed_from_u64(1));
        let mut asteroid = gen.spawn_at(0.0, 0, 0.0, 0.0, 10.0).unwrap();

        asteroid.hit(2.0);
        assert_eq!(asteroid.hit_time(), Some(0.0));
        let frozen = asteroid.position();

        asteroid.move_to(3.0);
        assert_relative_eq!(asteroid.hit_time().unwrap(), 1.0);
        asteroid.move_to(2.5);
        assert_relative_eq!(asteroid.hit_time().unwrap(), 1.0);
        assert_eq!(asteroid.position(), frozen);
    }
}
