//! Game configuration
//!
//! Layered on top of [`EngineConfig`]: the engine section configures the
//! platform, the remaining sections tune the game itself. Every section is
//! optional in the file and falls back to its defaults.

use astro_engine::assets::ModelSpec;
use astro_engine::config::{Config, ConfigError};
use astro_engine::core::config::EngineConfig;
use astro_engine::input::KeyCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "ASTROGUN_CONFIG";

/// Configuration file used when [`CONFIG_ENV`] is unset
pub const DEFAULT_CONFIG_PATH: &str = "astrogun.toml";

/// Sound ids the game triggers
pub mod sounds {
    /// Round won
    pub const WIN: &str = "win";
    /// Bullet fired
    pub const SHOT: &str = "shot";
    /// Asteroid reached the player
    pub const SELF_HIT: &str = "self_hit";
    /// Bullet hit an asteroid
    pub const ASTRO_HIT: &str = "astro_hit";
    /// Round lost
    pub const LOSE: &str = "lose";
}

/// Complete game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Platform settings
    pub engine: EngineConfig,

    /// Gameplay tuning
    pub gameplay: GameplayConfig,

    /// Key bindings
    pub controls: ControlsConfig,

    /// Asteroid models, in catalog order
    pub models: Vec<ModelSpec>,

    /// Sound id to file name, relative to the sounds directory
    pub sounds: BTreeMap<String, String>,
}

/// Gameplay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Lives at the start of a round
    pub initial_lives: u32,

    /// Upper bound on catalog models used, and so on live asteroids
    pub asteroid_models: usize,

    /// Asteroid spawns per second; zero disables spawning
    pub spawn_rate: f32,

    /// Distance from the origin at which asteroids appear
    pub initial_distance: f32,

    /// Slowest inbound asteroid speed (units per second)
    pub asteroid_speed_min: f32,

    /// Fastest inbound asteroid speed (units per second)
    pub asteroid_speed_max: f32,

    /// Largest spawn elevation above or below the horizon (degrees)
    pub max_elevation_deg: f32,

    /// Largest asteroid spin rate per axis (degrees per second)
    pub max_spin_deg: f32,

    /// Squared distance below which an asteroid hits the player
    pub self_impact_radius2: f32,

    /// Bullet speed (units per second)
    pub bullet_speed: f32,

    /// Distance after which a bullet is discarded as a miss
    pub bullet_max_distance: f32,

    /// Seconds a hit asteroid keeps exploding before it is recycled
    pub hit_linger_secs: f32,

    /// Frames the "READY?" overlay is held
    pub ready_time: u32,

    /// Frames the "GO!" overlay is held
    pub go_time: u32,

    /// Frames of the red self-impact flash
    pub flash_frames: u32,

    /// Radar radius corresponding to `initial_distance`
    pub radar_scale: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            initial_lives: 5,
            asteroid_models: 5,
            spawn_rate: 0.1,
            initial_distance: 100.0,
            asteroid_speed_min: 2.0,
            asteroid_speed_max: 6.0,
            max_elevation_deg: 30.0,
            max_spin_deg: 40.0,
            self_impact_radius2: 16.0,
            bullet_speed: 50.0,
            bullet_max_distance: 150.0,
            hit_linger_secs: 8.0,
            ready_time: 30,
            go_time: 20,
            flash_frames: 10,
            radar_scale: 0.35,
        }
    }
}

impl GameplayConfig {
    /// Seconds between two spawns, `None` when spawning is disabled
    pub fn spawn_interval(&self) -> Option<f64> {
        (self.spawn_rate > 0.0).then(|| 1.0 / f64::from(self.spawn_rate))
    }

    /// Squared bullet range
    pub fn bullet_max_distance2(&self) -> f32 {
        self.bullet_max_distance * self.bullet_max_distance
    }
}

/// Key bindings, by key name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Fire key
    pub fire_key: String,

    /// Pause toggle
    pub pause_key: String,

    /// Free-play toggle
    pub free_play_key: String,

    /// Quit key
    pub quit_key: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            fire_key: "Space".to_string(),
            pause_key: "P".to_string(),
            free_play_key: "F".to_string(),
            quit_key: "Escape".to_string(),
        }
    }
}

/// Key bindings resolved to key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Fire key
    pub fire: KeyCode,
    /// Pause toggle
    pub pause: KeyCode,
    /// Free-play toggle
    pub free_play: KeyCode,
    /// Quit key
    pub quit: KeyCode,
}

impl ControlsConfig {
    /// Parse every key name
    pub fn resolve(&self) -> Result<Controls, ConfigError> {
        let parse = |name: &str| {
            name.parse::<KeyCode>()
                .map_err(|e| ConfigError::Invalid(format!("controls: {}", e)))
        };
        Ok(Controls {
            fire: parse(&self.fire_key)?,
            pause: parse(&self.pause_key)?,
            free_play: parse(&self.free_play_key)?,
            quit: parse(&self.quit_key)?,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let models = (1..=5)
            .map(|n| ModelSpec::new(format!("asteroid{}.obj", n), 1.0))
            .collect();
        let sounds = [
            (sounds::WIN, "126000__xserra__campeones.wav"),
            (sounds::SHOT, "156895__halgrimm__a-shot.wav"),
            (sounds::SELF_HIT, "218721__bareform__boom-bang.wav"),
            (sounds::ASTRO_HIT, "147584__cactus2003__far-off-boom.wav"),
            (sounds::LOSE, "178875__rocotilos__you-lose-evil.wav"),
        ]
        .into_iter()
        .map(|(id, file)| (id.to_string(), file.to_string()))
        .collect();

        Self {
            engine: EngineConfig::default(),
            gameplay: GameplayConfig::default(),
            controls: ControlsConfig::default(),
            models,
            sounds,
        }
    }
}

impl GameConfig {
    /// Load from `ASTROGUN_CONFIG` or `astrogun.toml`, defaults when absent
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let config = Self::load_or_default(&path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the game cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.controls.resolve()?;

        let gameplay = &self.gameplay;
        if self.models.is_empty() || gameplay.asteroid_models == 0 {
            return Err(ConfigError::Invalid("at least one asteroid model is required".to_string()));
        }
        if gameplay.ready_time == 0 || gameplay.go_time == 0 {
            return Err(ConfigError::Invalid("ready_time and go_time must be at least one frame".to_string()));
        }
        if gameplay.initial_lives == 0 {
            return Err(ConfigError::Invalid("initial_lives must be at least 1".to_string()));
        }
        if gameplay.bullet_speed <= 0.0 || gameplay.asteroid_speed_min <= 0.0 {
            return Err(ConfigError::Invalid("speeds must be positive".to_string()));
        }
        if gameplay.asteroid_speed_max < gameplay.asteroid_speed_min {
            return Err(ConfigError::Invalid(format!(
                "asteroid_speed_max {} below asteroid_speed_min {}",
                gameplay.asteroid_speed_max, gameplay.asteroid_speed_min
            )));
        }
        if gameplay.initial_distance <= 0.0 || gameplay.bullet_max_distance <= 0.0 {
            return Err(ConfigError::Invalid("distances must be positive".to_string()));
        }
        if gameplay.spawn_rate < 0.0 || gameplay.max_elevation_deg < 0.0 || gameplay.max_spin_deg < 0.0 {
            return Err(ConfigError::Invalid("spawn_rate, max_elevation_deg and max_spin_deg cannot be negative".to_string()));
        }
        Ok(())
    }
}

impl Config for GameConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_validate() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.models.len(), 5);
        assert!(config.sounds.contains_key(sounds::ASTRO_HIT));
        assert_relative_eq!(config.gameplay.spawn_interval().unwrap(), 10.0, epsilon = 1e-6);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            [gameplay]
            initial_lives = 3
            bullet_speed = 80.0

            [controls]
            fire_key = "Enter"

            [[models]]
            file = "rock.obj"
            scale = 2.5
            "#,
        )
        .unwrap();

        assert_eq!(config.gameplay.initial_lives, 3);
        assert_relative_eq!(config.gameplay.hit_linger_secs, 8.0);
        assert_eq!(config.models, vec![ModelSpec::new("rock.obj", 2.5)]);
        assert_eq!(config.controls.resolve().unwrap().fire, KeyCode::Enter);
        assert_eq!(config.engine.display.frames_per_second, 30);
    }

    #[test]
    fn test_zero_countdown_rejected() {
        let mut config = GameConfig::default();
        config.gameplay.ready_time = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_model_list_rejected() {
        let mut config = GameConfig::default();
        config.models.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut config = GameConfig::default();
        config.controls.quit_key = "Hyper".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_disabled_spawning_has_no_interval() {
        let gameplay = GameplayConfig {
            spawn_rate: 0.0,
            ..GameplayConfig::default()
        };
        assert!(gameplay.spawn_interval().is_none());
    }
}
