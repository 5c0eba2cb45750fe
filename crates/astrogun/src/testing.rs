//! Recording fakes for the platform collaborators

use crate::devices::Devices;
use astro_engine::audio::{AudioError, AudioOutput};
use astro_engine::foundation::math::Vec3;
use astro_engine::input::{DigitalInput, KeyCode, KeySource, IDLE_LEVEL};
use astro_engine::render::{CameraOrientation, DrawCommand, RenderError, Renderer};
use astro_engine::sensor::{OrientationSource, SensorSample};
use std::collections::{HashMap, VecDeque};

/// Owned copy of a draw command
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Drawn {
    Model {
        model: String,
        position: Vec3,
        explosion: Option<f32>,
    },
    Sprite {
        sprite: String,
        position: Vec3,
    },
    Text {
        text: String,
        alpha: f32,
    },
}

#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub frames: u64,
    pub max_frames: Option<u64>,
    /// Draws of the current frame
    pub frame: Vec<Drawn>,
    pub backgrounds: Vec<[f32; 4]>,
    pub camera: Option<CameraOrientation>,
    pub destroyed: u32,
    /// Fail every submit during this frame
    pub fail_on_frame: Option<u64>,
}

impl RecordingRenderer {
    pub fn count_sprite(&self, name: &str) -> usize {
        self.frame
            .iter()
            .filter(|d| matches!(d, Drawn::Sprite { sprite, .. } if sprite == name))
            .count()
    }

    pub fn texts(&self) -> Vec<String> {
        self.frame
            .iter()
            .filter_map(|d| match d {
                Drawn::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn models(&self) -> Vec<(String, Option<f32>)> {
        self.frame
            .iter()
            .filter_map(|d| match d {
                Drawn::Model { model, explosion, .. } => Some((model.clone(), *explosion)),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn loop_running(&mut self) -> bool {
        if self.destroyed > 0 || self.max_frames.is_some_and(|max| self.frames >= max) {
            return false;
        }
        self.frames += 1;
        self.frame.clear();
        true
    }

    fn set_background(&mut self, rgba: [f32; 4]) {
        self.backgrounds.push(rgba);
    }

    fn set_camera(&mut self, orientation: CameraOrientation) {
        self.camera = Some(orientation);
    }

    fn submit(&mut self, command: DrawCommand<'_>) -> Result<(), RenderError> {
        if self.fail_on_frame == Some(self.frames) {
            return Err(RenderError::Destroyed);
        }
        self.frame.push(match command {
            DrawCommand::Model {
                model,
                transform,
                explosion,
            } => Drawn::Model {
                model: model.to_string(),
                position: transform.position,
                explosion,
            },
            DrawCommand::Sprite { sprite, position, .. } => Drawn::Sprite {
                sprite: sprite.to_string(),
                position,
            },
            DrawCommand::Text { text, alpha, .. } => Drawn::Text {
                text: text.to_string(),
                alpha,
            },
        });
        Ok(())
    }

    fn destroy(&mut self) {
        self.destroyed += 1;
    }
}

#[derive(Debug, Default)]
pub(crate) struct ScriptedKeys {
    queue: VecDeque<Option<KeyCode>>,
    pub closed: u32,
}

impl ScriptedKeys {
    /// One entry per frame; `None` is a frame without a key
    pub fn script(&mut self, keys: &[Option<KeyCode>]) {
        self.queue.extend(keys.iter().copied());
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> Option<KeyCode> {
        self.queue.pop_front().flatten()
    }

    fn close(&mut self) {
        self.closed += 1;
    }
}

#[derive(Debug, Default)]
pub(crate) struct ScriptedPins {
    levels: HashMap<u32, VecDeque<u8>>,
}

impl ScriptedPins {
    /// Levels read from `pin` on successive frames, idle afterwards
    pub fn script(&mut self, pin: u32, levels: &[u8]) {
        self.levels.entry(pin).or_default().extend(levels.iter().copied());
    }
}

impl DigitalInput for ScriptedPins {
    fn read(&mut self, pin: u32) -> u8 {
        self.levels
            .get_mut(&pin)
            .and_then(VecDeque::pop_front)
            .unwrap_or(IDLE_LEVEL)
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingAudio {
    pub played: Vec<String>,
    pub fail: bool,
}

impl RecordingAudio {
    pub fn count(&self, sound: &str) -> usize {
        self.played.iter().filter(|s| *s == sound).count()
    }
}

impl AudioOutput for RecordingAudio {
    fn play(&mut self, sound: &str) -> Result<(), AudioError> {
        if self.fail {
            return Err(AudioError::PlaybackFailed("scripted failure".to_string()));
        }
        self.played.push(sound.to_string());
        Ok(())
    }
}

#[derive(Debug)]
pub(crate) struct FakeOrientation {
    pub sample: SensorSample,
    pub stop_calls: u32,
    running: bool,
}

impl Default for FakeOrientation {
    fn default() -> Self {
        Self {
            sample: SensorSample::default(),
            stop_calls: 0,
            running: true,
        }
    }
}

impl OrientationSource for FakeOrientation {
    fn latest(&self) -> SensorSample {
        self.sample
    }

    fn stop(&mut self) -> bool {
        self.stop_calls += 1;
        std::mem::replace(&mut self.running, false)
    }
}

/// All fakes together
#[derive(Debug, Default)]
pub(crate) struct Rig {
    pub renderer: RecordingRenderer,
    pub keys: ScriptedKeys,
    pub pins: ScriptedPins,
    pub audio: RecordingAudio,
    pub sensor: FakeOrientation,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn devices(&mut self) -> Devices<'_> {
        Devices {
            renderer: &mut self.renderer,
            keys: &mut self.keys,
            pins: &mut self.pins,
            audio: &mut self.audio,
            sensor: &mut self.sensor,
        }
    }
}
