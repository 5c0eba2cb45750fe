//! Sound asset management
//!
//! Reads sound files into memory once so that triggering a sound during the
//! game never touches the filesystem.

use super::AudioError;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Unique identifier for a sound
pub type SoundId = String;

/// Preloaded sound bank
#[derive(Default)]
pub struct SoundManager {
    loaded_sounds: HashMap<SoundId, Arc<[u8]>>,
}

impl fmt::Debug for SoundManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.loaded_sounds.keys().map(String::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("SoundManager").field("sounds", &ids).finish()
    }
}

impl SoundManager {
    /// Create an empty sound manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `(id, file)` pair from `dir`
    ///
    /// # Errors
    /// Fails on the first file that cannot be read.
    pub fn load_bank<'a, I>(dir: &Path, entries: I) -> Result<Self, AudioError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut manager = Self::new();
        for (id, file) in entries {
            let bytes = std::fs::read(dir.join(file)).map_err(|source| AudioError::LoadFailed {
                name: id.to_string(),
                source,
            })?;
            log::debug!("Loaded sound {} ({} bytes)", id, bytes.len());
            manager.insert(id, bytes);
        }
        Ok(manager)
    }

    /// Register encoded sound data under `id`
    pub fn insert(&mut self, id: &str, data: Vec<u8>) {
        self.loaded_sounds.insert(id.to_string(), Arc::from(data));
    }

    /// Encoded data for `id`
    pub fn get(&self, id: &str) -> Result<Arc<[u8]>, AudioError> {
        self.loaded_sounds
            .get(id)
            .cloned()
            .ok_or_else(|| AudioError::UnknownSound(id.to_string()))
    }

    /// Check if a sound is loaded
    pub fn is_loaded(&self, sound_id: &str) -> bool {
        self.loaded_sounds.contains_key(sound_id)
    }

    /// Number of loaded sounds
    pub fn len(&self) -> usize {
        self.loaded_sounds.len()
    }

    /// Whether no sound is loaded
    pub fn is_empty(&self) -> bool {
        self.loaded_sounds.is_empty()
    }
}
