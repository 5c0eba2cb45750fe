//! Pre-scaled model catalog with an on-disk cache
//!
//! The first start-up parses every configured OBJ file, scales it and
//! measures its bounding radius, then writes the result as RON. Later
//! start-ups read the cache instead, as long as it was built from the same
//! model list.

use super::{AssetError, ObjLoader};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Model file and the uniform scale applied at load time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// File name relative to the models directory
    pub file: String,
    /// Uniform scale factor
    pub scale: f32,
}

impl ModelSpec {
    /// Create a model spec
    pub fn new(file: impl Into<String>, scale: f32) -> Self {
        Self {
            file: file.into(),
            scale,
        }
    }

    /// Model name: the file name without its extension
    pub fn name(&self) -> &str {
        Path::new(&self.file)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.file)
    }
}

/// Scaled model geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Model name used in draw commands
    pub name: String,
    /// Bounding sphere radius after scaling
    pub radius: f32,
    /// Vertex positions after scaling
    pub positions: Vec<[f32; 3]>,
    /// Triangle list indices
    pub indices: Vec<u32>,
}

impl Model {
    /// Model with a radius and no geometry
    pub fn bare(name: impl Into<String>, radius: f32) -> Self {
        Self {
            name: name.into(),
            radius,
            positions: Vec::new(),
            indices: Vec::new(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CatalogCache {
    specs: Vec<ModelSpec>,
    models: Vec<Model>,
}

/// Immutable list of loaded models, shared read-only by the game
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelCatalog {
    models: Vec<Model>,
}

impl ModelCatalog {
    /// Build a catalog from already loaded models
    pub fn from_models(models: Vec<Model>) -> Self {
        Self { models }
    }

    /// Read the cache at `cache_path`, or parse the models and write it
    ///
    /// A cache built from a different model list is rebuilt. A cache that
    /// cannot be written is logged and skipped.
    ///
    /// # Errors
    /// - `Empty` when `specs` is empty
    /// - `Obj` when a model file cannot be parsed
    /// - `Cache` when an existing cache is corrupt
    pub fn load_or_build(specs: &[ModelSpec], models_dir: &Path, cache_path: &Path) -> Result<Self, AssetError> {
        if specs.is_empty() {
            return Err(AssetError::Empty);
        }

        if cache_path.exists() {
            let contents = std::fs::read_to_string(cache_path).map_err(|source| AssetError::Io {
                path: cache_path.to_path_buf(),
                source,
            })?;
            let cache: CatalogCache = ron::from_str(&contents)
                .map_err(|e| AssetError::Cache(format!("{}: {}", cache_path.display(), e)))?;
            if cache.specs == specs {
                log::info!("Loaded {} models from cache {}", cache.models.len(), cache_path.display());
                return Ok(Self::from_models(cache.models));
            }
            log::info!("Model list changed, rebuilding {}", cache_path.display());
        }

        let catalog = Self::build(specs, models_dir)?;
        if let Err(e) = catalog.write_cache(specs, cache_path) {
            log::warn!("Could not write model cache: {}", e);
        }
        Ok(catalog)
    }

    /// Parse and scale every model
    pub fn build(specs: &[ModelSpec], models_dir: &Path) -> Result<Self, AssetError> {
        let mut models = Vec::with_capacity(specs.len());
        for spec in specs {
            let path = models_dir.join(&spec.file);
            let mut mesh = ObjLoader::load_obj(&path).map_err(|source| AssetError::Obj { path, source })?;
            mesh.scale(spec.scale);
            let radius = mesh.bounding_radius();
            log::debug!("Model {} radius {:.2}", spec.name(), radius);
            models.push(Model {
                name: spec.name().to_string(),
                radius,
                positions: mesh.positions,
                indices: mesh.indices,
            });
        }
        Ok(Self::from_models(models))
    }

    fn write_cache(&self, specs: &[ModelSpec], cache_path: &Path) -> Result<(), AssetError> {
        if let Some(dir) = cache_path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| AssetError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let cache = CatalogCache {
            specs: specs.to_vec(),
            models: self.models.clone(),
        };
        let contents = ron::ser::to_string_pretty(&cache, ron::ser::PrettyConfig::default())
            .map_err(|e| AssetError::Cache(e.to_string()))?;
        std::fs::write(cache_path, contents).map_err(|source| AssetError::Io {
            path: cache_path.to_path_buf(),
            source,
        })
    }

    /// Model at `index`
    pub fn get(&self, index: usize) -> Option<&Model> {
        self.models.get(index)
    }

    /// All models in catalog order
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Number of models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the catalog holds no model
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
