//! Asset management
//!
//! Asteroid models are parsed from Wavefront OBJ files once, pre-scaled, and
//! persisted in a catalog cache so later start-ups skip the parse.

pub mod model_catalog;
pub mod obj_loader;

pub use model_catalog::{Model, ModelCatalog, ModelSpec};
pub use obj_loader::{ObjError, ObjLoader, ObjMesh};

use std::path::PathBuf;
use thiserror::Error;

/// Asset errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// File could not be read or written
    #[error("IO error on {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying failure
        source: std::io::Error,
    },

    /// OBJ file could not be parsed
    #[error("Failed to load model {path}: {source}")]
    Obj {
        /// Model file
        path: PathBuf,
        /// Parse failure
        source: ObjError,
    },

    /// Catalog cache is unreadable
    #[error("Model cache error: {0}")]
    Cache(String),

    /// No model was configured
    #[error("Model catalog is empty")]
    Empty,
}
