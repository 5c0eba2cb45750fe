//! OBJ file loader for 3D models
//!
//! Only geometry is kept: vertex positions and triangle indices. Texture
//! coordinates, normals and material statements are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// OBJ parse errors
#[derive(Error, Debug)]
pub enum ObjError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed number or index
    #[error("Parse error on line {line}: {message}")]
    ParseError {
        /// 1-based line number
        line: usize,
        /// What was wrong
        message: String,
    },
    /// Structurally invalid file
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Triangle mesh read from an OBJ file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjMesh {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,
    /// Triangle list indices into `positions`
    pub indices: Vec<u32>,
}

impl ObjMesh {
    /// Radius of the origin-centred sphere enclosing every vertex
    pub fn bounding_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|[x, y, z]| (x * x + y * y + z * z).sqrt())
            .fold(0.0, f32::max)
    }

    /// Multiply every position by `factor`
    pub fn scale(&mut self, factor: f32) {
        for position in &mut self.positions {
            for axis in position.iter_mut() {
                *axis *= factor;
            }
        }
    }
}

/// Wavefront OBJ reader
pub struct ObjLoader;

impl ObjLoader {
    /// Load an OBJ file
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<ObjMesh, ObjError> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    /// Parse OBJ text from any buffered reader
    pub fn parse<R: BufRead>(reader: R) -> Result<ObjMesh, ObjError> {
        let mut mesh = ObjMesh::default();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            let number = number + 1;

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("v") => {
                    let mut coords = [0.0_f32; 3];
                    for coord in &mut coords {
                        *coord = parts
                            .next()
                            .and_then(|p| p.parse().ok())
                            .ok_or_else(|| ObjError::ParseError {
                                line: number,
                                message: "Invalid vertex position".to_string(),
                            })?;
                    }
                    mesh.positions.push(coords);
                }
                Some("f") => {
                    let mut face = Vec::with_capacity(4);
                    for vertex_data in parts {
                        // Position index is the first field of v/vt/vn, 1-based
                        let index: usize = vertex_data
                            .split('/')
                            .next()
                            .and_then(|p| p.parse().ok())
                            .filter(|&i| i >= 1)
                            .ok_or_else(|| ObjError::ParseError {
                                line: number,
                                message: format!("Invalid position index '{}'", vertex_data),
                            })?;
                        if index > mesh.positions.len() {
                            return Err(ObjError::InvalidFormat(format!(
                                "Position index {} out of bounds on line {}",
                                index, number
                            )));
                        }
                        face.push(u32::try_from(index - 1).map_err(|_| {
                            ObjError::InvalidFormat(format!("Index {} too large", index))
                        })?);
                    }

                    if face.len() < 3 {
                        return Err(ObjError::ParseError {
                            line: number,
                            message: "Face needs at least three vertices".to_string(),
                        });
                    }

                    // Triangulate face (simple fan triangulation)
                    for i in 1..face.len() - 1 {
                        mesh.indices.extend_from_slice(&[face[0], face[i], face[i + 1]]);
                    }
                }
                _ => {
                    // Ignore other commands
                }
            }
        }

        if mesh.positions.is_empty() {
            return Err(ObjError::InvalidFormat("No vertices found in OBJ file".to_string()));
        }

        Ok(mesh)
    }
}
