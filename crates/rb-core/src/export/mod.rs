//! Handing generated buffers to consumers
//!
//! Generators return plain [`MeshData`]; anything that wants to render,
//! collide with or persist a mesh implements [`MeshSink`].

mod stl;

use crate::collider::ColliderShape;
use crate::mesh::MeshData;

pub use stl::{StlExporter, save_stl, write_stl};

/// Consumer of generated meshes and collider sets
pub trait MeshSink {
    type Error;

    /// Take ownership of a copy of the mesh buffers
    fn submit_mesh(&mut self, mesh: &MeshData) -> Result<(), Self::Error>;

    /// Register colliders for the mesh named `name`
    ///
    /// Sinks without a physics side ignore them.
    fn submit_colliders(
        &mut self,
        _name: &str,
        _colliders: &[ColliderShape],
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Turn a mesh name into a file stem
pub fn file_stem_for(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "unnamed".to_string()
    } else {
        stem
    }
}

/// Export-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Write error: {0}")]
    Write(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
}
