//! Shape set documents
//!
//! A shape set is a named list of generator invocations stored as RON:
//!
//! ```ron
//! (
//!     version: 1,
//!     name: "Demo",
//!     shapes: [
//!         (name: "floor", kind: Grid((width: 10, height: 4))),
//!         (name: "crate", kind: RoundedCube((
//!             dimensions: (width: 4, height: 4, length: 6),
//!             roundness: 1,
//!         ))),
//!     ],
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::collider::{ColliderShape, generate_colliders};
use crate::constants::SHAPE_SET_VERSION;
use crate::export::MeshSink;
use crate::gizmo::{CirclePoint, GizmoPrimitive, MappingType, circle_gizmos, sample_circle_mapping};
use crate::mesh::MeshData;
use crate::primitive::{generate_cube, generate_grid, generate_rounded_cube};
use crate::shape::{BoxDimensions, GridDimensions, RoundedBox, ShapeError};

/// Which generator to run, with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Grid(GridDimensions),
    Cube(BoxDimensions),
    RoundedCube(RoundedBox),
    CircleGizmo {
        resolution: u32,
        #[serde(default)]
        mapping: MappingType,
    },
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Grid(_) => "Grid",
            ShapeKind::Cube(_) => "Cube",
            ShapeKind::RoundedCube(_) => "Rounded Cube",
            ShapeKind::CircleGizmo { .. } => "Circle Gizmo",
        }
    }
}

/// One named generator invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub name: String,
    pub kind: ShapeKind,
}

impl ShapeEntry {
    pub fn new(name: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Run the generator
    ///
    /// Meshes are renamed after the entry so exported files are
    /// distinguishable.
    pub fn generate(&self) -> Result<GeneratedShape, ShapeError> {
        let named = |mut mesh: MeshData| {
            mesh.name = self.name.clone();
            mesh
        };

        Ok(match self.kind {
            ShapeKind::Grid(dims) => GeneratedShape::Mesh {
                mesh: named(generate_grid(dims)?),
                colliders: Vec::new(),
            },
            ShapeKind::Cube(dims) => GeneratedShape::Mesh {
                mesh: named(generate_cube(dims)?),
                colliders: Vec::new(),
            },
            ShapeKind::RoundedCube(shape) => GeneratedShape::Mesh {
                mesh: named(generate_rounded_cube(shape)?),
                colliders: generate_colliders(shape)?,
            },
            ShapeKind::CircleGizmo {
                resolution,
                mapping,
            } => {
                let points = sample_circle_mapping(resolution, mapping)?;
                let primitives = circle_gizmos(&points);
                GeneratedShape::Gizmo {
                    name: self.name.clone(),
                    points,
                    primitives,
                }
            }
        })
    }
}

/// Output of one shape entry
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedShape {
    Mesh {
        mesh: MeshData,
        colliders: Vec<ColliderShape>,
    },
    Gizmo {
        name: String,
        points: Vec<CirclePoint>,
        primitives: Vec<GizmoPrimitive>,
    },
}

impl GeneratedShape {
    pub fn name(&self) -> &str {
        match self {
            GeneratedShape::Mesh { mesh, .. } => &mesh.name,
            GeneratedShape::Gizmo { name, .. } => name,
        }
    }

    /// Hand meshes and colliders to a sink; gizmos have no mesh to submit
    ///
    /// Returns whether anything was submitted.
    pub fn submit_to<S: MeshSink>(&self, sink: &mut S) -> Result<bool, S::Error> {
        match self {
            GeneratedShape::Mesh { mesh, colliders } => {
                sink.submit_mesh(mesh)?;
                if !colliders.is_empty() {
                    sink.submit_colliders(&mesh.name, colliders)?;
                }
                Ok(true)
            }
            GeneratedShape::Gizmo { .. } => Ok(false),
        }
    }
}

/// Named list of shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSet {
    /// File format version
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub shapes: Vec<ShapeEntry>,
}

impl Default for ShapeSet {
    fn default() -> Self {
        Self::new("New Shape Set")
    }
}

impl ShapeSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: SHAPE_SET_VERSION,
            name: name.into(),
            shapes: Vec::new(),
        }
    }

    /// Append a shape, builder style
    pub fn with_shape(mut self, name: impl Into<String>, kind: ShapeKind) -> Self {
        self.shapes.push(ShapeEntry::new(name, kind));
        self
    }

    /// Save to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_bytes()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Serialize to RON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::load_from_bytes(&content)
    }

    /// Load from RON bytes
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, ConfigError> {
        let content =
            std::str::from_utf8(data).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        let set: ShapeSet =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        if set.version > SHAPE_SET_VERSION {
            return Err(ConfigError::UnsupportedVersion(set.version));
        }
        Ok(set)
    }

    /// Run every generator, stopping at the first invalid shape
    pub fn generate_all(&self) -> Result<Vec<GeneratedShape>, ConfigError> {
        self.shapes
            .iter()
            .map(|entry| {
                entry.generate().map_err(|source| {
                    tracing::warn!("Rejected shape '{}': {}", entry.name, source);
                    ConfigError::Shape {
                        name: entry.name.clone(),
                        source,
                    }
                })
            })
            .collect()
    }
}

/// Shape set errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Unsupported shape set version {0}")]
    UnsupportedVersion(u32),
    #[error("Invalid shape '{name}': {source}")]
    Shape { name: String, source: ShapeError },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> ShapeSet {
        ShapeSet::new("Demo")
            .with_shape("floor", ShapeKind::Grid(GridDimensions::new(4, 2)))
            .with_shape("block", ShapeKind::Cube(BoxDimensions::new(2, 3, 1)))
            .with_shape(
                "crate",
                ShapeKind::RoundedCube(RoundedBox::new(BoxDimensions::new(4, 4, 6), 1)),
            )
            .with_shape(
                "disc",
                ShapeKind::CircleGizmo {
                    resolution: 8,
                    mapping: MappingType::Homogeneous,
                },
            )
    }

    #[test]
    fn test_round_trip() {
        let set = demo();
        let bytes = set.to_bytes().unwrap();
        let loaded = ShapeSet::load_from_bytes(&bytes).unwrap();
        assert_eq!(loaded, set);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shapes.ron");
        demo().save(&path).unwrap();
        assert_eq!(ShapeSet::load(&path).unwrap(), demo());
    }

    #[test]
    fn test_parse_documented_format() {
        let text = r#"(
            version: 1,
            name: "Demo",
            shapes: [
                (name: "floor", kind: Grid((width: 10, height: 4))),
                (name: "crate", kind: RoundedCube((
                    dimensions: (width: 4, height: 4, length: 6),
                    roundness: 1,
                ))),
                (name: "disc", kind: CircleGizmo(resolution: 4)),
            ],
        )"#;
        let set = ShapeSet::load_from_bytes(text.as_bytes()).unwrap();
        assert_eq!(set.shapes.len(), 3);
        assert_eq!(
            set.shapes[2].kind,
            ShapeKind::CircleGizmo {
                resolution: 4,
                mapping: MappingType::Heterogeneous
            }
        );
    }

    #[test]
    fn test_generate_all() {
        let generated = demo().generate_all().unwrap();
        assert_eq!(generated.len(), 4);
        assert_eq!(generated[0].name(), "floor");
        match &generated[2] {
            GeneratedShape::Mesh { mesh, colliders } => {
                assert_eq!(mesh.name, "crate");
                assert_eq!(mesh.submeshes.len(), 3);
                assert_eq!(colliders.len(), 15);
            }
            other => panic!("expected mesh, got {other:?}"),
        }
        match &generated[3] {
            GeneratedShape::Gizmo { points, primitives, .. } => {
                assert_eq!(points.len(), 34);
                assert_eq!(primitives.len(), 34 * 4);
            }
            other => panic!("expected gizmo, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_shape_reports_name() {
        let set = ShapeSet::new("Bad").with_shape(
            "too round",
            ShapeKind::RoundedCube(RoundedBox::new(BoxDimensions::cube(2), 2)),
        );
        match set.generate_all() {
            Err(ConfigError::Shape { name, source }) => {
                assert_eq!(name, "too round");
                assert_eq!(
                    source,
                    ShapeError::RoundnessTooLarge {
                        roundness: 2,
                        max: 1
                    }
                );
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_future_version_rejected() {
        let mut set = demo();
        set.version = SHAPE_SET_VERSION + 1;
        let bytes = set.to_bytes().unwrap();
        assert!(matches!(
            ShapeSet::load_from_bytes(&bytes),
            Err(ConfigError::UnsupportedVersion(_))
        ));
    }

    #[derive(Default)]
    struct Recorder {
        meshes: Vec<String>,
        collider_sets: usize,
    }

    impl MeshSink for Recorder {
        type Error = std::convert::Infallible;

        fn submit_mesh(&mut self, mesh: &MeshData) -> Result<(), Self::Error> {
            self.meshes.push(mesh.name.clone());
            Ok(())
        }

        fn submit_colliders(
            &mut self,
            _name: &str,
            _colliders: &[ColliderShape],
        ) -> Result<(), Self::Error> {
            self.collider_sets += 1;
            Ok(())
        }
    }

    #[test]
    fn test_submit_to_sink() {
        let mut sink = Recorder::default();
        let mut submitted = 0;
        for shape in demo().generate_all().unwrap() {
            if shape.submit_to(&mut sink).unwrap() {
                submitted += 1;
            }
        }
        assert_eq!(submitted, 3);
        assert_eq!(sink.meshes, vec!["floor", "block", "crate"]);
        assert_eq!(sink.collider_sets, 1);
    }
}
