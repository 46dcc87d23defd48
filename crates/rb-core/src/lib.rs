//! Roundbox Core
//!
//! Procedural mesh generation for simple lattice-based shapes:
//! - Grid: flat (width+1)×(height+1) vertex sheet in the XY plane
//! - Cube: sharp box whose surface is subdivided into unit quads
//! - Rounded cube: the same lattice projected onto a rounded box, split
//!   into three axis-aligned sub-meshes, plus approximate colliders
//! - Circle gizmo: square-to-disc mapping visualization
//!
//! Every generator is a pure function returning owned buffers; handing them
//! to a renderer or exporter is the caller's job (see [`export::MeshSink`]).

pub mod collider;
pub mod config;
pub mod constants;
pub mod export;
pub mod gizmo;
pub mod mesh;
pub mod primitive;
pub mod shape;

pub use collider::*;
pub use config::*;
pub use constants::*;
pub use export::*;
pub use gizmo::*;
pub use mesh::*;
pub use primitive::*;
pub use shape::*;
