//! Procedural mesh generation
//!
//! Generates vertices, normals, indices and auxiliary buffers for:
//! - Grid (flat sheet of unit quads)
//! - Cube (sharp box with subdivided faces)
//! - Rounded cube (three sub-meshes, analytic normals)

mod cube;
mod faces;
mod grid;
mod placement;
mod ring;
mod rounded_cube;

pub use cube::generate_cube;
pub use faces::{build_bottom_face, build_side_faces, build_top_face};
pub use grid::generate_grid;
pub use placement::{lattice_color, place_vertex};
pub use ring::{Cap, Quad, RingGeometry, RingSegment};
pub use rounded_cube::{SUBMESH_X, SUBMESH_Y, SUBMESH_Z, generate_rounded_cube};
