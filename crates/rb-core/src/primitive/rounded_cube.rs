//! Rounded box mesh generation
//!
//! Uses the same lattice and triangulation as the sharp cube, with every
//! vertex projected onto the rounded surface. The triangles are split into
//! three sub-meshes by the axis their faces point along so each pair of
//! opposite faces can get its own material.

use super::faces::{build_bottom_face, build_side_faces, build_top_face};
use super::placement::{lattice_color, place_vertex};
use super::ring::RingGeometry;
use crate::mesh::MeshData;
use crate::shape::{Axis, RoundedBox, ShapeError};

/// Sub-mesh holding the front and back faces
pub const SUBMESH_Z: usize = 0;
/// Sub-mesh holding the left and right faces
pub const SUBMESH_X: usize = 1;
/// Sub-mesh holding the top and bottom faces
pub const SUBMESH_Y: usize = 2;

/// Generate a rounded box mesh
///
/// Vertices carry analytic normals and a color encoding their lattice
/// coordinates, which shaders use to select a texture face.
///
/// # Returns
/// Mesh with three sub-meshes, indexed by [`SUBMESH_Z`], [`SUBMESH_X`] and
/// [`SUBMESH_Y`]
pub fn generate_rounded_cube(shape: RoundedBox) -> Result<MeshData, ShapeError> {
    shape.validate()?;
    let dims = shape.dimensions;
    let ring = RingGeometry::new(dims);

    let mut mesh = MeshData::new("Procedural Cube");
    let count = ring.vertex_count() as usize;
    mesh.vertices.reserve_exact(count);
    mesh.normals.reserve_exact(count);
    mesh.colors.reserve_exact(count);
    for [x, y, z] in ring.surface_points() {
        let (position, normal) = place_vertex(x, y, z, dims, shape.roundness);
        mesh.vertices.push(position.into());
        mesh.normals.push(normal.into());
        mesh.colors.push(lattice_color(x, y, z));
    }

    let (w, h, l) = (dims.width as usize, dims.height as usize, dims.length as usize);
    let mut triangles_z = Vec::with_capacity(w * h * 12);
    let mut triangles_x = Vec::with_capacity(h * l * 12);
    let mut triangles_y = Vec::with_capacity(w * l * 12);

    build_side_faces(&ring, |segment, quad| {
        let target = match segment.facing() {
            Axis::Z => &mut triangles_z,
            _ => &mut triangles_x,
        };
        quad.push_to(target);
    });
    build_top_face(&ring, &mut triangles_y);
    build_bottom_face(&ring, &mut triangles_y);

    mesh.submeshes = vec![triangles_z, triangles_x, triangles_y];

    tracing::debug!(
        "Generated rounded cube {}x{}x{} (roundness {}): {} vertices, {} triangles",
        dims.width,
        dims.height,
        dims.length,
        shape.roundness,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}
