//! Sharp box mesh generation

use super::faces::{build_bottom_face, build_side_faces, build_top_face};
use super::ring::RingGeometry;
use crate::mesh::MeshData;
use crate::shape::{BoxDimensions, ShapeError};

/// Generate a box whose surface is subdivided into unit quads
///
/// The box spans `[0, width] × [0, height] × [0, length]`. Vertices are
/// shared between adjacent faces, so the recalculated normals are smoothed
/// across edges and corners.
///
/// # Returns
/// Mesh with a single sub-mesh of `quad_count * 6` indices
pub fn generate_cube(dims: BoxDimensions) -> Result<MeshData, ShapeError> {
    dims.validate()?;
    let ring = RingGeometry::new(dims);

    let mut mesh = MeshData::new("Procedural Cube");
    mesh.vertices = ring
        .surface_points()
        .map(|[x, y, z]| [x as f32, y as f32, z as f32])
        .collect();

    let mut indices = Vec::with_capacity(dims.quad_count() as usize * 6);
    build_side_faces(&ring, |_, quad| {
        quad.push_to(&mut indices);
    });
    build_top_face(&ring, &mut indices);
    build_bottom_face(&ring, &mut indices);
    mesh.submeshes = vec![indices];
    mesh.recalculate_normals();

    tracing::debug!(
        "Generated cube {}x{}x{}: {} vertices, {} triangles",
        dims.width,
        dims.height,
        dims.length,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}
