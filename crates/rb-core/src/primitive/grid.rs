//! Flat grid mesh generation

use super::ring::Quad;
use crate::constants::GRID_TANGENT;
use crate::mesh::MeshData;
use crate::shape::{GridDimensions, ShapeError};

/// Generate a flat grid of unit quads in the XY plane
///
/// Vertices are laid out row-major (x fastest) with UVs spanning `[0, 1]`
/// on both axes. The grid faces `-Z`.
pub fn generate_grid(dims: GridDimensions) -> Result<MeshData, ShapeError> {
    dims.validate()?;
    let (width, height) = (dims.width, dims.height);

    let mut mesh = MeshData::new("Procedural Grid");
    let count = dims.vertex_count() as usize;
    mesh.vertices.reserve_exact(count);
    mesh.uvs.reserve_exact(count);
    for y in 0..=height {
        for x in 0..=width {
            mesh.vertices.push([x as f32, y as f32, 0.0]);
            mesh.uvs
                .push([x as f32 / width as f32, y as f32 / height as f32]);
        }
    }
    mesh.tangents = vec![GRID_TANGENT; count];

    let mut indices = Vec::with_capacity(dims.quad_count() as usize * 6);
    let row = width + 1;
    for y in 0..height {
        for x in 0..width {
            let v = y * row + x;
            Quad::new(v, v + 1, v + row, v + row + 1).push_to(&mut indices);
        }
    }
    mesh.submeshes = vec![indices];
    mesh.recalculate_normals();

    tracing::debug!(
        "Generated grid {}x{}: {} vertices, {} triangles",
        width,
        height,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_by_one_grid() {
        let mesh = generate_grid(GridDimensions::new(2, 1)).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.index_count(), 12);
        assert_eq!(
            mesh.submesh(0),
            &[0, 3, 1, 1, 3, 4, 1, 4, 2, 2, 4, 5]
        );
        assert_eq!(mesh.uvs[0], [0.0, 0.0]);
        assert_eq!(mesh.uvs[2], [1.0, 0.0]);
        assert_eq!(mesh.uvs[3], [0.0, 1.0]);
        assert_eq!(mesh.uvs[5], [1.0, 1.0]);
        assert!(mesh
            .uvs
            .iter()
            .all(|uv| (0.0..=1.0).contains(&uv[0]) && (0.0..=1.0).contains(&uv[1])));
    }

    #[test]
    fn test_grid_faces_negative_z() {
        let mesh = generate_grid(GridDimensions::new(3, 4)).unwrap();
        assert_eq!(mesh.normals.len(), mesh.vertex_count());
        assert!(mesh.normals.iter().all(|n| *n == [0.0, 0.0, -1.0]));
        assert!(mesh.tangents.iter().all(|t| *t == GRID_TANGENT));
    }

    #[test]
    fn test_grid_positions() {
        let mesh = generate_grid(GridDimensions::new(3, 2)).unwrap();
        assert_eq!(mesh.vertices[4], [0.0, 1.0, 0.0]);
        assert_eq!(mesh.vertices[11], [3.0, 2.0, 0.0]);
        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices().all(|i| i < count));
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert!(generate_grid(GridDimensions::new(3, 0)).is_err());
    }
}
