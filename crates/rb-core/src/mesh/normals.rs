//! Normal calculation utilities for mesh data

use glam::Vec3;

/// Calculate the unit normal of a single triangle
///
/// Triangles wind clockwise seen from their front side, so the front
/// normal is `(v1 - v0) × (v2 - v0)`. Degenerate triangles yield `-Z`.
pub fn calculate_triangle_normal(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> [f32; 3] {
    let (v0, v1, v2) = (Vec3::from(v0), Vec3::from(v1), Vec3::from(v2));
    (v1 - v0)
        .cross(v2 - v0)
        .try_normalize()
        .unwrap_or(Vec3::NEG_Z)
        .into()
}

/// Calculate smoothed per-vertex normals from vertices and indices
///
/// Each triangle contributes its area-weighted normal to its three
/// vertices. Vertices not referenced by any triangle get `-Z`.
pub fn calculate_vertex_normals(vertices: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut sums = vec![Vec3::ZERO; vertices.len()];

    for chunk in indices.chunks_exact(3) {
        let [a, b, c] = [chunk[0] as usize, chunk[1] as usize, chunk[2] as usize];
        let (Some(&v0), Some(&v1), Some(&v2)) = (vertices.get(a), vertices.get(b), vertices.get(c))
        else {
            tracing::warn!("Skipping triangle with out-of-range index {:?}", chunk);
            continue;
        };

        let (v0, v1, v2) = (Vec3::from(v0), Vec3::from(v1), Vec3::from(v2));
        let weighted = (v1 - v0).cross(v2 - v0);
        sums[a] += weighted;
        sums[b] += weighted;
        sums[c] += weighted;
    }

    sums.into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::NEG_Z).into())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_triangle_normal_clockwise_front() {
        let n = calculate_triangle_normal([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]);
        assert_eq!(n, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_degenerate_triangle() {
        let n = calculate_triangle_normal([1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]);
        assert_eq!(n, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_vertex_normals_average_adjacent_faces() {
        // Two faces meeting at a right angle along the Z axis edge
        let vertices = [
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        // First triangle faces -Y, second faces -X
        let indices = [0, 2, 1, 0, 1, 3];
        let normals = calculate_vertex_normals(&vertices, &indices);

        let shared = Vec3::from(normals[0]);
        assert_relative_eq!(shared.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(shared.x, shared.y, epsilon = 1e-6);
        assert!(shared.x < 0.0);
        assert_eq!(normals[2], [0.0, -1.0, 0.0]);
        assert_eq!(normals[3], [-1.0, 0.0, 0.0]);
    }
}
