//! Debug visualization primitives
//!
//! Generators here never draw anything; they return lists of
//! [`GizmoPrimitive`] for whatever debug renderer the caller has.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{CIRCLE_GIZMO_RADIUS, VERTEX_GIZMO_RADIUS, colors};
use crate::mesh::MeshData;
use crate::shape::ShapeError;

/// How points on the square `[-1, 1]²` are mapped onto the unit disc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MappingType {
    /// Plain normalization; bunches points up near the diagonals
    #[default]
    Heterogeneous,
    /// Elliptical grid mapping; keeps the spacing much more even
    Homogeneous,
}

impl MappingType {
    /// Map a point of the square onto the disc
    pub fn map(self, square: Vec2) -> Vec2 {
        match self {
            MappingType::Heterogeneous => square.normalize_or_zero(),
            MappingType::Homogeneous => Vec2::new(
                square.x * (1.0 - square.y * square.y * 0.5).sqrt(),
                square.y * (1.0 - square.x * square.x * 0.5).sqrt(),
            ),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MappingType::Heterogeneous => "Heterogeneous",
            MappingType::Homogeneous => "Homogeneous",
        }
    }
}

/// One sample of the square boundary and its image on the disc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePoint {
    pub square: Vec2,
    pub circle: Vec2,
}

/// Sample the boundary of the square `[-1, 1]²` and map each sample
///
/// The bottom and top edges get `resolution + 1` samples each, the left
/// and right edges `resolution` each, all spaced `2 / resolution` apart.
pub fn sample_circle_mapping(
    resolution: u32,
    mapping: MappingType,
) -> Result<Vec<CirclePoint>, ShapeError> {
    if resolution == 0 {
        return Err(ShapeError::ZeroResolution);
    }

    let step = 2.0 / resolution as f32;
    let mut squares = Vec::with_capacity(4 * resolution as usize + 2);
    for i in 0..=resolution {
        let t = i as f32 * step - 1.0;
        squares.push(Vec2::new(t, -1.0));
        squares.push(Vec2::new(t, 1.0));
    }
    for i in 0..resolution {
        let t = i as f32 * step - 1.0;
        squares.push(Vec2::new(-1.0, t));
        squares.push(Vec2::new(1.0, t));
    }

    Ok(squares
        .into_iter()
        .map(|square| CirclePoint {
            square,
            circle: mapping.map(square),
        })
        .collect())
}

/// Debug draw command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GizmoPrimitive {
    Sphere {
        center: Vec3,
        radius: f32,
        color: [f32; 4],
    },
    Line {
        from: Vec3,
        to: Vec3,
        color: [f32; 4],
    },
}

/// Draw commands visualizing a square-to-disc mapping
///
/// Per sample: the square point, the disc point, the displacement between
/// them and the disc radius.
pub fn circle_gizmos(points: &[CirclePoint]) -> Vec<GizmoPrimitive> {
    let mut gizmos = Vec::with_capacity(points.len() * 4);
    for point in points {
        let square = point.square.extend(0.0);
        let circle = point.circle.extend(0.0);
        gizmos.push(GizmoPrimitive::Sphere {
            center: square,
            radius: CIRCLE_GIZMO_RADIUS,
            color: colors::BLACK,
        });
        gizmos.push(GizmoPrimitive::Sphere {
            center: circle,
            radius: CIRCLE_GIZMO_RADIUS,
            color: colors::WHITE,
        });
        gizmos.push(GizmoPrimitive::Line {
            from: square,
            to: circle,
            color: colors::YELLOW,
        });
        gizmos.push(GizmoPrimitive::Line {
            from: circle,
            to: Vec3::ZERO,
            color: colors::GREY,
        });
    }
    gizmos
}

/// Draw commands marking every vertex of a mesh, and optionally a unit
/// ray along each vertex normal
pub fn vertex_gizmos(mesh: &MeshData, show_normals: bool) -> Vec<GizmoPrimitive> {
    let mut gizmos = Vec::with_capacity(mesh.vertex_count() * 2);
    for (i, v) in mesh.vertices.iter().enumerate() {
        let v = Vec3::from(*v);
        gizmos.push(GizmoPrimitive::Sphere {
            center: v,
            radius: VERTEX_GIZMO_RADIUS,
            color: colors::BLACK,
        });
        if let Some(n) = mesh.normals.get(i).filter(|_| show_normals) {
            gizmos.push(GizmoPrimitive::Line {
                from: v,
                to: v + Vec3::from(*n),
                color: colors::YELLOW,
            });
        }
    }
    gizmos
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_boundary_point_maps_identically() {
        let square = Vec2::new(1.0, 0.0);
        assert_eq!(MappingType::Homogeneous.map(square), Vec2::new(1.0, 0.0));
        assert_eq!(MappingType::Heterogeneous.map(square), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_resolution_four_samples() {
        for mapping in [MappingType::Heterogeneous, MappingType::Homogeneous] {
            let points = sample_circle_mapping(4, mapping).unwrap();
            assert_eq!(points.len(), 18);
            let hit = points
                .iter()
                .find(|p| p.square == Vec2::new(1.0, 0.0))
                .expect("(1, 0) is sampled");
            assert_eq!(hit.circle, Vec2::new(1.0, 0.0));
        }
    }

    #[test]
    fn test_mappings_diverge_off_axis() {
        let square = Vec2::new(1.0, 0.5);
        let hetero = MappingType::Heterogeneous.map(square);
        let homo = MappingType::Homogeneous.map(square);
        assert_relative_eq!(hetero.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(homo.x, (1.0f32 - 0.125).sqrt(), epsilon = 1e-6);
        assert_relative_eq!(homo.y, 0.5 * 0.5f32.sqrt(), epsilon = 1e-6);
        assert!(hetero.distance(homo) > 0.01);
    }

    #[test]
    fn test_corners_land_on_unit_circle() {
        for mapping in [MappingType::Heterogeneous, MappingType::Homogeneous] {
            let circle = mapping.map(Vec2::new(-1.0, 1.0));
            assert_relative_eq!(circle.length(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_all_samples_inside_disc() {
        let points = sample_circle_mapping(16, MappingType::Homogeneous).unwrap();
        assert!(points.iter().all(|p| p.circle.length() <= 1.0 + 1e-6));
    }

    #[test]
    fn test_zero_resolution_rejected() {
        assert_eq!(
            sample_circle_mapping(0, MappingType::Homogeneous),
            Err(ShapeError::ZeroResolution)
        );
    }

    #[test]
    fn test_circle_gizmo_commands() {
        let points = sample_circle_mapping(2, MappingType::Heterogeneous).unwrap();
        let gizmos = circle_gizmos(&points);
        assert_eq!(gizmos.len(), points.len() * 4);
        assert_eq!(
            gizmos[3],
            GizmoPrimitive::Line {
                from: points[0].circle.extend(0.0),
                to: Vec3::ZERO,
                color: colors::GREY,
            }
        );
    }

    #[test]
    fn test_vertex_gizmos() {
        let mut mesh = MeshData::new("pair");
        mesh.vertices = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
        mesh.normals = vec![[0.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
        assert_eq!(vertex_gizmos(&mesh, false).len(), 2);
        let gizmos = vertex_gizmos(&mesh, true);
        assert_eq!(gizmos.len(), 4);
        assert_eq!(
            gizmos[3],
            GizmoPrimitive::Line {
                from: Vec3::X,
                to: Vec3::new(1.0, 1.0, 0.0),
                color: colors::YELLOW,
            }
        );
    }
}
