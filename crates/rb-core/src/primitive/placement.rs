//! Vertex placement on a rounded box

use glam::Vec3;

use crate::shape::BoxDimensions;

/// Project lattice point `(x, y, z)` onto the rounded box surface
///
/// The point is clamped into the inner box `[r, dim - r]` on every axis;
/// the offset from that inner point gives the normal, and the vertex is
/// pushed out from the inner point by `r` along it. With `r = 0` the
/// position is the lattice point itself and the normal is the sharp-box
/// outward direction.
///
/// Requires `2 * roundness <= min(width, height, length)`.
///
/// # Returns
/// (position, normal)
pub fn place_vertex(x: u32, y: u32, z: u32, dims: BoxDimensions, roundness: u32) -> (Vec3, Vec3) {
    let raw = Vec3::new(x as f32, y as f32, z as f32);
    let size = dims.size();
    let r = roundness as f32;

    let clamp = |v: f32, dim: f32| {
        if v < r {
            r
        } else if v > dim - r {
            dim - r
        } else {
            v
        }
    };
    let inner = Vec3::new(
        clamp(raw.x, size.x),
        clamp(raw.y, size.y),
        clamp(raw.z, size.z),
    );

    let normal = (raw - inner)
        .try_normalize()
        .unwrap_or_else(|| sharp_normal(raw, size));

    (inner + normal * r, normal)
}

/// Outward direction of a point on the surface of the sharp box
fn sharp_normal(point: Vec3, size: Vec3) -> Vec3 {
    let side = |v: f32, dim: f32| {
        if v <= 0.0 {
            -1.0
        } else if v >= dim {
            1.0
        } else {
            0.0
        }
    };
    Vec3::new(
        side(point.x, size.x),
        side(point.y, size.y),
        side(point.z, size.z),
    )
    .normalize_or_zero()
}

/// Per-vertex face selector: lattice coordinates truncated to bytes
pub fn lattice_color(x: u32, y: u32, z: u32) -> [u8; 4] {
    [x as u8, y as u8, z as u8, 0]
}
