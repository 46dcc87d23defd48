//! Collider approximation for rounded boxes
//!
//! A rounded box is covered by three boxes (the body, each one inset by
//! the roundness on two axes) and twelve capsules (one per edge). The
//! union is exact on the flat faces and the edges, and matches the corners
//! through the capsule end caps.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::shape::{Axis, RoundedBox, ShapeError};

/// Collider descriptor in the mesh's local space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    /// Axis-aligned box
    Box { center: Vec3, size: Vec3 },
    /// Capsule whose `height` includes both hemispherical caps
    Capsule {
        center: Vec3,
        radius: f32,
        height: f32,
        axis: Axis,
    },
}

impl ColliderShape {
    pub fn center(&self) -> Vec3 {
        match *self {
            ColliderShape::Box { center, .. } | ColliderShape::Capsule { center, .. } => center,
        }
    }

    /// Check whether a point lies inside the collider, within `tolerance`
    pub fn contains(&self, point: Vec3, tolerance: f32) -> bool {
        match *self {
            ColliderShape::Box { center, size } => {
                let d = (point - center).abs();
                d.cmple(size * 0.5 + tolerance).all()
            }
            ColliderShape::Capsule {
                center,
                radius,
                height,
                axis,
            } => {
                let half_segment = (height * 0.5 - radius).max(0.0);
                let dir = axis.unit();
                let t = (point - center).dot(dir).clamp(-half_segment, half_segment);
                point.distance(center + dir * t) <= radius + tolerance
            }
        }
    }
}

/// Build the 3 box and 12 capsule colliders approximating a rounded box
///
/// Boxes come first (full extent along X, Y, then Z), followed by four
/// capsules per axis in X, Y, Z order.
pub fn generate_colliders(shape: RoundedBox) -> Result<Vec<ColliderShape>, ShapeError> {
    shape.validate()?;
    let size = shape.dimensions.size();
    let r = shape.roundness as f32;
    let half = shape.dimensions.center();
    let min = Vec3::splat(r);
    let max = size - min;

    let mut colliders = Vec::with_capacity(15);
    for axis in Axis::ALL {
        // Full extent along `axis`, inset by the roundness elsewhere
        let mut box_size = size - 2.0 * r;
        box_size[axis.index()] = size[axis.index()];
        colliders.push(ColliderShape::Box {
            center: half,
            size: box_size,
        });
    }

    for axis in Axis::ALL {
        let i = axis.index();
        let (a, b) = ((i + 1) % 3, (i + 2) % 3);
        let (a, b) = (a.min(b), a.max(b));
        for a_value in [min[a], max[a]] {
            for b_value in [min[b], max[b]] {
                let mut center = half;
                center[a] = a_value;
                center[b] = b_value;
                colliders.push(ColliderShape::Capsule {
                    center,
                    radius: r,
                    height: center[i] * 2.0,
                    axis,
                });
            }
        }
    }

    tracing::debug!(
        "Generated {} colliders for roundness {}",
        colliders.len(),
        shape.roundness
    );

    Ok(colliders)
}
