//! Shape parameters and their validation

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in a vector
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "width",
            Axis::Y => "height",
            Axis::Z => "length",
        }
    }
}

/// Integer extents of a box lattice
///
/// The box spans `[0, width] × [0, height] × [0, length]` with one vertex
/// per unit step on its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxDimensions {
    /// Extent along X
    pub width: u32,
    /// Extent along Y
    pub height: u32,
    /// Extent along Z
    pub length: u32,
}

impl BoxDimensions {
    pub fn new(width: u32, height: u32, length: u32) -> Self {
        Self {
            width,
            height,
            length,
        }
    }

    /// Equal extent on every axis
    pub fn cube(size: u32) -> Self {
        Self::new(size, size, size)
    }

    /// Extent along the given axis
    pub fn extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
            Axis::Z => self.length,
        }
    }

    pub fn min_extent(&self) -> u32 {
        self.width.min(self.height).min(self.length)
    }

    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width as f32, self.height as f32, self.length as f32)
    }

    /// Geometric centre of the box
    pub fn center(&self) -> Vec3 {
        self.size() * 0.5
    }

    /// Number of surface lattice vertices
    ///
    /// 8 corners, the edge interiors and the face interiors, each shared
    /// point counted once.
    pub fn vertex_count(&self) -> u64 {
        let (w, h, l) = (self.width as u64, self.height as u64, self.length as u64);
        let corners = 8;
        let edges = (w + h + l - 3) * 4;
        let faces = ((w - 1) * (h - 1) + (w - 1) * (l - 1) + (h - 1) * (l - 1)) * 2;
        corners + edges + faces
    }

    /// Number of unit quads covering the surface
    pub fn quad_count(&self) -> u64 {
        let (w, h, l) = (self.width as u64, self.height as u64, self.length as u64);
        (w * h + w * l + h * l) * 2
    }

    /// Check that every extent is at least one and the lattice is indexable
    pub fn validate(&self) -> Result<(), ShapeError> {
        for axis in Axis::ALL {
            if self.extent(axis) == 0 {
                return Err(ShapeError::ZeroDimension { axis: axis.name() });
            }
        }
        let count = self.vertex_count();
        if count > u32::MAX as u64 {
            return Err(ShapeError::TooManyVertices(count));
        }
        Ok(())
    }
}

/// Box dimensions plus edge rounding radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundedBox {
    pub dimensions: BoxDimensions,
    /// Radius of the rounded edges and corners, in lattice units
    pub roundness: u32,
}

impl RoundedBox {
    pub fn new(dimensions: BoxDimensions, roundness: u32) -> Self {
        Self {
            dimensions,
            roundness,
        }
    }

    /// Largest roundness the dimensions allow
    pub fn max_roundness(&self) -> u32 {
        self.dimensions.min_extent() / 2
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        self.dimensions.validate()?;
        if self.roundness > self.max_roundness() {
            return Err(ShapeError::RoundnessTooLarge {
                roundness: self.roundness,
                max: self.max_roundness(),
            });
        }
        Ok(())
    }
}

/// Flat grid extents in quads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    /// Quads along X
    pub width: u32,
    /// Quads along Y
    pub height: u32,
}

impl GridDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn vertex_count(&self) -> u64 {
        (self.width as u64 + 1) * (self.height as u64 + 1)
    }

    pub fn quad_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.width == 0 {
            return Err(ShapeError::ZeroDimension { axis: "width" });
        }
        if self.height == 0 {
            return Err(ShapeError::ZeroDimension { axis: "height" });
        }
        let count = self.vertex_count();
        if count > u32::MAX as u64 {
            return Err(ShapeError::TooManyVertices(count));
        }
        Ok(())
    }
}

/// Invalid generator parameters
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("{axis} must be at least 1")]
    ZeroDimension { axis: &'static str },
    #[error("roundness {roundness} exceeds half the smallest dimension ({max})")]
    RoundnessTooLarge { roundness: u32, max: u32 },
    #[error("circle gizmo resolution must be at least 1")]
    ZeroResolution,
    #[error("{0} vertices cannot be addressed by 32-bit indices")]
    TooManyVertices(u64),
}
