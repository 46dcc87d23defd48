//! Ring geometry and quad emission shared by the box generators
//!
//! A box lattice stores its side vertices as horizontal rings, one per
//! height layer, followed by the interior vertices of the top and bottom
//! caps. Every index the triangulation needs is derived here so the face
//! builders never carry their own offset arithmetic.

use crate::shape::{Axis, BoxDimensions};

/// Which side of the perimeter a ring position starts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingSegment {
    /// z = 0, x increasing
    Front,
    /// x = width, z increasing
    Right,
    /// z = length, x decreasing
    Back,
    /// x = 0, z decreasing
    Left,
}

impl RingSegment {
    /// Axis the faces along this segment point along
    pub fn facing(self) -> Axis {
        match self {
            RingSegment::Front | RingSegment::Back => Axis::Z,
            RingSegment::Right | RingSegment::Left => Axis::X,
        }
    }
}

/// Top or bottom cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cap {
    Top,
    Bottom,
}

/// Index layout of a box lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingGeometry {
    width: u32,
    height: u32,
    length: u32,
    ring: u32,
}

impl RingGeometry {
    /// Dimensions must already be validated
    pub fn new(dims: BoxDimensions) -> Self {
        Self {
            width: dims.width,
            height: dims.height,
            length: dims.length,
            ring: (dims.width + dims.length) * 2,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// Vertices per ring (the perimeter length)
    pub fn ring(&self) -> u32 {
        self.ring
    }

    /// Index of the first vertex of ring layer `y`
    pub fn layer_base(&self, y: u32) -> u32 {
        self.ring * y
    }

    /// Interior vertices per cap
    pub fn interior_count(&self) -> u32 {
        (self.width - 1) * (self.length - 1)
    }

    /// Index of the first interior vertex of a cap
    pub fn interior_base(&self, cap: Cap) -> u32 {
        let top = self.ring * (self.height + 1);
        match cap {
            Cap::Top => top,
            Cap::Bottom => top + self.interior_count(),
        }
    }

    /// Total vertex count of the lattice
    pub fn vertex_count(&self) -> u32 {
        self.interior_base(Cap::Bottom) + self.interior_count()
    }

    /// `(x, z)` of ring position `p`
    pub fn ring_point(&self, p: u32) -> (u32, u32) {
        let (w, l) = (self.width, self.length);
        if p <= w {
            (p, 0)
        } else if p <= w + l {
            (w, p - w)
        } else if p <= 2 * w + l {
            (2 * w + l - p, l)
        } else {
            (0, self.ring - p)
        }
    }

    /// Ring position of perimeter point `(x, z)`, `None` for interior points
    pub fn ring_position(&self, x: u32, z: u32) -> Option<u32> {
        let (w, l) = (self.width, self.length);
        if z == 0 {
            Some(x)
        } else if x == w {
            Some(w + z)
        } else if z == l {
            Some(w + l + (w - x))
        } else if x == 0 {
            Some(2 * w + l + (l - z))
        } else {
            None
        }
    }

    /// Segment the quad starting at ring position `p` lies on
    pub fn segment(&self, p: u32) -> RingSegment {
        let (w, l) = (self.width, self.length);
        if p < w {
            RingSegment::Front
        } else if p < w + l {
            RingSegment::Right
        } else if p < 2 * w + l {
            RingSegment::Back
        } else {
            RingSegment::Left
        }
    }

    /// Vertex index of cap lattice point `(x, z)`
    ///
    /// Boundary points resolve into the outermost ring layer of the cap,
    /// interior points into the cap's row-major interior grid.
    pub fn cap_index(&self, cap: Cap, x: u32, z: u32) -> u32 {
        match self.ring_position(x, z) {
            Some(p) => {
                let layer = match cap {
                    Cap::Top => self.height,
                    Cap::Bottom => 0,
                };
                self.layer_base(layer) + p
            }
            None => self.interior_base(cap) + (z - 1) * (self.width - 1) + (x - 1),
        }
    }

    /// Lattice coordinates of every vertex, in index order
    pub fn surface_points(self) -> impl Iterator<Item = [u32; 3]> {
        let rings = (0..=self.height).flat_map(move |y| {
            (0..self.ring).map(move |p| {
                let (x, z) = self.ring_point(p);
                [x, y, z]
            })
        });
        let top = self
            .interior_points()
            .map(move |(x, z)| [x, self.height, z]);
        let bottom = self.interior_points().map(|(x, z)| [x, 0, z]);
        rings.chain(top).chain(bottom)
    }

    fn interior_points(self) -> impl Iterator<Item = (u32, u32)> {
        (1..self.length).flat_map(move |z| (1..self.width).map(move |x| (x, z)))
    }
}

/// Four lattice indices forming one surface cell
///
/// `v00` and `v11` are opposite corners; the two triangles share the
/// `v10`-`v01` diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quad {
    pub v00: u32,
    pub v10: u32,
    pub v01: u32,
    pub v11: u32,
}

impl Quad {
    pub fn new(v00: u32, v10: u32, v01: u32, v11: u32) -> Self {
        Self { v00, v10, v01, v11 }
    }

    /// Triangle indices, clockwise seen from the front
    pub fn indices(&self) -> [u32; 6] {
        [self.v00, self.v01, self.v10, self.v10, self.v01, self.v11]
    }

    /// Append both triangles, returning the new index count
    pub fn push_to(&self, indices: &mut Vec<u32>) -> usize {
        indices.extend_from_slice(&self.indices());
        indices.len()
    }
}
