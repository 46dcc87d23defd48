//! Side and cap triangulation of a box lattice

use super::ring::{Cap, Quad, RingGeometry, RingSegment};

/// Emit one quad per ring position per height layer
///
/// Each quad joins ring position `p` and its successor on layer `y` to the
/// same positions on layer `y + 1`; the last position wraps to the start of
/// the ring. Quads are handed to `emit` together with the perimeter segment
/// they start on so callers can route them into separate sub-meshes.
pub fn build_side_faces(ring: &RingGeometry, mut emit: impl FnMut(RingSegment, Quad)) {
    let n = ring.ring();
    for y in 0..ring.height() {
        let base = ring.layer_base(y);
        for p in 0..n {
            let v = base + p;
            let next = base + (p + 1) % n;
            emit(ring.segment(p), Quad::new(v, next, v + n, next + n));
        }
    }
}

/// Emit the quads covering the top cap, row by row from z = 0
pub fn build_top_face(ring: &RingGeometry, indices: &mut Vec<u32>) {
    let at = |x, z| ring.cap_index(Cap::Top, x, z);
    for z in 0..ring.length() {
        for x in 0..ring.width() {
            Quad::new(at(x, z), at(x + 1, z), at(x, z + 1), at(x + 1, z + 1)).push_to(indices);
        }
    }
}

/// Emit the quads covering the bottom cap
///
/// Same traversal as the top cap with the rows of each quad swapped, which
/// flips the winding to face down.
pub fn build_bottom_face(ring: &RingGeometry, indices: &mut Vec<u32>) {
    let at = |x, z| ring.cap_index(Cap::Bottom, x, z);
    for z in 0..ring.length() {
        for x in 0..ring.width() {
            Quad::new(at(x, z + 1), at(x + 1, z + 1), at(x, z), at(x + 1, z)).push_to(indices);
        }
    }
}
