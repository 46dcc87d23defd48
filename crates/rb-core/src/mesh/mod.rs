//! Generated mesh container and buffer utilities

mod normals;
mod topology;

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub use normals::{calculate_triangle_normal, calculate_vertex_normals};
pub use topology::{EdgeCounts, edge_counts, is_closed};

/// Buffers produced by a generator
///
/// All per-vertex buffers are either empty or parallel to `vertices`.
/// Each entry of `submeshes` is an independent triangle list over the
/// shared vertex buffer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub name: String,
    pub vertices: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub tangents: Vec<[f32; 4]>,
    pub colors: Vec<[u8; 4]>,
    pub submeshes: Vec<Vec<u32>>,
}

impl MeshData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total index count across all sub-meshes
    pub fn index_count(&self) -> usize {
        self.submeshes.iter().map(Vec::len).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.index_count() / 3
    }

    /// Indices of one sub-mesh (empty if out of range)
    pub fn submesh(&self, index: usize) -> &[u32] {
        self.submeshes.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All indices, sub-meshes concatenated in order
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.submeshes.iter().flatten().copied()
    }

    /// All triangles, sub-meshes concatenated in order
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.submeshes
            .iter()
            .flat_map(|sub| sub.chunks_exact(3).map(|t| [t[0], t[1], t[2]]))
    }

    /// Axis-aligned bounds of the vertex positions
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.vertices.iter().map(|v| Vec3::from(*v));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
    }

    /// Replace the normal buffer with smoothed normals derived from the
    /// triangles, as a renderer would for meshes generated without normals
    pub fn recalculate_normals(&mut self) {
        let indices: Vec<u32> = self.indices().collect();
        self.normals = calculate_vertex_normals(&self.vertices, &indices);
    }

    /// Check the triangle lists describe a closed, consistently wound surface
    pub fn is_closed(&self) -> bool {
        let indices: Vec<u32> = self.indices().collect();
        is_closed(&indices)
    }

    /// Interleave the vertex attributes for GPU upload
    ///
    /// Missing attributes are filled with zeroes; colors default to opaque
    /// white.
    pub fn interleaved(&self) -> Vec<MeshVertex> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, position)| MeshVertex {
                position: *position,
                normal: self.normals.get(i).copied().unwrap_or_default(),
                uv: self.uvs.get(i).copied().unwrap_or_default(),
                color: self.colors.get(i).copied().unwrap_or([255; 4]),
            })
            .collect()
    }
}

/// Interleaved vertex layout
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub color: [u8; 4],
}
