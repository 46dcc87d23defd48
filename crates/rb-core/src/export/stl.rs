//! STL export

use std::io::Write;
use std::path::{Path, PathBuf};

use super::{ExportError, MeshSink, file_stem_for};
use crate::collider::ColliderShape;
use crate::mesh::{MeshData, calculate_triangle_normal};

/// Write every sub-mesh of `mesh` as one binary STL triangle soup
///
/// Facet normals are recomputed from the triangle winding.
pub fn write_stl<W: Write>(mesh: &MeshData, writer: &mut W) -> Result<(), ExportError> {
    let mut triangles = Vec::with_capacity(mesh.triangle_count());
    for tri in mesh.triangles() {
        let mut corners = [[0.0f32; 3]; 3];
        for (corner, &index) in corners.iter_mut().zip(&tri) {
            *corner = *mesh.vertices.get(index as usize).ok_or_else(|| {
                ExportError::Write(format!(
                    "index {} out of range for {} vertices",
                    index,
                    mesh.vertex_count()
                ))
            })?;
        }
        let [v0, v1, v2] = corners;

        triangles.push(stl_io::Triangle {
            normal: stl_io::Normal::new(calculate_triangle_normal(v0, v1, v2)),
            vertices: [
                stl_io::Vertex::new(v0),
                stl_io::Vertex::new(v1),
                stl_io::Vertex::new(v2),
            ],
        });
    }

    stl_io::write_stl(writer, triangles.iter()).map_err(|e| ExportError::Write(e.to_string()))
}

/// Save a mesh as an STL file
pub fn save_stl(mesh: &MeshData, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let mut file = std::fs::File::create(path).map_err(|e| ExportError::Io(e.to_string()))?;
    write_stl(mesh, &mut file)
}

/// Sink writing meshes as `<name>.stl` and collider sets as
/// `<name>.colliders.ron` into a directory
#[derive(Debug, Clone)]
pub struct StlExporter {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl StlExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: Vec::new(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Files written so far, in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn prepare(&self) -> Result<(), ExportError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| ExportError::Io(e.to_string()))
    }
}

impl MeshSink for StlExporter {
    type Error = ExportError;

    fn submit_mesh(&mut self, mesh: &MeshData) -> Result<(), ExportError> {
        self.prepare()?;
        let path = self
            .output_dir
            .join(format!("{}.stl", file_stem_for(&mesh.name)));
        save_stl(mesh, &path)?;
        tracing::info!(
            "Exported '{}' ({} triangles) to {:?}",
            mesh.name,
            mesh.triangle_count(),
            path
        );
        self.written.push(path);
        Ok(())
    }

    fn submit_colliders(
        &mut self,
        name: &str,
        colliders: &[ColliderShape],
    ) -> Result<(), ExportError> {
        self.prepare()?;
        let path = self
            .output_dir
            .join(format!("{}.colliders.ron", file_stem_for(name)));
        let content = ron::ser::to_string_pretty(&colliders, ron::ser::PrettyConfig::default())
            .map_err(|e| ExportError::Serialize(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ExportError::Io(e.to_string()))?;
        tracing::info!("Exported {} colliders to {:?}", colliders.len(), path);
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collider::generate_colliders;
    use crate::primitive::{generate_cube, generate_rounded_cube};
    use crate::shape::{BoxDimensions, RoundedBox};
    use std::io::Cursor;

    #[test]
    fn test_write_stl_triangle_count() {
        let mesh = generate_cube(BoxDimensions::new(2, 1, 3)).unwrap();
        let mut buffer = Cursor::new(Vec::new());
        write_stl(&mesh, &mut buffer).unwrap();

        buffer.set_position(0);
        let read = stl_io::read_stl(&mut buffer).unwrap();
        assert_eq!(read.faces.len(), mesh.triangle_count());
        assert_eq!(read.vertices.len(), mesh.vertex_count());
    }

    #[test]
    fn test_write_stl_rejects_bad_index() {
        let mut mesh = MeshData::new("broken");
        mesh.vertices = vec![[0.0; 3]; 2];
        mesh.submeshes = vec![vec![0, 1, 2]];
        let result = write_stl(&mesh, &mut Vec::new());
        assert!(matches!(result, Err(ExportError::Write(_))));
    }

    #[test]
    fn test_exporter_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let shape = RoundedBox::new(BoxDimensions::cube(2), 1);
        let mut mesh = generate_rounded_cube(shape).unwrap();
        mesh.name = "Rounded Box".to_string();
        let colliders = generate_colliders(shape).unwrap();

        let mut exporter = StlExporter::new(dir.path().join("out"));
        exporter.submit_mesh(&mesh).unwrap();
        exporter.submit_colliders(&mesh.name, &colliders).unwrap();

        let written = exporter.written();
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("rounded_box.stl"));
        assert!(written[1].ends_with("rounded_box.colliders.ron"));

        let content = std::fs::read_to_string(&written[1]).unwrap();
        let loaded: Vec<ColliderShape> = ron::from_str(&content).unwrap();
        assert_eq!(loaded, colliders);
    }
}
