//! Roundbox command line entry point
//!
//! Usage: `rb <shapes.ron> [output_dir]`
//!
//! Generates every shape of the set, writes meshes as STL and rounded-box
//! colliders as RON into `output_dir` (default `out`).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rb_core::{ConfigError, ExportError, GeneratedShape, ShapeSet, StlExporter};

const DEFAULT_OUTPUT_DIR: &str = "out";

#[derive(Debug, thiserror::Error)]
enum ToolError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rb_tool=info,rb_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: rb <shapes.ron> [output_dir]");
        return ExitCode::from(2);
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    match run(Path::new(&input), &output) {
        Ok(count) => {
            tracing::info!("Wrote {} files to {:?}", count, output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to process {}: {}", input, e);
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path, output: &Path) -> Result<usize, ToolError> {
    let set = ShapeSet::load(input)?;
    tracing::info!("Loaded shape set '{}' ({} shapes)", set.name, set.shapes.len());

    let mut exporter = StlExporter::new(output);
    for shape in set.generate_all()? {
        match &shape {
            GeneratedShape::Mesh { mesh, colliders } => {
                tracing::debug!(
                    "'{}': {} vertices, {} triangles in {} sub-meshes, {} colliders, bounds {:?}",
                    mesh.name,
                    mesh.vertex_count(),
                    mesh.triangle_count(),
                    mesh.submeshes.len(),
                    colliders.len(),
                    mesh.bounds()
                );
                for collider in colliders {
                    tracing::trace!("'{}' collider at {}", mesh.name, collider.center());
                }
            }
            GeneratedShape::Gizmo {
                name, primitives, ..
            } => {
                tracing::info!(
                    "'{}': {} gizmo primitives (not exported)",
                    name,
                    primitives.len()
                );
            }
        }
        shape.submit_to(&mut exporter)?;
    }

    Ok(exporter.written().len())
}
