//! Global constants for rb-core

/// Current shape-set document version
pub const SHAPE_SET_VERSION: u32 = 1;

/// Constant tangent assigned to every grid vertex (+X, negative handedness)
pub const GRID_TANGENT: [f32; 4] = [1.0, 0.0, 0.0, -1.0];

/// Radius of the sphere drawn at each mesh vertex
pub const VERTEX_GIZMO_RADIUS: f32 = 0.1;

/// Radius of the spheres drawn for circle mapping samples
pub const CIRCLE_GIZMO_RADIUS: f32 = 0.025;

/// Gizmo colors (RGBA)
pub mod colors {
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const YELLOW: [f32; 4] = [1.0, 0.92, 0.016, 1.0];
    pub const GREY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
}
