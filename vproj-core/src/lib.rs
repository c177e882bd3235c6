/// vproj Core Library - Frame transforms and perspective projection
///
/// Stateless helpers that build 4x4 homogeneous rotation, translation and
/// projection matrices and apply them to batches of vertices across
/// animation frames.

pub mod animation;
pub mod error;
pub mod geometry;
pub mod params;
pub mod pipeline;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use error::{ParamsError, ProjectError, ShapeError};
pub use geometry::Wireframe;
pub use pipeline::{project_frames, rt_multiframe, ScreenFrames, VertexBuffer};
pub use projection::{build_projection_matrix, proj, Viewport};
pub use transform::{
    build_rotate_matrix, build_transition_matrix, rt, rt_matrix, AxisPair, FrameParams,
};
