/// Multi-frame transform and projection of vertex batches
///
/// A [`VertexBuffer`] holds `frames x vertices` points stored frame-major. Each
/// frame gets its own rotation+translation matrix from [`rt_matrix`], composed
/// with the shared projection matrix, and every point is divided by its
/// projected `w`. A `w` of zero yields infinite or NaN coordinates; callers that
/// draw the result are expected to filter those out.
use nalgebra::{Point2, Point3};

use crate::error::ShapeError;
use crate::projection::build_projection_matrix;
use crate::transform::{rt_matrix, FrameParams};

/// Per-frame 3D points, every frame holding the same number of vertices
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBuffer {
    n_frames: usize,
    vertices_per_frame: usize,
    points: Vec<Point3<f64>>,
}

impl VertexBuffer {
    /// Reshape flat `x y z` triples into `n_frames` equal frames
    pub fn from_flat(values: &[f64], n_frames: usize) -> Result<Self, ShapeError> {
        if n_frames == 0 {
            return Err(ShapeError::NoFrames);
        }
        if values.len() % (3 * n_frames) != 0 {
            return Err(ShapeError::NotDivisible {
                len: values.len(),
                n_frames,
            });
        }

        let points = values
            .chunks_exact(3)
            .map(|xyz| Point3::new(xyz[0], xyz[1], xyz[2]))
            .collect();

        Ok(Self {
            n_frames,
            vertices_per_frame: values.len() / (3 * n_frames),
            points,
        })
    }

    /// Build from already shaped frames; frames may be empty but must agree in length
    pub fn from_frames(frames: Vec<Vec<Point3<f64>>>) -> Result<Self, ShapeError> {
        let expected = match frames.first() {
            Some(first) => first.len(),
            None => return Err(ShapeError::NoFrames),
        };

        let n_frames = frames.len();
        let mut points = Vec::with_capacity(n_frames * expected);
        for (frame, vertices) in frames.into_iter().enumerate() {
            if vertices.len() != expected {
                return Err(ShapeError::RaggedFrames {
                    frame,
                    expected,
                    found: vertices.len(),
                });
            }
            points.extend(vertices);
        }

        Ok(Self {
            n_frames,
            vertices_per_frame: expected,
            points,
        })
    }

    /// The same set of vertices copied into every frame
    pub fn repeat(vertices: &[Point3<f64>], n_frames: usize) -> Result<Self, ShapeError> {
        Self::from_frames(vec![vertices.to_vec(); n_frames])
    }

    pub fn n_frames(&self) -> usize {
        self.n_frames
    }

    pub fn vertices_per_frame(&self) -> usize {
        self.vertices_per_frame
    }

    pub fn frame(&self, index: usize) -> Option<&[Point3<f64>]> {
        frame_slice(&self.points, self.n_frames, index, self.vertices_per_frame)
    }

    pub fn frames(&self) -> impl Iterator<Item = &[Point3<f64>]> {
        (0..self.n_frames).map(move |i| {
            &self.points[i * self.vertices_per_frame..(i + 1) * self.vertices_per_frame]
        })
    }

    pub fn to_flat(&self) -> Vec<f64> {
        self.points.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
    }
}

/// Projected 2D coordinates, shaped `(frames, vertices)`
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenFrames {
    n_frames: usize,
    vertices_per_frame: usize,
    points: Vec<Point2<f64>>,
}

impl ScreenFrames {
    pub fn n_frames(&self) -> usize {
        self.n_frames
    }

    pub fn vertices_per_frame(&self) -> usize {
        self.vertices_per_frame
    }

    pub fn frame(&self, index: usize) -> Option<&[Point2<f64>]> {
        frame_slice(&self.points, self.n_frames, index, self.vertices_per_frame)
    }

    pub fn frames(&self) -> impl Iterator<Item = &[Point2<f64>]> {
        (0..self.n_frames).map(move |i| {
            &self.points[i * self.vertices_per_frame..(i + 1) * self.vertices_per_frame]
        })
    }

    pub fn get(&self, frame: usize, vertex: usize) -> Option<&Point2<f64>> {
        if frame >= self.n_frames || vertex >= self.vertices_per_frame {
            return None;
        }
        let index = frame
            .checked_mul(self.vertices_per_frame)?
            .checked_add(vertex)?;
        self.points.get(index)
    }

    /// Row-major `(frames, vertices, 2)` values
    pub fn to_flat(&self) -> Vec<f64> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }
}

/// Frame `index` of a frame-major buffer holding `n_frames` frames of `len` items
fn frame_slice<T>(points: &[T], n_frames: usize, index: usize, len: usize) -> Option<&[T]> {
    // Zero-length frames all start at 0, so bound by frame count first
    if index >= n_frames {
        return None;
    }
    let start = index.checked_mul(len)?;
    let end = start.checked_add(len)?;
    points.get(start..end)
}

/// Transform and project a pre-shaped vertex buffer, one parameter set per frame
pub fn project_frames(
    vertices: &VertexBuffer,
    frames: &[FrameParams],
    f: f64,
) -> Result<ScreenFrames, ShapeError> {
    if vertices.n_frames != frames.len() {
        return Err(ShapeError::FrameCountMismatch {
            vertex_frames: vertices.n_frames,
            param_frames: frames.len(),
        });
    }

    tracing::debug!(
        frames = vertices.n_frames,
        vertices = vertices.vertices_per_frame,
        focal_length = f,
        "projecting vertex buffer"
    );

    let projection = build_projection_matrix(f);
    let mut points = Vec::with_capacity(vertices.points.len());

    for (transform, frame) in rt_matrix(frames).iter().zip(vertices.frames()) {
        let combined = projection * transform;
        points.extend(frame.iter().map(|p| {
            let h = combined * p.to_homogeneous();
            Point2::new(h.x / h.w, h.y / h.w)
        }));
    }

    Ok(ScreenFrames {
        n_frames: vertices.n_frames,
        vertices_per_frame: vertices.vertices_per_frame,
        points,
    })
}

/// Transform and project flat `x y z` data split evenly across `frames`
pub fn rt_multiframe(
    vertices: &[f64],
    frames: &[FrameParams],
    f: f64,
) -> Result<ScreenFrames, ShapeError> {
    let buffer = VertexBuffer::from_flat(vertices, frames.len())?;
    project_frames(&buffer, frames, f)
}
