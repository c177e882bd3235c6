/// Rotation and translation matrices, batched over animation frames
use nalgebra::{Matrix4, Vector3, Vector4};

use crate::error::ShapeError;

/// Pair of coordinate axes rotated into each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisPair {
    /// Rotate X toward Y
    XY,
    /// Rotate X toward Z
    XZ,
    /// Rotate Y toward Z
    YZ,
}

impl AxisPair {
    pub fn from_indices(a: usize, b: usize) -> Option<Self> {
        match (a, b) {
            (0, 1) => Some(Self::XY),
            (0, 2) => Some(Self::XZ),
            (1, 2) => Some(Self::YZ),
            _ => None,
        }
    }

    pub fn indices(self) -> (usize, usize) {
        match self {
            Self::XY => (0, 1),
            Self::XZ => (0, 2),
            Self::YZ => (1, 2),
        }
    }
}

/// Per-frame rotation angles (radians) and translation offset
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameParams {
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
    pub tx: f64,
    pub ty: f64,
    pub tz: f64,
}

impl FrameParams {
    pub fn new(r1: f64, r2: f64, r3: f64, tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            r1,
            r2,
            r3,
            tx,
            ty,
            tz,
        }
    }

    pub fn translation(&self) -> Vector3<f64> {
        Vector3::new(self.tx, self.ty, self.tz)
    }

    pub fn to_array(&self) -> [f64; 6] {
        [self.r1, self.r2, self.r3, self.tx, self.ty, self.tz]
    }

    /// Split a flat `(n, 6)` row-major array into frame parameters
    pub fn batch_from_flat(values: &[f64]) -> Result<Vec<Self>, ShapeError> {
        if values.len() % 6 != 0 {
            return Err(ShapeError::ParamsLength { len: values.len() });
        }

        Ok(values
            .chunks_exact(6)
            .map(|row| Self::new(row[0], row[1], row[2], row[3], row[4], row[5]))
            .collect())
    }
}

impl From<[f64; 6]> for FrameParams {
    fn from(v: [f64; 6]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5])
    }
}

/// Rotation by `angle` in the plane spanned by `axes`
///
/// The third axis and the homogeneous row/column stay identity.
pub fn rotation_matrix(angle: f64, axes: AxisPair) -> Matrix4<f64> {
    let (a, b) = axes.indices();
    let (s, c) = angle.sin_cos();

    let mut mat = Matrix4::identity();
    mat[(a, a)] = c;
    mat[(b, b)] = c;
    mat[(b, a)] = s;
    mat[(a, b)] = -s;
    mat
}

/// One rotation matrix per angle, in input order
pub fn build_rotate_matrix(angles: &[f64], axes: AxisPair) -> Vec<Matrix4<f64>> {
    angles
        .iter()
        .map(|&angle| rotation_matrix(angle, axes))
        .collect()
}

pub fn translation_matrix(t: &Vector3<f64>) -> Matrix4<f64> {
    let mut mat = Matrix4::identity();
    mat[(0, 3)] = t.x;
    mat[(1, 3)] = t.y;
    mat[(2, 3)] = t.z;
    mat
}

/// One translation matrix per offset, in input order
pub fn build_transition_matrix(translations: &[Vector3<f64>]) -> Vec<Matrix4<f64>> {
    translations.iter().map(translation_matrix).collect()
}

/// Composed `T * R(r1, XY) * R(r2, XZ) * R(r3, YZ)` for one frame
pub fn frame_matrix(params: &FrameParams) -> Matrix4<f64> {
    translation_matrix(&params.translation())
        * rotation_matrix(params.r1, AxisPair::XY)
        * rotation_matrix(params.r2, AxisPair::XZ)
        * rotation_matrix(params.r3, AxisPair::YZ)
}

/// Rotation+translation matrix for every frame, in input order
pub fn rt_matrix(frames: &[FrameParams]) -> Vec<Matrix4<f64>> {
    let r1: Vec<f64> = frames.iter().map(|p| p.r1).collect();
    let r2: Vec<f64> = frames.iter().map(|p| p.r2).collect();
    let r3: Vec<f64> = frames.iter().map(|p| p.r3).collect();
    let t: Vec<Vector3<f64>> = frames.iter().map(FrameParams::translation).collect();

    let m_r1 = build_rotate_matrix(&r1, AxisPair::XY);
    let m_r2 = build_rotate_matrix(&r2, AxisPair::XZ);
    let m_r3 = build_rotate_matrix(&r3, AxisPair::YZ);
    let m_t = build_transition_matrix(&t);

    m_t.iter()
        .zip(&m_r1)
        .zip(&m_r2)
        .zip(&m_r3)
        .map(|(((t, r1), r2), r3)| t * r1 * r2 * r3)
        .collect()
}

/// Transform a single homogeneous vertex by one frame's rotation+translation
pub fn rt(v: &Vector4<f64>, tx: f64, ty: f64, tz: f64, r1: f64, r2: f64, r3: f64) -> Vector4<f64> {
    frame_matrix(&FrameParams::new(r1, r2, r3, tx, ty, tz)) * v
}
