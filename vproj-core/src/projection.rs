/// Perspective projection and viewport mapping
use nalgebra::{Matrix4, Point2, Vector4};

/// Row-major projection template; focal length is written into (0,0) and (1,1)
const PROJECTION_TEMPLATE: [[f64; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, -1.0, -0.01],
    [0.0, 0.0, -1.0, 0.0],
];

/// Perspective matrix for focal length `f`, unit aspect ratio
pub fn build_projection_matrix(f: f64) -> Matrix4<f64> {
    let mut mat = Matrix4::from_fn(|row, col| PROJECTION_TEMPLATE[row][col]);
    mat[(0, 0)] = f;
    mat[(1, 1)] = f;
    mat
}

/// Project a homogeneous vertex without the perspective divide
pub fn proj(v: &Vector4<f64>, f: f64) -> Vector4<f64> {
    build_projection_matrix(f) * v
}

/// Character or pixel grid that projected coordinates are mapped onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Map a projected point in `[-1, 1]` to grid coordinates, y pointing down
    pub fn to_screen(&self, point: &Point2<f64>) -> Option<(f64, f64)> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }

        // Clip test
        if point.x < -1.0 || point.x > 1.0 || point.y < -1.0 || point.y > 1.0 {
            return None;
        }

        let screen_x = (point.x + 1.0) * 0.5 * self.width as f64;
        let screen_y = (1.0 - point.y) * 0.5 * self.height as f64;

        Some((screen_x, screen_y))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_projection_fixed_entries() {
        for f in [0.5, 1.0, 2.75, -3.0] {
            let m = build_projection_matrix(f);
            assert_eq!(m[(0, 0)], f);
            assert_eq!(m[(1, 1)], f);
            assert_eq!(m[(2, 2)], -1.0);
            assert_eq!(m[(2, 3)], -0.01);
            assert_eq!(m[(3, 2)], -1.0);
            assert_eq!(m[(3, 3)], 0.0);
        }
    }

    #[test]
    fn test_projection_is_fresh_each_call() {
        let mut first = build_projection_matrix(2.0);
        first[(2, 2)] = 42.0;
        let second = build_projection_matrix(2.0);
        assert_eq!(second[(2, 2)], -1.0);
    }

    #[test]
    fn test_proj_skips_divide() {
        let v = proj(&Vector4::new(1.0, 2.0, 3.0, 1.0), 2.0);
        assert_relative_eq!(v, Vector4::new(2.0, 4.0, -3.01, -3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_viewport_centre_and_corners() {
        let viewport = Viewport::new(80, 40);
        assert_eq!(viewport.to_screen(&Point2::new(0.0, 0.0)), Some((40.0, 20.0)));
        assert_eq!(viewport.to_screen(&Point2::new(-1.0, 1.0)), Some((0.0, 0.0)));
        assert_eq!(viewport.to_screen(&Point2::new(1.0, -1.0)), Some((80.0, 40.0)));
    }

    #[test]
    fn test_viewport_rejects_outside_and_non_finite() {
        let viewport = Viewport::default();
        assert_eq!(viewport.to_screen(&Point2::new(1.5, 0.0)), None);
        assert_eq!(viewport.to_screen(&Point2::new(f64::NAN, 0.0)), None);
        assert_eq!(viewport.to_screen(&Point2::new(0.0, f64::INFINITY)), None);
    }
}
