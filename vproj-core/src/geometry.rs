/// Wireframe meshes fed through the projection pipeline
use nalgebra::Point3;

/// Points joined by straight edges
#[derive(Debug, Clone, Default)]
pub struct Wireframe {
    pub vertices: Vec<Point3<f64>>,
    pub edges: Vec<(usize, usize)>,
}

impl Wireframe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, x: f64, y: f64, z: f64) -> usize {
        self.vertices.push(Point3::new(x, y, z));
        self.vertices.len() - 1
    }

    /// Join two existing vertices; returns false if either index is out of range
    pub fn add_edge(&mut self, a: usize, b: usize) -> bool {
        if a >= self.vertices.len() || b >= self.vertices.len() {
            return false;
        }
        self.edges.push((a, b));
        true
    }

    /// Axis-aligned cube centred on the origin
    pub fn cube(size: f64) -> Self {
        let half = size / 2.0;
        let mut mesh = Self::new();

        // Corner index bits: x = 1, y = 2, z = 4
        for i in 0..8 {
            let x = if i & 1 == 0 { -half } else { half };
            let y = if i & 2 == 0 { -half } else { half };
            let z = if i & 4 == 0 { -half } else { half };
            mesh.add_vertex(x, y, z);
        }

        for i in 0..8usize {
            for bit in [1, 2, 4] {
                if i & bit == 0 {
                    mesh.edges.push((i, i | bit));
                }
            }
        }

        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_layout() {
        let cube = Wireframe::cube(2.0);
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.edges.len(), 12);
        for &(a, b) in &cube.edges {
            let d = cube.vertices[a] - cube.vertices[b];
            assert_eq!(d.norm(), 2.0);
        }
    }

    #[test]
    fn test_add_edge_bounds() {
        let mut mesh = Wireframe::new();
        let a = mesh.add_vertex(0.0, 0.0, 0.0);
        let b = mesh.add_vertex(1.0, 0.0, 0.0);
        assert!(mesh.add_edge(a, b));
        assert!(!mesh.add_edge(a, 5));
        assert_eq!(mesh.edges, vec![(0, 1)]);
    }
}
