
use serde::{Deserialize, Serialize};

/// A point in 3D model space.
///
/// Sampled data stays inside the cube [-1, 1]^3; centroid means of such
/// points remain inside the cube as well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Per-coordinate comparison: true when every coordinate differs by at
    /// most `tol`. Used to decide whether a centroid actually moved.
    pub fn approx_eq(&self, other: &Point3, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.z - other.z).abs() <= tol
    }
}

/// Euclidean (L2) distance between two points
pub fn dist3(a: &Point3, b: &Point3) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Arithmetic mean of a non-empty set of points, per coordinate
pub fn mean_point(points: &[Point3]) -> Point3 {
    let mut out = Point3::ORIGIN;

    for p in points {
        out.x += p.x;
        out.y += p.y;
        out.z += p.z;
    }

    let n = points.len() as f64;
    out.x /= n;
    out.y /= n;
    out.z /= n;

    out
}
