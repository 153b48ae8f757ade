#[cfg(test)]
mod tests;

use std::f64::consts::FRAC_PI_2;

use crate::geometry::Point3;

/// Distance from the camera to the model origin, in model units
pub const CAMERA_DISTANCE: f64 = 3.0;

/// Perspective scale factor: model z in [-1, 1] maps to scales in [75, 150]
pub const FOCAL_SCALE: f64 = 300.0;

/// Interactive view state: yaw/pitch rotation plus perspective projection
/// onto a screen centered at `(center_x, center_y)`.
///
/// Read-only with respect to engine data; it only turns model points into
/// screen coordinates.
#[derive(Debug, Clone)]
pub struct ViewTransform {
    /// Rotation about the vertical axis, unbounded (trigonometry wraps it)
    yaw: f64,
    /// Rotation about the horizontal axis, clamped to [-pi/2, pi/2]
    pitch: f64,
    center_x: f64,
    center_y: f64,
}

impl ViewTransform {
    pub fn new(center_x: f64, center_y: f64) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            center_x,
            center_y,
        }
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Accumulate drag deltas into the rotation angles. Pitch is clamped on
    /// every update so the view can never flip past the poles.
    pub fn adjust_rotation(&mut self, delta_yaw: f64, delta_pitch: f64) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Rotate a model point into camera space: yaw about the vertical axis
    /// first, then pitch about the horizontal axis. The order is fixed; it
    /// keeps the rotation consistent with drag direction.
    pub fn rotate(&self, p: &Point3) -> Point3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let x1 = p.x * cos_yaw - p.z * sin_yaw;
        let z1 = p.x * sin_yaw + p.z * cos_yaw;

        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let y1 = p.y * cos_pitch - z1 * sin_pitch;
        let z2 = p.y * sin_pitch + z1 * cos_pitch;

        Point3::new(x1, y1, z2)
    }

    /// Rotate, then perspective-divide down to screen coordinates. Screen y
    /// grows downward, so model y is inverted.
    ///
    /// The denominator `z + CAMERA_DISTANCE` stays in [2, 4] for model data
    /// in the unit cube; points with z <= -3 are a caller-side precondition
    /// violation, not something the engine can produce.
    pub fn project(&self, p: &Point3) -> (f64, f64) {
        let r = self.rotate(p);
        let scale = FOCAL_SCALE / (r.z + CAMERA_DISTANCE);
        (self.center_x + r.x * scale, self.center_y - r.y * scale)
    }
}
