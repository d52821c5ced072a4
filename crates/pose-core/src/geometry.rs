//! 2-D vector helpers used for limb and torso angles.

use std::ops::Sub;

/// A 2-D vector in image coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: &Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector pointing the same way, or `None` for a zero-length
    /// (or non-finite) vector.
    pub fn unit(&self) -> Option<Vec2> {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            return None;
        }
        Some(Vec2::new(self.x / norm, self.y / norm))
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Angle between two unit vectors in degrees, always within `[0, 180]`.
///
/// The dot product is clamped to `[-1, 1]` first, since rounding can push it
/// just outside the domain of `acos`.
pub fn angle_between(u: &Vec2, v: &Vec2) -> f64 {
    u.dot(v).clamp(-1.0, 1.0).acos().to_degrees()
}
