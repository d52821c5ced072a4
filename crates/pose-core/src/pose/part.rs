use crate::geometry::Vec2;
use std::ops::Div;

/// One keypoint observation: position plus detection confidence.
///
/// A zero confidence means the detector did not find the joint in this
/// frame; its coordinates are meaningless then.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Part {
    x: f64,
    y: f64,
    confidence: f64,
}

impl Part {
    pub fn new(x: f64, y: f64, confidence: f64) -> Self {
        Self { x, y, confidence }
    }

    /// Build from an `[x, y, confidence]` keypoint row.
    pub fn from_row(row: [f64; 3]) -> Self {
        Self::new(row[0], row[1], row[2])
    }

    pub fn to_row(&self) -> [f64; 3] {
        [self.x, self.y, self.confidence]
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Whether the detector found this joint.
    pub fn exists(&self) -> bool {
        self.confidence != 0.0
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean distance. Only meaningful when both parts exist.
    pub fn dist(&self, other: &Part) -> f64 {
        (self.position() - other.position()).norm()
    }
}

/// Rescales the position, keeping confidence.
impl Div<f64> for Part {
    type Output = Part;

    fn div(self, scalar: f64) -> Part {
        Part::new(self.x / scalar, self.y / scalar, self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists_follows_confidence() {
        assert!(Part::new(1.0, 2.0, 0.3).exists());
        assert!(!Part::new(1.0, 2.0, 0.0).exists());
        assert!(!Part::from_row([0.0, 0.0, 0.0]).exists());
        assert!(!Part::default().exists());
    }

    #[test]
    fn test_undetected_part_never_exists() {
        for row in [[1.0, 2.0, 0.0], [-5.0, 40.0, -0.0], [f64::NAN, 3.0, 0.0]] {
            let part = Part::from_row(row);
            assert_eq!(part.confidence(), 0.0);
            assert!(!part.exists());
            assert!(!(part / 4.0).exists());
        }
        assert!(Part::from_row([0.0, 0.0, 0.01]).exists());
    }

    #[test]
    fn test_division_keeps_confidence() {
        let part = Part::new(10.0, -4.0, 0.7) / 2.0;
        assert_eq!(part.x(), 5.0);
        assert_eq!(part.y(), -2.0);
        assert_eq!(part.confidence(), 0.7);
        assert!(part.exists());
    }

    #[test]
    fn test_dist() {
        let a = Part::new(0.0, 0.0, 1.0);
        let b = Part::new(3.0, 4.0, 1.0);
        assert!((a.dist(&b) - 5.0).abs() < 1e-12);
        assert!((b.dist(&a) - 5.0).abs() < 1e-12);
    }
}
