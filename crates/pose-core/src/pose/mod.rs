//! Per-frame poses and normalized pose sequences

pub mod joint;
pub mod part;
pub mod sequence;

pub use joint::{Joint, Side, JOINT_COUNT};
pub use part::Part;
pub use sequence::PoseSequence;

use std::ops::Index;

/// One frame of raw keypoints: `JOINT_COUNT` rows of `[x, y, confidence]`
/// in [`Joint::ALL`] order.
pub type Frame = [[f64; 3]; JOINT_COUNT];

/// All keypoints of a single video frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    parts: [Part; JOINT_COUNT],
}

impl Pose {
    pub fn new(parts: [Part; JOINT_COUNT]) -> Self {
        Self { parts }
    }

    pub fn from_frame(frame: &Frame) -> Self {
        Self {
            parts: frame.map(Part::from_row),
        }
    }

    pub fn to_frame(&self) -> Frame {
        self.parts.map(|part| part.to_row())
    }

    pub fn part(&self, joint: Joint) -> &Part {
        &self.parts[joint.index()]
    }

    /// True when every listed joint was detected in this frame.
    pub fn has_all(&self, joints: &[Joint]) -> bool {
        joints.iter().all(|joint| self.part(*joint).exists())
    }

    /// `(joint, part)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Joint, &Part)> + '_ {
        Joint::ALL.iter().copied().zip(self.parts.iter())
    }

    /// Copy of this pose with every position divided by `scale`.
    pub(crate) fn scaled(&self, scale: f64) -> Pose {
        Pose {
            parts: self.parts.map(|part| part / scale),
        }
    }
}

impl Index<Joint> for Pose {
    type Output = Part;

    fn index(&self, joint: Joint) -> &Part {
        self.part(joint)
    }
}
