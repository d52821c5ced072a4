//! Declarative exercise rules
//!
//! An [`ExerciseRule`] names the joint vectors it needs, the statistics it
//! derives from them and the thresholds those statistics must respect. One
//! shared pipeline (see [`pipeline`]) runs every rule.

pub mod builtin;
pub mod pipeline;

use crate::error::EvalError;
use crate::utils::stats;
use pose_core::{Joint, Pose, Side, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which body side(s) a rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tracking {
    /// The side whose arm was detected in more frames (left on ties).
    DominantArm,
    /// Left and right together.
    BothSides,
}

/// Joint reference resolved against the tracked side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Nose,
    Neck,
    Shoulder,
    Elbow,
    Wrist,
    Hip,
    Knee,
    Ankle,
}

impl Anchor {
    pub fn joint(self, side: Side) -> Joint {
        match self {
            Anchor::Nose => Joint::Nose,
            Anchor::Neck => Joint::Neck,
            Anchor::Shoulder => side.shoulder(),
            Anchor::Elbow => side.elbow(),
            Anchor::Wrist => side.wrist(),
            Anchor::Hip => side.hip(),
            Anchor::Knee => side.knee(),
            Anchor::Ankle => side.ankle(),
        }
    }
}

/// `head - tail` for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorDef {
    pub name: String,
    pub head: Anchor,
    pub tail: Anchor,
}

impl VectorDef {
    pub fn new(name: &str, head: Anchor, tail: Anchor) -> Self {
        Self {
            name: name.to_string(),
            head,
            tail,
        }
    }

    pub fn on(&self, pose: &Pose, side: Side) -> Vec2 {
        pose[self.head.joint(side)].position() - pose[self.tail.joint(side)].position()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn of(self, v: Vec2) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }
}

/// Per-frame quantity a check is computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Measure {
    /// Degrees between two named vectors, each scaled to unit length first.
    Angle { first: String, second: String },
    /// One component of a named vector, in torso lengths.
    Component { vector: String, axis: Axis },
    /// One coordinate of a joint, in torso lengths.
    Coordinate { anchor: Anchor, axis: Axis },
    /// Horizontal distance of `anchor` behind `reference`, for a subject
    /// filmed side-on. The subject faces +x when the right side is tracked
    /// and -x when the left side is, so negative values mean `anchor` is
    /// in front of `reference`.
    FacingOffset { anchor: Anchor, reference: Anchor },
}

impl Measure {
    fn vector_names(&self) -> Vec<&str> {
        match self {
            Measure::Angle { first, second } => vec![first.as_str(), second.as_str()],
            Measure::Component { vector, .. } => vec![vector.as_str()],
            Measure::Coordinate { .. } | Measure::FacingOffset { .. } => Vec::new(),
        }
    }

    fn anchors(&self) -> Vec<Anchor> {
        match self {
            Measure::Coordinate { anchor, .. } => vec![*anchor],
            Measure::FacingOffset { anchor, reference } => vec![*anchor, *reference],
            Measure::Angle { .. } | Measure::Component { .. } => Vec::new(),
        }
    }
}

/// Reduction of a series to one number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reduce {
    Min,
    Max,
    Mean,
    Range,
}

impl Reduce {
    /// NaN for an empty series or one containing a non-finite value.
    pub fn apply(self, values: &[f64]) -> f64 {
        match self {
            Reduce::Min => stats::min(values),
            Reduce::Max => stats::max(values),
            Reduce::Mean => stats::mean(values),
            Reduce::Range => stats::range(values),
        }
    }
}

/// Direction in which a statistic fails its threshold. Comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    /// Fails when `value > threshold`.
    Above,
    /// Fails when `value < threshold`.
    Below,
}

impl Bound {
    pub fn violated(self, value: f64, threshold: f64) -> bool {
        match self {
            Bound::Above => value > threshold,
            Bound::Below => value < threshold,
        }
    }
}

fn default_across_sides() -> Reduce {
    Reduce::Max
}

/// One thresholded statistic and the feedback given when it fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    pub label: String,
    pub measure: Measure,
    pub reduce: Reduce,
    /// Combines the per-side results of a [`Tracking::BothSides`] rule.
    #[serde(default = "default_across_sides")]
    pub across_sides: Reduce,
    pub fail_when: Bound,
    pub threshold: f64,
    pub feedback: String,
}

impl Check {
    pub fn passes(&self, value: f64) -> bool {
        !self.fail_when.violated(value, self.threshold)
    }
}

/// Complete definition of how one exercise is judged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRule {
    pub name: String,
    pub tracking: Tracking,
    pub vectors: Vec<VectorDef>,
    pub checks: Vec<Check>,
    /// Feedback when every check passes.
    pub success: String,
}

impl ExerciseRule {
    pub fn vector(&self, name: &str) -> Option<&VectorDef> {
        self.vectors.iter().find(|vector| vector.name == name)
    }

    /// Joints that must all be detected for a frame to be used.
    pub fn required_joints(&self, sides: &[Side]) -> Vec<Joint> {
        let anchors = self
            .vectors
            .iter()
            .flat_map(|vector| [vector.head, vector.tail])
            .chain(self.checks.iter().flat_map(|check| check.measure.anchors()));

        let mut joints = BTreeSet::new();
        for anchor in anchors {
            for side in sides {
                joints.insert(anchor.joint(*side));
            }
        }
        joints.into_iter().collect()
    }

    /// Every check must refer to vectors the rule defines.
    pub fn validate(&self) -> Result<(), EvalError> {
        for check in &self.checks {
            for name in check.measure.vector_names() {
                if self.vector(name).is_none() {
                    return Err(EvalError::UnknownVector {
                        exercise: self.name.clone(),
                        vector: name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
