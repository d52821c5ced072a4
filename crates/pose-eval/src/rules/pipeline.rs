//! Shared evaluation pipeline
//!
//! side selection -> frame filtering -> per-frame series -> reduction ->
//! threshold checks -> feedback

use super::{Check, ExerciseRule, Measure, Tracking};
use crate::error::EvalError;
use crate::evaluation::{Evaluation, Report, Statistic};
use crate::traits::Evaluate;
use crate::Result;
use pose_core::{angle_between, Joint, Pose, PoseSequence, Side, Vec2};
use tracing::debug;

/// Side whose shoulder, elbow and wrist are all detected in more frames.
/// Ties go to the left side.
pub fn dominant_side(seq: &PoseSequence) -> Side {
    let count = |side: Side| {
        seq.poses()
            .iter()
            .filter(|pose| pose.has_all(&side.arm()))
            .count()
    };
    let right = count(Side::Right);
    let left = count(Side::Left);
    let side = if right > left { Side::Right } else { Side::Left };
    debug!(right, left, side = %side, "selected exercise arm");
    side
}

/// Frames (with their index in the sequence) where every joint is detected.
pub fn usable_frames<'a>(seq: &'a PoseSequence, joints: &[Joint]) -> Vec<(usize, &'a Pose)> {
    seq.poses()
        .iter()
        .enumerate()
        .filter(|(_, pose)| pose.has_all(joints))
        .collect()
}

/// One value per usable frame for `measure` on `side`.
fn series(
    rule: &ExerciseRule,
    measure: &Measure,
    side: Side,
    frames: &[(usize, &Pose)],
) -> Result<Vec<f64>> {
    match measure {
        Measure::Angle { first, second } => frames
            .iter()
            .map(|(index, pose)| -> Result<f64> {
                let u = unit_vector(rule, first, side, *index, pose)?;
                let v = unit_vector(rule, second, side, *index, pose)?;
                Ok(angle_between(&u, &v))
            })
            .collect(),
        Measure::Component { vector, axis } => {
            let def = rule.vector(vector).ok_or_else(|| unknown_vector(rule, vector))?;
            Ok(frames
                .iter()
                .map(|(_, pose)| axis.of(def.on(pose, side)))
                .collect())
        }
        Measure::Coordinate { anchor, axis } => {
            let joint = anchor.joint(side);
            Ok(frames
                .iter()
                .map(|(_, pose)| axis.of(pose[joint].position()))
                .collect())
        }
        Measure::FacingOffset { anchor, reference } => {
            let (anchor, reference) = (anchor.joint(side), reference.joint(side));
            Ok(frames
                .iter()
                .map(|(_, pose)| match side {
                    Side::Right => pose[reference].x() - pose[anchor].x(),
                    Side::Left => pose[anchor].x() - pose[reference].x(),
                })
                .collect())
        }
    }
}

fn unit_vector(
    rule: &ExerciseRule,
    name: &str,
    side: Side,
    frame: usize,
    pose: &Pose,
) -> Result<Vec2> {
    let def = rule.vector(name).ok_or_else(|| unknown_vector(rule, name))?;
    def.on(pose, side)
        .unit()
        .ok_or_else(|| EvalError::DegenerateVector {
            exercise: rule.name.clone(),
            vector: name.to_string(),
            frame,
        })
}

fn unknown_vector(rule: &ExerciseRule, name: &str) -> EvalError {
    EvalError::UnknownVector {
        exercise: rule.name.clone(),
        vector: name.to_string(),
    }
}

/// Reduce `check` over every tracked side to a single finite value.
fn statistic(
    rule: &ExerciseRule,
    check: &Check,
    sides: &[Side],
    frames: &[(usize, &Pose)],
) -> Result<f64> {
    let per_side = sides
        .iter()
        .map(|side| -> Result<f64> {
            Ok(check.reduce.apply(&series(rule, &check.measure, *side, frames)?))
        })
        .collect::<Result<Vec<f64>>>()?;

    let value = match per_side.as_slice() {
        [single] => *single,
        _ => check.across_sides.apply(&per_side),
    };

    if !value.is_finite() {
        return Err(EvalError::NonFiniteStatistic {
            exercise: rule.name.clone(),
            check: check.label.clone(),
        });
    }
    Ok(value)
}

impl Evaluate for ExerciseRule {
    fn evaluate(&self, seq: &PoseSequence) -> Result<Evaluation> {
        let sides = match self.tracking {
            Tracking::DominantArm => vec![dominant_side(seq)],
            Tracking::BothSides => vec![Side::Left, Side::Right],
        };

        let required = self.required_joints(&sides);
        let frames = usable_frames(seq, &required);
        if frames.is_empty() {
            return Err(EvalError::InsufficientData {
                exercise: self.name.clone(),
                joints: required
                    .iter()
                    .map(|joint| joint.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        debug!(
            exercise = %self.name,
            frames_used = frames.len(),
            frames_total = seq.len(),
            "filtered frames"
        );

        let mut statistics = Vec::with_capacity(self.checks.len());
        for check in &self.checks {
            let value = statistic(self, check, &sides, &frames)?;
            let passed = check.passes(value);
            debug!(
                exercise = %self.name,
                check = %check.label,
                value,
                threshold = check.threshold,
                passed,
                "computed statistic"
            );
            statistics.push(Statistic {
                check: check.label.clone(),
                value,
                threshold: check.threshold,
                fail_when: check.fail_when,
                passed,
            });
        }

        let failed: Vec<&str> = self
            .checks
            .iter()
            .zip(&statistics)
            .filter(|(_, stat)| !stat.passed)
            .map(|(check, _)| check.feedback.as_str())
            .collect();

        let correct = failed.is_empty();
        let feedback = if correct {
            self.success.clone()
        } else {
            failed.join("\n")
        };

        Ok(Evaluation {
            exercise: self.name.clone(),
            recognized: true,
            correct,
            feedback,
            report: Report {
                side: match self.tracking {
                    Tracking::DominantArm => sides.first().copied(),
                    Tracking::BothSides => None,
                },
                frames_total: seq.len(),
                frames_used: frames.len(),
                statistics,
            },
        })
    }
}
