//! Built-in rules. Distances are in torso lengths, angles in degrees.

use super::{Anchor, Axis, Bound, Check, ExerciseRule, Measure, Reduce, Tracking, VectorDef};
use crate::exercise::Exercise;

pub fn rule(exercise: Exercise) -> ExerciseRule {
    match exercise {
        Exercise::BicepCurl => bicep_curl(),
        Exercise::FrontRaise => front_raise(),
        Exercise::ShoulderShrug => shoulder_shrug(),
        Exercise::ShoulderPress => shoulder_press(),
    }
}

pub fn all() -> Vec<ExerciseRule> {
    Exercise::ALL.iter().map(|exercise| rule(*exercise)).collect()
}

fn angle(first: &str, second: &str) -> Measure {
    Measure::Angle {
        first: first.to_string(),
        second: second.to_string(),
    }
}

fn check(
    label: &str,
    measure: Measure,
    reduce: Reduce,
    fail_when: Bound,
    threshold: f64,
    feedback: &str,
) -> Check {
    Check {
        label: label.to_string(),
        measure,
        reduce,
        across_sides: Reduce::Max,
        fail_when,
        threshold,
        feedback: feedback.to_string(),
    }
}

fn bicep_curl() -> ExerciseRule {
    ExerciseRule {
        name: Exercise::BicepCurl.to_string(),
        tracking: Tracking::DominantArm,
        vectors: vec![
            VectorDef::new("upper_arm", Anchor::Shoulder, Anchor::Elbow),
            VectorDef::new("forearm", Anchor::Wrist, Anchor::Elbow),
            VectorDef::new("torso", Anchor::Neck, Anchor::Hip),
        ],
        checks: vec![
            check(
                "upper_arm_torso_range",
                angle("upper_arm", "torso"),
                Reduce::Range,
                Bound::Above,
                35.0,
                "Your upper arm shows significant rotation around the shoulder when curling. \
                 Try holding your upper arm still, parallel to your chest, and concentrate on \
                 rotating around your elbow only.",
            ),
            check(
                "upper_arm_forearm_min",
                angle("upper_arm", "forearm"),
                Reduce::Min,
                Bound::Above,
                70.0,
                "You are not curling the weight all the way to the top, up to your shoulders. \
                 Try to curl your arm completely so that your forearm is parallel with your \
                 torso. It may help to use lighter weight.",
            ),
        ],
        success: "Exercise performed correctly! Weight was lifted fully up, and upper arm did \
                  not move significantly."
            .to_string(),
    }
}

fn front_raise() -> ExerciseRule {
    ExerciseRule {
        name: Exercise::FrontRaise.to_string(),
        tracking: Tracking::DominantArm,
        vectors: vec![
            VectorDef::new("back", Anchor::Hip, Anchor::Neck),
            VectorDef::new("torso", Anchor::Shoulder, Anchor::Hip),
            VectorDef::new("arm", Anchor::Shoulder, Anchor::Wrist),
        ],
        checks: vec![
            check(
                "back_horizontal_range",
                Measure::Component {
                    vector: "back".to_string(),
                    axis: Axis::X,
                },
                Reduce::Range,
                Bound::Above,
                0.3,
                "Your back shows significant movement. Try keeping your back straight and still \
                 when you lift the weight. Consider using lighter weight.",
            ),
            check(
                "torso_arm_max",
                angle("torso", "arm"),
                Reduce::Max,
                Bound::Below,
                90.0,
                "You are not lifting the weight all the way up. Finish with wrists at or \
                 slightly above shoulder level.",
            ),
        ],
        success: "Exercise performed correctly! Weight was lifted fully up, and no significant \
                  back movement was detected."
            .to_string(),
    }
}

fn shoulder_shrug() -> ExerciseRule {
    // The forearm points from wrist to elbow here, so a straight arm is 0 degrees.
    let mut shoulder_motion = check(
        "shoulder_vertical_range",
        Measure::Coordinate {
            anchor: Anchor::Shoulder,
            axis: Axis::Y,
        },
        Reduce::Range,
        Bound::Below,
        0.1,
        "Your shoulders do not go through enough motion. Squeeze and raise your shoulders more \
         through the exercise.",
    );
    shoulder_motion.across_sides = Reduce::Mean;

    ExerciseRule {
        name: Exercise::ShoulderShrug.to_string(),
        tracking: Tracking::BothSides,
        vectors: vec![
            VectorDef::new("upper_arm", Anchor::Shoulder, Anchor::Elbow),
            VectorDef::new("forearm", Anchor::Elbow, Anchor::Wrist),
        ],
        checks: vec![
            shoulder_motion,
            check(
                "upper_arm_forearm_max",
                angle("upper_arm", "forearm"),
                Reduce::Max,
                Bound::Above,
                30.0,
                "Your arms are bending when lifting. Keep your arms straight and still, and \
                 focus on moving only the shoulders.",
            ),
        ],
        success: "Exercise performed correctly! Shoulders went through full range of motion, \
                  and arms were kept straight."
            .to_string(),
    }
}

fn shoulder_press() -> ExerciseRule {
    ExerciseRule {
        name: Exercise::ShoulderPress.to_string(),
        tracking: Tracking::DominantArm,
        vectors: vec![
            VectorDef::new("back", Anchor::Hip, Anchor::Neck),
            VectorDef::new("upper_arm", Anchor::Shoulder, Anchor::Elbow),
            VectorDef::new("forearm", Anchor::Wrist, Anchor::Elbow),
        ],
        checks: vec![
            check(
                "back_horizontal_range",
                Measure::Component {
                    vector: "back".to_string(),
                    axis: Axis::X,
                },
                Reduce::Range,
                Bound::Above,
                0.16,
                "Your back shows significant movement while pressing. Try keeping your back \
                 straight and still when you lift the weight.",
            ),
            check(
                "elbow_neck_offset_min",
                Measure::FacingOffset {
                    anchor: Anchor::Elbow,
                    reference: Anchor::Neck,
                },
                Reduce::Min,
                Bound::Below,
                -0.12,
                "Your shoulders roll forward when you press the weight. Keep your elbows under \
                 the weight and your shoulders pulled back.",
            ),
            check(
                "upper_arm_forearm_max",
                angle("upper_arm", "forearm"),
                Reduce::Max,
                Bound::Below,
                178.0,
                "You are not extending your arms all the way overhead. Press the weight up until \
                 your arms are fully straight.",
            ),
        ],
        success: "Exercise performed correctly! Weight was pressed fully overhead, and no \
                  significant back or shoulder movement was detected."
            .to_string(),
    }
}
