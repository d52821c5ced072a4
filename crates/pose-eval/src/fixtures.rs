//! Synthetic keypoint frames for unit tests, in pixel coordinates
//! (y grows downwards, torso about 100 px).

use pose_core::{Frame, Joint, PoseSequence, Side, JOINT_COUNT};

pub const SEEN: f64 = 0.9;

pub type Point = (f64, f64);

/// Point `length` away from `origin`, `degrees` clockwise from straight up.
pub fn toward(origin: Point, degrees: f64, length: f64) -> Point {
    let r = degrees.to_radians();
    (origin.0 + length * r.sin(), origin.1 - length * r.cos())
}

pub struct FrameBuilder {
    frame: Frame,
}

impl FrameBuilder {
    /// Neck at the origin, both hips 100 px below.
    pub fn upright() -> Self {
        Self::body((0.0, 0.0), (0.0, 100.0))
    }

    pub fn body(neck: Point, hip: Point) -> Self {
        Self {
            frame: [[0.0; 3]; JOINT_COUNT],
        }
        .joint(Joint::Neck, neck)
        .joint(Joint::LHip, hip)
        .joint(Joint::RHip, hip)
    }

    pub fn joint(mut self, joint: Joint, at: Point) -> Self {
        self.frame[joint.index()] = [at.0, at.1, SEEN];
        self
    }

    pub fn arm(self, side: Side, shoulder: Point, elbow: Point, wrist: Point) -> Self {
        self.joint(side.shoulder(), shoulder)
            .joint(side.elbow(), elbow)
            .joint(side.wrist(), wrist)
    }

    pub fn hide(mut self, joint: Joint) -> Self {
        self.frame[joint.index()][2] = 0.0;
        self
    }

    pub fn build(self) -> Frame {
        self.frame
    }
}

/// Curl pose: upper arm `tilt` degrees off the torso, elbow bent to `elbow`
/// degrees between upper arm and forearm.
pub fn curl(side: Side, tilt: f64, elbow_angle: f64) -> Frame {
    let shoulder = (0.0, 10.0);
    let elbow = toward(shoulder, 180.0 + tilt, 30.0);
    let wrist = toward(elbow, tilt + elbow_angle, 28.0);
    FrameBuilder::upright()
        .arm(side, shoulder, elbow, wrist)
        .build()
}

pub fn sequence(frames: &[Frame]) -> PoseSequence {
    PoseSequence::from_frames(frames).unwrap()
}
