use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of keypoints in one frame (OpenPose COCO model).
pub const JOINT_COUNT: usize = 18;

/// Anatomical keypoints, in the row order of the COCO keypoint output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    Nose,
    Neck,
    RShoulder,
    RElbow,
    RWrist,
    LShoulder,
    LElbow,
    LWrist,
    RHip,
    RKnee,
    RAnkle,
    LHip,
    LKnee,
    LAnkle,
    REye,
    LEye,
    REar,
    LEar,
}

impl Joint {
    /// All joints in canonical order.
    pub const ALL: [Joint; JOINT_COUNT] = [
        Joint::Nose,
        Joint::Neck,
        Joint::RShoulder,
        Joint::RElbow,
        Joint::RWrist,
        Joint::LShoulder,
        Joint::LElbow,
        Joint::LWrist,
        Joint::RHip,
        Joint::RKnee,
        Joint::RAnkle,
        Joint::LHip,
        Joint::LKnee,
        Joint::LAnkle,
        Joint::REye,
        Joint::LEye,
        Joint::REar,
        Joint::LEar,
    ];

    /// Row index within a keypoint frame
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Joint::Nose => "nose",
            Joint::Neck => "neck",
            Joint::RShoulder => "rshoulder",
            Joint::RElbow => "relbow",
            Joint::RWrist => "rwrist",
            Joint::LShoulder => "lshoulder",
            Joint::LElbow => "lelbow",
            Joint::LWrist => "lwrist",
            Joint::RHip => "rhip",
            Joint::RKnee => "rknee",
            Joint::RAnkle => "rankle",
            Joint::LHip => "lhip",
            Joint::LKnee => "lknee",
            Joint::LAnkle => "lankle",
            Joint::REye => "reye",
            Joint::LEye => "leye",
            Joint::REar => "rear",
            Joint::LEar => "lear",
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body side of a paired joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn shoulder(self) -> Joint {
        match self {
            Side::Left => Joint::LShoulder,
            Side::Right => Joint::RShoulder,
        }
    }

    pub fn elbow(self) -> Joint {
        match self {
            Side::Left => Joint::LElbow,
            Side::Right => Joint::RElbow,
        }
    }

    pub fn wrist(self) -> Joint {
        match self {
            Side::Left => Joint::LWrist,
            Side::Right => Joint::RWrist,
        }
    }

    pub fn hip(self) -> Joint {
        match self {
            Side::Left => Joint::LHip,
            Side::Right => Joint::RHip,
        }
    }

    pub fn knee(self) -> Joint {
        match self {
            Side::Left => Joint::LKnee,
            Side::Right => Joint::RKnee,
        }
    }

    pub fn ankle(self) -> Joint {
        match self {
            Side::Left => Joint::LAnkle,
            Side::Right => Joint::RAnkle,
        }
    }

    /// Shoulder, elbow and wrist of this side.
    pub fn arm(self) -> [Joint; 3] {
        [self.shoulder(), self.elbow(), self.wrist()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
