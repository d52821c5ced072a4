//! Pose model for keypoint sequences.
//!
//! Frames of 18 COCO-ordered keypoints become [`Pose`]s, which a
//! [`PoseSequence`] rescales into torso-length units.

pub mod error;
pub mod geometry;
pub mod pose;

pub use error::PoseError;
pub use geometry::{angle_between, Vec2};
pub use pose::{Frame, Joint, Part, Pose, PoseSequence, Side, JOINT_COUNT};

pub type Result<T> = std::result::Result<T, PoseError>;
