use super::{Frame, Joint, Pose, JOINT_COUNT};
use crate::error::PoseError;
use crate::Result;
use tracing::debug;

/// Ordered poses of one video, expressed in units of the subject's average
/// torso length.
///
/// Normalization happens once, at construction. The raw pixel coordinates
/// are not kept.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseSequence {
    poses: Vec<Pose>,
    mean_torso_length: f64,
}

impl PoseSequence {
    /// Build and normalize a sequence from raw keypoint frames.
    ///
    /// The scale is the mean of every neck-to-left-hip and neck-to-right-hip
    /// distance over all frames where both endpoints were detected.
    pub fn from_frames(frames: &[Frame]) -> Result<Self> {
        let poses: Vec<Pose> = frames.iter().map(Pose::from_frame).collect();
        let mean_torso_length = mean_torso_length(&poses)?;
        Ok(Self::normalize(poses, mean_torso_length))
    }

    /// Build a sequence using an externally computed torso length.
    pub fn with_scale(frames: &[Frame], torso_length: f64) -> Result<Self> {
        if !torso_length.is_finite() || torso_length <= 0.0 {
            return Err(PoseError::InvalidScale(torso_length));
        }
        let poses = frames.iter().map(Pose::from_frame).collect();
        Ok(Self::normalize(poses, torso_length))
    }

    /// Build from a flat buffer of `x, y, confidence` triples, 18 per frame.
    pub fn from_flat(values: &[f64]) -> Result<Self> {
        let per_frame = JOINT_COUNT * 3;
        if values.len() % per_frame != 0 {
            return Err(PoseError::Shape {
                len: values.len(),
                per_frame,
            });
        }

        let frames: Vec<Frame> = values
            .chunks_exact(per_frame)
            .map(|chunk| {
                let mut frame = [[0.0; 3]; JOINT_COUNT];
                for (row, triple) in frame.iter_mut().zip(chunk.chunks_exact(3)) {
                    row.copy_from_slice(triple);
                }
                frame
            })
            .collect();

        Self::from_frames(&frames)
    }

    fn normalize(poses: Vec<Pose>, mean_torso_length: f64) -> Self {
        let poses = poses
            .iter()
            .map(|pose| pose.scaled(mean_torso_length))
            .collect();
        Self {
            poses,
            mean_torso_length,
        }
    }

    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Torso length (in input units) that the sequence was divided by
    pub fn mean_torso_length(&self) -> f64 {
        self.mean_torso_length
    }

    /// Normalized keypoints as raw frames.
    pub fn to_frames(&self) -> Vec<Frame> {
        self.poses.iter().map(Pose::to_frame).collect()
    }
}

fn mean_torso_length(poses: &[Pose]) -> Result<f64> {
    let samples: Vec<f64> = [Joint::LHip, Joint::RHip]
        .iter()
        .flat_map(|hip| {
            poses
                .iter()
                .filter(move |pose| pose[Joint::Neck].exists() && pose[*hip].exists())
                .map(move |pose| pose[Joint::Neck].dist(&pose[*hip]))
        })
        .collect();

    if samples.is_empty() {
        return Err(PoseError::DegenerateSequence(
            "no frame has the neck together with a hip".to_string(),
        ));
    }

    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    debug!(
        samples = samples.len(),
        frames = poses.len(),
        mean_torso_length = mean,
        "computed torso scale"
    );

    if !mean.is_finite() || mean <= 0.0 {
        return Err(PoseError::DegenerateSequence(format!(
            "mean torso length is {}",
            mean
        )));
    }

    Ok(mean)
}
