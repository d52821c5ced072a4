use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoseError {
    /// No usable neck-to-hip sample, so the torso length is undefined.
    #[error("cannot normalize sequence: {0}")]
    DegenerateSequence(String),

    #[error("invalid scale {0}: must be finite and greater than zero")]
    InvalidScale(f64),

    #[error("keypoint buffer of {len} values is not a whole number of {per_frame}-value frames")]
    Shape { len: usize, per_frame: usize },
}
