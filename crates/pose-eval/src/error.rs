use pose_core::PoseError;
use thiserror::Error;

/// Reasons an exercise could not be judged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("{exercise}: no frame has all of [{joints}] detected")]
    InsufficientData { exercise: String, joints: String },

    #[error("{exercise}: vector '{vector}' has zero length in frame {frame}")]
    DegenerateVector {
        exercise: String,
        vector: String,
        frame: usize,
    },

    #[error("{exercise}: statistic '{check}' did not evaluate to a finite number")]
    NonFiniteStatistic { exercise: String, check: String },

    #[error("rule '{exercise}' references undefined vector '{vector}'")]
    UnknownVector { exercise: String, vector: String },

    #[error("rule '{0}' is defined more than once")]
    DuplicateRule(String),

    #[error(transparent)]
    Pose(#[from] PoseError),
}
