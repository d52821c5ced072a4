//! Rule-based exercise form evaluation
//!
//! Judges a torso-normalized [`PoseSequence`] against declarative per-exercise
//! rules and explains every failed check.

pub mod error;
pub mod evaluation;
pub mod exercise;
pub mod rules;
pub mod utils;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export commonly used types
pub use error::EvalError;
pub use evaluation::evaluator::evaluate;
pub use evaluation::{Evaluation, Evaluator, Report, RuleBook, Statistic, UNRECOGNIZED_EXERCISE};
pub use exercise::Exercise;
pub use rules::{ExerciseRule, Tracking};

pub use pose_core::{PoseError, PoseSequence};

pub type Result<T> = std::result::Result<T, EvalError>;

/// Core traits for the evaluation system
pub mod traits {
    use super::*;

    /// Something that can judge a whole pose sequence in one pass.
    pub trait Evaluate {
        fn evaluate(&self, seq: &PoseSequence) -> Result<Evaluation>;
    }
}
