//! Dispatch of pose sequences to exercise rules

use super::config::RuleBook;
use super::report::{Evaluation, Report};
use crate::traits::Evaluate;
use crate::Result;
use pose_core::PoseSequence;
use tracing::{debug, warn};

/// Feedback for an exercise name with no matching rule.
pub const UNRECOGNIZED_EXERCISE: &str = "Exercise string not recognized.";

/// Evaluates pose sequences against a [`RuleBook`].
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    book: RuleBook,
}

impl Evaluator {
    pub fn new(book: RuleBook) -> Self {
        Self { book }
    }

    pub fn rule_book(&self) -> &RuleBook {
        &self.book
    }

    /// Judge `seq` as a repetition of `exercise`.
    ///
    /// An unknown exercise name is not an error: it yields an unrecognized,
    /// incorrect evaluation carrying [`UNRECOGNIZED_EXERCISE`].
    pub fn evaluate(&self, seq: &PoseSequence, exercise: &str) -> Result<Evaluation> {
        match self.book.find(exercise) {
            Some(rule) => {
                debug!(exercise, frames = seq.len(), "evaluating sequence");
                rule.evaluate(seq)
            }
            None => {
                warn!(exercise, known = ?self.book.names(), "exercise not recognized");
                Ok(Evaluation {
                    exercise: exercise.to_string(),
                    recognized: false,
                    correct: false,
                    feedback: UNRECOGNIZED_EXERCISE.to_string(),
                    report: Report::default(),
                })
            }
        }
    }

    /// Evaluate independent sequences, keeping input order.
    pub fn evaluate_batch(&self, sequences: &[PoseSequence], exercise: &str) -> Vec<Result<Evaluation>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            sequences
                .par_iter()
                .map(|seq| self.evaluate(seq, exercise))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            sequences
                .iter()
                .map(|seq| self.evaluate(seq, exercise))
                .collect()
        }
    }
}

/// Evaluate with the built-in rules, returning `(correct, feedback)`.
pub fn evaluate(seq: &PoseSequence, exercise: &str) -> Result<(bool, String)> {
    Evaluator::default()
        .evaluate(seq, exercise)
        .map(Evaluation::into_verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{curl, sequence};
    use pose_core::Side;

    fn good_curl() -> PoseSequence {
        sequence(&[
            curl(Side::Right, 0.0, 175.0),
            curl(Side::Right, 3.0, 90.0),
            curl(Side::Right, 5.0, 15.0),
        ])
    }

    #[test]
    fn test_unrecognized_exercise() -> Result<()> {
        let evaluation = Evaluator::default().evaluate(&good_curl(), "bicep curl")?;
        assert!(!evaluation.recognized);
        assert!(!evaluation.correct);
        assert_eq!(evaluation.feedback, UNRECOGNIZED_EXERCISE);
        assert!(evaluation.report.statistics.is_empty());

        assert_eq!(
            evaluate(&good_curl(), "squat")?,
            (false, "Exercise string not recognized.".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_dispatch_returns_rule_result() -> Result<()> {
        let evaluation = Evaluator::default().evaluate(&good_curl(), "bicep_curl")?;
        assert!(evaluation.recognized);
        assert!(evaluation.correct);
        assert_eq!(evaluation.report.statistics.len(), 2);
        Ok(())
    }

    #[test]
    fn test_custom_rule_book() -> Result<()> {
        let mut book = RuleBook::default();
        book.rules[0].checks[1].threshold = 10.0;
        let evaluator = Evaluator::new(book);

        let evaluation = evaluator.evaluate(&good_curl(), "bicep_curl")?;
        assert!(!evaluation.correct);
        assert_eq!(evaluation.feedback, evaluator.rule_book().rules[0].checks[1].feedback);
        Ok(())
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_failures() {
        let lazy = sequence(&[curl(Side::Left, 0.0, 170.0), curl(Side::Left, 2.0, 120.0)]);
        let bare = sequence(&[crate::fixtures::FrameBuilder::upright().build()]);
        let results = Evaluator::default().evaluate_batch(&[good_curl(), bare, lazy], "bicep_curl");

        assert_eq!(results.len(), 3);
        assert!(results[0].as_ref().unwrap().correct);
        assert!(matches!(results[1], Err(crate::EvalError::InsufficientData { .. })));
        assert!(!results[2].as_ref().unwrap().correct);
    }
}
