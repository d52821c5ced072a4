use crate::rules::Bound;
use pose_core::Side;
use serde::{Deserialize, Serialize};

/// Verdict and feedback for one pose sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub exercise: String,
    /// False when no rule matched the exercise name.
    pub recognized: bool,
    pub correct: bool,
    pub feedback: String,
    pub report: Report,
}

impl Evaluation {
    pub fn into_verdict(self) -> (bool, String) {
        (self.correct, self.feedback)
    }

    /// Statistic for the check with this label
    pub fn statistic(&self, check: &str) -> Option<&Statistic> {
        self.report.statistics.iter().find(|stat| stat.check == check)
    }
}

/// What the verdict was computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Tracked arm, for single-side rules.
    pub side: Option<Side>,
    pub frames_total: usize,
    pub frames_used: usize,
    /// One entry per check, in rule order.
    pub statistics: Vec<Statistic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub check: String,
    pub value: f64,
    pub threshold: f64,
    pub fail_when: Bound,
    pub passed: bool,
}
