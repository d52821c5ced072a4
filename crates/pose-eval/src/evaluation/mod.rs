//! Exercise evaluation: rule book, dispatcher and reports

pub mod config;
pub mod evaluator;
pub mod report;

pub use config::RuleBook;
pub use evaluator::{Evaluator, UNRECOGNIZED_EXERCISE};
pub use report::{Evaluation, Report, Statistic};
