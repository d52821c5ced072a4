//! Utility modules

pub mod stats;

pub use stats::{max, mean, min, range};
