//! Rule book configuration

use crate::error::EvalError;
use crate::rules::{builtin, ExerciseRule};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The set of rules an [`Evaluator`](super::Evaluator) dispatches over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleBook {
    pub rules: Vec<ExerciseRule>,
}

impl Default for RuleBook {
    fn default() -> Self {
        Self {
            rules: builtin::all(),
        }
    }
}

impl RuleBook {
    /// Load and validate a rule book from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule book: {:?}", path))?;
        Self::from_json(&content).with_context(|| format!("Invalid rule book: {:?}", path))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let book: RuleBook = serde_json::from_str(json).context("Failed to parse rule book")?;
        book.validate()?;
        Ok(book)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize rule book")
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write rule book: {:?}", path))
    }

    /// Names are unique and every rule is self-consistent.
    pub fn validate(&self) -> Result<(), EvalError> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.name.as_str()) {
                return Err(EvalError::DuplicateRule(rule.name.clone()));
            }
            rule.validate()?;
        }
        Ok(())
    }

    /// Rule whose name matches exactly.
    pub fn find(&self, name: &str) -> Option<&ExerciseRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name.as_str()).collect()
    }
}
