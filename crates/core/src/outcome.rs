//! Per-entry submission results.

use serde::{Deserialize, Serialize};

use crate::vocab::VocabEntry;

/// What happened to one entry when it was handed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "reason", rename_all = "snake_case")]
pub enum SubmissionResult {
    Added,
    /// The store already held this entry. Not an error.
    SkippedDuplicate,
    Failed(String),
}

impl SubmissionResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::SkippedDuplicate => "skipped_duplicate",
            Self::Failed(_) => "failed",
        }
    }
}

impl std::fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failed(reason) => write!(f, "failed: {reason}"),
            other => f.write_str(other.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub entry: VocabEntry,
    #[serde(flatten)]
    pub result: SubmissionResult,
}

impl SubmissionOutcome {
    pub fn new(entry: VocabEntry, result: SubmissionResult) -> Self {
        Self { entry, result }
    }
}
