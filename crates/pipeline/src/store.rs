//! Traits for the remote persistence collaborator.
//!
//! Duplicate detection belongs to the store. The pipeline only relays the
//! store's answer.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vocabchain_core::language_import::LanguageRow;
use vocabchain_core::vocab::VocabEntry;

/// Successful answer of [`WordStore::add_word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddWordOutcome {
    Added,
    Duplicate,
}

/// Failure of a single store call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store received the call and refused it.
    #[error("rejected: {0}")]
    Rejected(String),

    /// The call did not reach the store or the answer was unreadable.
    #[error("transport: {0}")]
    Transport(String),

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

#[async_trait]
pub trait WordStore: Send + Sync {
    /// Add one vocabulary entry.
    async fn add_word(&self, entry: &VocabEntry) -> Result<AddWordOutcome, StoreError>;

    /// Delete every word of `language`.
    async fn remove_words_by_language(&self, language: &str) -> Result<(), StoreError>;
}

/// Answer of [`LanguageStore::bulk_import_languages`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkLanguageResult {
    /// Number of languages created.
    pub count: usize,
    /// Languages the store skipped because they already exist.
    pub errors: Vec<String>,
}

#[async_trait]
pub trait LanguageStore: Send + Sync {
    async fn bulk_import_languages(
        &self,
        rows: &[LanguageRow],
    ) -> Result<BulkLanguageResult, StoreError>;
}
