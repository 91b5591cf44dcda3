//! Bulk language import.
//!
//! Unlike vocabulary imports, all accepted rows go to the store in one
//! call; the store reports which languages it skipped as existing.

use serde::{Deserialize, Serialize};
use vocabchain_core::error::CoreError;
use vocabchain_core::language_import::parse_language_csv;

use crate::error::PipelineError;
use crate::store::LanguageStore;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageImportReport {
    pub imported: usize,
    /// Languages skipped by the store because they already exist.
    pub skipped: Vec<String>,
    /// Lines rejected before submission.
    pub row_errors: Vec<String>,
}

/// Parse `text` and submit every valid language row.
pub async fn import_languages<L>(store: &L, text: &str) -> Result<LanguageImportReport, PipelineError>
where
    L: LanguageStore + ?Sized,
{
    let parsed = parse_language_csv(text)?;

    if !parsed.errors.is_empty() {
        tracing::warn!(
            rejected = parsed.errors.len(),
            errors = ?parsed.errors,
            "Language rows failed validation",
        );
    }

    if parsed.rows.is_empty() {
        return Err(CoreError::Validation("No valid languages to import".to_string()).into());
    }

    let result = store.bulk_import_languages(&parsed.rows).await?;

    tracing::info!(
        imported = result.count,
        skipped = result.errors.len(),
        rejected = parsed.errors.len(),
        "Language import finished",
    );

    Ok(LanguageImportReport {
        imported: result.count,
        skipped: result.errors,
        row_errors: parsed.errors,
    })
}
