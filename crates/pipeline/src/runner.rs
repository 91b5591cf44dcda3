//! End-to-end vocabulary import: parse, validate, reconcile, submit,
//! summarize.
//!
//! The synchronous half ([`preview`]) needs no store and can be shown to an
//! operator before anything is written. [`ImportRunner::commit`] performs
//! the submission and produces the [`ImportSummary`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use uuid::Uuid;
use vocabchain_core::error::CoreError;
use vocabchain_core::parser::{self, ImportFormat};
use vocabchain_core::reconcile::reconcile_verdicts;
use vocabchain_core::summary::{ImportSummary, ImportSummaryBuilder};
use vocabchain_core::validation::{validate_rows, ValidationStrategy, ValidationVerdict};
use vocabchain_core::vocab::VocabEntry;

use crate::error::PipelineError;
use crate::store::WordStore;
use crate::submitter::{BatchSubmitter, DEFAULT_BATCH_SIZE, DEFAULT_SUBMIT_TIMEOUT};

/// Tunables for a run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub batch_size: usize,
    /// `None` disables the per-call timeout.
    pub submit_timeout: Option<Duration>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            submit_timeout: Some(DEFAULT_SUBMIT_TIMEOUT),
        }
    }
}

/// Validated and reconciled input, not yet submitted.
#[derive(Debug, Clone)]
pub struct ImportPreview {
    pub run_id: Uuid,
    pub format: ImportFormat,
    pub verdicts: Vec<ValidationVerdict>,
    pub entries: Vec<VocabEntry>,
    /// Time spent parsing, validating and reconciling.
    prepared_in: Duration,
}

impl ImportPreview {
    pub fn total_rows(&self) -> usize {
        self.verdicts.len()
    }

    pub fn valid_row_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.valid).count()
    }

    pub fn invalid_row_count(&self) -> usize {
        self.total_rows() - self.valid_row_count()
    }
}

/// Parse, validate and reconcile `text`.
///
/// Fails only on structural problems. Invalid rows are kept in
/// [`ImportPreview::verdicts`].
pub fn preview(text: &str, format: ImportFormat) -> Result<ImportPreview, CoreError> {
    let started_at = Instant::now();
    let run_id = Uuid::now_v7();

    let rows = parser::parse(text, format)?;
    let verdicts = validate_rows(&rows, ValidationStrategy::for_format(format));
    let entries = reconcile_verdicts(&verdicts);

    let preview = ImportPreview {
        run_id,
        format,
        verdicts,
        entries,
        prepared_in: started_at.elapsed(),
    };
    tracing::info!(
        run_id = %preview.run_id,
        format = %format,
        rows = preview.total_rows(),
        valid = preview.valid_row_count(),
        invalid = preview.invalid_row_count(),
        unique_entries = preview.entries.len(),
        "Import validated",
    );
    Ok(preview)
}

pub struct ImportRunner<S: ?Sized> {
    store: Arc<S>,
    config: RunnerConfig,
}

impl<S: WordStore + ?Sized> ImportRunner<S> {
    pub fn new(store: Arc<S>, config: RunnerConfig) -> Self {
        Self { store, config }
    }

    /// Submit a preview's entries and build the run summary.
    ///
    /// A preview without entries (every row invalid) submits nothing and
    /// still yields a summary carrying the per-row errors. The reported
    /// duration is preview time plus submission time; time spent between
    /// [`preview`] and this call is not counted.
    ///
    /// Import is not transactional: entries added before an unexpected
    /// failure stay added.
    pub async fn commit<F>(
        &self,
        preview: ImportPreview,
        on_progress: F,
    ) -> Result<ImportSummary, PipelineError>
    where
        F: FnMut(usize, usize),
    {
        let commit_started = Instant::now();

        let outcomes = if preview.entries.is_empty() {
            tracing::warn!(
                run_id = %preview.run_id,
                invalid_rows = preview.invalid_row_count(),
                "No valid rows, nothing submitted",
            );
            Vec::new()
        } else {
            BatchSubmitter::new(Arc::clone(&self.store))
                .with_batch_size(self.config.batch_size)
                .with_submit_timeout(self.config.submit_timeout)
                .submit(&preview.entries, on_progress)
                .await
        };

        let summary = ImportSummaryBuilder::new(preview.run_id)
            .verdicts(&preview.verdicts)
            .outcomes(&outcomes)
            .elapsed(preview.prepared_in + commit_started.elapsed())
            .build();

        tracing::info!(
            run_id = %summary.run_id,
            added = summary.added_count,
            skipped = summary.skipped_count,
            failed = summary.failed_count,
            invalid_rows = summary.invalid_row_count,
            duration_secs = %summary.duration_seconds,
            "Import finished",
        );
        Ok(summary)
    }

    /// [`preview`] followed by [`commit`](Self::commit).
    pub async fn run<F>(
        &self,
        text: &str,
        format: ImportFormat,
        on_progress: F,
    ) -> Result<ImportSummary, PipelineError>
    where
        F: FnMut(usize, usize),
    {
        let preview = preview(text, format)?;
        self.commit(preview, on_progress).await
    }

    /// Remove every word of `language` from the store. Returns the elapsed
    /// time.
    pub async fn purge_language(&self, language: &str) -> Result<Duration, PipelineError> {
        let language = language.trim();
        if language.is_empty() {
            return Err(CoreError::Validation("Language is required".to_string()).into());
        }

        let started_at = Instant::now();
        self.store.remove_words_by_language(language).await?;
        let elapsed = started_at.elapsed();

        tracing::info!(language, elapsed_ms = elapsed.as_millis() as u64, "Language words removed");
        Ok(elapsed)
    }
}
