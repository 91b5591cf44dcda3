//! Batched submission of reconciled entries to a [`WordStore`].
//!
//! Entries are split into consecutive batches of `batch_size`. Inside a
//! batch every entry is submitted concurrently and the batch completes only
//! once all of them have settled. Batches run strictly one after another,
//! which caps the number of in-flight calls at `batch_size`.
//!
//! A failing call becomes a [`SubmissionResult::Failed`] outcome; it never
//! aborts its batch or the run.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use vocabchain_core::outcome::{SubmissionOutcome, SubmissionResult};
use vocabchain_core::vocab::VocabEntry;

use crate::store::{AddWordOutcome, StoreError, WordStore};

/// Number of entries submitted concurrently per batch.
pub const DEFAULT_BATCH_SIZE: usize = 300;

/// Default upper bound for a single `add_word` call.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct BatchSubmitter<S: ?Sized> {
    store: Arc<S>,
    batch_size: usize,
    submit_timeout: Option<Duration>,
}

impl<S: WordStore + ?Sized> BatchSubmitter<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            batch_size: DEFAULT_BATCH_SIZE,
            submit_timeout: Some(DEFAULT_SUBMIT_TIMEOUT),
        }
    }

    /// Set the batch size. Values below 1 are raised to 1.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set the per-call timeout. `None` waits indefinitely.
    pub fn with_submit_timeout(mut self, submit_timeout: Option<Duration>) -> Self {
        self.submit_timeout = submit_timeout;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Submit `entries` and return one outcome per entry, in input order.
    ///
    /// `on_progress(processed, total)` fires once after each batch, so the
    /// last call always reports `processed == total`. Nothing fires for an
    /// empty input.
    pub async fn submit<F>(&self, entries: &[VocabEntry], mut on_progress: F) -> Vec<SubmissionOutcome>
    where
        F: FnMut(usize, usize),
    {
        let total = entries.len();
        let mut outcomes = Vec::with_capacity(total);
        let mut processed = 0;

        for (batch_index, batch) in entries.chunks(self.batch_size).enumerate() {
            let results = join_all(batch.iter().map(|entry| self.submit_one(entry))).await;

            let failed = results
                .iter()
                .filter(|r| matches!(r, SubmissionResult::Failed(_)))
                .count();

            outcomes.extend(
                batch
                    .iter()
                    .cloned()
                    .zip(results)
                    .map(|(entry, result)| SubmissionOutcome::new(entry, result)),
            );

            processed += batch.len();
            tracing::debug!(
                batch = batch_index + 1,
                entries = batch.len(),
                failed,
                processed,
                total,
                "Batch submitted",
            );
            on_progress(processed, total);
        }

        outcomes
    }

    async fn submit_one(&self, entry: &VocabEntry) -> SubmissionResult {
        let call = self.store.add_word(entry);
        let response = match self.submit_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(response) => response,
                Err(_) => Err(StoreError::Timeout(limit)),
            },
            None => call.await,
        };

        match response {
            Ok(AddWordOutcome::Added) => SubmissionResult::Added,
            Ok(AddWordOutcome::Duplicate) => SubmissionResult::SkippedDuplicate,
            Err(e) => {
                tracing::warn!(
                    english = %entry.english,
                    language = %entry.language,
                    error = %e,
                    "Failed to add word",
                );
                SubmissionResult::Failed(e.to_string())
            }
        }
    }
}
