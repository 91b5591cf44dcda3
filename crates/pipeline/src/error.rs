use vocabchain_core::error::CoreError;

use crate::store::StoreError;

/// Errors that abort a pipeline operation as a whole.
///
/// Row- and entry-level problems never surface here; they are collected
/// into the run's summary instead.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store call outside the per-entry submission path failed (bulk
    /// language import, purge).
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
