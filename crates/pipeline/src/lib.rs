//! Async side of the VocabChain import pipeline.
//!
//! Talks to the remote persistence backend only through the traits in
//! [`store`], so the same pipeline runs against the HTTP client in
//! `vocabchain-importer` and against in-memory stores in tests.

pub mod error;
pub mod languages;
pub mod runner;
pub mod store;
pub mod submitter;

pub use error::PipelineError;
pub use runner::{ImportPreview, ImportRunner, RunnerConfig};
pub use store::{AddWordOutcome, BulkLanguageResult, LanguageStore, StoreError, WordStore};
pub use submitter::BatchSubmitter;
