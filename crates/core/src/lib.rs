//! Pure logic for the VocabChain bulk-import pipeline.
//!
//! Everything in this crate is synchronous and free of I/O. The async
//! submission side lives in `vocabchain-pipeline`.

pub mod error;
pub mod language_import;
pub mod outcome;
pub mod parser;
pub mod reconcile;
pub mod summary;
pub mod types;
pub mod validation;
pub mod vocab;
