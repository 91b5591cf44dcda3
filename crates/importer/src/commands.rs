//! Command-line commands and their execution.
//!
//! ```text
//! vocabchain-importer vocab-csv  <file>
//! vocabchain-importer vocab-json <file>
//! vocabchain-importer languages  <file>
//! vocabchain-importer purge      <language>
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use vocabchain_core::parser::ImportFormat;
use vocabchain_core::summary::format_duration;
use vocabchain_pipeline::languages::import_languages;
use vocabchain_pipeline::ImportRunner;

use crate::client::BackendClient;
use crate::config::ImporterConfig;

#[derive(Debug, Parser)]
#[command(name = "vocabchain-importer")]
#[command(about = "Validate and bulk-import VocabChain vocabulary and languages")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Import vocabulary from a CSV file
    VocabCsv {
        /// Path to the CSV file
        path: PathBuf,
    },

    /// Import vocabulary from a JSON array file
    VocabJson {
        /// Path to the JSON file
        path: PathBuf,
    },

    /// Bulk-import languages from a CSV file
    Languages {
        /// Path to the language CSV file
        path: PathBuf,
    },

    /// Remove every word of a language
    Purge {
        /// Language name, e.g. "Turkish"
        language: String,
    },
}

/// Execute `command` against the configured backend and return a JSON
/// report for stdout.
pub async fn execute(config: &ImporterConfig, command: Command) -> anyhow::Result<serde_json::Value> {
    let client = Arc::new(BackendClient::new(config.backend_url.clone()));

    match command {
        Command::VocabCsv { path } => import_vocab(client, config, ImportFormat::Csv, &path).await,
        Command::VocabJson { path } => import_vocab(client, config, ImportFormat::Json, &path).await,
        Command::Languages { path } => {
            let text = read_input(&path).await?;
            let report = import_languages(client.as_ref(), &text).await?;
            Ok(serde_json::to_value(report)?)
        }
        Command::Purge { language } => {
            let runner = ImportRunner::new(client, config.runner_config());
            let elapsed = runner.purge_language(&language).await?;
            Ok(json!({
                "language": language.trim(),
                "duration_seconds": format_duration(elapsed),
            }))
        }
    }
}

async fn import_vocab(
    client: Arc<BackendClient>,
    config: &ImporterConfig,
    format: ImportFormat,
    path: &Path,
) -> anyhow::Result<serde_json::Value> {
    let text = read_input(path).await?;
    let runner = ImportRunner::new(client, config.runner_config());
    let summary = runner
        .run(&text, format, |current, total| {
            tracing::info!(current, total, "Import progress");
        })
        .await?;

    if summary.invalid_row_count > 0 {
        tracing::warn!(
            invalid_rows = summary.invalid_row_count,
            total_rows = summary.total_rows_parsed,
            "Some rows were rejected, see per_row_errors",
        );
    }
    Ok(serde_json::to_value(summary)?)
}

pub async fn read_input(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}
