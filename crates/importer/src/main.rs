//! `vocabchain-importer`: bulk import tool for the VocabChain backend.
//!
//! Validates vocabulary or language files locally and submits them to the
//! persistence backend in batches. Prints a JSON report to stdout; logs go
//! to stderr.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default                 | Description                      |
//! |-----------------------|----------|-------------------------|----------------------------------|
//! | `BACKEND_URL`         | no       | `http://localhost:4943` | Persistence backend base URL     |
//! | `BATCH_SIZE`          | no       | `300`                   | Entries submitted concurrently   |
//! | `SUBMIT_TIMEOUT_SECS` | no       | `30`                    | Per-entry timeout, `0` disables  |
//! | `LOG_FORMAT`          | no       | `text`                  | `text` or `json`                 |
//! | `RUST_LOG`            | no       | `vocabchain_importer=info,vocabchain_pipeline=info` | Log filter |

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vocabchain_importer::commands::{self, Cli};
use vocabchain_importer::config::{ImporterConfig, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let config = ImporterConfig::from_env().context("Invalid configuration")?;

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vocabchain_importer=info,vocabchain_pipeline=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    tracing::info!(
        backend_url = %config.backend_url,
        batch_size = config.batch_size,
        submit_timeout = ?config.submit_timeout,
        command = ?cli.command,
        "Starting vocabchain-importer",
    );

    let report = commands::execute(&config, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
