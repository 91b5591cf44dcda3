//! HTTP client for the VocabChain persistence backend.
//!
//! Implements the pipeline's [`WordStore`] and [`LanguageStore`] traits on
//! top of the backend's REST endpoints using [`reqwest`].
//!
//! | Operation                | Request                                   |
//! |--------------------------|-------------------------------------------|
//! | add word                 | `POST /api/v1/words`                      |
//! | remove words by language | `DELETE /api/v1/languages/{name}/words`   |
//! | bulk import languages    | `POST /api/v1/languages/bulk`             |

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use vocabchain_core::language_import::LanguageRow;
use vocabchain_core::vocab::VocabEntry;
use vocabchain_pipeline::{AddWordOutcome, BulkLanguageResult, LanguageStore, StoreError, WordStore};

/// Errors from the backend HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("Backend API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    /// The backend answered 2xx with a body we could not interpret.
    #[error("Unexpected backend response: {0}")]
    UnexpectedResponse(String),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl From<ClientError> for StoreError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ApiError { status, body } => {
                StoreError::Rejected(format!("backend returned {status}: {body}"))
            }
            other => StoreError::Transport(other.to_string()),
        }
    }
}

/// Body of `POST /api/v1/words`.
#[derive(Debug, Serialize)]
struct AddWordRequest<'a> {
    english: &'a str,
    foreign: &'a str,
    language: &'a str,
    difficulty: &'static str,
    examples: &'a [String],
}

#[derive(Debug, Deserialize)]
struct AddWordResponse {
    outcome: AddWordOutcome,
}

pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// * `base_url` - e.g. `http://localhost:4943`, without trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Reuse an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn add_word(&self, entry: &VocabEntry) -> Result<AddWordOutcome, ClientError> {
        let body = AddWordRequest {
            english: &entry.english,
            foreign: &entry.foreign,
            language: &entry.language,
            difficulty: entry.difficulty.wire_value(),
            examples: &entry.examples,
        };

        let response = self
            .client
            .post(format!("{}/api/v1/words", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        interpret_add_word(status, &text)
    }

    pub async fn remove_words_by_language(&self, language: &str) -> Result<(), ClientError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["api", "v1", "languages", language, "words"]);

        let response = self.client.delete(url).send().await?;
        Self::ensure_success(response).await.map(|_| ())
    }

    pub async fn bulk_import_languages(
        &self,
        rows: &[LanguageRow],
    ) -> Result<BulkLanguageResult, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/v1/languages/bulk", self.base_url))
            .json(rows)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<BulkLanguageResult>().await?)
    }

    // ---- private helpers ----

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(ClientError::ApiError {
            status: status.as_u16(),
            body,
        })
    }
}

/// Map an `add word` response to an outcome.
///
/// `409 Conflict` means the backend already has the word. Any other 2xx
/// must carry `{"outcome": "added" | "duplicate"}`.
pub fn interpret_add_word(status: StatusCode, body: &str) -> Result<AddWordOutcome, ClientError> {
    if status == StatusCode::CONFLICT {
        return Ok(AddWordOutcome::Duplicate);
    }
    if !status.is_success() {
        return Err(ClientError::ApiError {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }
    serde_json::from_str::<AddWordResponse>(body)
        .map(|r| r.outcome)
        .map_err(|e| ClientError::UnexpectedResponse(format!("{e}: {body}")))
}

#[async_trait]
impl WordStore for BackendClient {
    async fn add_word(&self, entry: &VocabEntry) -> Result<AddWordOutcome, StoreError> {
        Ok(BackendClient::add_word(self, entry).await?)
    }

    async fn remove_words_by_language(&self, language: &str) -> Result<(), StoreError> {
        Ok(BackendClient::remove_words_by_language(self, language).await?)
    }
}

#[async_trait]
impl LanguageStore for BackendClient {
    async fn bulk_import_languages(
        &self,
        rows: &[LanguageRow],
    ) -> Result<BulkLanguageResult, StoreError> {
        Ok(BackendClient::bulk_import_languages(self, rows).await?)
    }
}
