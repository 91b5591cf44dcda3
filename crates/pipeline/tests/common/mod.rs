//! Shared in-memory stores for pipeline integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use vocabchain_core::language_import::LanguageRow;
use vocabchain_core::vocab::{Difficulty, EntryKey, VocabEntry};
use vocabchain_pipeline::{AddWordOutcome, BulkLanguageResult, LanguageStore, StoreError, WordStore};

/// Word store that deduplicates on the composite key.
///
/// Words listed in `reject` fail with [`StoreError::Rejected`]; words in
/// `hang` never answer.
#[derive(Default)]
pub struct MemoryStore {
    pub words: Mutex<Vec<VocabEntry>>,
    keys: Mutex<HashSet<EntryKey>>,
    pub removed_languages: Mutex<Vec<String>>,
    reject: HashSet<String>,
    hang: HashSet<String>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(mut self, english: &str) -> Self {
        self.reject.insert(english.to_string());
        self
    }

    pub fn hanging_on(mut self, english: &str) -> Self {
        self.hang.insert(english.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn seed(&self, entry: VocabEntry) {
        self.keys.lock().await.insert(entry.key());
        self.words.lock().await.push(entry);
    }
}

#[async_trait]
impl WordStore for MemoryStore {
    async fn add_word(&self, entry: &VocabEntry) -> Result<AddWordOutcome, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if self.hang.contains(&entry.english) {
            std::future::pending::<()>().await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let result = if self.reject.contains(&entry.english) {
            Err(StoreError::Rejected(format!("{} is not allowed", entry.english)))
        } else if self.keys.lock().await.insert(entry.key()) {
            self.words.lock().await.push(entry.clone());
            Ok(AddWordOutcome::Added)
        } else {
            Ok(AddWordOutcome::Duplicate)
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn remove_words_by_language(&self, language: &str) -> Result<(), StoreError> {
        self.words.lock().await.retain(|w| w.language != language);
        self.keys.lock().await.retain(|k| k.language != language);
        self.removed_languages.lock().await.push(language.to_string());
        Ok(())
    }
}

/// Language store that skips names it already holds.
#[derive(Default)]
pub struct MemoryLanguageStore {
    pub languages: Mutex<Vec<LanguageRow>>,
}

#[async_trait]
impl LanguageStore for MemoryLanguageStore {
    async fn bulk_import_languages(
        &self,
        rows: &[LanguageRow],
    ) -> Result<BulkLanguageResult, StoreError> {
        let mut languages = self.languages.lock().await;
        let mut result = BulkLanguageResult::default();
        for row in rows {
            if languages.iter().any(|l| l.name == row.name) {
                result.errors.push(row.name.clone());
            } else {
                languages.push(row.clone());
                result.count += 1;
            }
        }
        Ok(result)
    }
}

pub fn entry(english: &str, language: &str) -> VocabEntry {
    VocabEntry {
        english: english.to_string(),
        foreign: format!("{english}-f"),
        language: language.to_string(),
        difficulty: Difficulty::Beginner,
        examples: vec![format!("{english} example")],
    }
}

pub fn entries(count: usize) -> Vec<VocabEntry> {
    (0..count).map(|i| entry(&format!("word{i}"), "Turkish")).collect()
}

pub const CSV_HEADER: &str = "English_Word,Translation,Level,Target_Language,Example_Sentence";

/// CSV text with `count` distinct, valid rows.
pub fn csv_with_rows(count: usize) -> String {
    let mut text = String::from(CSV_HEADER);
    for i in 0..count {
        text.push_str(&format!("\nword{i},kelime{i},Medium,Turkish,This is word{i}"));
    }
    text
}
