//! Bulk language import against an in-memory store.

mod common;

use assert_matches::assert_matches;
use common::MemoryLanguageStore;
use vocabchain_core::error::CoreError;
use vocabchain_pipeline::languages::import_languages;
use vocabchain_pipeline::PipelineError;

#[tokio::test]
async fn valid_rows_are_imported_and_existing_ones_skipped() {
    let store = MemoryLanguageStore::default();
    let text = "name,code,flag,textDirection,startColor,endColor,ordering\n\
                Turkish,tr,🇹🇷,ltr,,,1\n\
                \"Persian, Farsi\",fa,🇮🇷,rtl,,,2\n\
                Broken,xx\n";

    let report = import_languages(&store, text).await.unwrap();
    assert_eq!(report.imported, 2);
    assert!(report.skipped.is_empty());
    assert_eq!(report.row_errors, vec!["Line 3: Insufficient fields (expected 7, got 2)"]);
    assert_eq!(store.languages.lock().await[1].name, "Persian, Farsi");

    let again = import_languages(&store, "Turkish,tr,🇹🇷,ltr,,,1").await.unwrap();
    assert_eq!(again.imported, 0);
    assert_eq!(again.skipped, vec!["Turkish"]);
}

#[tokio::test]
async fn nothing_valid_is_an_error() {
    let store = MemoryLanguageStore::default();
    let err = import_languages(&store, "German,de,🇩🇪,ltr,,,0").await.unwrap_err();

    assert_matches!(err, PipelineError::Core(CoreError::Validation(_)));
    assert!(store.languages.lock().await.is_empty());
}
