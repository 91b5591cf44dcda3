//! Final report of one import run.
//!
//! Pure aggregation over the validation verdicts and submission outcomes;
//! nothing here decides anything about individual rows.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::outcome::{SubmissionOutcome, SubmissionResult};
use crate::types::{RowNumber, Timestamp};
use crate::validation::ValidationVerdict;

/// Errors reported for a single rejected row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowErrors {
    pub row_number: RowNumber,
    pub errors: Vec<String>,
}

/// An entry the store refused, with the reason it gave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFailure {
    pub english: String,
    pub language: String,
    pub reason: String,
}

/// Aggregate result of one import run. Held for display only.
///
/// `valid_row_count + invalid_row_count == total_rows_parsed` and
/// `unique_entry_count <= valid_row_count` always hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub run_id: Uuid,
    pub total_rows_parsed: usize,
    pub valid_row_count: usize,
    pub invalid_row_count: usize,
    pub unique_entry_count: usize,
    pub added_count: usize,
    pub skipped_count: usize,
    pub failed_count: usize,
    pub per_row_errors: Vec<RowErrors>,
    pub failed_entries: Vec<EntryFailure>,
    /// Distinct languages of submitted entries, in first-seen order.
    pub affected_languages: Vec<String>,
    /// Wall-clock seconds, one decimal place (e.g. `"2.4"`).
    pub duration_seconds: String,
    pub finished_at: Timestamp,
}

/// Collects the pieces of a run and produces an [`ImportSummary`].
#[derive(Debug)]
pub struct ImportSummaryBuilder<'a> {
    run_id: Uuid,
    verdicts: &'a [ValidationVerdict],
    outcomes: &'a [SubmissionOutcome],
    elapsed: Duration,
}

impl<'a> ImportSummaryBuilder<'a> {
    pub fn new(run_id: Uuid) -> Self {
        Self {
            run_id,
            verdicts: &[],
            outcomes: &[],
            elapsed: Duration::ZERO,
        }
    }

    pub fn verdicts(mut self, verdicts: &'a [ValidationVerdict]) -> Self {
        self.verdicts = verdicts;
        self
    }

    pub fn outcomes(mut self, outcomes: &'a [SubmissionOutcome]) -> Self {
        self.outcomes = outcomes;
        self
    }

    /// Time between handing the input to the parser and receiving the last
    /// batch outcome.
    pub fn elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    pub fn build(self) -> ImportSummary {
        let valid_row_count = self.verdicts.iter().filter(|v| v.valid).count();

        let per_row_errors = self
            .verdicts
            .iter()
            .filter(|v| !v.valid)
            .map(|v| RowErrors {
                row_number: v.row_number,
                errors: v.errors.clone(),
            })
            .collect::<Vec<_>>();

        let mut added_count = 0;
        let mut skipped_count = 0;
        let mut failed_entries = Vec::new();
        let mut affected_languages: Vec<String> = Vec::new();

        for outcome in self.outcomes {
            match &outcome.result {
                SubmissionResult::Added => added_count += 1,
                SubmissionResult::SkippedDuplicate => skipped_count += 1,
                SubmissionResult::Failed(reason) => failed_entries.push(EntryFailure {
                    english: outcome.entry.english.clone(),
                    language: outcome.entry.language.clone(),
                    reason: reason.clone(),
                }),
            }
            if !affected_languages.contains(&outcome.entry.language) {
                affected_languages.push(outcome.entry.language.clone());
            }
        }

        ImportSummary {
            run_id: self.run_id,
            total_rows_parsed: self.verdicts.len(),
            valid_row_count,
            invalid_row_count: per_row_errors.len(),
            unique_entry_count: self.outcomes.len(),
            added_count,
            skipped_count,
            failed_count: failed_entries.len(),
            per_row_errors,
            failed_entries,
            affected_languages,
            duration_seconds: format_duration(self.elapsed),
            finished_at: Utc::now(),
        }
    }
}

/// Format a duration as seconds with one decimal place.
pub fn format_duration(elapsed: Duration) -> String {
    format!("{:.1}", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::RawRow;
    use crate::vocab::{Difficulty, EntryCandidate, VocabEntry};

    fn verdict(row_number: usize, errors: &[&str]) -> ValidationVerdict {
        let candidate = errors.is_empty().then(|| EntryCandidate {
            english: format!("w{row_number}"),
            foreign: "f".to_string(),
            language: "Turkish".to_string(),
            difficulty: Difficulty::Beginner,
            examples: vec![format!("w{row_number}")],
        });
        ValidationVerdict::from_errors(
            row_number,
            RawRow::new(),
            errors.iter().map(|e| e.to_string()).collect(),
            candidate,
        )
    }

    fn outcome(english: &str, language: &str, result: SubmissionResult) -> SubmissionOutcome {
        SubmissionOutcome::new(
            VocabEntry {
                english: english.to_string(),
                foreign: "f".to_string(),
                language: language.to_string(),
                difficulty: Difficulty::Medium,
                examples: vec![english.to_string()],
            },
            result,
        )
    }

    #[test]
    fn counts_are_aggregated() {
        let verdicts = vec![verdict(2, &[]), verdict(3, &["bad level"]), verdict(4, &[])];
        let outcomes = vec![
            outcome("a", "Turkish", SubmissionResult::Added),
            outcome("b", "Spanish", SubmissionResult::SkippedDuplicate),
        ];

        let summary = ImportSummaryBuilder::new(Uuid::nil())
            .verdicts(&verdicts)
            .outcomes(&outcomes)
            .elapsed(Duration::from_millis(2_340))
            .build();

        assert_eq!(summary.total_rows_parsed, 3);
        assert_eq!(summary.valid_row_count, 2);
        assert_eq!(summary.invalid_row_count, 1);
        assert_eq!(
            summary.valid_row_count + summary.invalid_row_count,
            summary.total_rows_parsed
        );
        assert_eq!(summary.unique_entry_count, 2);
        assert_eq!(summary.added_count, 1);
        assert_eq!(summary.skipped_count, 1);
        assert_eq!(summary.failed_count, 0);
        assert_eq!(
            summary.per_row_errors,
            vec![RowErrors {
                row_number: 3,
                errors: vec!["bad level".to_string()]
            }]
        );
        assert_eq!(summary.affected_languages, vec!["Turkish", "Spanish"]);
        assert_eq!(summary.duration_seconds, "2.3");
    }

    #[test]
    fn failures_are_listed_with_reason() {
        let outcomes = vec![
            outcome("a", "Turkish", SubmissionResult::Failed("boom".to_string())),
            outcome("b", "Turkish", SubmissionResult::Added),
        ];
        let summary = ImportSummaryBuilder::new(Uuid::nil())
            .outcomes(&outcomes)
            .build();

        assert_eq!(summary.failed_count, 1);
        assert_eq!(summary.failed_entries[0].english, "a");
        assert_eq!(summary.failed_entries[0].reason, "boom");
        assert_eq!(summary.affected_languages, vec!["Turkish"]);
    }

    #[test]
    fn duration_has_one_decimal() {
        assert_eq!(format_duration(Duration::ZERO), "0.0");
        assert_eq!(format_duration(Duration::from_secs(12)), "12.0");
        assert_eq!(format_duration(Duration::from_millis(1_260)), "1.3");
    }
}
