//! Verdict and strategy types.

use serde::{Deserialize, Serialize};

use crate::parser::{ImportFormat, RawRow};
use crate::types::RowNumber;
use crate::vocab::EntryCandidate;

/// Which rule set to apply to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStrategy {
    /// One example sentence per row; the sentence must contain the English
    /// word.
    CsvRow,
    /// One entry per element with an `examples` array of 1 to 5 strings.
    JsonEntry,
}

impl ValidationStrategy {
    pub fn for_format(format: ImportFormat) -> Self {
        match format {
            ImportFormat::Csv => Self::CsvRow,
            ImportFormat::Json => Self::JsonEntry,
        }
    }

    /// Validate one row in isolation.
    pub fn validate(&self, row: &RawRow, row_number: RowNumber) -> ValidationVerdict {
        match self {
            Self::CsvRow => super::csv_row::validate_csv_row(row, row_number),
            Self::JsonEntry => super::json_entry::validate_json_entry(row, row_number),
        }
    }
}

/// Outcome of validating a single input row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub row_number: RowNumber,
    pub valid: bool,
    pub errors: Vec<String>,
    pub source_row: RawRow,
    /// Typed values of the row. Present iff `valid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<EntryCandidate>,
}

impl ValidationVerdict {
    /// Build a verdict from the collected errors. The candidate is kept
    /// only when no rule failed.
    pub fn from_errors(
        row_number: RowNumber,
        source_row: RawRow,
        errors: Vec<String>,
        candidate: Option<EntryCandidate>,
    ) -> Self {
        let valid = errors.is_empty() && candidate.is_some();
        Self {
            row_number,
            valid,
            errors,
            source_row,
            candidate: if valid { candidate } else { None },
        }
    }

    /// A row that could not even be tokenized properly.
    pub fn defective(row_number: RowNumber, source_row: RawRow, defect: String) -> Self {
        Self {
            row_number,
            valid: false,
            errors: vec![defect],
            source_row,
            candidate: None,
        }
    }
}
