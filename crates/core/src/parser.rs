//! Tokenizes raw import text into ordered row records.
//!
//! Two vocabulary formats are supported:
//!
//! - CSV with a fixed, position-sensitive header and naive comma splitting.
//! - JSON: a top-level array of objects, projected field by field.
//!
//! Structural problems (empty input, wrong header, non-array JSON) abort
//! with [`CoreError::MalformedInput`]. A CSV line with the wrong field count
//! is kept as a [`ParsedRow`] carrying a defect so it can be reported next
//! to the ordinary validation failures.
//!
//! The quote-aware dialect used for language imports lives in
//! [`crate::language_import`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::types::RowNumber;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const COL_ENGLISH_WORD: &str = "English_Word";
pub const COL_TRANSLATION: &str = "Translation";
pub const COL_LEVEL: &str = "Level";
pub const COL_TARGET_LANGUAGE: &str = "Target_Language";
pub const COL_EXAMPLE_SENTENCE: &str = "Example_Sentence";

/// Expected vocabulary CSV header, in order.
pub const VOCAB_CSV_HEADER: [&str; 5] = [
    COL_ENGLISH_WORD,
    COL_TRANSLATION,
    COL_LEVEL,
    COL_TARGET_LANGUAGE,
    COL_EXAMPLE_SENTENCE,
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Declared format of an import file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportFormat {
    Csv,
    Json,
}

impl ImportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Parse a format name. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input record: column name to value, in source order.
///
/// CSV cells are stored as JSON strings so both formats share one shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    fields: Vec<(String, Value)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.fields.push((column.into(), value));
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Value of `column` if present and a string.
    pub fn get_str(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Value::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Value)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A row produced by the parser together with its display row number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRow {
    pub row_number: RowNumber,
    pub row: RawRow,
    /// Line-level parse failure (e.g. wrong field count). A defective row
    /// is always reported invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defect: Option<String>,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Parse `text` according to `format`.
pub fn parse(text: &str, format: ImportFormat) -> Result<Vec<ParsedRow>, CoreError> {
    match format {
        ImportFormat::Csv => parse_vocab_csv(text),
        ImportFormat::Json => parse_vocab_json(text),
    }
}

/// Parse a vocabulary CSV file.
///
/// Blank lines are discarded before numbering, so the header is row 1 and
/// the first data line is row 2.
pub fn parse_vocab_csv(text: &str) -> Result<Vec<ParsedRow>, CoreError> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let header_line = lines
        .next()
        .ok_or_else(|| CoreError::MalformedInput("CSV file is empty".to_string()))?;
    check_vocab_header(header_line)?;

    let rows: Vec<ParsedRow> = lines
        .enumerate()
        .map(|(index, line)| {
            // Header occupies row 1.
            let row_number = index + 2;
            let values: Vec<&str> = line.split(',').map(str::trim).collect();
            let row: RawRow = VOCAB_CSV_HEADER
                .iter()
                .zip(values.iter())
                .map(|(column, value)| (column.to_string(), Value::String(value.to_string())))
                .collect();
            let defect = (values.len() != VOCAB_CSV_HEADER.len()).then(|| {
                format!(
                    "Expected {} columns, got {}",
                    VOCAB_CSV_HEADER.len(),
                    values.len()
                )
            });
            ParsedRow {
                row_number,
                row,
                defect,
            }
        })
        .collect();

    if rows.is_empty() {
        return Err(CoreError::MalformedInput(
            "CSV file contains no data rows".to_string(),
        ));
    }
    Ok(rows)
}

/// Parse a vocabulary JSON file: a non-empty array of objects.
///
/// Elements are numbered from 1. A non-object element becomes a defective
/// row instead of failing the whole file.
pub fn parse_vocab_json(text: &str) -> Result<Vec<ParsedRow>, CoreError> {
    let data: Value = serde_json::from_str(text)
        .map_err(|e| CoreError::MalformedInput(format!("Invalid JSON: {e}")))?;

    let items = match data {
        Value::Array(items) => items,
        _ => {
            return Err(CoreError::MalformedInput(
                "JSON must contain an array of vocabulary entries".to_string(),
            ))
        }
    };
    if items.is_empty() {
        return Err(CoreError::MalformedInput("JSON file is empty".to_string()));
    }

    let rows = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => ParsedRow {
                row_number: index + 1,
                row: map.into_iter().collect(),
                defect: None,
            },
            other => ParsedRow {
                row_number: index + 1,
                row: RawRow::new(),
                defect: Some(format!(
                    "Entry must be an object, got {}",
                    json_type_name(&other)
                )),
            },
        })
        .collect();
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn check_vocab_header(line: &str) -> Result<(), CoreError> {
    let header: Vec<&str> = line.split(',').map(str::trim).collect();

    if header.len() != VOCAB_CSV_HEADER.len() {
        return Err(CoreError::MalformedInput(format!(
            "Invalid CSV format. Expected {} columns: {}",
            VOCAB_CSV_HEADER.len(),
            VOCAB_CSV_HEADER.join(", ")
        )));
    }

    for (position, (got, expected)) in header.iter().zip(VOCAB_CSV_HEADER.iter()).enumerate() {
        if got != expected {
            return Err(CoreError::MalformedInput(format!(
                "Invalid header at column {}. Expected \"{expected}\", got \"{got}\"",
                position + 1
            )));
        }
    }
    Ok(())
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
