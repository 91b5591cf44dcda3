//! Rules for one vocabulary CSV row.
//!
//! Every rule runs; all failures end up in the verdict.

use crate::parser::{
    RawRow, COL_ENGLISH_WORD, COL_EXAMPLE_SENTENCE, COL_LEVEL, COL_TARGET_LANGUAGE,
    COL_TRANSLATION,
};
use crate::types::RowNumber;
use crate::vocab::{Difficulty, EntryCandidate};

use super::rules::ValidationVerdict;

pub fn validate_csv_row(row: &RawRow, row_number: RowNumber) -> ValidationVerdict {
    let mut errors = Vec::new();

    let english = required(row, COL_ENGLISH_WORD, &mut errors);
    let foreign = required(row, COL_TRANSLATION, &mut errors);

    let difficulty = match required(row, COL_LEVEL, &mut errors) {
        Some(level) => {
            let parsed = Difficulty::parse_label(level);
            if parsed.is_none() {
                errors.push(format!(
                    "Invalid Level value \"{}\". Must be one of: {}",
                    row.get_str(COL_LEVEL).unwrap_or(level),
                    Difficulty::allowed_list()
                ));
            }
            parsed
        }
        None => None,
    };

    let language = required(row, COL_TARGET_LANGUAGE, &mut errors);

    let example = required(row, COL_EXAMPLE_SENTENCE, &mut errors);
    if let (Some(sentence), Some(word)) = (example, english) {
        if !sentence.to_lowercase().contains(&word.to_lowercase()) {
            errors.push(format!(
                "{COL_EXAMPLE_SENTENCE} \"{sentence}\" must contain the {COL_ENGLISH_WORD} \"{word}\" (case-insensitive)"
            ));
        }
    }

    let candidate = match (english, foreign, language, difficulty, example) {
        (Some(english), Some(foreign), Some(language), Some(difficulty), Some(example)) => {
            Some(EntryCandidate {
                english: english.to_string(),
                foreign: foreign.to_string(),
                language: language.to_string(),
                difficulty,
                examples: vec![example.to_string()],
            })
        }
        _ => None,
    };

    ValidationVerdict::from_errors(row_number, row.clone(), errors, candidate)
}

/// Trimmed, non-empty value of `column`, or an error pushed to `errors`.
fn required<'a>(row: &'a RawRow, column: &str, errors: &mut Vec<String>) -> Option<&'a str> {
    match row.get_str(column).map(str::trim) {
        Some(value) if !value.is_empty() => Some(value),
        _ => {
            errors.push(format!("{column} is required and cannot be empty"));
            None
        }
    }
}
