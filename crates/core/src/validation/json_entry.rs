//! Rules for one element of a vocabulary JSON import.

use serde_json::Value;

use crate::parser::{json_type_name, RawRow};
use crate::types::RowNumber;
use crate::vocab::{Difficulty, EntryCandidate, MAX_EXAMPLES};

use super::rules::ValidationVerdict;

pub const FIELD_ENGLISH: &str = "english";
pub const FIELD_FOREIGN: &str = "foreign";
pub const FIELD_LANGUAGE: &str = "language";
pub const FIELD_DIFFICULTY: &str = "difficulty";
pub const FIELD_EXAMPLES: &str = "examples";

pub fn validate_json_entry(row: &RawRow, row_number: RowNumber) -> ValidationVerdict {
    let mut errors = Vec::new();

    let english = required_string(row, FIELD_ENGLISH, &mut errors);
    let foreign = required_string(row, FIELD_FOREIGN, &mut errors);
    let language = required_string(row, FIELD_LANGUAGE, &mut errors);

    let difficulty = required_string(row, FIELD_DIFFICULTY, &mut errors).and_then(|value| {
        let parsed = Difficulty::parse_label(value);
        if parsed.is_none() {
            errors.push(format!(
                "Invalid difficulty '{value}'. Must be one of: {}",
                Difficulty::allowed_list()
            ));
        }
        parsed
    });

    let examples = examples(row, &mut errors);

    let candidate = match (english, foreign, language, difficulty, examples) {
        (Some(english), Some(foreign), Some(language), Some(difficulty), Some(examples)) => {
            Some(EntryCandidate {
                english: english.to_string(),
                foreign: foreign.to_string(),
                language: language.to_string(),
                difficulty,
                examples,
            })
        }
        _ => None,
    };

    ValidationVerdict::from_errors(row_number, row.clone(), errors, candidate)
}

fn required_string<'a>(row: &'a RawRow, field: &str, errors: &mut Vec<String>) -> Option<&'a str> {
    match row.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim()),
        _ => {
            errors.push(format!("Missing or invalid '{field}' field"));
            None
        }
    }
}

fn examples(row: &RawRow, errors: &mut Vec<String>) -> Option<Vec<String>> {
    let items = match row.get(FIELD_EXAMPLES) {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => {
            errors.push(format!("Missing or empty '{FIELD_EXAMPLES}' array"));
            return None;
        }
    };

    let mut ok = true;
    if items.len() > MAX_EXAMPLES {
        errors.push(format!("Maximum {MAX_EXAMPLES} examples allowed"));
        ok = false;
    }

    let mut examples = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(s) if !s.trim().is_empty() => examples.push(s.trim().to_string()),
            Value::String(_) => {
                errors.push(format!("{FIELD_EXAMPLES}[{index}] cannot be empty"));
                ok = false;
            }
            other => {
                errors.push(format!(
                    "{FIELD_EXAMPLES}[{index}] must be a string, got {}",
                    json_type_name(other)
                ));
                ok = false;
            }
        }
    }

    ok.then_some(examples)
}
