//! Parsing and validation for language bulk imports.
//!
//! Uses its own CSV dialect: fields may be wrapped in double quotes so a
//! value can contain commas. The vocabulary CSV parser does not do this and
//! splits on every comma.
//!
//! Columns: `name,code,flag,textDirection,startColor,endColor,ordering`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of columns in a language row.
pub const LANGUAGE_COLUMN_COUNT: usize = 7;

/// Gradient start color used when the column is empty.
pub const DEFAULT_START_COLOR: &str = "#667EEA";

/// Gradient end color used when the column is empty.
pub const DEFAULT_END_COLOR: &str = "#764BA2";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// `rtl` in any casing is right-to-left; everything else falls back to
    /// left-to-right.
    pub fn from_column(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("rtl") {
            Self::Rtl
        } else {
            Self::Ltr
        }
    }
}

/// A validated language ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRow {
    pub name: String,
    /// Lowercased language code, e.g. `"tr"`.
    pub code: String,
    pub flag: String,
    pub text_direction: TextDirection,
    pub start_color: String,
    pub end_color: String,
    pub ordering: u64,
}

/// Result of parsing a language CSV: accepted rows plus one message per
/// rejected line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageParse {
    pub rows: Vec<LanguageRow>,
    pub errors: Vec<String>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Split one line on commas that are not inside double quotes.
///
/// Quote characters toggle the in-quotes state and are dropped. Every field
/// is trimmed.
pub fn split_quoted_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Parse a language CSV.
///
/// A first line whose first field is `name` (any casing) is treated as a
/// header and skipped. Line numbers in error messages count data lines
/// from 1.
pub fn parse_language_csv(text: &str) -> Result<LanguageParse, CoreError> {
    let lines: Vec<&str> = text
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let Some(first) = lines.first() else {
        return Err(CoreError::MalformedInput("No data to import".to_string()));
    };

    let is_header = split_quoted_line(first)
        .first()
        .is_some_and(|field| field.eq_ignore_ascii_case("name"));
    let data_lines = if is_header {
        &lines[1..]
    } else {
        &lines[..]
    };

    let mut parsed = LanguageParse::default();
    for (index, line) in data_lines.iter().enumerate() {
        match parse_language_line(line, index + 1) {
            Ok(row) => parsed.rows.push(row),
            Err(message) => parsed.errors.push(message),
        }
    }
    Ok(parsed)
}

fn parse_language_line(line: &str, line_number: usize) -> Result<LanguageRow, String> {
    let fields = split_quoted_line(line);
    if fields.len() < LANGUAGE_COLUMN_COUNT {
        return Err(format!(
            "Line {line_number}: Insufficient fields (expected {LANGUAGE_COLUMN_COUNT}, got {})",
            fields.len()
        ));
    }

    let (name, code, flag) = (&fields[0], &fields[1], &fields[2]);
    if name.is_empty() || code.is_empty() || flag.is_empty() {
        return Err(format!(
            "Line {line_number}: Missing required fields (name, code, or flag)"
        ));
    }

    let ordering_raw = &fields[6];
    let ordering = match ordering_raw.parse::<i64>() {
        Ok(n) if n >= 1 => n as u64,
        _ => {
            return Err(format!(
                "Line {line_number}: Invalid ordering value \"{ordering_raw}\""
            ))
        }
    };

    Ok(LanguageRow {
        name: name.clone(),
        code: code.to_lowercase(),
        flag: flag.clone(),
        text_direction: TextDirection::from_column(&fields[3]),
        start_color: non_empty_or(&fields[4], DEFAULT_START_COLOR),
        end_color: non_empty_or(&fields[5], DEFAULT_END_COLOR),
        ordering,
    })
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn quoted_commas_stay_in_the_field() {
        assert_eq!(
            split_quoted_line(r#"Chinese,zh,"🇨🇳, 🇹🇼",ltr,,,3"#),
            vec!["Chinese", "zh", "🇨🇳, 🇹🇼", "ltr", "", "", "3"]
        );
    }

    #[test]
    fn unquoted_line_splits_on_every_comma() {
        assert_eq!(split_quoted_line(" a , b,c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn header_is_skipped_and_defaults_applied() {
        let text = "name,code,flag,textDirection,startColor,endColor,ordering\n\
                    Turkish,TR,🇹🇷,ltr,,,1\n\
                    Arabic,ar,🇸🇦,RTL,#111111,#222222,2\n";
        let parsed = parse_language_csv(text).unwrap();

        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(
            parsed.rows[0],
            LanguageRow {
                name: "Turkish".to_string(),
                code: "tr".to_string(),
                flag: "🇹🇷".to_string(),
                text_direction: TextDirection::Ltr,
                start_color: DEFAULT_START_COLOR.to_string(),
                end_color: DEFAULT_END_COLOR.to_string(),
                ordering: 1,
            }
        );
        assert_eq!(parsed.rows[1].text_direction, TextDirection::Rtl);
        assert_eq!(parsed.rows[1].start_color, "#111111");
    }

    #[test]
    fn bad_lines_are_reported_and_skipped() {
        let text = "Turkish,tr,🇹🇷,ltr,,,1\n\
                    Short,sh\n\
                    ,xx,🏳,ltr,,,2\n\
                    German,de,🇩🇪,ltr,,,0\n\
                    French,fr,🇫🇷,ltr,,,abc\n";
        let parsed = parse_language_csv(text).unwrap();

        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(
            parsed.errors,
            vec![
                "Line 2: Insufficient fields (expected 7, got 2)",
                "Line 3: Missing required fields (name, code, or flag)",
                "Line 4: Invalid ordering value \"0\"",
                "Line 5: Invalid ordering value \"abc\"",
            ]
        );
    }

    #[test]
    fn first_data_line_containing_name_is_kept() {
        let text = "Vietnamese,vi,🇻🇳,ltr,,,1\nGerman,de,🇩🇪,ltr,,,2";
        let parsed = parse_language_csv(text).unwrap();

        assert!(parsed.errors.is_empty());
        let names: Vec<_> = parsed.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Vietnamese", "German"]);
    }

    #[test]
    fn capitalized_header_is_skipped() {
        let text = "Name,Code,Flag,TextDirection,StartColor,EndColor,Ordering\nGerman,de,🇩🇪,ltr,,,2";
        let parsed = parse_language_csv(text).unwrap();

        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].name, "German");
    }

    #[test]
    fn empty_input_is_fatal() {
        assert_matches!(parse_language_csv("  \n "), Err(CoreError::MalformedInput(_)));
    }
}
