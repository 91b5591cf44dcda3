//! Vocabulary domain types shared by every import stage.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of example sentences kept per vocabulary entry.
pub const MAX_EXAMPLES: usize = 5;

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Difficulty level of a vocabulary entry.
///
/// Serialized with the capitalized label (`"Beginner"`), which is what
/// import files carry. The persistence backend expects the lowercase
/// [`wire_value`](Difficulty::wire_value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Medium,
    Hard,
    Advanced,
}

impl Difficulty {
    /// Every level, in ascending order.
    pub const ALL: [Difficulty; 4] = [Self::Beginner, Self::Medium, Self::Hard, Self::Advanced];

    /// Display label as it appears in import files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Advanced => "Advanced",
        }
    }

    /// Lowercase variant name used by the persistence backend.
    pub fn wire_value(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Advanced => "advanced",
        }
    }

    /// Case-insensitive lookup of a level label. Surrounding whitespace is
    /// ignored. Returns `None` for anything outside the four levels.
    pub fn parse_label(s: &str) -> Option<Self> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(needle))
    }

    /// Comma-separated list of allowed labels, for error messages.
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(Difficulty::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// A reconciled, ready-to-submit vocabulary entry.
///
/// All string fields are trimmed and non-empty; `examples` holds between one
/// and [`MAX_EXAMPLES`] sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub english: String,
    pub foreign: String,
    pub language: String,
    pub difficulty: Difficulty,
    pub examples: Vec<String>,
}

impl VocabEntry {
    pub fn key(&self) -> EntryKey {
        EntryKey::new(&self.language, &self.english)
    }
}

/// Typed values extracted from a row that passed validation.
///
/// Unlike [`VocabEntry`] it has not been merged with other rows yet, so the
/// example list may be empty only if the strategy allows it (none currently
/// does).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryCandidate {
    pub english: String,
    pub foreign: String,
    pub language: String,
    pub difficulty: Difficulty,
    pub examples: Vec<String>,
}

impl EntryCandidate {
    pub fn key(&self) -> EntryKey {
        EntryKey::new(&self.language, &self.english)
    }
}

/// Composite identity of a vocabulary entry: exact language plus
/// lowercased English term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub language: String,
    pub english_lower: String,
}

impl EntryKey {
    pub fn new(language: &str, english: &str) -> Self {
        Self {
            language: language.trim().to_string(),
            english_lower: english.trim().to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_label_is_case_insensitive() {
        assert_eq!(Difficulty::parse_label("BEGINNER"), Some(Difficulty::Beginner));
        assert_eq!(Difficulty::parse_label("medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse_label("  Hard "), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse_label("aDvAnCeD"), Some(Difficulty::Advanced));
    }

    #[test]
    fn parse_label_rejects_unknown_levels() {
        assert_eq!(Difficulty::parse_label("Novice"), None);
        assert_eq!(Difficulty::parse_label(""), None);
    }

    #[test]
    fn wire_value_is_lowercase_label() {
        for level in Difficulty::ALL {
            assert_eq!(level.wire_value(), level.as_str().to_lowercase());
        }
    }

    #[test]
    fn allowed_list_names_every_level() {
        assert_eq!(Difficulty::allowed_list(), "Beginner, Medium, Hard, Advanced");
    }

    #[test]
    fn key_ignores_english_case_but_not_language_case() {
        assert_eq!(EntryKey::new("Turkish", "Hello"), EntryKey::new("Turkish", "hello "));
        assert_ne!(EntryKey::new("Turkish", "hello"), EntryKey::new("turkish", "hello"));
    }
}
