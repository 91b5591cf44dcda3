//! Groups valid rows into unique vocabulary entries.
//!
//! Identity is the composite key `(language, lowercase(english))`. The first
//! row seen for a key fixes every scalar field; later rows only contribute
//! example sentences, up to [`MAX_EXAMPLES`]. Sentences past the cap are
//! dropped without an error.

use std::collections::HashMap;

use crate::validation::ValidationVerdict;
use crate::vocab::{EntryCandidate, EntryKey, VocabEntry, MAX_EXAMPLES};

/// Reconcile candidates into unique entries, in first-encounter order.
pub fn reconcile<'a, I>(candidates: I) -> Vec<VocabEntry>
where
    I: IntoIterator<Item = &'a EntryCandidate>,
{
    let mut index_by_key: HashMap<EntryKey, usize> = HashMap::new();
    let mut entries: Vec<VocabEntry> = Vec::new();

    for candidate in candidates {
        let idx = *index_by_key.entry(candidate.key()).or_insert_with(|| {
            entries.push(VocabEntry {
                english: candidate.english.clone(),
                foreign: candidate.foreign.clone(),
                language: candidate.language.clone(),
                difficulty: candidate.difficulty,
                examples: Vec::new(),
            });
            entries.len() - 1
        });

        let examples = &mut entries[idx].examples;
        let room = MAX_EXAMPLES.saturating_sub(examples.len());
        examples.extend(candidate.examples.iter().take(room).cloned());
    }

    entries
}

/// Reconcile the accepted rows of a verdict set.
pub fn reconcile_verdicts(verdicts: &[ValidationVerdict]) -> Vec<VocabEntry> {
    reconcile(verdicts.iter().filter_map(|v| v.candidate.as_ref()))
}
