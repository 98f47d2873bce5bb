//! Vocabulary store built from two-column rows.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{QuizError, Result};
use crate::types::VocabularyEntry;

/// Cell text a spreadsheet reader emits for a missing value.
const MISSING_VALUE: &str = "nan";

/// Ordered set of parsed vocabulary entries.
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    entries: Vec<VocabularyEntry>,
}

impl VocabularyStore {
    /// Parse raw `(first, second)` rows into a store.
    ///
    /// Rows with an empty or `nan` cell are skipped. Returns
    /// [`QuizError::NoValidRows`] when nothing survives.
    pub fn build<I, A, B>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let entries: Vec<VocabularyEntry> = rows
            .into_iter()
            .filter_map(|(first, second)| {
                let first = first.as_ref().trim();
                let second = second.as_ref().trim();
                if is_missing(first) || is_missing(second) {
                    None
                } else {
                    Some(VocabularyEntry::new(first, second))
                }
            })
            .collect();

        if entries.is_empty() {
            return Err(QuizError::NoValidRows);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Uniform pick with replacement: the same entry may repeat.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&VocabularyEntry> {
        self.entries.choose(rng)
    }
}

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell.eq_ignore_ascii_case(MISSING_VALUE)
}
