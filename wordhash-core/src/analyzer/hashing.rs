//! Word hashing unit.
//!
//! Maps each letter n-gram through a fitted [`Vocabulary`] and counts
//! occurrences per index. Terms the vocabulary has never seen are counted at
//! the reserved sentinel index 0 rather than dropped, so `hash.total()` always
//! equals the number of n-grams hashed.

use rustc_hash::FxHashMap;
use wordhash_types::{TermId, WordHash};

use crate::analyzer::TextUnit;
use crate::vocab::Vocabulary;

/// Hashes n-grams into sparse vocabulary-indexed counts.
#[derive(Debug, Clone, Copy)]
pub struct WordHashingUnit<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> WordHashingUnit<'v> {
    /// Creates a unit bound to a fitted vocabulary.
    #[inline]
    pub const fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Hashes a sequence of terms.
    pub fn hash<I, S>(&self, terms: I) -> WordHash
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: FxHashMap<TermId, u32> = FxHashMap::default();
        for term in terms {
            *counts
                .entry(self.vocabulary.index_of(term.as_ref()))
                .or_insert(0) += 1;
        }
        WordHash::from_counts(counts)
    }
}

impl TextUnit<Vec<String>> for WordHashingUnit<'_> {
    type Output = WordHash;

    fn transform(&self, input: Vec<String>) -> WordHash {
        self.hash(&input)
    }

    fn name(&self) -> &'static str {
        "hashing"
    }
}
