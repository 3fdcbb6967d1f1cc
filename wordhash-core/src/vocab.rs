//! Term vocabulary.
//!
//! [`VocabularyBuilder`] assigns each distinct term an index in order of first
//! appearance, starting at 1. Index 0 ([`OOV_INDEX`]) is reserved for terms the
//! vocabulary has never seen, so the hashed dimensionality is always
//! `len() + 1`.
//!
//! ```
//! use wordhash_core::vocab::VocabularyBuilder;
//!
//! let mut builder = VocabularyBuilder::new();
//! builder.fit(["#ca", "cat", "at#", "cat"]);
//! let vocab = builder.finish();
//!
//! assert_eq!(vocab.get("#ca"), Some(1));
//! assert_eq!(vocab.get("at#"), Some(3));
//! assert_eq!(vocab.len(), 3);
//! assert_eq!(vocab.dim(), 4);
//! ```

use rustc_hash::FxHashMap;
use wordhash_types::{TermId, OOV_INDEX};

/// Term to index mapping.
pub type TermIndex = FxHashMap<Box<str>, TermId>;

/// Accumulates terms into a vocabulary.
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    term_index: TermIndex,
    terms: Vec<Box<str>>,
}

impl VocabularyBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every term, assigning fresh indices to unseen ones.
    pub fn fit<I, S>(&mut self, terms: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            self.insert(term.as_ref());
        }
        self
    }

    /// Adds one term and returns its index.
    pub fn insert(&mut self, term: &str) -> TermId {
        if let Some(&id) = self.term_index.get(term) {
            return id;
        }
        self.terms.push(Box::from(term));
        let id = self.terms.len() as TermId;
        self.term_index.insert(Box::from(term), id);
        id
    }

    /// Mapping built so far.
    #[inline]
    pub fn term_index(&self) -> &TermIndex {
        &self.term_index
    }

    /// Freezes the builder into an immutable vocabulary.
    pub fn finish(self) -> Vocabulary {
        Vocabulary {
            term_index: self.term_index,
            terms: self.terms,
        }
    }
}

/// Immutable fitted vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    term_index: TermIndex,
    /// `terms[i]` has index `i + 1`.
    terms: Vec<Box<str>>,
}

impl Vocabulary {
    /// Index of `term`, if it was fitted.
    #[inline]
    pub fn get(&self, term: &str) -> Option<TermId> {
        self.term_index.get(term).copied()
    }

    /// Index of `term`, or [`OOV_INDEX`] if unknown.
    #[inline]
    pub fn index_of(&self, term: &str) -> TermId {
        self.get(term).unwrap_or(OOV_INDEX)
    }

    /// Returns `true` if `term` was fitted.
    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.term_index.contains_key(term)
    }

    /// Term stored at `id`. The sentinel index has no term.
    pub fn term(&self, id: TermId) -> Option<&str> {
        let slot = (id as usize).checked_sub(1)?;
        self.terms.get(slot).map(|t| &**t)
    }

    /// The term to index mapping.
    #[inline]
    pub fn term_index(&self) -> &TermIndex {
        &self.term_index
    }

    /// Number of distinct terms.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if no term was fitted.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Width of a dense hashed vector: distinct terms plus the sentinel slot.
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.terms.len() + 1
    }

    /// Iterates `(term, index)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TermId)> + '_ {
        self.terms
            .iter()
            .enumerate()
            .map(|(i, t)| (&**t, i as TermId + 1))
    }

    /// Total bytes of term text.
    pub fn term_bytes(&self) -> usize {
        self.terms.iter().map(|t| t.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(terms: &[&str]) -> Vocabulary {
        let mut builder = VocabularyBuilder::new();
        builder.fit(terms);
        builder.finish()
    }

    #[test]
    fn indices_start_at_one() {
        let vocab = fit(&["a", "b"]);
        assert_eq!(vocab.get("a"), Some(1));
        assert_eq!(vocab.get("b"), Some(2));
        assert!(vocab.iter().all(|(_, id)| id != OOV_INDEX));
    }

    #[test]
    fn duplicates_share_an_index() {
        let vocab = fit(&["x", "y", "x", "x", "z", "y"]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.get("x"), Some(1));
        assert_eq!(vocab.get("z"), Some(3));
    }

    #[test]
    fn first_appearance_order_is_deterministic() {
        let terms = ["q", "w", "e", "w", "r"];
        assert_eq!(fit(&terms), fit(&terms));
        let order: Vec<_> = fit(&terms).iter().map(|(t, _)| t.to_owned()).collect();
        assert_eq!(order, ["q", "w", "e", "r"]);
    }

    #[test]
    fn dim_reserves_sentinel() {
        let vocab = fit(&["a", "b", "c"]);
        assert_eq!(vocab.dim(), 4);
        assert_eq!(Vocabulary::default().dim(), 1);
    }

    #[test]
    fn unknown_terms_map_to_sentinel() {
        let vocab = fit(&["a"]);
        assert_eq!(vocab.get("zzz"), None);
        assert_eq!(vocab.index_of("zzz"), OOV_INDEX);
        assert!(!vocab.contains("zzz"));
    }

    #[test]
    fn reverse_lookup() {
        let vocab = fit(&["#ca", "cat"]);
        assert_eq!(vocab.term(1), Some("#ca"));
        assert_eq!(vocab.term(2), Some("cat"));
        assert_eq!(vocab.term(OOV_INDEX), None);
        assert_eq!(vocab.term(3), None);
    }

    #[test]
    fn exact_string_equality() {
        let vocab = fit(&["Cat", "cat", "cat "]);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn builder_exposes_state_while_fitting() {
        let mut builder = VocabularyBuilder::new();
        builder.fit(["a", "b"]).fit(["b", "c"]);
        assert_eq!(builder.term_index().len(), 3);
        assert_eq!(builder.insert("a"), 1);
        assert_eq!(builder.insert("d"), 4);
    }

    #[test]
    fn term_bytes_sums_lengths() {
        assert_eq!(fit(&["ab", "cde"]).term_bytes(), 5);
    }
}
