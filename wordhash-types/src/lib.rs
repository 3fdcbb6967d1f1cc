//! Core types and errors for the wordhash preprocessing pipeline.
//!
//! This crate provides the value types that are shared across the
//! wordhash workspace. Keeping them separate ensures:
//!
//! - **Small surface**: No pipeline logic, only data and validation
//! - **Cross-crate compatibility**: Core and tooling share the same types
//! - **Clean boundaries**: No circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;

use smallvec::SmallVec;
use thiserror::Error;

/// Vocabulary index of a term.
///
/// Indices start at 1. Index 0 is [`OOV_INDEX`] and is never assigned to a
/// fitted term.
pub type TermId = u32;

/// Reserved sentinel index for terms that are absent from the vocabulary.
pub const OOV_INDEX: TermId = 0;

/// Default letter n-gram width ("tri-letter").
pub const DEFAULT_NGRAM_SIZE: usize = 3;

/// Default marker wrapped around each token before n-gram extraction.
pub const DEFAULT_BOUNDARY: char = '#';

/// Shape of a raw record: a bare text pair or a labeled one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Arity {
    /// `(left, right)`
    Pair = 2,
    /// `(left, right, label)`
    Labeled = 3,
}

impl Arity {
    /// Number of tuple fields.
    #[inline(always)]
    pub const fn width(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-tuple", self.width())
    }
}

/// One input record: a left/right text pair, optionally carrying a label.
///
/// The label is opaque to the pipeline and is carried through unchanged.
///
/// ```
/// use wordhash_types::{Arity, RawRecord};
///
/// let labeled: RawRecord<u8> = ("beijing", "Beijing is capital of China", 1).into();
/// assert_eq!(labeled.arity(), Arity::Labeled);
///
/// let pair: RawRecord = ("beijing", "I visited beijing yesterday.").into();
/// assert_eq!(pair.arity(), Arity::Pair);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRecord<L = ()> {
    /// Unlabeled pair.
    Pair {
        /// Left text (query side).
        left: String,
        /// Right text (document side).
        right: String,
    },
    /// Labeled pair.
    Labeled {
        /// Left text (query side).
        left: String,
        /// Right text (document side).
        right: String,
        /// Caller-defined label.
        label: L,
    },
}

impl<L> RawRecord<L> {
    /// Creates an unlabeled record.
    pub fn pair(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::Pair {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Creates a labeled record.
    pub fn labeled(left: impl Into<String>, right: impl Into<String>, label: L) -> Self {
        Self::Labeled {
            left: left.into(),
            right: right.into(),
            label,
        }
    }

    /// Returns the record's shape.
    #[inline]
    pub const fn arity(&self) -> Arity {
        match self {
            Self::Pair { .. } => Arity::Pair,
            Self::Labeled { .. } => Arity::Labeled,
        }
    }

    /// Left text.
    #[inline]
    pub fn left(&self) -> &str {
        match self {
            Self::Pair { left, .. } | Self::Labeled { left, .. } => left,
        }
    }

    /// Right text.
    #[inline]
    pub fn right(&self) -> &str {
        match self {
            Self::Pair { right, .. } | Self::Labeled { right, .. } => right,
        }
    }

    /// Label, if the record carries one.
    #[inline]
    pub fn label(&self) -> Option<&L> {
        match self {
            Self::Pair { .. } => None,
            Self::Labeled { label, .. } => Some(label),
        }
    }
}

impl<A, B> From<(A, B)> for RawRecord<()>
where
    A: Into<String>,
    B: Into<String>,
{
    fn from((left, right): (A, B)) -> Self {
        Self::pair(left, right)
    }
}

impl<A, B, L> From<(A, B, L)> for RawRecord<L>
where
    A: Into<String>,
    B: Into<String>,
{
    fn from((left, right, label): (A, B, L)) -> Self {
        Self::labeled(left, right, label)
    }
}

/// Sparse word-hashed representation of one text.
///
/// Entries are `(index, count)` pairs sorted strictly by ascending index.
/// Index [`OOV_INDEX`] collects out-of-vocabulary occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordHash {
    entries: SmallVec<[(TermId, u32); 32]>,
}

impl WordHash {
    /// Creates an empty hash.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a hash from unordered `(index, count)` pairs.
    ///
    /// Repeated indices are summed and zero counts are skipped.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (TermId, u32)>,
    {
        let mut entries: SmallVec<[(TermId, u32); 32]> =
            counts.into_iter().filter(|&(_, c)| c > 0).collect();
        entries.sort_unstable_by_key(|&(id, _)| id);

        let mut merged: SmallVec<[(TermId, u32); 32]> = SmallVec::with_capacity(entries.len());
        for (id, count) in entries {
            match merged.last_mut() {
                Some((last, total)) if *last == id => *total += count,
                _ => merged.push((id, count)),
            }
        }

        Self { entries: merged }
    }

    /// Sorted `(index, count)` entries.
    #[inline(always)]
    pub fn entries(&self) -> &[(TermId, u32)] {
        &self.entries
    }

    /// Number of non-zero entries.
    #[inline(always)]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no term was hashed.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of hashed term occurrences.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, c)| c as u64).sum()
    }

    /// Count stored at `id`, zero if absent.
    pub fn get(&self, id: TermId) -> u32 {
        self.entries
            .binary_search_by_key(&id, |&(i, _)| i)
            .map_or(0, |pos| self.entries[pos].1)
    }

    /// Number of out-of-vocabulary occurrences.
    #[inline]
    pub fn oov(&self) -> u32 {
        self.get(OOV_INDEX)
    }

    /// Iterates the indices that carry a non-zero count.
    pub fn indices(&self) -> impl Iterator<Item = TermId> + '_ {
        self.entries.iter().map(|&(id, _)| id)
    }

    /// Expands into a dense count vector of width `dim`.
    ///
    /// Indices at or beyond `dim` are ignored.
    pub fn to_dense(&self, dim: usize) -> Vec<f32> {
        let mut dense = vec![0.0f32; dim];
        for &(id, count) in &self.entries {
            if let Some(slot) = dense.get_mut(id as usize) {
                *slot = count as f32;
            }
        }
        dense
    }
}

impl fmt::Display for WordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (id, count)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{id}:{count}")?;
        }
        f.write_str("}")
    }
}

/// Which stopwords the stopword-removal unit filters out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StopwordSet {
    /// Built-in English list.
    #[default]
    English,
    /// Keep every token.
    None,
    /// Caller-provided list, matched exactly against lowercased tokens.
    Custom(Vec<String>),
}

impl fmt::Display for StopwordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopwordSet::English => f.write_str("english"),
            StopwordSet::None => f.write_str("none"),
            StopwordSet::Custom(words) => write!(f, "custom({})", words.len()),
        }
    }
}

/// Pipeline configuration options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Width of each letter n-gram in characters.
    /// Default: 3 (tri-letters)
    pub ngram_size: usize,
    /// Marker wrapped around each token before n-gram extraction.
    /// Default: `#`
    pub boundary: char,
    /// Stopwords removed before n-gram extraction.
    pub stopwords: StopwordSet,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::triletter()
    }
}

impl PipelineConfig {
    /// Tri-letter hashing with English stopword removal.
    pub const fn triletter() -> Self {
        Self {
            ngram_size: DEFAULT_NGRAM_SIZE,
            boundary: DEFAULT_BOUNDARY,
            stopwords: StopwordSet::English,
        }
    }

    /// Tri-letter hashing that keeps every word.
    pub const fn keep_stopwords() -> Self {
        Self {
            ngram_size: DEFAULT_NGRAM_SIZE,
            boundary: DEFAULT_BOUNDARY,
            stopwords: StopwordSet::None,
        }
    }

    /// Checks the configuration for values the pipeline cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroNgram`] if `ngram_size` is zero,
    /// [`ConfigError::WhitespaceBoundary`] if the boundary marker is whitespace
    /// and [`ConfigError::AlphanumericBoundary`] if it could be part of a word.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ngram_size == 0 {
            return Err(ConfigError::ZeroNgram);
        }
        if self.boundary.is_whitespace() {
            return Err(ConfigError::WhitespaceBoundary(self.boundary));
        }
        if self.boundary.is_alphanumeric() {
            return Err(ConfigError::AlphanumericBoundary(self.boundary));
        }
        Ok(())
    }
}

/// Invalid pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// N-gram width of zero.
    #[error("ngram size must be at least 1")]
    ZeroNgram,
    /// Boundary marker that the tokenizer would split on.
    #[error("boundary marker {0:?} must not be whitespace")]
    WhitespaceBoundary(char),
    /// Boundary marker that collides with letters or digits inside tokens.
    #[error("boundary marker {0:?} must not be a letter or digit")]
    AlphanumericBoundary(char),
}

/// Errors returned by pipeline `fit` and `transform`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// `transform` was called before a successful `fit`.
    #[error("vocabulary not fitted: call `fit` before `transform`")]
    NotFitted,
    /// A record's shape differs from the first record of the batch.
    #[error("record {index} is a {found} but the batch started with a {expected}")]
    MixedArity {
        /// Position of the first offending record.
        index: usize,
        /// Arity of the first record.
        expected: Arity,
        /// Arity of the offending record.
        found: Arity,
    },
    /// The batch contained no records.
    #[error("batch is empty")]
    EmptyBatch,
    /// Fitting extracted no terms, so there is nothing to index.
    #[error("fit produced an empty vocabulary: no terms survived preprocessing")]
    EmptyVocabulary,
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Lifecycle state of a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineState {
    /// No vocabulary yet; `transform` is rejected.
    Unfitted,
    /// A vocabulary is fitted and reused by every `transform`.
    Fitted,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Unfitted => f.write_str("unfitted"),
            PipelineState::Fitted => f.write_str("fitted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_from_tuples() {
        let pair: RawRecord = ("a b", "c d").into();
        assert_eq!(pair.arity(), Arity::Pair);
        assert_eq!(pair.left(), "a b");
        assert_eq!(pair.right(), "c d");
        assert_eq!(pair.label(), None);

        let labeled: RawRecord<i32> = ("x", String::from("y"), 7).into();
        assert_eq!(labeled.arity(), Arity::Labeled);
        assert_eq!(labeled.label(), Some(&7));
    }

    #[test]
    fn arity_width() {
        assert_eq!(Arity::Pair.width(), 2);
        assert_eq!(Arity::Labeled.width(), 3);
        assert_eq!(Arity::Labeled.to_string(), "3-tuple");
    }

    #[test]
    fn word_hash_merges_and_sorts() {
        let hash = WordHash::from_counts([(5, 1), (2, 3), (5, 2), (9, 0)]);
        assert_eq!(hash.entries(), &[(2, 3), (5, 3)]);
        assert_eq!(hash.nnz(), 2);
        assert_eq!(hash.total(), 6);
        assert_eq!(hash.get(5), 3);
        assert_eq!(hash.get(9), 0);
        assert_eq!(hash.oov(), 0);
    }

    #[test]
    fn word_hash_dense_expansion() {
        let hash = WordHash::from_counts([(0, 2), (3, 1), (7, 4)]);
        let dense = hash.to_dense(5);
        assert_eq!(dense, vec![2.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(hash.oov(), 2);
    }

    #[test]
    fn word_hash_display() {
        let hash = WordHash::from_counts([(1, 2), (4, 1)]);
        assert_eq!(hash.to_string(), "{1:2, 4:1}");
        assert_eq!(WordHash::new().to_string(), "{}");
    }

    #[test]
    fn default_config_is_triletter() {
        let config = PipelineConfig::default();
        assert_eq!(config.ngram_size, 3);
        assert_eq!(config.boundary, '#');
        assert_eq!(config.stopwords, StopwordSet::English);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_validation() {
        let zero = PipelineConfig {
            ngram_size: 0,
            ..Default::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroNgram));

        let space = PipelineConfig {
            boundary: ' ',
            ..Default::default()
        };
        assert_eq!(space.validate(), Err(ConfigError::WhitespaceBoundary(' ')));

        for boundary in ['a', '7', 'é'] {
            let letter = PipelineConfig {
                boundary,
                ..Default::default()
            };
            assert_eq!(
                letter.validate(),
                Err(ConfigError::AlphanumericBoundary(boundary))
            );
        }

        let dollar = PipelineConfig {
            boundary: '$',
            ..Default::default()
        };
        assert!(dollar.validate().is_ok());
    }

    #[test]
    fn not_fitted_message_instructs_fit() {
        let msg = PipelineError::NotFitted.to_string();
        assert!(msg.contains("not fitted"));
        assert!(msg.contains("fit"));
    }

    #[test]
    fn mixed_arity_message() {
        let err = PipelineError::MixedArity {
            index: 2,
            expected: Arity::Labeled,
            found: Arity::Pair,
        };
        assert_eq!(
            err.to_string(),
            "record 2 is a 2-tuple but the batch started with a 3-tuple"
        );
    }

    #[test]
    fn config_error_converts() {
        let err: PipelineError = ConfigError::ZeroNgram.into();
        assert!(matches!(err, PipelineError::Config(ConfigError::ZeroNgram)));
    }
}
