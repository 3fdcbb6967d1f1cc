//! Stopword removal unit.
//!
//! The built-in English list is the classic NLTK list minus its contracted
//! forms: the tokenizer splits `"don't"` into `"don"`, `"'"`, `"t"`, so the
//! contractions can never match, while their fragments (`don`, `t`, `ll`, ...)
//! are in the list.

use rustc_hash::FxHashSet;
use wordhash_types::StopwordSet;

use crate::analyzer::TextUnit;

/// Default English stopwords.
#[rustfmt::skip]
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her",
    "hers", "herself", "it", "its", "itself", "they", "them", "their", "theirs",
    "themselves", "what", "which", "who", "whom", "this", "that", "these", "those",
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if",
    "or", "because", "as", "until", "while", "of", "at", "by", "for", "with",
    "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where",
    "why", "how", "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "s", "t", "can", "will", "just", "don", "should", "now", "d", "ll",
    "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn", "doesn", "hadn",
    "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan", "shouldn",
    "wasn", "weren", "won", "wouldn",
];

/// A resolved stopword set.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: FxHashSet<Box<str>>,
}

impl Stopwords {
    /// Resolves a configured [`StopwordSet`].
    ///
    /// Custom words are lowercased so they line up with the lowercased tokens
    /// the unit sees.
    pub fn from_set(set: &StopwordSet) -> Self {
        match set {
            StopwordSet::English => Self::new(ENGLISH_STOPWORDS.iter().copied()),
            StopwordSet::None => Self::default(),
            StopwordSet::Custom(words) => {
                Self::new(words.iter().map(|w| w.to_lowercase()))
            }
        }
    }

    /// Builds a set from exact words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| Box::from(w.as_ref())).collect(),
        }
    }

    /// Returns `true` if `token` is a stopword.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of stopwords.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if nothing is filtered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Drops tokens that appear in a borrowed [`Stopwords`] set.
#[derive(Debug, Clone, Copy)]
pub struct StopwordRemovalUnit<'a> {
    stopwords: &'a Stopwords,
}

impl<'a> StopwordRemovalUnit<'a> {
    /// Creates a unit filtering against `stopwords`.
    #[inline]
    pub const fn new(stopwords: &'a Stopwords) -> Self {
        Self { stopwords }
    }
}

impl TextUnit<Vec<String>> for StopwordRemovalUnit<'_> {
    type Output = Vec<String>;

    fn transform(&self, mut input: Vec<String>) -> Vec<String> {
        if !self.stopwords.is_empty() {
            input.retain(|token| !self.stopwords.contains(token));
        }
        input
    }

    fn name(&self) -> &'static str {
        "stopwords"
    }
}
