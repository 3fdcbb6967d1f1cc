//! Text analysis units.
//!
//! This module provides the transformation units the pipeline chains:
//! - **Tokenizer**: Splits raw text into word and punctuation tokens
//! - **Lowercase**: Folds tokens to lowercase
//! - **Punctuation**: Drops punctuation-only tokens
//! - **Stopwords**: Drops common function words
//! - **Ngram**: Expands tokens into boundary-marked letter n-grams
//! - **Hashing**: Maps n-grams to vocabulary indices
//!
//! Units share the [`TextUnit`] capability. The stateless prefix of the chain
//! is composed by [`StatelessChain`]; appending the fitted hashing unit gives
//! a [`HashingChain`].

pub mod hashing;
pub mod lowercase;
pub mod ngram;
pub mod punctuation;
pub mod stopwords;
pub mod tokenizer;

pub use hashing::WordHashingUnit;
pub use lowercase::LowercaseUnit;
pub use ngram::LetterNgramUnit;
pub use punctuation::PunctuationRemovalUnit;
pub use stopwords::{StopwordRemovalUnit, Stopwords};
pub use tokenizer::TokenizeUnit;

use crate::vocab::Vocabulary;
use wordhash_types::WordHash;

/// A single transformation step.
///
/// `I` is the value the unit consumes. Units never keep per-call state, so
/// one value can transform any number of inputs.
pub trait TextUnit<I> {
    /// Value produced by the unit.
    type Output;

    /// Transforms `input` into a new value.
    fn transform(&self, input: I) -> Self::Output;

    /// Short name used in logs and diagnostics.
    fn name(&self) -> &'static str;
}

/// Tokenize → Lowercase → PunctuationRemoval → StopwordRemoval → LetterNgram.
///
/// Borrows the stopword set from its owner, so building one per call is cheap.
#[derive(Debug, Clone, Copy)]
pub struct StatelessChain<'a> {
    tokenize: TokenizeUnit,
    lowercase: LowercaseUnit,
    punctuation: PunctuationRemovalUnit,
    stopwords: StopwordRemovalUnit<'a>,
    ngram: LetterNgramUnit,
}

impl<'a> StatelessChain<'a> {
    /// Creates the chain in its fixed order.
    pub fn new(stopwords: &'a Stopwords, ngram: LetterNgramUnit) -> Self {
        Self {
            tokenize: TokenizeUnit::new(),
            lowercase: LowercaseUnit,
            punctuation: PunctuationRemovalUnit,
            stopwords: StopwordRemovalUnit::new(stopwords),
            ngram,
        }
    }

    /// Runs one text through every stateless unit, returning its n-grams.
    pub fn apply(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenize.transform(text);
        let tokens = self.lowercase.transform(tokens);
        let tokens = self.punctuation.transform(tokens);
        let tokens = self.stopwords.transform(tokens);
        self.ngram.transform(tokens)
    }

    /// Unit names in application order.
    pub fn names(&self) -> [&'static str; 5] {
        [
            TextUnit::<&str>::name(&self.tokenize),
            TextUnit::<Vec<String>>::name(&self.lowercase),
            TextUnit::<Vec<String>>::name(&self.punctuation),
            TextUnit::<Vec<String>>::name(&self.stopwords),
            TextUnit::<Vec<String>>::name(&self.ngram),
        ]
    }

    /// Appends the hashing unit for a fitted vocabulary.
    pub fn with_hashing<'v>(self, vocabulary: &'v Vocabulary) -> HashingChain<'a, 'v> {
        HashingChain {
            stateless: self,
            hashing: WordHashingUnit::new(vocabulary),
        }
    }
}

/// The stateless chain followed by [`WordHashingUnit`].
#[derive(Debug, Clone, Copy)]
pub struct HashingChain<'a, 'v> {
    stateless: StatelessChain<'a>,
    hashing: WordHashingUnit<'v>,
}

impl HashingChain<'_, '_> {
    /// Runs one text through all six units.
    pub fn apply(&self, text: &str) -> WordHash {
        self.hashing.transform(self.stateless.apply(text))
    }

    /// Unit names in application order.
    pub fn names(&self) -> [&'static str; 6] {
        let [a, b, c, d, e] = self.stateless.names();
        [a, b, c, d, e, TextUnit::<Vec<String>>::name(&self.hashing)]
    }
}
