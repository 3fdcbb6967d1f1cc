//! Letter n-gram extraction module.
//!
//! Each token is wrapped in a boundary marker and cut into overlapping
//! windows of `n` characters. With the default `n = 3` and `#` marker,
//! `"cat"` becomes `"#cat#"` and yields `"#ca"`, `"cat"`, `"at#"`. These
//! tri-letters are the terms the vocabulary indexes.
//!
//! Windows are counted in Unicode scalar values, so multi-byte letters are
//! never split.

use smallvec::SmallVec;
use wordhash_types::{DEFAULT_BOUNDARY, DEFAULT_NGRAM_SIZE};

use crate::analyzer::TextUnit;

/// Extracts boundary-marked letter n-grams from tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterNgramUnit {
    n: usize,
    boundary: char,
}

impl Default for LetterNgramUnit {
    fn default() -> Self {
        Self::new(DEFAULT_NGRAM_SIZE, DEFAULT_BOUNDARY)
    }
}

impl LetterNgramUnit {
    /// Creates an extractor for windows of `n` characters.
    ///
    /// `n` must be at least 1; the pipeline validates this before building a
    /// unit.
    #[inline]
    pub const fn new(n: usize, boundary: char) -> Self {
        Self { n, boundary }
    }

    /// Emits every n-gram of one token, left to right.
    ///
    /// # Example
    ///
    /// ```
    /// use wordhash_core::analyzer::ngram::LetterNgramUnit;
    ///
    /// let mut grams = Vec::new();
    /// LetterNgramUnit::default().extract("hello", |g| grams.push(g.to_owned()));
    ///
    /// assert_eq!(grams, ["#he", "hel", "ell", "llo", "lo#"]);
    /// ```
    pub fn extract<F>(&self, token: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        if self.n == 0 {
            return;
        }

        let mut wrapped = String::with_capacity(token.len() + 2 * self.boundary.len_utf8());
        wrapped.push(self.boundary);
        wrapped.push_str(token);
        wrapped.push(self.boundary);

        let mut offsets: SmallVec<[usize; 32]> =
            wrapped.char_indices().map(|(i, _)| i).collect();
        offsets.push(wrapped.len());

        let chars = offsets.len() - 1;
        if chars < self.n {
            return;
        }

        for start in 0..=chars - self.n {
            emit(&wrapped[offsets[start]..offsets[start + self.n]]);
        }
    }

    /// Number of n-grams `token` yields, without allocating.
    #[inline]
    pub fn count(&self, token: &str) -> usize {
        if self.n == 0 {
            return 0;
        }
        (token.chars().count() + 2 + 1).saturating_sub(self.n)
    }
}

impl TextUnit<Vec<String>> for LetterNgramUnit {
    type Output = Vec<String>;

    fn transform(&self, input: Vec<String>) -> Vec<String> {
        let total = input.iter().map(|t| self.count(t)).sum();
        let mut grams = Vec::with_capacity(total);
        for token in &input {
            self.extract(token, |g| grams.push(g.to_owned()));
        }
        grams
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grams(unit: LetterNgramUnit, token: &str) -> Vec<String> {
        let mut out = Vec::new();
        unit.extract(token, |g| out.push(g.to_owned()));
        out
    }

    #[test]
    fn triletters_basic() {
        assert_eq!(grams(LetterNgramUnit::default(), "cat"), ["#ca", "cat", "at#"]);
    }

    #[test]
    fn short_tokens_still_yield_grams() {
        assert_eq!(grams(LetterNgramUnit::default(), "a"), ["#a#"]);
        assert_eq!(grams(LetterNgramUnit::default(), "ab"), ["#ab", "ab#"]);
    }

    #[test]
    fn empty_token_yields_nothing() {
        assert!(grams(LetterNgramUnit::default(), "").is_empty());
        assert_eq!(LetterNgramUnit::default().count(""), 0);
    }

    #[test]
    fn count_matches_extract() {
        let unit = LetterNgramUnit::default();
        for token in ["", "a", "ab", "abc", "beijing", "café", "北京"] {
            assert_eq!(unit.count(token), grams(unit, token).len(), "token {token:?}");
        }
    }

    #[test]
    fn multibyte_letters_not_split() {
        assert_eq!(grams(LetterNgramUnit::default(), "café"), [
            "#ca", "caf", "afé", "fé#"
        ]);
        assert_eq!(grams(LetterNgramUnit::default(), "北京"), ["#北京", "北京#"]);
    }

    #[test]
    fn custom_width_and_boundary() {
        let bigrams = LetterNgramUnit::new(2, '^');
        assert_eq!(grams(bigrams, "ab"), ["^a", "ab", "b^"]);

        let unigrams = LetterNgramUnit::new(1, '#');
        assert_eq!(grams(unigrams, "ab"), ["#", "a", "b", "#"]);
    }

    #[test]
    fn wide_window_longer_than_token() {
        let unit = LetterNgramUnit::new(6, '#');
        assert!(grams(unit, "cat").is_empty());
        assert_eq!(grams(unit, "cats"), ["#cats#"]);
    }

    #[test]
    fn zero_width_is_inert() {
        let unit = LetterNgramUnit::new(0, '#');
        assert!(grams(unit, "cat").is_empty());
        assert_eq!(unit.count("cat"), 0);
    }

    #[test]
    fn unit_flattens_in_token_order() {
        let out = LetterNgramUnit::default().transform(vec!["ab".into(), "cd".into()]);
        assert_eq!(out, ["#ab", "ab#", "#cd", "cd#"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let out = LetterNgramUnit::default().transform(vec!["aa".into(), "aa".into()]);
        assert_eq!(out.len(), 4);
        assert_eq!(out.iter().filter(|g| *g == "#aa").count(), 2);
    }
}
