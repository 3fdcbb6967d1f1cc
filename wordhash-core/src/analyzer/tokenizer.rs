//! Streaming Tokenizer Module
//!
//! This module provides the first stage of the preprocessing chain: it splits a
//! raw text into word tokens and punctuation tokens. Nothing has been cleaned
//! yet at this point, so the input may carry any casing, any Unicode
//! whitespace, and punctuation glued to words.
//!
//! ## What It Does
//!
//! Given raw input like `"Summer in Beijing is hot."`, it emits each word and
//! each punctuation mark as its own token, with its position:
//!
//! ```ignore
//! ("Summer", 0)
//! ("in", 1)
//! ("Beijing", 2)
//! ("is", 3)
//! ("hot", 4)
//! (".", 5)
//! ```
//!
//! ## Splitting Rules
//!
//! - Runs of Unicode whitespace separate tokens and are never emitted
//! - Every character that is neither alphanumeric nor whitespace is
//!   punctuation and becomes a single-character token, even inside a word
//!   (`"don't"` gives `"don"`, `"'"`, `"t"`)
//! - Everything else stays together
//!
//! Separating punctuation this way lets the punctuation-removal unit drop it
//! wholesale, so `"Beijing!"` and `"Beijing"` end up with the same tokens.
//!
//! ## Zero Allocation Core
//!
//! [`TokenizeUnit::tokenize`] emits slices of the input through a callback.
//! The [`TextUnit`] implementation collects owned tokens for the next unit.

use crate::analyzer::TextUnit;

/// Returns `true` for characters the tokenizer splits off as punctuation.
#[inline(always)]
pub fn is_punctuation(ch: char) -> bool {
    !ch.is_alphanumeric() && !ch.is_whitespace()
}

/// Streaming tokenizer - splits raw text into word and punctuation tokens.
///
/// ## Example
///
/// ```
/// use wordhash_core::analyzer::tokenizer::TokenizeUnit;
///
/// let tokenizer = TokenizeUnit::new();
/// let mut tokens = Vec::new();
///
/// tokenizer.tokenize("Hello, world", |text, _pos| tokens.push(text));
///
/// assert_eq!(tokens, ["Hello", ",", "world"]);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct TokenizeUnit;

impl TokenizeUnit {
    /// Creates a tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes raw input and emits `(text, position)`.
    ///
    /// Positions count emitted tokens and saturate at `u32::MAX`.
    #[inline]
    pub fn tokenize<'n, F>(&self, text: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let mut pos = 0u32;

        for word in text.split_whitespace() {
            let mut start = 0usize;

            for (i, ch) in word.char_indices() {
                if !is_punctuation(ch) {
                    continue;
                }
                if start < i {
                    emit(&word[start..i], pos);
                    pos = pos.saturating_add(1);
                }
                let end = i + ch.len_utf8();
                emit(&word[i..end], pos);
                pos = pos.saturating_add(1);
                start = end;
            }

            if start < word.len() {
                emit(&word[start..], pos);
                pos = pos.saturating_add(1);
            }
        }
    }
}

impl<'a> TextUnit<&'a str> for TokenizeUnit {
    type Output = Vec<String>;

    fn transform(&self, input: &'a str) -> Vec<String> {
        let mut tokens = Vec::new();
        self.tokenize(input, |text, _| tokens.push(text.to_owned()));
        tokens
    }

    fn name(&self) -> &'static str {
        "tokenize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        TokenizeUnit::new().tokenize(input, |text, pos| out.push((text, pos)));
        out
    }

    fn words(input: &str) -> Vec<String> {
        TokenizeUnit::new().transform(input)
    }

    #[test]
    fn single_word() {
        let out = collect("hello");
        assert_eq!(out, vec![("hello", 0)]);
    }

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(words("  hello \t world\n\r foo  "), ["hello", "world", "foo"]);
        assert_eq!(words("a\u{3000}b"), ["a", "b"]);
    }

    #[test]
    fn trailing_punctuation_is_its_own_token() {
        assert_eq!(words("Summer in Beijing is hot."), [
            "Summer", "in", "Beijing", "is", "hot", "."
        ]);
        assert_eq!(words("beijing!"), ["beijing", "!"]);
    }

    #[test]
    fn inner_punctuation_splits_word() {
        assert_eq!(words("don't"), ["don", "'", "t"]);
        assert_eq!(words("state-of-art"), ["state", "-", "of", "-", "art"]);
    }

    #[test]
    fn consecutive_punctuation() {
        assert_eq!(words("wait...?"), ["wait", ".", ".", ".", "?"]);
        assert_eq!(words("!!"), ["!", "!"]);
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the quick, brown fox");
        assert_eq!(out.len(), 5);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
        assert!(collect(" \t\n").is_empty());
    }

    #[test]
    fn unicode_letters_stay_together() {
        assert_eq!(words("Café über"), ["Café", "über"]);
        assert_eq!(words("北京 是"), ["北京", "是"]);
    }

    #[test]
    fn digits_are_word_characters() {
        assert_eq!(words("route 66"), ["route", "66"]);
        assert_eq!(words("3.5"), ["3", ".", "5"]);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello, world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        TokenizeUnit::new().tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = TokenizeUnit::new();
        assert_eq!(t.transform("hello world").len(), 2);
        assert_eq!(t.transform("one two three").len(), 3);
    }
}
