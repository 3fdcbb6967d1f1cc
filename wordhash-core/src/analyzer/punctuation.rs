//! Punctuation removal unit.

use crate::analyzer::tokenizer::is_punctuation;
use crate::analyzer::TextUnit;

/// Drops tokens made only of punctuation.
///
/// Tokens mixing letters or digits with punctuation are kept as-is, and
/// empty tokens are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationRemovalUnit;

impl PunctuationRemovalUnit {
    /// Returns `true` if the unit would drop `token`.
    #[inline]
    pub fn is_removed(token: &str) -> bool {
        token.chars().all(is_punctuation)
    }
}

impl TextUnit<Vec<String>> for PunctuationRemovalUnit {
    type Output = Vec<String>;

    fn transform(&self, mut input: Vec<String>) -> Vec<String> {
        input.retain(|token| !Self::is_removed(token));
        input
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
