//! Pipeline and context types.

use std::sync::Arc;

use wordhash_types::{PipelineConfig, PipelineError, PipelineState};

use crate::analyzer::{LetterNgramUnit, StatelessChain, Stopwords};
use crate::vocab::{TermIndex, Vocabulary};

/// Fitted state shared by a pipeline and the bundles it returns.
///
/// A re-fit swaps in a new context; bundles keep the one they were built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    vocabulary: Vocabulary,
    dim_triletter: usize,
}

impl Context {
    pub(crate) fn new(vocabulary: Vocabulary) -> Self {
        let dim_triletter = vocabulary.dim();
        Self {
            vocabulary,
            dim_triletter,
        }
    }

    /// Fitted vocabulary.
    #[inline(always)]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Term to index mapping.
    #[inline(always)]
    pub fn term_index(&self) -> &TermIndex {
        self.vocabulary.term_index()
    }

    /// Width of the hashed representation: distinct terms + 1.
    #[inline(always)]
    pub fn dim_triletter(&self) -> usize {
        self.dim_triletter
    }
}

/// Two-phase text-pair preprocessing pipeline.
///
/// `fit` builds a tri-letter vocabulary from a training batch; `transform`
/// hashes any batch through it. The pipeline is a plain value: `fit` takes
/// `&mut self` and `transform` takes `&self`, so sharing one instance across
/// threads needs external synchronisation (e.g. an `RwLock`) exactly when a
/// re-fit may race with transforms.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub(crate) config: PipelineConfig,
    pub(crate) stopwords: Stopwords,
    pub(crate) context: Option<Arc<Context>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Creates an unfitted tri-letter pipeline with English stopword removal.
    pub fn new() -> Self {
        let config = PipelineConfig::default();
        Self {
            stopwords: Stopwords::from_set(&config.stopwords),
            config,
            context: None,
        }
    }

    /// Creates an unfitted pipeline with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Config` if the configuration is invalid.
    pub fn with_config(config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self {
            stopwords: Stopwords::from_set(&config.stopwords),
            config,
            context: None,
        })
    }

    /// Active configuration.
    #[inline(always)]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> PipelineState {
        if self.context.is_some() {
            PipelineState::Fitted
        } else {
            PipelineState::Unfitted
        }
    }

    /// Returns `true` once `fit` has succeeded.
    #[inline]
    pub fn is_fitted(&self) -> bool {
        self.context.is_some()
    }

    /// Fitted context, if any.
    #[inline]
    pub fn context(&self) -> Option<&Arc<Context>> {
        self.context.as_ref()
    }

    /// Builds a fresh stateless unit chain for one call.
    pub fn stateless_units(&self) -> StatelessChain<'_> {
        StatelessChain::new(
            &self.stopwords,
            LetterNgramUnit::new(self.config.ngram_size, self.config.boundary),
        )
    }
}
