//! Statistics and PipelineStats.

use wordhash_types::{PipelineState, TermId};

use crate::pipeline::types::Pipeline;

/// A snapshot of pipeline statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    /// Lifecycle state.
    pub state: PipelineState,
    /// Number of distinct fitted terms.
    pub num_terms: usize,
    /// Hashed dimensionality, zero while unfitted.
    pub dim_triletter: usize,
    /// Total bytes of term text.
    pub term_bytes: usize,
    /// N-gram width.
    pub ngram_size: usize,
    /// Number of stopwords filtered.
    pub num_stopwords: usize,
}

impl Pipeline {
    /// Returns pipeline statistics.
    pub fn stats(&self) -> PipelineStats {
        let (num_terms, dim_triletter, term_bytes) = match &self.context {
            Some(ctx) => (
                ctx.vocabulary().len(),
                ctx.dim_triletter(),
                ctx.vocabulary().term_bytes(),
            ),
            None => (0, 0, 0),
        };

        PipelineStats {
            state: self.state(),
            num_terms,
            dim_triletter,
            term_bytes,
            ngram_size: self.config.ngram_size,
            num_stopwords: self.stopwords.len(),
        }
    }
}

impl PipelineStats {
    /// Returns approximate vocabulary memory usage in bytes.
    ///
    /// Each term is stored twice (map key and reverse table) plus its index.
    pub fn memory_usage_bytes(&self) -> usize {
        let per_term = 2 * std::mem::size_of::<Box<str>>() + std::mem::size_of::<TermId>();
        self.num_terms * per_term + 2 * self.term_bytes
    }
}

impl core::fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, {} terms, dim {}, {}-grams, {} stopwords",
            self.state, self.num_terms, self.dim_triletter, self.ngram_size, self.num_stopwords
        )?;

        if self.num_terms > 0 {
            write!(f, ", ~{} bytes", self.memory_usage_bytes())?;
        }

        Ok(())
    }
}
