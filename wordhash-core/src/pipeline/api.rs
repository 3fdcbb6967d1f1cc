//! Public API for fitting and transforming batches.

use std::sync::Arc;

use tracing::{debug, info, warn};
use wordhash_types::{PipelineError, RawRecord};

use crate::pipeline::bundle::OutputBundle;
use crate::pipeline::detach::{batch_arity, detach_labels, Detached};
use crate::pipeline::types::{Context, Pipeline};
use crate::vocab::VocabularyBuilder;

impl Pipeline {
    /// Fits the tri-letter vocabulary on a training batch.
    ///
    /// Left and right texts of every record run through the stateless chain;
    /// their n-grams are concatenated in record order (left before right) and
    /// indexed. Labels are ignored. A previous context is replaced wholesale.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::EmptyBatch` for an empty batch,
    /// `PipelineError::MixedArity` if records differ in arity, and
    /// `PipelineError::EmptyVocabulary` if no term survives preprocessing.
    /// On error the pipeline keeps its previous state.
    pub fn fit<L>(&mut self, batch: &[RawRecord<L>]) -> Result<&mut Self, PipelineError> {
        let arity = batch_arity(batch)?;
        debug!(records = batch.len(), %arity, "fitting vocabulary");

        let chain = self.stateless_units();
        let mut terms = Vec::new();
        for record in batch {
            terms.extend(chain.apply(record.left()));
            terms.extend(chain.apply(record.right()));
        }

        let mut builder = VocabularyBuilder::new();
        builder.fit(&terms);
        let vocabulary = builder.finish();

        if vocabulary.is_empty() {
            warn!(records = batch.len(), "fit extracted no terms");
            return Err(PipelineError::EmptyVocabulary);
        }

        let context = Context::new(vocabulary);
        info!(
            occurrences = terms.len(),
            terms = context.vocabulary().len(),
            dim_triletter = context.dim_triletter(),
            refit = self.context.is_some(),
            "vocabulary fitted"
        );
        self.context = Some(Arc::new(context));

        Ok(self)
    }

    /// Hashes a batch through the fitted vocabulary.
    ///
    /// Output columns follow input order. The bundle has a `labels` column
    /// iff the batch is labeled. Unknown tri-letters are counted at index 0.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::NotFitted` before a successful `fit`, then
    /// `PipelineError::EmptyBatch` or `PipelineError::MixedArity` for a
    /// malformed batch.
    pub fn transform<L: Clone>(
        &self,
        batch: &[RawRecord<L>],
    ) -> Result<OutputBundle<L>, PipelineError> {
        let context = self
            .context
            .as_ref()
            .filter(|c| !c.vocabulary().is_empty())
            .ok_or(PipelineError::NotFitted)?;

        let Detached { pairs, labels } = detach_labels(batch)?;
        debug!(
            records = pairs.len(),
            labeled = labels.is_some(),
            "transforming batch"
        );

        let chain = self.stateless_units().with_hashing(context.vocabulary());
        let mut text_left = Vec::with_capacity(pairs.len());
        let mut text_right = Vec::with_capacity(pairs.len());

        for (left, right) in pairs {
            text_left.push(chain.apply(left));
            text_right.push(chain.apply(right));
        }

        let oov: u64 = text_left
            .iter()
            .chain(&text_right)
            .map(|h| h.oov() as u64)
            .sum();
        debug!(records = text_left.len(), oov, "batch hashed");

        let context = Arc::clone(context);
        Ok(match labels {
            Some(labels) => OutputBundle::Labeled {
                text_left,
                text_right,
                labels,
                context,
            },
            None => OutputBundle::Unlabeled {
                text_left,
                text_right,
                context,
            },
        })
    }

    /// Fits on `batch`, then transforms the same batch.
    ///
    /// # Errors
    ///
    /// Any error from [`Pipeline::fit`] or [`Pipeline::transform`].
    pub fn fit_transform<L: Clone>(
        &mut self,
        batch: &[RawRecord<L>],
    ) -> Result<OutputBundle<L>, PipelineError> {
        self.fit(batch)?;
        self.transform(batch)
    }

    /// Runs one text through the stateless chain and returns its n-grams.
    pub fn triletters(&self, text: &str) -> Vec<String> {
        self.stateless_units().apply(text)
    }
}
