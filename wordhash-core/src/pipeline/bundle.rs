//! Output bundle returned by `transform`.

use std::sync::Arc;

use wordhash_types::WordHash;

use crate::pipeline::types::Context;

/// Parallel hashed columns for one batch, plus the context that produced them.
///
/// Whether the batch carried labels is part of the type: only
/// [`OutputBundle::Labeled`] has a `labels` column.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputBundle<L> {
    /// Batch of `(left, right)` records.
    Unlabeled {
        /// Hashed left texts, in input order.
        text_left: Vec<WordHash>,
        /// Hashed right texts, in input order.
        text_right: Vec<WordHash>,
        /// Context the hashes were computed with.
        context: Arc<Context>,
    },
    /// Batch of `(left, right, label)` records.
    Labeled {
        /// Hashed left texts, in input order.
        text_left: Vec<WordHash>,
        /// Hashed right texts, in input order.
        text_right: Vec<WordHash>,
        /// Labels, carried through unchanged.
        labels: Vec<L>,
        /// Context the hashes were computed with.
        context: Arc<Context>,
    },
}

impl<L> OutputBundle<L> {
    /// The `text_left` column.
    #[inline]
    pub fn text_left(&self) -> &[WordHash] {
        match self {
            Self::Unlabeled { text_left, .. } | Self::Labeled { text_left, .. } => text_left,
        }
    }

    /// The `text_right` column.
    #[inline]
    pub fn text_right(&self) -> &[WordHash] {
        match self {
            Self::Unlabeled { text_right, .. } | Self::Labeled { text_right, .. } => text_right,
        }
    }

    /// The `labels` column, present iff the input batch was labeled.
    #[inline]
    pub fn labels(&self) -> Option<&[L]> {
        match self {
            Self::Unlabeled { .. } => None,
            Self::Labeled { labels, .. } => Some(labels),
        }
    }

    /// Returns `true` if the bundle has a `labels` column.
    #[inline]
    pub fn has_labels(&self) -> bool {
        matches!(self, Self::Labeled { .. })
    }

    /// Context attached at transform time.
    #[inline]
    pub fn context(&self) -> &Arc<Context> {
        match self {
            Self::Unlabeled { context, .. } | Self::Labeled { context, .. } => context,
        }
    }

    /// Shortcut for `context().dim_triletter()`.
    #[inline]
    pub fn dim_triletter(&self) -> usize {
        self.context().dim_triletter()
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.text_left().len()
    }

    /// Returns `true` if the bundle holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text_left().is_empty()
    }

    /// Iterates rows as `(left, right, label)`.
    pub fn iter(&self) -> impl Iterator<Item = (&WordHash, &WordHash, Option<&L>)> + '_ {
        let labels = self.labels();
        self.text_left()
            .iter()
            .zip(self.text_right())
            .enumerate()
            .map(move |(i, (left, right))| (left, right, labels.and_then(|l| l.get(i))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::VocabularyBuilder;

    fn context() -> Arc<Context> {
        let mut builder = VocabularyBuilder::new();
        builder.fit(["a", "b"]);
        Arc::new(Context::new(builder.finish()))
    }

    fn hash(id: u32) -> WordHash {
        WordHash::from_counts([(id, 1)])
    }

    #[test]
    fn unlabeled_has_no_labels_column() {
        let bundle: OutputBundle<()> = OutputBundle::Unlabeled {
            text_left: vec![hash(1)],
            text_right: vec![hash(2)],
            context: context(),
        };
        assert!(!bundle.has_labels());
        assert!(bundle.labels().is_none());
        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle.dim_triletter(), 3);
    }

    #[test]
    fn labeled_rows_line_up() {
        let bundle = OutputBundle::Labeled {
            text_left: vec![hash(1), hash(2)],
            text_right: vec![hash(2), hash(1)],
            labels: vec!["pos", "neg"],
            context: context(),
        };
        let rows: Vec<_> = bundle.iter().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], (&hash(1), &hash(2), Some(&"pos")));
        assert_eq!(rows[1], (&hash(2), &hash(1), Some(&"neg")));
    }
}
