//! Label detachment.

use wordhash_types::{Arity, PipelineError, RawRecord};

/// A batch split into text pairs and, for labeled batches, labels.
pub(crate) struct Detached<'b, L> {
    pub pairs: Vec<(&'b str, &'b str)>,
    /// `None` marks an unlabeled batch.
    pub labels: Option<Vec<L>>,
}

/// Checks that `batch` is non-empty and every record has the first record's arity.
pub(crate) fn batch_arity<L>(batch: &[RawRecord<L>]) -> Result<Arity, PipelineError> {
    let expected = batch.first().ok_or(PipelineError::EmptyBatch)?.arity();

    match batch.iter().position(|r| r.arity() != expected) {
        Some(index) => Err(PipelineError::MixedArity {
            index,
            expected,
            found: batch[index].arity(),
        }),
        None => Ok(expected),
    }
}

/// Splits a uniform batch, preserving record order.
pub(crate) fn detach_labels<L: Clone>(
    batch: &[RawRecord<L>],
) -> Result<Detached<'_, L>, PipelineError> {
    let arity = batch_arity(batch)?;
    let pairs = batch.iter().map(|r| (r.left(), r.right())).collect();

    let labels = match arity {
        Arity::Pair => None,
        Arity::Labeled => Some(batch.iter().filter_map(|r| r.label().cloned()).collect()),
    };

    Ok(Detached { pairs, labels })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_batch() {
        let batch: Vec<RawRecord<i32>> = vec![("a", "b", 1).into(), ("c", "d", 0).into()];
        let detached = detach_labels(&batch).unwrap();
        assert_eq!(detached.pairs, vec![("a", "b"), ("c", "d")]);
        assert_eq!(detached.labels, Some(vec![1, 0]));
    }

    #[test]
    fn unlabeled_batch() {
        let batch: Vec<RawRecord> = vec![("a", "b").into(), ("c", "d").into()];
        let detached = detach_labels(&batch).unwrap();
        assert_eq!(detached.pairs.len(), 2);
        assert!(detached.labels.is_none());
    }

    #[test]
    fn empty_batch_rejected() {
        let batch: Vec<RawRecord> = Vec::new();
        assert_eq!(batch_arity(&batch), Err(PipelineError::EmptyBatch));
    }

    #[test]
    fn mixed_arity_reports_first_offender() {
        let batch: Vec<RawRecord<i32>> = vec![
            ("a", "b", 1).into(),
            ("c", "d", 0).into(),
            RawRecord::pair("e", "f"),
            RawRecord::pair("g", "h"),
        ];
        assert_eq!(
            batch_arity(&batch),
            Err(PipelineError::MixedArity {
                index: 2,
                expected: Arity::Labeled,
                found: Arity::Pair,
            })
        );
        assert!(detach_labels(&batch).is_err());
    }

    #[test]
    fn mixed_arity_starting_unlabeled() {
        let batch: Vec<RawRecord<i32>> = vec![RawRecord::pair("a", "b"), ("c", "d", 1).into()];
        assert!(matches!(
            batch_arity(&batch),
            Err(PipelineError::MixedArity {
                index: 1,
                expected: Arity::Pair,
                found: Arity::Labeled,
            })
        ));
    }
}
