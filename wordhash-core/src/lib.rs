//! Tri-letter word hashing for text-matching models.
//!
//! Converts batches of `(left, right[, label])` text pairs into sparse,
//! vocabulary-indexed letter n-gram counts. A [`Pipeline`] is fitted once on
//! training data and then reused to transform any batch.
//!
//! ```
//! use wordhash_core::{Pipeline, RawRecord};
//!
//! let train: Vec<RawRecord<u8>> = vec![
//!     ("beijing", "Beijing is capital of China", 1).into(),
//!     ("beijing", "China is in east Asia", 0).into(),
//!     ("beijing", "Summer in Beijing is hot.", 1).into(),
//! ];
//!
//! let mut pipeline = Pipeline::new();
//! let train_out = pipeline.fit_transform(&train).unwrap();
//! assert_eq!(train_out.labels(), Some(&[1, 0, 1][..]));
//!
//! let test: Vec<RawRecord> = vec![("beijing", "I visited beijing yesterday.").into()];
//! let test_out = pipeline.transform(&test).unwrap();
//! assert_eq!(test_out.len(), 1);
//! assert!(test_out.labels().is_none());
//! ```

pub mod analyzer;
pub mod pipeline;
pub mod vocab;

pub use pipeline::{Context, OutputBundle, Pipeline, PipelineStats};
pub use vocab::{TermIndex, Vocabulary, VocabularyBuilder};
pub use wordhash_types::{
    Arity, ConfigError, PipelineConfig, PipelineError, PipelineState, RawRecord, StopwordSet,
    TermId, WordHash, OOV_INDEX,
};
