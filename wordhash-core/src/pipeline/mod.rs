//! Fit/transform pipeline over batches of text pairs.
//!
//! Data flow:
//! - Label detachment splits `(left, right[, label])` records into text pairs
//!   and an optional labels column
//! - Each side runs independently through the stateless chain
//!   (tokenize → lowercase → punctuation → stopwords → n-gram)
//! - `fit` indexes every resulting tri-letter into a [`Context`]
//! - `transform` appends word hashing to the chain and assembles an
//!   [`OutputBundle`] carrying the context
//!
//! States: unfitted until the first successful `fit`, fitted afterwards. A
//! re-fit replaces the context; `transform` never modifies it.

mod api;
mod bundle;
mod detach;
mod stats;
mod types;

pub use bundle::OutputBundle;
pub use stats::PipelineStats;
pub use types::{Context, Pipeline};
