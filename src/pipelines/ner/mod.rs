//! Named-entity recognition pipeline.
//!
//! Tags persons, organizations, locations and miscellaneous entities, returning one
//! [`TaggedFragment`] per group of adjacent same-type tokens.
//!
//! ```rust,no_run
//! use nlp_hub::ner::NerPipelineBuilder;
//!
//! # fn main() -> nlp_hub::error::Result<()> {
//! let pipeline = NerPipelineBuilder::bert_base_ner().build()?;
//! let output = pipeline.run("Elon Musk announced a new SpaceX mission to Mars in Texas.")?;
//! println!("{:?}", output.fragments);
//! # Ok(())
//! # }
//! ```

// ============ Internal API ============

pub(crate) mod aggregation;
pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::models::ModelSource;
pub use crate::pipelines::stats::PipelineStats;
pub use aggregation::{aggregate_simple, TaggedFragment, CONTINUATION_MARKER};
pub use builder::{NerPipelineBuilder, BERT_BASE_NER_MODEL, BERT_BASE_NER_TOKENIZER};
pub use model::{TokenClassificationModel, TokenPrediction};
pub use pipeline::{NerPipeline, Output};

/// Only for generic annotations. Use [`NerPipelineBuilder::bert`].
pub type NerBert = crate::models::bert::NerBertModel;
