//! Abstractive summarization pipeline.
//!
//! Condenses a document into a short summary with a T5 encoder-decoder. Decoding is
//! greedy: EOS is held back until `min_length` tokens exist, generation stops at
//! `max_length`, and repeated trigrams are blocked.
//!
//! ```rust,no_run
//! use nlp_hub::summarization::{SummarizationParams, SummarizationPipelineBuilder};
//!
//! # fn main() -> nlp_hub::error::Result<()> {
//! let pipeline = SummarizationPipelineBuilder::t5_base().build()?;
//! let article = "The city council met on Tuesday to debate the new transit plan ...";
//!
//! let output = pipeline.run(article)?;
//! println!("{}", output.summary);
//!
//! let short = SummarizationParams::default().with_max_length(40).with_min_length(10);
//! println!("{}", pipeline.run_with(article, &short)?.summary);
//! # Ok(())
//! # }
//! ```

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod params;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::models::ModelSource;
pub use crate::pipelines::stats::PipelineStats;
pub use builder::{SummarizationPipelineBuilder, T5_BASE_MODEL};
pub use model::SummarizationModel;
pub use params::SummarizationParams;
pub use pipeline::{Output, SummarizationPipeline};

/// Only for generic annotations. Use [`SummarizationPipelineBuilder::t5`].
pub type SummarizationT5 = crate::models::t5::SummarizationT5Model;
