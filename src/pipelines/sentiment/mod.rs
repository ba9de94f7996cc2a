//! Sentiment analysis pipeline.
//!
//! Classify text as `POSITIVE` or `NEGATIVE` with a confidence score.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nlp_hub::sentiment::SentimentAnalysisPipelineBuilder;
//!
//! # fn main() -> nlp_hub::error::Result<()> {
//! let pipeline = SentimentAnalysisPipelineBuilder::distilbert_sst2().build()?;
//!
//! let output = pipeline.run("I absolutely love this product!")?;
//! println!("sentiment: {} (confidence: {:.2})", output.prediction.label, output.prediction.score);
//! # Ok(())
//! # }
//! ```
//!
//! # Supported Models
//!
//! | Model | Builder Method |
//! |-------|----------------|
//! | DistilBERT (any sequence-classification checkpoint) | [`SentimentAnalysisPipelineBuilder::distilbert`] |
//! | DistilBERT SST-2 | [`SentimentAnalysisPipelineBuilder::distilbert_sst2`] |

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::models::ModelSource;
pub use crate::pipelines::stats::PipelineStats;
pub use builder::{SentimentAnalysisPipelineBuilder, DISTILBERT_SST2_MODEL, DISTILBERT_SST2_TOKENIZER};
pub use model::{LabelScore, SentimentAnalysisModel};
pub use pipeline::{Output, Prediction, SentimentAnalysisPipeline};

/// Only for generic annotations. Use [`SentimentAnalysisPipelineBuilder::distilbert`].
pub type SentimentDistilBert = crate::models::distilbert::SentimentDistilBertModel;
