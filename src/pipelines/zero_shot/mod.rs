//! Zero-shot text classification pipeline.
//!
//! Classify text into categories you define at runtime, no training required.
//! Each label is scored as the NLI hypothesis "This example is {label}." and a
//! softmax over the entailment logits of all labels gives scores summing to 1.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nlp_hub::zero_shot::ZeroShotClassificationPipelineBuilder;
//!
//! # fn main() -> nlp_hub::error::Result<()> {
//! let pipeline = ZeroShotClassificationPipelineBuilder::modernbert_large().build()?;
//! let labels = &["sports", "politics", "technology", "entertainment"];
//!
//! let output = pipeline.run("The team won the championship game!", labels)?;
//!
//! // sports: 0.87, entertainment: 0.08, politics: 0.03, technology: 0.02
//! for p in &output.predictions {
//!     println!("{}: {:.2}", p.label, p.score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Supported Models
//!
//! | Model | Builder Method |
//! |-------|----------------|
//! | ModernBERT NLI (any `entailment`-labelled checkpoint) | [`ZeroShotClassificationPipelineBuilder::modernbert`] |
//! | ModernBERT-large zeroshot v2.0 | [`ZeroShotClassificationPipelineBuilder::modernbert_large`] |

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::models::ModelSource;
pub use crate::pipelines::stats::PipelineStats;
pub use builder::{ZeroShotClassificationPipelineBuilder, MODERNBERT_LARGE_ZEROSHOT_MODEL};
pub use model::{LabelScores, ZeroShotClassificationModel};
pub use pipeline::{Output, Prediction, ZeroShotClassificationPipeline};

/// Only for generic annotations. Use [`ZeroShotClassificationPipelineBuilder::modernbert`].
pub type ZeroShotModernBert = crate::models::modernbert::ZeroShotModernBertModel;
