//! Local NLP inference for sentiment, named entities, zero-shot topics and summaries.
//!
//! Powered by [Candle](https://github.com/huggingface/candle), with pipelines shaped like
//! Python's [Transformers](https://huggingface.co/docs/transformers) `pipeline()` API.
//! The [`Analyzer`] facade bundles the four pipelines behind input validation and
//! serializable results; [`server`] exposes it over HTTP with a small demo page.
//!
//! ```rust,no_run
//! use nlp_hub::Analyzer;
//!
//! # fn main() -> Result<(), nlp_hub::AnalyzerError> {
//! let analyzer = Analyzer::load()?;
//! let report = analyzer.analyze_all(
//!     "Elon Musk announced a new SpaceX mission to Mars in Texas.",
//!     &["technology", "business", "sports", "politics"],
//! )?;
//! println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// ============ Internal API ============

pub(crate) mod loaders;
pub(crate) mod models;
pub(crate) mod pipelines;

// ============ Public API ============

pub mod analyzer;
pub mod cli;
pub mod demo;
pub mod error;
pub mod server;

pub use analyzer::{
    Analyzer, AnalyzerBuilder, AnalyzerError, AnalyzerOptions, ClassificationResult,
    CompositeResult, EntitiesResult, EntitySpan, ModelChoices, ScoredCategory, SentimentResult,
    SummaryResult,
};
pub use models::ModelSource;
pub use pipelines::utils::DeviceRequest;
pub use pipelines::{ner, sentiment, summarization, zero_shot};
