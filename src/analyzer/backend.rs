//! Seams between the facade and the inference pipelines.
//!
//! Each trait is implemented by the matching pipeline; tests plug in fakes.

use crate::error::Result;
use crate::pipelines::ner::{NerPipeline, TaggedFragment, TokenClassificationModel};
use crate::pipelines::sentiment::{self, SentimentAnalysisModel, SentimentAnalysisPipeline};
use crate::pipelines::summarization::{
    SummarizationModel, SummarizationParams, SummarizationPipeline,
};
use crate::pipelines::zero_shot::{
    self, ZeroShotClassificationModel, ZeroShotClassificationPipeline,
};

/// Binary sentiment classifier.
pub trait SentimentBackend: Send + Sync {
    /// Top-ranked label and its probability.
    fn predict(&self, text: &str) -> Result<sentiment::Prediction>;
}

/// Token tagger with group aggregation.
pub trait EntityTagger: Send + Sync {
    /// Tagged fragments in document order; may include `##` continuations.
    fn tag(&self, text: &str) -> Result<Vec<TaggedFragment>>;
}

/// NLI-based zero-shot classifier.
pub trait ZeroShotBackend: Send + Sync {
    /// One prediction per label, sorted by descending score.
    fn classify(&self, text: &str, labels: &[&str]) -> Result<Vec<zero_shot::Prediction>>;
}

/// Abstractive summarizer.
pub trait SummaryBackend: Send + Sync {
    /// Summary of `text` within `params`.
    fn summarize(&self, text: &str, params: &SummarizationParams) -> Result<String>;
}

impl<M> SentimentBackend for SentimentAnalysisPipeline<M>
where
    M: SentimentAnalysisModel + Send + Sync,
{
    fn predict(&self, text: &str) -> Result<sentiment::Prediction> {
        Ok(self.run(text)?.prediction)
    }
}

impl<M> EntityTagger for NerPipeline<M>
where
    M: TokenClassificationModel + Send + Sync,
{
    fn tag(&self, text: &str) -> Result<Vec<TaggedFragment>> {
        Ok(self.run(text)?.fragments)
    }
}

impl<M> ZeroShotBackend for ZeroShotClassificationPipeline<M>
where
    M: ZeroShotClassificationModel + Send + Sync,
{
    fn classify(&self, text: &str, labels: &[&str]) -> Result<Vec<zero_shot::Prediction>> {
        Ok(self.run(text, labels)?.predictions)
    }
}

impl<M> SummaryBackend for SummarizationPipeline<M>
where
    M: SummarizationModel + Send + Sync,
{
    fn summarize(&self, text: &str, params: &SummarizationParams) -> Result<String> {
        Ok(self.run_with(text, params)?.summary)
    }
}
