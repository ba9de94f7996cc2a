use crate::error::Result;
use tokenizers::Tokenizer;

/// Top-ranked label and its probability for one text.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScore {
    /// Label from the checkpoint's `id2label`.
    pub label: String,
    /// Softmax probability of `label`.
    pub score: f32,
}

/// A sequence classifier usable by [`SentimentAnalysisPipeline`](super::SentimentAnalysisPipeline).
pub trait SentimentAnalysisModel {
    type Options: std::fmt::Debug + Clone + std::fmt::Display;

    fn new(options: Self::Options, device: candle_core::Device) -> Result<Self>
    where
        Self: Sized;

    /// Predict sentiment and return both label and confidence score.
    fn predict_with_score(&self, tokenizer: &Tokenizer, text: &str) -> Result<LabelScore>;

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer>;

    fn device(&self) -> &candle_core::Device;
}
