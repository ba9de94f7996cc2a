use crate::error::Result;
use tokenizers::Tokenizer;

/// Argmax label for one non-special token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPrediction {
    /// Token surface form as produced by the tokenizer (`##` kept on sub-words).
    pub token: String,
    /// Predicted tag, e.g. `B-PER`, `I-LOC` or `O`.
    pub label: String,
    /// Softmax probability of `label`.
    pub score: f32,
}

/// A token classifier usable by [`NerPipeline`](super::NerPipeline).
pub trait TokenClassificationModel {
    type Options: std::fmt::Debug + Clone + std::fmt::Display;

    fn new(options: Self::Options, device: candle_core::Device) -> Result<Self>
    where
        Self: Sized;

    /// Tag every non-special token of `text`, in document order.
    fn predict_tokens(&self, tokenizer: &Tokenizer, text: &str) -> Result<Vec<TokenPrediction>>;

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer>;

    fn device(&self) -> &candle_core::Device;
}
