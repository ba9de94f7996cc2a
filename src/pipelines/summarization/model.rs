use super::params::SummarizationParams;
use crate::error::Result;
use tokenizers::Tokenizer;

/// A sequence-to-sequence model usable by [`SummarizationPipeline`](super::SummarizationPipeline).
pub trait SummarizationModel {
    type Options: std::fmt::Debug + Clone + std::fmt::Display;

    fn new(options: Self::Options, device: candle_core::Device) -> Result<Self>
    where
        Self: Sized;

    /// Generate an abstractive summary of `text` within the limits of `params`.
    fn summarize(
        &self,
        tokenizer: &Tokenizer,
        text: &str,
        params: &SummarizationParams,
    ) -> Result<String>;

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer>;

    fn device(&self) -> &candle_core::Device;
}
