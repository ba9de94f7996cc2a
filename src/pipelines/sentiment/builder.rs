use super::model::SentimentAnalysisModel;
use super::pipeline::SentimentAnalysisPipeline;
use crate::error::Result;
use crate::models::ModelSource;
use crate::pipelines::utils::{BasePipelineBuilder, DeviceRequest, StandardPipelineBuilder};

crate::pipelines::utils::impl_device_methods!(delegated: SentimentAnalysisPipelineBuilder<M: SentimentAnalysisModel>);

/// Default sentiment checkpoint (binary SST-2 labels).
pub const DISTILBERT_SST2_MODEL: &str = "distilbert/distilbert-base-uncased-finetuned-sst-2-english";
/// Tokenizer paired with [`DISTILBERT_SST2_MODEL`].
pub const DISTILBERT_SST2_TOKENIZER: &str = "distilbert/distilbert-base-uncased";

/// Builder for creating [`SentimentAnalysisPipeline`] instances.
///
/// Use [`Self::distilbert`] or [`Self::distilbert_sst2`] as the entry point.
///
/// # Examples
///
/// ```rust,no_run
/// # use nlp_hub::sentiment::SentimentAnalysisPipelineBuilder;
/// # fn main() -> nlp_hub::error::Result<()> {
/// let pipeline = SentimentAnalysisPipelineBuilder::distilbert_sst2()
///     .cuda(0)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SentimentAnalysisPipelineBuilder<M: SentimentAnalysisModel>(
    StandardPipelineBuilder<M::Options>,
);

impl<M: SentimentAnalysisModel> SentimentAnalysisPipelineBuilder<M> {
    pub(crate) fn new(options: M::Options) -> Self {
        Self(StandardPipelineBuilder::new(options))
    }

    /// Builds the pipeline with configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if model loading or device initialization fails.
    pub fn build(self) -> Result<SentimentAnalysisPipeline<M>> {
        BasePipelineBuilder::build(self)
    }
}

impl<M: SentimentAnalysisModel> BasePipelineBuilder<M> for SentimentAnalysisPipelineBuilder<M> {
    type Pipeline = SentimentAnalysisPipeline<M>;
    type Options = M::Options;

    fn options(&self) -> &Self::Options {
        &self.0.options
    }

    fn device_request(&self) -> &DeviceRequest {
        &self.0.device_request
    }

    fn create_model(options: Self::Options, device: candle_core::Device) -> Result<M> {
        M::new(options, device)
    }

    fn get_tokenizer(options: Self::Options) -> Result<tokenizers::Tokenizer> {
        M::get_tokenizer(options)
    }

    fn construct_pipeline(model: M, tokenizer: tokenizers::Tokenizer) -> Result<Self::Pipeline> {
        Ok(SentimentAnalysisPipeline { model, tokenizer })
    }
}

impl SentimentAnalysisPipelineBuilder<super::SentimentDistilBert> {
    /// Creates a builder for a DistilBERT sequence classifier.
    pub fn distilbert(source: ModelSource) -> Self {
        Self::new(source)
    }

    /// Creates a builder for the SST-2 fine-tuned DistilBERT checkpoint.
    pub fn distilbert_sst2() -> Self {
        Self::distilbert(
            ModelSource::new(DISTILBERT_SST2_MODEL).with_tokenizer(DISTILBERT_SST2_TOKENIZER),
        )
    }
}
