use super::model::ZeroShotClassificationModel;
use super::pipeline::ZeroShotClassificationPipeline;
use crate::error::Result;
use crate::models::ModelSource;
use crate::pipelines::utils::{BasePipelineBuilder, DeviceRequest, StandardPipelineBuilder};

crate::pipelines::utils::impl_device_methods!(delegated: ZeroShotClassificationPipelineBuilder<M: ZeroShotClassificationModel>);

/// Default NLI checkpoint used for zero-shot classification.
pub const MODERNBERT_LARGE_ZEROSHOT_MODEL: &str = "MoritzLaurer/ModernBERT-large-zeroshot-v2.0";

/// Builder for creating [`ZeroShotClassificationPipeline`] instances.
///
/// Use [`Self::modernbert`] or [`Self::modernbert_large`] as the entry point.
pub struct ZeroShotClassificationPipelineBuilder<M: ZeroShotClassificationModel>(
    StandardPipelineBuilder<M::Options>,
);

impl<M: ZeroShotClassificationModel> ZeroShotClassificationPipelineBuilder<M> {
    pub(crate) fn new(options: M::Options) -> Self {
        Self(StandardPipelineBuilder::new(options))
    }

    /// Builds the pipeline with configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if model loading or device initialization fails.
    pub fn build(self) -> Result<ZeroShotClassificationPipeline<M>> {
        BasePipelineBuilder::build(self)
    }
}

impl<M: ZeroShotClassificationModel> BasePipelineBuilder<M>
    for ZeroShotClassificationPipelineBuilder<M>
{
    type Pipeline = ZeroShotClassificationPipeline<M>;
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
        Ok(ZeroShotClassificationPipeline { model, tokenizer })
    }
}

impl ZeroShotClassificationPipelineBuilder<super::ZeroShotModernBert> {
    /// Creates a builder for a ModernBERT NLI classifier.
    pub fn modernbert(source: ModelSource) -> Self {
        Self::new(source)
    }

    /// Creates a builder for `MoritzLaurer/ModernBERT-large-zeroshot-v2.0`.
    pub fn modernbert_large() -> Self {
        Self::modernbert(ModelSource::new(MODERNBERT_LARGE_ZEROSHOT_MODEL))
    }
}
