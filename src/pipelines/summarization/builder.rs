use super::model::SummarizationModel;
use super::params::SummarizationParams;
use super::pipeline::SummarizationPipeline;
use crate::error::Result;
use crate::models::ModelSource;
use crate::pipelines::utils::{BasePipelineBuilder, DeviceRequest, StandardPipelineBuilder};

crate::pipelines::utils::impl_device_methods!(delegated: SummarizationPipelineBuilder<M: SummarizationModel>);

/// Default summarization checkpoint.
pub const T5_BASE_MODEL: &str = "google-t5/t5-base";

/// Builder for creating [`SummarizationPipeline`] instances.
///
/// Use [`Self::t5`] or [`Self::t5_base`] as the entry point.
pub struct SummarizationPipelineBuilder<M: SummarizationModel>(
    StandardPipelineBuilder<M::Options>,
    SummarizationParams,
);

impl<M: SummarizationModel> SummarizationPipelineBuilder<M> {
    pub(crate) fn new(options: M::Options) -> Self {
        Self(
            StandardPipelineBuilder::new(options),
            SummarizationParams::default(),
        )
    }

    /// Cap on generated summary tokens (default 130).
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.1.max_length = max_length;
        self
    }

    /// Minimum summary tokens before EOS is allowed (default 30).
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.1.min_length = min_length;
        self
    }

    /// Replace all decoding limits at once.
    pub fn params(mut self, params: SummarizationParams) -> Self {
        self.1 = params;
        self
    }

    /// Builds the pipeline with configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if model loading or device initialization fails.
    pub fn build(self) -> Result<SummarizationPipeline<M>> {
        let params = self.1.clone();
        let mut pipeline = BasePipelineBuilder::build(self)?;
        pipeline.params = params;
        Ok(pipeline)
    }
}

impl<M: SummarizationModel> BasePipelineBuilder<M> for SummarizationPipelineBuilder<M> {
    type Pipeline = SummarizationPipeline<M>;
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
        Ok(SummarizationPipeline {
            model,
            tokenizer,
            params: SummarizationParams::default(),
        })
    }
}

impl SummarizationPipelineBuilder<super::SummarizationT5> {
    /// Creates a builder for a T5 encoder-decoder checkpoint.
    pub fn t5(source: ModelSource) -> Self {
        Self::new(source)
    }

    /// Creates a builder for `google-t5/t5-base`.
    pub fn t5_base() -> Self {
        Self::t5(ModelSource::new(T5_BASE_MODEL))
    }
}
