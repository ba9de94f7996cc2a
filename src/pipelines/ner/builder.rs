use super::model::TokenClassificationModel;
use super::pipeline::NerPipeline;
use crate::error::Result;
use crate::models::ModelSource;
use crate::pipelines::utils::{BasePipelineBuilder, DeviceRequest, StandardPipelineBuilder};

crate::pipelines::utils::impl_device_methods!(delegated: NerPipelineBuilder<M: TokenClassificationModel>);

/// Default CoNLL-2003 entity tagger.
pub const BERT_BASE_NER_MODEL: &str = "dslim/bert-base-NER";
/// Tokenizer paired with [`BERT_BASE_NER_MODEL`].
pub const BERT_BASE_NER_TOKENIZER: &str = "google-bert/bert-base-cased";

/// Builder for creating [`NerPipeline`] instances.
///
/// Use [`Self::bert`] or [`Self::bert_base_ner`] as the entry point.
pub struct NerPipelineBuilder<M: TokenClassificationModel>(StandardPipelineBuilder<M::Options>);

impl<M: TokenClassificationModel> NerPipelineBuilder<M> {
    pub(crate) fn new(options: M::Options) -> Self {
        Self(StandardPipelineBuilder::new(options))
    }

    /// Builds the pipeline with configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if model loading or device initialization fails.
    pub fn build(self) -> Result<NerPipeline<M>> {
        BasePipelineBuilder::build(self)
    }
}

impl<M: TokenClassificationModel> BasePipelineBuilder<M> for NerPipelineBuilder<M> {
    type Pipeline = NerPipeline<M>;
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
        Ok(NerPipeline { model, tokenizer })
    }
}

impl NerPipelineBuilder<super::NerBert> {
    /// Creates a builder for a BERT token classifier.
    pub fn bert(source: ModelSource) -> Self {
        Self::new(source)
    }

    /// Creates a builder for `dslim/bert-base-NER` with the cased BERT tokenizer.
    pub fn bert_base_ner() -> Self {
        Self::bert(ModelSource::new(BERT_BASE_NER_MODEL).with_tokenizer(BERT_BASE_NER_TOKENIZER))
    }
}
