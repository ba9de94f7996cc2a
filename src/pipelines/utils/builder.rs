use super::DeviceRequest;
use crate::error::Result;

pub trait BasePipelineBuilder<M>: Sized {
    type Pipeline;

    type Options: Clone + std::fmt::Display;

    fn options(&self) -> &Self::Options;

    fn device_request(&self) -> &DeviceRequest;

    fn create_model(options: Self::Options, device: candle_core::Device) -> Result<M>;

    fn get_tokenizer(options: Self::Options) -> Result<tokenizers::Tokenizer>;

    fn construct_pipeline(model: M, tokenizer: tokenizers::Tokenizer) -> Result<Self::Pipeline>;

    fn build(self) -> Result<Self::Pipeline> {
        let started = std::time::Instant::now();
        let device_request = *self.device_request();
        let device = device_request.resolve()?;

        let model = Self::create_model(self.options().clone(), device)?;
        let tokenizer = Self::get_tokenizer(self.options().clone())?;

        tracing::info!(
            model = %self.options(),
            device = %device_request,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "pipeline loaded"
        );

        Self::construct_pipeline(model, tokenizer)
    }
}

pub struct StandardPipelineBuilder<Opts> {
    pub(crate) options: Opts,
    pub(crate) device_request: DeviceRequest,
}

impl<Opts> StandardPipelineBuilder<Opts> {
    pub fn new(options: Opts) -> Self {
        Self {
            options,
            device_request: DeviceRequest::Cpu,
        }
    }

    pub(crate) fn device_request_mut(&mut self) -> &mut DeviceRequest {
        &mut self.device_request
    }
}
