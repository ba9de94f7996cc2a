use super::model::SummarizationModel;
use super::params::SummarizationParams;
use crate::error::Result;
use crate::pipelines::stats::PipelineStats;
use tokenizers::Tokenizer;

/// Output from `run()`.
#[derive(Debug)]
pub struct Output {
    /// Generated summary text.
    pub summary: String,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Abstractive summarization with greedy decoding.
///
/// Construct with [`SummarizationPipelineBuilder`](super::SummarizationPipelineBuilder).
///
/// # Examples
///
/// ```rust,no_run
/// # use nlp_hub::summarization::SummarizationPipelineBuilder;
/// # fn main() -> nlp_hub::error::Result<()> {
/// let pipeline = SummarizationPipelineBuilder::t5_base().max_length(60).build()?;
///
/// let output = pipeline.run("A long news article ...")?;
/// println!("{}", output.summary);
/// # Ok(())
/// # }
/// ```
pub struct SummarizationPipeline<M: SummarizationModel> {
    pub(crate) model: M,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) params: SummarizationParams,
}

impl<M: SummarizationModel> SummarizationPipeline<M> {
    /// Summarize with the pipeline's configured limits.
    pub fn run(&self, text: &str) -> Result<Output> {
        self.run_with(text, &self.params)
    }

    /// Summarize with one-off limits.
    pub fn run_with(&self, text: &str, params: &SummarizationParams) -> Result<Output> {
        let stats_builder = PipelineStats::start();

        let summary = self.model.summarize(&self.tokenizer, text, params)?;

        Ok(Output {
            summary,
            stats: stats_builder.finish(1),
        })
    }

    /// Limits used by [`Self::run`].
    pub fn params(&self) -> &SummarizationParams {
        &self.params
    }

    /// Returns the device (CPU/GPU) the model is running on.
    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}
