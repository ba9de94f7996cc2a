use super::aggregation::{aggregate_simple, TaggedFragment};
use super::model::TokenClassificationModel;
use crate::error::Result;
use crate::pipelines::stats::PipelineStats;
use tokenizers::Tokenizer;

/// Output from `run()`.
#[derive(Debug)]
pub struct Output {
    /// Entity groups in document order.
    pub fragments: Vec<TaggedFragment>,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Tags named entities (persons, organizations, locations, misc).
///
/// Token tags are grouped with the "simple" strategy: adjacent tokens of one type form a
/// group, a `B-` tag always opens a new group, and `O` groups are dropped.
///
/// # Examples
///
/// ```rust,no_run
/// # use nlp_hub::ner::NerPipelineBuilder;
/// # fn main() -> nlp_hub::error::Result<()> {
/// let pipeline = NerPipelineBuilder::bert_base_ner().build()?;
///
/// let output = pipeline.run("Ada Lovelace was born in London.")?;
/// for f in &output.fragments {
///     println!("{} [{}] {:.2}", f.word, f.entity_group, f.score);
/// }
/// # Ok(())
/// # }
/// ```
pub struct NerPipeline<M: TokenClassificationModel> {
    pub(crate) model: M,
    pub(crate) tokenizer: Tokenizer,
}

impl<M: TokenClassificationModel> NerPipeline<M> {
    /// Tag `text` and group token predictions into entity fragments.
    pub fn run(&self, text: &str) -> Result<Output> {
        let stats_builder = PipelineStats::start();

        let tokens = self.model.predict_tokens(&self.tokenizer, text)?;
        let fragments = aggregate_simple(&tokens)?;

        Ok(Output {
            fragments,
            stats: stats_builder.finish(1),
        })
    }

    /// Returns the device (CPU/GPU) the model is running on.
    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}
