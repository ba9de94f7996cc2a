use super::model::ZeroShotClassificationModel;
use crate::error::Result;
use crate::pipelines::stats::PipelineStats;
use tokenizers::Tokenizer;

/// A label with confidence score.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Label name.
    pub label: String,
    /// Confidence score (0.0 to 1.0).
    pub score: f32,
}

/// Output from `run()`.
#[derive(Debug)]
pub struct Output {
    /// All labels ranked by confidence, highest first.
    pub predictions: Vec<Prediction>,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Classifies text into arbitrary categories without training.
///
/// Construct with [`ZeroShotClassificationPipelineBuilder`](super::ZeroShotClassificationPipelineBuilder).
///
/// # Examples
///
/// ```rust,no_run
/// # use nlp_hub::zero_shot::ZeroShotClassificationPipelineBuilder;
/// # fn main() -> nlp_hub::error::Result<()> {
/// let pipeline = ZeroShotClassificationPipelineBuilder::modernbert_large().build()?;
/// let labels = &["sports", "politics", "technology"];
///
/// let output = pipeline.run("The team won the championship!", labels)?;
/// println!("{}: {:.2}", output.predictions[0].label, output.predictions[0].score);
/// # Ok(())
/// # }
/// ```
pub struct ZeroShotClassificationPipeline<M: ZeroShotClassificationModel> {
    pub(crate) model: M,
    pub(crate) tokenizer: Tokenizer,
}

impl<M: ZeroShotClassificationModel> ZeroShotClassificationPipeline<M> {
    /// Classify into one label (scores sum to 1.0, sorted descending).
    ///
    /// An empty label list yields no predictions.
    pub fn run(&self, text: &str, candidate_labels: &[&str]) -> Result<Output> {
        let stats_builder = PipelineStats::start();

        let predictions = self
            .model
            .predict(&self.tokenizer, text, candidate_labels)?
            .into_iter()
            .map(|(label, score)| Prediction { label, score })
            .collect();

        Ok(Output {
            predictions,
            stats: stats_builder.finish(candidate_labels.len()),
        })
    }

    /// Returns the device (CPU/GPU) the model is running on.
    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}
