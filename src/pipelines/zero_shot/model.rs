use crate::error::Result;
use candle_core::{IndexOp, Tensor, D};
use candle_nn::ops::softmax;
use tokenizers::Tokenizer;

/// `(label, score)` pairs sorted by descending score.
pub type LabelScores = Vec<(String, f32)>;

/// An NLI cross-encoder usable by [`ZeroShotClassificationPipeline`](super::ZeroShotClassificationPipeline).
pub trait ZeroShotClassificationModel {
    type Options: std::fmt::Debug + Clone + std::fmt::Display;

    fn new(options: Self::Options, device: candle_core::Device) -> Result<Self>
    where
        Self: Sized;

    /// Score every candidate label; probabilities sum to 1 and are sorted descending.
    fn predict(
        &self,
        tokenizer: &Tokenizer,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<LabelScores>;

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer>;

    fn device(&self) -> &candle_core::Device;
}

/// Softmax of each pair's entailment logit across all candidates, sorted descending.
///
/// `logits` is `(candidates, classes)`. Ties keep the candidate order.
pub(crate) fn rank_by_entailment(
    candidate_labels: &[&str],
    logits: &Tensor,
    entailment_id: usize,
) -> Result<LabelScores> {
    let entailment = logits.i((.., entailment_id))?;
    let probs = softmax(&entailment, D::Minus1)?.to_vec1::<f32>()?;

    let mut scores: LabelScores = candidate_labels
        .iter()
        .map(|&l| l.to_string())
        .zip(probs)
        .collect();
    scores.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(scores)
}
