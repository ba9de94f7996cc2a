use candle_core::{DType, Device, IndexOp, Tensor, D};
use candle_nn::{linear, ops::softmax, Linear, Module};
use candle_transformers::models::distilbert::{Config, DistilBertModel};
use serde::Deserialize;
use tokenizers::Tokenizer;

use super::ModelSource;
use crate::error::{text_preview, PipelineError, Result};
use crate::loaders::{LabelConfig, WeightsLoader};
use crate::pipelines::sentiment::model::{LabelScore, SentimentAnalysisModel};

#[derive(Deserialize)]
struct HeadConfig {
    dim: usize,
}

/// DistilBERT with the `pre_classifier` / `classifier` sequence-classification head.
pub struct SentimentDistilBertModel {
    model: DistilBertModel,
    pre_classifier: Linear,
    classifier: Linear,
    device: Device,
    labels: LabelConfig,
}

impl SentimentDistilBertModel {
    pub fn new(source: &ModelSource, device: Device) -> Result<Self> {
        let weights = WeightsLoader::new(&source.model_repo).load(&device)?;
        let config: Config = serde_json::from_str(&weights.config_json)?;
        let head: HeadConfig = serde_json::from_str(&weights.config_json)?;
        let labels = LabelConfig::from_config_json(&weights.config_json)?;

        let num_labels = labels.num_labels();
        if num_labels == 0 {
            return Err(PipelineError::Unexpected(format!(
                "'{}' has no id2label mapping; not a sequence classifier",
                source.model_repo
            )));
        }

        let model = DistilBertModel::load(weights.vb.pp("distilbert"), &config)?;
        let pre_classifier = linear(head.dim, head.dim, weights.vb.pp("pre_classifier"))?;
        let classifier = linear(head.dim, num_labels, weights.vb.pp("classifier"))?;

        Ok(Self {
            model,
            pre_classifier,
            classifier,
            device,
            labels,
        })
    }

    fn logits(&self, tokenizer: &Tokenizer, text: &str) -> Result<Tensor> {
        let encoding = tokenizer.encode(text, true).map_err(|e| {
            PipelineError::Tokenization(format!(
                "Tokenization failed on '{}': {}",
                text_preview(text),
                e
            ))
        })?;

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        // 1 marks a masked position; a single unpadded sequence masks nothing.
        let mask = Tensor::zeros((1, encoding.len()), DType::U8, &self.device)?;

        let hidden = self.model.forward(&input_ids, &mask)?;
        let cls = hidden.i((.., 0))?;
        let pooled = self.pre_classifier.forward(&cls)?.relu()?;
        Ok(self.classifier.forward(&pooled)?)
    }
}

impl SentimentAnalysisModel for SentimentDistilBertModel {
    type Options = ModelSource;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        SentimentDistilBertModel::new(&options, device)
    }

    fn predict_with_score(&self, tokenizer: &Tokenizer, text: &str) -> Result<LabelScore> {
        let logits = self.logits(tokenizer, text)?;
        let probs = softmax(&logits, D::Minus1)?.squeeze(0)?.to_vec1::<f32>()?;
        let pred_id = logits.argmax(D::Minus1)?.squeeze(0)?.to_scalar::<u32>()? as usize;
        let score = probs.get(pred_id).copied().unwrap_or(0.0);

        Ok(LabelScore {
            label: self.labels.label(pred_id)?.to_string(),
            score,
        })
    }

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer> {
        options.tokenizer_loader().load()
    }

    fn device(&self) -> &Device {
        &self.device
    }
}
