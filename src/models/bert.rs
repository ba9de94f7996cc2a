use candle_core::{Device, Tensor, D};
use candle_nn::{linear, ops::softmax, Linear, Module};
use candle_transformers::models::bert::{BertModel, Config};
use serde::Deserialize;
use tokenizers::Tokenizer;

use super::ModelSource;
use crate::error::{text_preview, PipelineError, Result};
use crate::loaders::{LabelConfig, WeightsLoader};
use crate::pipelines::ner::model::{TokenClassificationModel, TokenPrediction};

#[derive(Deserialize)]
struct HeadConfig {
    hidden_size: usize,
}

/// BERT with a per-token `classifier` head (`BertForTokenClassification`).
pub struct NerBertModel {
    model: BertModel,
    classifier: Linear,
    device: Device,
    labels: LabelConfig,
}

impl NerBertModel {
    pub fn new(source: &ModelSource, device: Device) -> Result<Self> {
        let weights = WeightsLoader::new(&source.model_repo).load(&device)?;
        let config: Config = serde_json::from_str(&weights.config_json)?;
        let head: HeadConfig = serde_json::from_str(&weights.config_json)?;
        let labels = LabelConfig::from_config_json(&weights.config_json)?;

        let num_labels = labels.num_labels();
        if num_labels == 0 {
            return Err(PipelineError::Unexpected(format!(
                "'{}' has no id2label mapping; not a token classifier",
                source.model_repo
            )));
        }

        // Falls back to the `bert.` prefix through `model_type` when weights are nested.
        let model = BertModel::load(weights.vb.clone(), &config)?;
        let classifier = linear(head.hidden_size, num_labels, weights.vb.pp("classifier"))?;

        Ok(Self {
            model,
            classifier,
            device,
            labels,
        })
    }
}

impl TokenClassificationModel for NerBertModel {
    type Options = ModelSource;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        NerBertModel::new(&options, device)
    }

    fn predict_tokens(&self, tokenizer: &Tokenizer, text: &str) -> Result<Vec<TokenPrediction>> {
        let encoding = tokenizer.encode(text, true).map_err(|e| {
            PipelineError::Tokenization(format!(
                "Tokenization failed on '{}': {}",
                text_preview(text),
                e
            ))
        })?;

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;
        let attention_mask =
            Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let hidden = self
            .model
            .forward(&input_ids, &token_type_ids, Some(&attention_mask))?;
        let logits = self.classifier.forward(&hidden)?.squeeze(0)?;
        let probs = softmax(&logits, D::Minus1)?.to_vec2::<f32>()?;

        let special = encoding.get_special_tokens_mask();
        let mut predictions = Vec::with_capacity(encoding.len());

        for ((token, row), &is_special) in encoding.get_tokens().iter().zip(&probs).zip(special) {
            if is_special == 1 {
                continue;
            }
            let (label_id, score) = row
                .iter()
                .copied()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(&b.1))
                .ok_or_else(|| PipelineError::Unexpected("Empty logits row".into()))?;

            predictions.push(TokenPrediction {
                token: token.clone(),
                label: self.labels.label(label_id)?.to_string(),
                score,
            });
        }

        Ok(predictions)
    }

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer> {
        options.tokenizer_loader().load()
    }

    fn device(&self) -> &Device {
        &self.device
    }
}
