//! ModernBERT NLI cross-encoder used for zero-shot classification.

use std::collections::HashMap;

use candle_core::{Device, Tensor};
use candle_transformers::models::modernbert::{
    ClassifierConfig, ClassifierPooling, Config,
    ModernBertForSequenceClassification as CandleModernBertForSequenceClassification,
};
use tokenizers::Tokenizer;

use super::ModelSource;
use crate::error::{text_preview, PipelineError, Result};
use crate::loaders::{LabelConfig, WeightsLoader};
use crate::pipelines::zero_shot::model::{
    rank_by_entailment, LabelScores, ZeroShotClassificationModel,
};

const HYPOTHESIS_TEMPLATE: &str = "This example is {}.";

pub(crate) fn hypothesis(label: &str) -> String {
    HYPOTHESIS_TEMPLATE.replace("{}", label)
}

/// Zero-shot classification model using ModernBERT.
pub struct ZeroShotModernBertModel {
    model: CandleModernBertForSequenceClassification,
    device: Device,
    entailment_id: usize,
}

impl ZeroShotModernBertModel {
    pub fn new(source: &ModelSource, device: Device) -> Result<Self> {
        let weights = WeightsLoader::new(&source.model_repo).load(&device)?;
        let mut config: Config = serde_json::from_str(&weights.config_json)?;
        let labels = LabelConfig::from_config_json(&weights.config_json)?;

        let entailment_id = labels.entailment_id()?;
        patch_config_num_labels(&mut config, labels.num_labels());

        let model = CandleModernBertForSequenceClassification::load(weights.vb, &config)?;

        Ok(Self {
            model,
            device,
            entailment_id,
        })
    }

    /// NLI logits of each `(text, hypothesis)` pair, one row per candidate.
    fn pair_logits(
        &self,
        tokenizer: &Tokenizer,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<Tensor> {
        let mut encodings = Vec::with_capacity(candidate_labels.len());
        for &label in candidate_labels {
            let hypothesis = hypothesis(label);
            let encoding = tokenizer
                .encode((text, hypothesis.as_str()), true)
                .map_err(|e| {
                    PipelineError::Tokenization(format!(
                        "Tokenization failed on '{}' with label '{label}': {e}",
                        text_preview(text)
                    ))
                })?;
            encodings.push(encoding);
        }

        let max_len = encodings.iter().map(|e| e.len()).max().unwrap_or(0);
        let pad_token_id = tokenizer
            .token_to_id("[PAD]")
            .or_else(|| tokenizer.token_to_id("<pad>"))
            .unwrap_or(0);

        let mut all_token_ids: Vec<u32> = Vec::with_capacity(encodings.len() * max_len);
        let mut all_attention_masks: Vec<u32> = Vec::with_capacity(encodings.len() * max_len);

        for encoding in encodings {
            let mut token_ids = encoding.get_ids().to_vec();
            let mut attention_mask = encoding.get_attention_mask().to_vec();
            token_ids.resize(max_len, pad_token_id);
            attention_mask.resize(max_len, 0);
            all_token_ids.extend(token_ids);
            all_attention_masks.extend(attention_mask);
        }

        let shape = (candidate_labels.len(), max_len);
        let input_ids = Tensor::from_vec(all_token_ids, shape, &self.device)?;
        let attention_mask = Tensor::from_vec(all_attention_masks, shape, &self.device)?;

        Ok(self.model.forward(&input_ids, &attention_mask)?)
    }
}

impl ZeroShotClassificationModel for ZeroShotModernBertModel {
    type Options = ModelSource;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        ZeroShotModernBertModel::new(&options, device)
    }

    fn predict(
        &self,
        tokenizer: &Tokenizer,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<LabelScores> {
        if candidate_labels.is_empty() {
            return Ok(vec![]);
        }
        let logits = self.pair_logits(tokenizer, text, candidate_labels)?;
        rank_by_entailment(candidate_labels, &logits, self.entailment_id)
    }

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer> {
        options.tokenizer_loader().load()
    }

    fn device(&self) -> &Device {
        &self.device
    }
}

/// Candle sizes the classifier head from `classifier_config`, which NLI
/// checkpoints ship without.
fn patch_config_num_labels(config: &mut Config, num_labels: usize) {
    let current = config
        .classifier_config
        .as_ref()
        .map(|c| c.id2label.len())
        .unwrap_or(0);
    if current == num_labels {
        return;
    }

    let id2label: HashMap<String, String> = (0..num_labels)
        .map(|i| (i.to_string(), format!("label_{i}")))
        .collect();
    let label2id = id2label
        .iter()
        .map(|(k, v)| (v.clone(), k.clone()))
        .collect();

    config.classifier_config = Some(ClassifierConfig {
        id2label,
        label2id,
        classifier_pooling: ClassifierPooling::default(),
    });
}
