use std::sync::Mutex;

use candle_core::{DType, Device, Tensor};
use candle_transformers::models::t5::{Config, T5ForConditionalGeneration};
use serde::Deserialize;
use tokenizers::Tokenizer;

use super::ModelSource;
use crate::error::{text_preview, PipelineError, Result};
use crate::loaders::WeightsLoader;
use crate::pipelines::summarization::model::SummarizationModel;
use crate::pipelines::summarization::params::SummarizationParams;

const DEFAULT_SUMMARIZE_PREFIX: &str = "summarize: ";

#[derive(Debug, Default, Deserialize)]
struct TaskConfig {
    #[serde(default)]
    task_specific_params: Option<TaskSpecificParams>,
}

#[derive(Debug, Deserialize)]
struct TaskSpecificParams {
    summarization: Option<SummarizationTask>,
}

#[derive(Debug, Deserialize)]
struct SummarizationTask {
    prefix: Option<String>,
}

fn summarize_prefix(config_json: &str) -> Result<String> {
    let task: TaskConfig = serde_json::from_str(config_json)?;
    Ok(task
        .task_specific_params
        .and_then(|p| p.summarization)
        .and_then(|s| s.prefix)
        .unwrap_or_else(|| DEFAULT_SUMMARIZE_PREFIX.to_string()))
}

/// T5 encoder-decoder with greedy decoding.
///
/// Decoding mutates the KV cache, so the model sits behind a mutex and
/// concurrent summaries on one pipeline run one at a time.
pub struct SummarizationT5Model {
    model: Mutex<T5ForConditionalGeneration>,
    config: Config,
    device: Device,
    prefix: String,
}

impl SummarizationT5Model {
    pub fn new(source: &ModelSource, device: Device) -> Result<Self> {
        let weights = WeightsLoader::new(&source.model_repo).load(&device)?;
        let config: Config = serde_json::from_str(&weights.config_json)?;
        let prefix = summarize_prefix(&weights.config_json)?;

        let model = T5ForConditionalGeneration::load(weights.vb, &config)?;

        Ok(Self {
            model: Mutex::new(model),
            config,
            device,
            prefix,
        })
    }

    fn decoder_start_token_id(&self) -> u32 {
        self.config
            .decoder_start_token_id
            .unwrap_or(self.config.pad_token_id) as u32
    }
}

impl SummarizationModel for SummarizationT5Model {
    type Options = ModelSource;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        SummarizationT5Model::new(&options, device)
    }

    fn summarize(
        &self,
        tokenizer: &Tokenizer,
        text: &str,
        params: &SummarizationParams,
    ) -> Result<String> {
        let input = format!("{}{}", self.prefix, text);
        let encoding = tokenizer.encode(input, true).map_err(|e| {
            PipelineError::Tokenization(format!(
                "Tokenization failed on '{}': {}",
                text_preview(text),
                e
            ))
        })?;
        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;

        let eos_token_id = self.config.eos_token_id as u32;
        let mut last_token = self.decoder_start_token_id();
        let mut decoder_ids = vec![last_token];
        let mut generated: Vec<u32> = Vec::with_capacity(params.max_length);

        let mut model = self
            .model
            .lock()
            .map_err(|_| PipelineError::Unexpected("T5 model lock poisoned".into()))?;
        model.clear_kv_cache();

        let encoder_output = model.encode(&input_ids)?;

        while generated.len() < params.max_length {
            let step_ids = if generated.is_empty() || !self.config.use_cache {
                Tensor::new(decoder_ids.as_slice(), &self.device)?.unsqueeze(0)?
            } else {
                Tensor::new(&[last_token], &self.device)?.unsqueeze(0)?
            };

            let logits = model.decode(&step_ids, &encoder_output)?.squeeze(0)?;
            let mut logits = logits.to_dtype(DType::F32)?.to_vec1::<f32>()?;

            let next = params
                .next_token(&mut logits, &generated, eos_token_id)
                .ok_or_else(|| {
                    PipelineError::Unexpected("Every token was excluded while decoding".into())
                })?;
            if next == eos_token_id {
                break;
            }

            generated.push(next);
            decoder_ids.push(next);
            last_token = next;
        }

        model.clear_kv_cache();
        drop(model);

        tracing::trace!(tokens = generated.len(), "summary decoded");

        let summary = tokenizer
            .decode(&generated, true)
            .map_err(|e| PipelineError::Tokenization(format!("Failed to decode summary: {e}")))?;
        Ok(summary.trim().to_string())
    }

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer> {
        options.tokenizer_loader().load()
    }

    fn device(&self) -> &Device {
        &self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_read_from_task_params() {
        let config = r#"{
            "task_specific_params": {
                "summarization": {"prefix": "summarise: ", "max_length": 200}
            }
        }"#;
        assert_eq!(summarize_prefix(config).unwrap(), "summarise: ");
    }

    #[test]
    fn prefix_defaults_when_missing() {
        assert_eq!(summarize_prefix("{}").unwrap(), "summarize: ");
        assert_eq!(
            summarize_prefix(r#"{"task_specific_params": {"translation_en_to_de": {}}}"#)
                .unwrap(),
            "summarize: "
        );
    }
}
