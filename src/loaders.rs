use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use candle_core::{DType, Device};
use candle_nn::VarBuilder;
use hf_hub::api::sync::ApiBuilder;
use hf_hub::{Repo, RepoType};
use serde::Deserialize;
use tokenizers::{Tokenizer, TruncationParams};

use crate::error::{PipelineError, Result};

#[derive(Debug, Clone)]
pub struct HfLoader {
    pub repo: String,
    pub filename: String,
}

impl HfLoader {
    pub fn new(repo: &str, filename: &str) -> Self {
        Self {
            repo: repo.into(),
            filename: filename.into(),
        }
    }

    pub fn load(&self) -> Result<PathBuf> {
        let hf_api = ApiBuilder::new().build().map_err(|e| {
            PipelineError::Download(format!("Failed to initialize HuggingFace API: {e}"))
        })?;
        let hf_repo = hf_api.repo(Repo::new(self.repo.clone(), RepoType::Model));

        let max_retries = 3;
        let mut attempts = 0u32;

        for attempt in 0..max_retries {
            match hf_repo.get(self.filename.as_str()) {
                Ok(path) => return Ok(path),
                Err(e) => {
                    let error_msg = e.to_string();
                    attempts = attempt + 1;
                    // Another process holds the cache lock for this file.
                    if error_msg.contains("Lock acquisition failed") && attempt < max_retries - 1 {
                        let wait_time = Duration::from_millis(100 * (1 << attempt));
                        tracing::debug!(repo = %self.repo, file = %self.filename, ?wait_time, "hub cache locked, retrying");
                        std::thread::sleep(wait_time);
                        continue;
                    }
                    return Err(PipelineError::Download(format!(
                        "Failed to download '{}' from '{}': {}",
                        self.filename, self.repo, error_msg
                    )));
                }
            }
        }

        Err(PipelineError::Download(format!(
            "Download timed out for '{}' from '{}' after {} attempt(s)",
            self.filename, self.repo, attempts
        )))
    }
}

#[derive(Debug, Clone)]
pub struct TokenizerLoader {
    pub tokenizer_file_loader: HfLoader,
    pub max_length: usize,
}

impl TokenizerLoader {
    pub fn new(repo: &str, max_length: usize) -> Self {
        Self {
            tokenizer_file_loader: HfLoader::new(repo, "tokenizer.json"),
            max_length,
        }
    }

    /// Loads the tokenizer with truncation at `max_length` tokens and padding disabled.
    pub fn load(&self) -> Result<Tokenizer> {
        let tokenizer_file_path = self.tokenizer_file_loader.load()?;
        let path_str = tokenizer_file_path.display().to_string();

        let mut tokenizer = Tokenizer::from_file(&tokenizer_file_path).map_err(|e| {
            PipelineError::Tokenization(format!(
                "Failed to load tokenizer from '{path_str}': {e}"
            ))
        })?;

        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: self.max_length,
                ..Default::default()
            }))
            .map_err(|e| {
                PipelineError::Tokenization(format!(
                    "Failed to configure truncation for '{path_str}': {e}"
                ))
            })?;
        tokenizer.with_padding(None);

        Ok(tokenizer)
    }
}

/// Config text plus memory-mapped weights for one model repository.
pub struct LoadedWeights {
    pub config_json: String,
    pub vb: VarBuilder<'static>,
}

#[derive(Debug, Clone)]
pub struct WeightsLoader {
    pub repo: String,
}

impl WeightsLoader {
    pub fn new(repo: &str) -> Self {
        Self { repo: repo.into() }
    }

    pub fn load(&self, device: &Device) -> Result<LoadedWeights> {
        let config_path = HfLoader::new(&self.repo, "config.json").load()?;
        let weights_path = HfLoader::new(&self.repo, "model.safetensors")
            .load()
            .or_else(|_| HfLoader::new(&self.repo, "pytorch_model.bin").load())?;

        let config_json = std::fs::read_to_string(&config_path)?;

        let vb = if weights_path.extension().is_some_and(|e| e == "safetensors") {
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? }
        } else {
            VarBuilder::from_pth(&weights_path, DType::F32, device)?
        };

        Ok(LoadedWeights { config_json, vb })
    }
}

/// Label metadata shared by every classifier `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelConfig {
    #[serde(default)]
    pub id2label: HashMap<String, String>,
    #[serde(default)]
    pub label2id: HashMap<String, u32>,
}

impl LabelConfig {
    pub fn from_config_json(config_json: &str) -> Result<Self> {
        Ok(serde_json::from_str(config_json)?)
    }

    pub fn num_labels(&self) -> usize {
        self.label2id.len().max(self.id2label.len())
    }

    pub fn label(&self, id: usize) -> Result<&str> {
        self.id2label
            .get(&id.to_string())
            .map(String::as_str)
            .ok_or_else(|| {
                let mut available: Vec<&str> = self.id2label.values().map(String::as_str).collect();
                available.sort_unstable();
                PipelineError::Unexpected(format!(
                    "Predicted label ID {id} not in id2label. Available: {}",
                    available.join(", ")
                ))
            })
    }

    /// Index of the `entailment` class of an NLI model, matched case-insensitively.
    pub fn entailment_id(&self) -> Result<usize> {
        self.label2id
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case("entailment"))
            .map(|(_, &id)| id as usize)
            .ok_or_else(|| {
                let mut available: Vec<&str> = self.label2id.keys().map(String::as_str).collect();
                available.sort_unstable();
                PipelineError::Unexpected(format!(
                    "Missing 'entailment' in label2id mapping. Available: {}",
                    available.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NER_CONFIG: &str = r#"{
        "architectures": ["BertForTokenClassification"],
        "hidden_size": 768,
        "id2label": {"0": "O", "1": "B-MISC", "2": "I-MISC", "3": "B-PER", "4": "I-PER"},
        "label2id": {"O": 0, "B-MISC": 1, "I-MISC": 2, "B-PER": 3, "I-PER": 4}
    }"#;

    #[test]
    fn label_lookup_by_id() {
        let labels = LabelConfig::from_config_json(NER_CONFIG).unwrap();
        assert_eq!(labels.num_labels(), 5);
        assert_eq!(labels.label(3).unwrap(), "B-PER");
    }

    #[test]
    fn unknown_label_id_lists_available() {
        let labels = LabelConfig::from_config_json(NER_CONFIG).unwrap();
        let err = labels.label(42).unwrap_err().to_string();
        assert!(err.contains("42"));
        assert!(err.contains("B-PER"));
    }

    #[test]
    fn entailment_id_is_case_insensitive() {
        let labels = LabelConfig::from_config_json(
            r#"{"label2id": {"ENTAILMENT": 0, "NOT_ENTAILMENT": 1}}"#,
        )
        .unwrap();
        assert_eq!(labels.entailment_id().unwrap(), 0);
    }

    #[test]
    fn missing_entailment_is_an_error() {
        let labels = LabelConfig::from_config_json(NER_CONFIG).unwrap();
        assert!(labels.entailment_id().is_err());
    }

    #[test]
    fn missing_label_maps_default_to_empty() {
        let labels = LabelConfig::from_config_json("{}").unwrap();
        assert_eq!(labels.num_labels(), 0);
    }
}
