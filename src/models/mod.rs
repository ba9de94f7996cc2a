// ============ Model implementations ============

pub(crate) mod bert;
pub(crate) mod distilbert;
pub(crate) mod modernbert;
pub(crate) mod t5;

use std::fmt;

/// Tokens kept per input; longer inputs are truncated by the tokenizer.
pub const DEFAULT_MAX_INPUT_TOKENS: usize = 512;

/// Where a pipeline's weights and tokenizer come from on the HuggingFace Hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSource {
    /// Repository holding `config.json` and the weights.
    pub model_repo: String,
    /// Repository holding `tokenizer.json`.
    pub tokenizer_repo: String,
    /// Truncation limit applied to every encoded input.
    pub max_input_tokens: usize,
}

impl ModelSource {
    /// A source whose tokenizer lives in the same repository as the weights.
    pub fn new(model_repo: impl Into<String>) -> Self {
        let model_repo = model_repo.into();
        Self {
            tokenizer_repo: model_repo.clone(),
            model_repo,
            max_input_tokens: DEFAULT_MAX_INPUT_TOKENS,
        }
    }

    /// Load the tokenizer from a different repository.
    pub fn with_tokenizer(mut self, tokenizer_repo: impl Into<String>) -> Self {
        self.tokenizer_repo = tokenizer_repo.into();
        self
    }

    /// Override the truncation limit.
    pub fn with_max_input_tokens(mut self, max_input_tokens: usize) -> Self {
        self.max_input_tokens = max_input_tokens;
        self
    }

    pub(crate) fn tokenizer_loader(&self) -> crate::loaders::TokenizerLoader {
        crate::loaders::TokenizerLoader::new(&self.tokenizer_repo, self.max_input_tokens)
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.model_repo == self.tokenizer_repo {
            write!(f, "{}", self.model_repo)
        } else {
            write!(f, "{} (tokenizer: {})", self.model_repo, self.tokenizer_repo)
        }
    }
}
