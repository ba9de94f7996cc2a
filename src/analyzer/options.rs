use crate::models::{ModelSource, DEFAULT_MAX_INPUT_TOKENS};
use crate::pipelines::ner::{BERT_BASE_NER_MODEL, BERT_BASE_NER_TOKENIZER};
use crate::pipelines::sentiment::{DISTILBERT_SST2_MODEL, DISTILBERT_SST2_TOKENIZER};
use crate::pipelines::summarization::T5_BASE_MODEL;
use crate::pipelines::zero_shot::MODERNBERT_LARGE_ZEROSHOT_MODEL;

/// Categories used when a caller supplies none.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["finance", "sports", "politics", "technology"];

/// Thresholds and limits applied by the [`Analyzer`](super::Analyzer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Inputs with fewer words are returned verbatim instead of summarized.
    pub min_summary_words: usize,
    /// Cap on generated summary tokens.
    pub summary_max_length: usize,
    /// Minimum generated summary tokens.
    pub summary_min_length: usize,
    /// Tokenizer truncation limit for every pipeline.
    pub max_input_tokens: usize,
    /// Fallback category list for HTTP requests without `categories`.
    pub default_categories: Vec<String>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            min_summary_words: 50,
            summary_max_length: 130,
            summary_min_length: 30,
            max_input_tokens: DEFAULT_MAX_INPUT_TOKENS,
            default_categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl AnalyzerOptions {
    /// Word threshold below which summarization is skipped.
    pub fn with_min_summary_words(mut self, words: usize) -> Self {
        self.min_summary_words = words;
        self
    }

    /// Set both summary length bounds, in tokens.
    pub fn with_summary_lengths(mut self, min_length: usize, max_length: usize) -> Self {
        self.summary_min_length = min_length;
        self.summary_max_length = max_length;
        self
    }

    /// Tokenizer truncation limit.
    pub fn with_max_input_tokens(mut self, tokens: usize) -> Self {
        self.max_input_tokens = tokens;
        self
    }

    /// Replace the fallback category list.
    pub fn with_default_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_categories = categories.into_iter().map(Into::into).collect();
        self
    }
}

/// Hub checkpoints for each task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelChoices {
    /// DistilBERT sequence classifier.
    pub sentiment: ModelSource,
    /// BERT token classifier.
    pub ner: ModelSource,
    /// ModernBERT NLI classifier.
    pub zero_shot: ModelSource,
    /// T5 encoder-decoder.
    pub summarization: ModelSource,
}

impl Default for ModelChoices {
    fn default() -> Self {
        Self {
            sentiment: ModelSource::new(DISTILBERT_SST2_MODEL)
                .with_tokenizer(DISTILBERT_SST2_TOKENIZER),
            ner: ModelSource::new(BERT_BASE_NER_MODEL).with_tokenizer(BERT_BASE_NER_TOKENIZER),
            zero_shot: ModelSource::new(MODERNBERT_LARGE_ZEROSHOT_MODEL),
            summarization: ModelSource::new(T5_BASE_MODEL),
        }
    }
}

impl ModelChoices {
    pub(crate) fn with_max_input_tokens(self, tokens: usize) -> Self {
        Self {
            sentiment: self.sentiment.with_max_input_tokens(tokens),
            ner: self.ner.with_max_input_tokens(tokens),
            zero_shot: self.zero_shot.with_max_input_tokens(tokens),
            summarization: self.summarization.with_max_input_tokens(tokens),
        }
    }
}
