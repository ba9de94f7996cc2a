//! Facade over the four pipelines.
//!
//! [`Analyzer`] owns one pipeline per task, validates inputs, and shapes raw
//! pipeline output into the serializable result types of this module.
//!
//! ```rust,no_run
//! use nlp_hub::Analyzer;
//!
//! # fn main() -> Result<(), nlp_hub::AnalyzerError> {
//! let analyzer = Analyzer::builder().cuda(0).build()?;
//!
//! let sentiment = analyzer.analyze_sentiment("What a wonderful launch!")?;
//! let entities = analyzer.extract_entities("Ada Lovelace lived in London.")?;
//! let topics = analyzer.classify_zero_shot("The striker scored twice.", &["sports", "finance"])?;
//!
//! println!("{} {:?} {}", sentiment.label, entities.entities, topics.top_category);
//! # Ok(())
//! # }
//! ```

mod backend;
mod merge;
mod options;
mod types;

use std::time::Instant;

use thiserror::Error;

use crate::error::PipelineError;
use crate::pipelines::ner::NerPipelineBuilder;
use crate::pipelines::sentiment::SentimentAnalysisPipelineBuilder;
use crate::pipelines::summarization::{SummarizationParams, SummarizationPipelineBuilder};
use crate::pipelines::utils::DeviceRequest;
use crate::pipelines::zero_shot::ZeroShotClassificationPipelineBuilder;

pub use backend::{EntityTagger, SentimentBackend, SummaryBackend, ZeroShotBackend};
pub use merge::merge_subtokens;
pub use options::{AnalyzerOptions, ModelChoices, DEFAULT_CATEGORIES};
pub use types::{
    word_count, ClassificationResult, CompositeResult, EntitiesResult, EntitySpan,
    ScoredCategory, SentimentResult, SummaryResult, SHORT_TEXT_NOTE,
};

/// Errors returned by the [`Analyzer`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalyzerError {
    /// The caller's input cannot be analyzed.
    #[error("{0}")]
    InvalidInput(String),

    /// Model loading or inference failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl AnalyzerError {
    fn invalid(msg: &str) -> Self {
        AnalyzerError::InvalidInput(msg.to_string())
    }
}

/// Owns the loaded pipelines. Share it as `Arc<Analyzer>`.
pub struct Analyzer {
    sentiment: Box<dyn SentimentBackend>,
    tagger: Box<dyn EntityTagger>,
    zero_shot: Box<dyn ZeroShotBackend>,
    summarizer: Box<dyn SummaryBackend>,
    options: AnalyzerOptions,
}

impl Analyzer {
    /// Load the default models on the CPU.
    ///
    /// Blocks while weights download on first use. Any failure is fatal.
    pub fn load() -> Result<Self, AnalyzerError> {
        AnalyzerBuilder::default().build()
    }

    /// Start configuring device, models and options.
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    /// Assemble an analyzer from already constructed pipelines.
    pub fn from_backends(
        sentiment: impl SentimentBackend + 'static,
        tagger: impl EntityTagger + 'static,
        zero_shot: impl ZeroShotBackend + 'static,
        summarizer: impl SummaryBackend + 'static,
        options: AnalyzerOptions,
    ) -> Self {
        Self {
            sentiment: Box::new(sentiment),
            tagger: Box::new(tagger),
            zero_shot: Box::new(zero_shot),
            summarizer: Box::new(summarizer),
            options,
        }
    }

    /// Options this analyzer was built with.
    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Classify the sentiment of `text`.
    ///
    /// # Errors
    ///
    /// [`AnalyzerError::InvalidInput`] for empty or whitespace-only text.
    pub fn analyze_sentiment(&self, text: &str) -> Result<SentimentResult, AnalyzerError> {
        require_text(text)?;

        let started = Instant::now();
        let prediction = self.sentiment.predict(text)?;
        tracing::debug!(
            task = "sentiment",
            label = %prediction.label,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "inference finished"
        );

        Ok(SentimentResult {
            label: prediction.label,
            confidence: prediction.score,
        })
    }

    /// Tag named entities and merge sub-word fragments into whole words.
    ///
    /// Empty text yields no entities without running the tagger.
    pub fn extract_entities(&self, text: &str) -> Result<EntitiesResult, AnalyzerError> {
        if text.trim().is_empty() {
            return Ok(EntitiesResult::default());
        }

        let started = Instant::now();
        let fragments = self.tagger.tag(text)?;
        let entities = merge_subtokens(&fragments);
        tracing::debug!(
            task = "entities",
            fragments = fragments.len(),
            entities = entities.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "inference finished"
        );

        Ok(EntitiesResult { entities })
    }

    /// Rank `categories` by how well they describe `text`.
    ///
    /// Categories are trimmed and blank entries dropped. Scores keep the
    /// pipeline's descending order.
    ///
    /// # Errors
    ///
    /// [`AnalyzerError::InvalidInput`] when no category remains.
    pub fn classify_zero_shot<S: AsRef<str>>(
        &self,
        text: &str,
        categories: &[S],
    ) -> Result<ClassificationResult, AnalyzerError> {
        let categories = clean_categories(categories)?;
        self.classify_clean(text, &categories)
    }

    fn classify_clean(
        &self,
        text: &str,
        categories: &[&str],
    ) -> Result<ClassificationResult, AnalyzerError> {
        let started = Instant::now();
        let predictions = self.zero_shot.classify(text, categories)?;

        let top_category = predictions
            .first()
            .map(|p| p.label.clone())
            .ok_or_else(|| PipelineError::Unexpected("Zero-shot pipeline returned no scores".into()))?;
        tracing::debug!(
            task = "zero_shot",
            categories = categories.len(),
            top = %top_category,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "inference finished"
        );

        Ok(ClassificationResult {
            top_category,
            all_scores: predictions
                .into_iter()
                .map(|p| ScoredCategory {
                    category: p.label,
                    score: p.score,
                })
                .collect(),
        })
    }

    /// Summarize `text` with the configured length bounds.
    ///
    /// Texts under `min_summary_words` words come back unchanged with a note.
    pub fn summarize(&self, text: &str) -> Result<SummaryResult, AnalyzerError> {
        self.summarize_with_max_length(text, self.options.summary_max_length)
    }

    /// Like [`Self::summarize`] with a one-off token cap.
    pub fn summarize_with_max_length(
        &self,
        text: &str,
        max_length: usize,
    ) -> Result<SummaryResult, AnalyzerError> {
        if word_count(text) < self.options.min_summary_words {
            return Ok(SummaryResult::too_short(text));
        }

        let params = SummarizationParams::default()
            .with_max_length(max_length)
            .with_min_length(self.options.summary_min_length.min(max_length));

        let started = Instant::now();
        let summary = self.summarizer.summarize(text, &params)?;
        tracing::debug!(
            task = "summary",
            max_length,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "inference finished"
        );

        Ok(SummaryResult::generated(text, summary))
    }

    /// Run all four analyses on one text. Any failure fails the whole call.
    ///
    /// # Errors
    ///
    /// [`AnalyzerError::InvalidInput`] for empty text or no usable category.
    pub fn analyze_all<S: AsRef<str>>(
        &self,
        text: &str,
        categories: &[S],
    ) -> Result<CompositeResult, AnalyzerError> {
        require_text(text)?;
        let categories = clean_categories(categories)?;

        Ok(CompositeResult {
            sentiment: self.analyze_sentiment(text)?,
            entities: self.extract_entities(text)?,
            classification: self.classify_clean(text, &categories)?,
            summary: self.summarize(text)?,
        })
    }
}

fn require_text(text: &str) -> Result<(), AnalyzerError> {
    if text.trim().is_empty() {
        return Err(AnalyzerError::invalid("Text must not be empty"));
    }
    Ok(())
}

fn clean_categories<S: AsRef<str>>(categories: &[S]) -> Result<Vec<&str>, AnalyzerError> {
    let cleaned: Vec<&str> = categories
        .iter()
        .map(|c| c.as_ref().trim())
        .filter(|c| !c.is_empty())
        .collect();
    if cleaned.is_empty() {
        return Err(AnalyzerError::invalid("At least one category is required"));
    }
    Ok(cleaned)
}

/// Configures and loads an [`Analyzer`].
#[derive(Debug, Clone, Default)]
pub struct AnalyzerBuilder {
    device: DeviceRequest,
    models: ModelChoices,
    options: AnalyzerOptions,
}

impl AnalyzerBuilder {
    /// Use CPU for inference (default).
    pub fn cpu(mut self) -> Self {
        self.device = DeviceRequest::Cpu;
        self
    }

    /// Use a specific CUDA GPU for inference.
    pub fn cuda(mut self, index: usize) -> Self {
        self.device = DeviceRequest::Cuda(index);
        self
    }

    /// Use an already chosen device.
    pub fn device(mut self, device: DeviceRequest) -> Self {
        self.device = device;
        self
    }

    /// Override the Hub checkpoints.
    pub fn models(mut self, models: ModelChoices) -> Self {
        self.models = models;
        self
    }

    /// Override thresholds and limits.
    pub fn options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    /// Load all four pipelines eagerly.
    ///
    /// # Errors
    ///
    /// The first download, tokenizer, weight or device failure.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let started = Instant::now();
        let models = self.models.with_max_input_tokens(self.options.max_input_tokens);
        tracing::info!(device = %self.device, "loading pipelines");

        let sentiment = SentimentAnalysisPipelineBuilder::distilbert(models.sentiment)
            .device(self.device)
            .build()?;
        let tagger = NerPipelineBuilder::bert(models.ner)
            .device(self.device)
            .build()?;
        let zero_shot = ZeroShotClassificationPipelineBuilder::modernbert(models.zero_shot)
            .device(self.device)
            .build()?;
        let summarizer = SummarizationPipelineBuilder::t5(models.summarization)
            .device(self.device)
            .build()?;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "all pipelines loaded"
        );

        Ok(Analyzer::from_backends(
            sentiment,
            tagger,
            zero_shot,
            summarizer,
            self.options,
        ))
    }
}
