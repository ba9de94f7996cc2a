//! Deterministic stand-ins for the model-backed pipelines.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use nlp_hub::analyzer::{EntityTagger, SentimentBackend, SummaryBackend, ZeroShotBackend};
use nlp_hub::error::{PipelineError, Result};
use nlp_hub::ner::TaggedFragment;
use nlp_hub::summarization::SummarizationParams;
use nlp_hub::{sentiment, zero_shot, Analyzer, AnalyzerOptions};

pub const SCENARIO_TEXT: &str = "Elon Musk announced a new SpaceX mission to Mars in Texas.";

/// `POSITIVE` unless the text mentions "bad".
pub struct KeywordSentiment;

impl SentimentBackend for KeywordSentiment {
    fn predict(&self, text: &str) -> Result<sentiment::Prediction> {
        let label = if text.to_lowercase().contains("bad") {
            "NEGATIVE"
        } else {
            "POSITIVE"
        };
        Ok(sentiment::Prediction {
            label: label.into(),
            score: 0.97,
        })
    }
}

/// Returns the same fragments for every non-empty text and counts calls.
#[derive(Clone, Default)]
pub struct ScriptedTagger {
    pub fragments: Vec<TaggedFragment>,
    pub calls: Arc<AtomicUsize>,
}

impl ScriptedTagger {
    /// What the BERT tagger emits for [`SCENARIO_TEXT`].
    pub fn scenario() -> Self {
        Self {
            fragments: vec![
                TaggedFragment::new("Elon Musk", "PER", 0.998),
                TaggedFragment::new("Space", "ORG", 0.91),
                TaggedFragment::new("##X", "ORG", 0.95),
                TaggedFragment::new("Mars", "LOC", 0.88),
                TaggedFragment::new("Texas", "LOC", 0.999),
            ],
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EntityTagger for ScriptedTagger {
    fn tag(&self, _text: &str) -> Result<Vec<TaggedFragment>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.fragments.clone())
    }
}

/// Favors labels whose name appears in the text; otherwise uniform.
pub struct KeywordZeroShot;

impl ZeroShotBackend for KeywordZeroShot {
    fn classify(&self, text: &str, labels: &[&str]) -> Result<Vec<zero_shot::Prediction>> {
        let text = text.to_lowercase();
        let raw: Vec<f32> = labels
            .iter()
            .map(|l| if text.contains(&l.to_lowercase()) { 4.0 } else { 1.0 })
            .collect();
        let total: f32 = raw.iter().sum();

        let mut predictions: Vec<zero_shot::Prediction> = labels
            .iter()
            .zip(raw)
            .map(|(l, r)| zero_shot::Prediction {
                label: l.to_string(),
                score: r / total,
            })
            .collect();
        predictions.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(predictions)
    }
}

/// Fails every call.
pub struct BrokenZeroShot;

impl ZeroShotBackend for BrokenZeroShot {
    fn classify(&self, _text: &str, _labels: &[&str]) -> Result<Vec<zero_shot::Prediction>> {
        Err(PipelineError::Unexpected("model exploded".into()))
    }
}

/// Keeps the first ten words and counts calls.
#[derive(Clone, Default)]
pub struct LeadSummarizer {
    pub calls: Arc<AtomicUsize>,
}

impl LeadSummarizer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SummaryBackend for LeadSummarizer {
    fn summarize(&self, text: &str, _params: &SummarizationParams) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(text.split_whitespace().take(10).collect::<Vec<_>>().join(" "))
    }
}

pub fn analyzer() -> Analyzer {
    Analyzer::from_backends(
        KeywordSentiment,
        ScriptedTagger::scenario(),
        KeywordZeroShot,
        LeadSummarizer::default(),
        AnalyzerOptions::default(),
    )
}

pub fn broken_analyzer() -> Analyzer {
    Analyzer::from_backends(
        KeywordSentiment,
        ScriptedTagger::scenario(),
        BrokenZeroShot,
        LeadSummarizer::default(),
        AnalyzerOptions::default(),
    )
}

/// `n` distinct whitespace-separated words.
pub fn words(n: usize) -> String {
    (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
}
