use serde::{Deserialize, Serialize};

/// Note attached to summaries of texts below the word threshold.
pub const SHORT_TEXT_NOTE: &str = "Text too short for summarization";

/// Top-ranked sentiment label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Label from the model's fixed set, e.g. `POSITIVE` or `NEGATIVE`.
    pub label: String,
    /// Probability of `label`, in `[0, 1]`.
    pub confidence: f32,
}

/// One whole-word named entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Surface text with sub-word markers removed.
    pub text: String,
    /// Entity tag: `PER`, `ORG`, `LOC` or `MISC`.
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Highest confidence among the merged fragments.
    pub confidence: f32,
}

/// Entities in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitiesResult {
    /// Merged spans, no deduplication.
    pub entities: Vec<EntitySpan>,
}

/// Score for one candidate category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCategory {
    /// Category as supplied by the caller (trimmed).
    pub category: String,
    /// Normalized probability; scores of one result sum to 1.
    pub score: f32,
}

/// Zero-shot ranking of the caller's categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Always equal to `all_scores[0].category`.
    pub top_category: String,
    /// Every category, highest score first.
    pub all_scores: Vec<ScoredCategory>,
}

/// Generated summary, or the input itself when it was too short.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Summary text.
    pub summary: String,
    /// Whitespace word count of the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_words: Option<usize>,
    /// Whitespace word count of `summary`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_words: Option<usize>,
    /// Set when the model was skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SummaryResult {
    pub(crate) fn too_short(text: &str) -> Self {
        Self {
            summary: text.to_string(),
            original_words: None,
            summary_words: None,
            note: Some(SHORT_TEXT_NOTE.to_string()),
        }
    }

    pub(crate) fn generated(text: &str, summary: String) -> Self {
        Self {
            original_words: Some(word_count(text)),
            summary_words: Some(word_count(&summary)),
            summary,
            note: None,
        }
    }
}

/// All four analyses of one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeResult {
    /// Sentiment of the whole text.
    pub sentiment: SentimentResult,
    /// Merged entity spans.
    pub entities: EntitiesResult,
    /// Zero-shot ranking.
    pub classification: ClassificationResult,
    /// Summary or short-text passthrough.
    pub summary: SummaryResult,
}

/// Number of whitespace-delimited words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entity_type_serializes_as_type() {
        let span = EntitySpan {
            text: "Texas".into(),
            entity_type: "LOC".into(),
            confidence: 0.5,
        };
        assert_eq!(
            serde_json::to_value(&span).unwrap(),
            json!({"text": "Texas", "type": "LOC", "confidence": 0.5})
        );
    }

    #[test]
    fn short_summary_omits_counts() {
        let value = serde_json::to_value(SummaryResult::too_short("Hi there")).unwrap();
        assert_eq!(
            value,
            json!({"summary": "Hi there", "note": "Text too short for summarization"})
        );
    }

    #[test]
    fn generated_summary_counts_words() {
        let result = SummaryResult::generated("one two  three\nfour", "one two".into());
        assert_eq!(result.original_words, Some(4));
        assert_eq!(result.summary_words, Some(2));
        assert_eq!(result.note, None);
    }
}
