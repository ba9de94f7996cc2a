//! Markdown panels for the interactive demo page.
//!
//! Each `*_panel` drives one [`Analyzer`] method and renders its result as
//! Markdown. Blank inputs get a friendly prompt instead of an error.

use crate::analyzer::{
    Analyzer, AnalyzerError, ClassificationResult, EntitiesResult, SentimentResult, SummaryResult,
};
use crate::analyzer::{word_count, DEFAULT_CATEGORIES};

/// Shown when a panel is submitted without text.
pub const EMPTY_TEXT_PROMPT: &str = "Enter some text first";
/// Shown when the category field is blank.
pub const EMPTY_CATEGORIES_PROMPT: &str = "Enter at least one category";
/// Shown when no entity survives merging.
pub const NO_ENTITIES: &str = "No entities found";

const BAR_WIDTH: f32 = 20.0;
const BAR_CHAR: &str = "█";

/// Initial value of the category field.
pub fn default_categories_field() -> String {
    DEFAULT_CATEGORIES.join(", ")
}

/// Split a comma-separated field into trimmed, non-empty categories.
pub fn parse_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// `floor(score * 20)` block characters.
pub fn score_bar(score: f32) -> String {
    let len = (score.clamp(0.0, 1.0) * BAR_WIDTH).floor() as usize;
    BAR_CHAR.repeat(len)
}

/// Label in bold followed by the raw confidence.
pub fn render_sentiment(result: &SentimentResult) -> String {
    format!("**{}** (confidence: {})", result.label, result.confidence)
}

/// One bullet per entity, or [`NO_ENTITIES`].
pub fn render_entities(result: &EntitiesResult) -> String {
    if result.entities.is_empty() {
        return NO_ENTITIES.to_string();
    }
    result
        .entities
        .iter()
        .map(|e| format!("- **{}** [{}]", e.text, e.entity_type))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Winner line, then one score bar per category.
pub fn render_classification(result: &ClassificationResult) -> String {
    let mut lines = vec![format!("**Winner: {}**\n", result.top_category)];
    lines.extend(result.all_scores.iter().map(|s| {
        format!("{}: {} {}", s.category, score_bar(s.score), s.score)
    }));
    lines.join("\n")
}

/// Summary followed by the word-count footer.
pub fn render_summary(text: &str, result: &SummaryResult) -> String {
    let original = result.original_words.unwrap_or_else(|| word_count(text));
    let summary = result
        .summary_words
        .unwrap_or_else(|| word_count(&result.summary));
    format!(
        "**Summary:**\n\n{}\n\n---\n*{original} words → {summary} words*",
        result.summary
    )
}

fn too_short_prompt(min_words: usize) -> String {
    format!("Enter longer text ({min_words}+ words) for summarization")
}

/// Sentiment tab.
pub fn sentiment_panel(analyzer: &Analyzer, text: &str) -> Result<String, AnalyzerError> {
    if text.trim().is_empty() {
        return Ok(EMPTY_TEXT_PROMPT.to_string());
    }
    Ok(render_sentiment(&analyzer.analyze_sentiment(text)?))
}

/// Entities tab.
pub fn entities_panel(analyzer: &Analyzer, text: &str) -> Result<String, AnalyzerError> {
    if text.trim().is_empty() {
        return Ok(EMPTY_TEXT_PROMPT.to_string());
    }
    Ok(render_entities(&analyzer.extract_entities(text)?))
}

/// Classification tab. `categories` is the raw comma-separated field.
pub fn classify_panel(
    analyzer: &Analyzer,
    text: &str,
    categories: &str,
) -> Result<String, AnalyzerError> {
    if text.trim().is_empty() {
        return Ok(EMPTY_TEXT_PROMPT.to_string());
    }
    let categories = parse_categories(categories);
    if categories.is_empty() {
        return Ok(EMPTY_CATEGORIES_PROMPT.to_string());
    }
    Ok(render_classification(
        &analyzer.classify_zero_shot(text, &categories)?,
    ))
}

/// Summarization tab. Short texts get a prompt naming the word threshold.
pub fn summarize_panel(analyzer: &Analyzer, text: &str) -> Result<String, AnalyzerError> {
    if text.trim().is_empty() {
        return Ok(EMPTY_TEXT_PROMPT.to_string());
    }
    let min_words = analyzer.options().min_summary_words;
    if word_count(text) < min_words {
        return Ok(too_short_prompt(min_words));
    }
    Ok(render_summary(text, &analyzer.summarize(text)?))
}

/// Render panel Markdown to HTML for the page.
pub fn markdown_to_html(markdown: &str) -> String {
    comrak::markdown_to_html(markdown, &comrak::Options::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{EntitySpan, ScoredCategory};

    #[test]
    fn categories_split_on_commas() {
        assert_eq!(
            parse_categories(" finance, sports ,,politics , "),
            ["finance", "sports", "politics"]
        );
        assert!(parse_categories("  ").is_empty());
        assert_eq!(
            default_categories_field(),
            "finance, sports, politics, technology"
        );
    }

    #[test]
    fn bar_length_is_floor_of_twenty_times_score() {
        assert_eq!(score_bar(0.0), "");
        assert_eq!(score_bar(0.26).chars().count(), 5);
        assert_eq!(score_bar(0.5).chars().count(), 10);
        assert_eq!(score_bar(1.0).chars().count(), 20);
    }

    #[test]
    fn sentiment_markdown() {
        let md = render_sentiment(&SentimentResult {
            label: "POSITIVE".into(),
            confidence: 0.5,
        });
        assert_eq!(md, "**POSITIVE** (confidence: 0.5)");
    }

    #[test]
    fn entities_markdown() {
        assert_eq!(render_entities(&EntitiesResult::default()), NO_ENTITIES);

        let md = render_entities(&EntitiesResult {
            entities: vec![
                EntitySpan {
                    text: "Elon Musk".into(),
                    entity_type: "PER".into(),
                    confidence: 0.99,
                },
                EntitySpan {
                    text: "Texas".into(),
                    entity_type: "LOC".into(),
                    confidence: 0.98,
                },
            ],
        });
        assert_eq!(md, "- **Elon Musk** [PER]\n- **Texas** [LOC]");
    }

    #[test]
    fn classification_markdown() {
        let md = render_classification(&ClassificationResult {
            top_category: "sports".into(),
            all_scores: vec![
                ScoredCategory {
                    category: "sports".into(),
                    score: 0.75,
                },
                ScoredCategory {
                    category: "finance".into(),
                    score: 0.25,
                },
            ],
        });
        assert_eq!(
            md,
            "**Winner: sports**\n\nsports: ███████████████ 0.75\nfinance: █████ 0.25"
        );
    }

    #[test]
    fn summary_markdown() {
        let result = SummaryResult {
            summary: "Short version.".into(),
            original_words: Some(60),
            summary_words: Some(2),
            note: None,
        };
        assert_eq!(
            render_summary("ignored", &result),
            "**Summary:**\n\nShort version.\n\n---\n*60 words → 2 words*"
        );
    }

    #[test]
    fn short_text_prompt_names_threshold() {
        assert_eq!(
            too_short_prompt(50),
            "Enter longer text (50+ words) for summarization"
        );
    }

    #[test]
    fn html_renders_bold() {
        let html = markdown_to_html("**POSITIVE** (confidence: 0.5)");
        assert!(html.contains("<strong>POSITIVE</strong>"));
    }
}
