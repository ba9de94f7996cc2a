//! Merging of WordPiece fragments into whole-word entity spans.

use super::types::EntitySpan;
use crate::pipelines::ner::{TaggedFragment, CONTINUATION_MARKER};

/// Fold `##` continuation fragments into the span before them.
///
/// A continuation appends its text (marker stripped) and raises the span's
/// confidence to the max of both. A continuation with no open span is dropped.
/// Order is preserved; there is no deduplication or thresholding.
pub fn merge_subtokens(fragments: &[TaggedFragment]) -> Vec<EntitySpan> {
    let mut spans = Vec::with_capacity(fragments.len());
    let mut current: Option<EntitySpan> = None;

    for fragment in fragments {
        if let Some(rest) = fragment.word.strip_prefix(CONTINUATION_MARKER) {
            match current.as_mut() {
                Some(span) => {
                    span.text.push_str(rest);
                    span.confidence = span.confidence.max(fragment.score);
                }
                None => tracing::trace!(word = %fragment.word, "dropping orphan continuation"),
            }
            continue;
        }

        spans.extend(current.take());
        current = Some(EntitySpan {
            text: fragment.word.clone(),
            entity_type: fragment.entity_group.clone(),
            confidence: fragment.score,
        });
    }
    spans.extend(current);

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(word: &str, group: &str, score: f32) -> TaggedFragment {
        TaggedFragment::new(word, group, score)
    }

    #[test]
    fn continuation_extends_previous_span() {
        let spans = merge_subtokens(&[frag("Space", "ORG", 0.7), frag("##X", "ORG", 0.9)]);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "SpaceX");
        assert_eq!(spans[0].entity_type, "ORG");
        assert_eq!(spans[0].confidence, 0.9);
    }

    #[test]
    fn confidence_never_drops() {
        let spans = merge_subtokens(&[
            frag("Tes", "LOC", 0.95),
            frag("##la", "LOC", 0.40),
            frag("##nd", "LOC", 0.60),
        ]);
        assert_eq!(spans[0].text, "Tesland");
        assert_eq!(spans[0].confidence, 0.95);
    }

    #[test]
    fn leading_continuation_is_dropped() {
        let spans = merge_subtokens(&[frag("##X", "ORG", 0.9), frag("Mars", "LOC", 0.8)]);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Mars");
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let spans = merge_subtokens(&[
            frag("Texas", "LOC", 0.9),
            frag("Elon Musk", "PER", 0.99),
            frag("Texas", "LOC", 0.8),
        ]);
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["Texas", "Elon Musk", "Texas"]);
    }

    #[test]
    fn empty_input_yields_no_spans() {
        assert!(merge_subtokens(&[]).is_empty());
    }
}
