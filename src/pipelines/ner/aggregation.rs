//! "Simple" aggregation of token tags into entity groups.

use super::model::TokenPrediction;
use crate::error::{PipelineError, Result};
use serde::Serialize;
use tokenizers::decoders::wordpiece::WordPiece;
use tokenizers::Decoder;

/// WordPiece continuation marker.
pub const CONTINUATION_MARKER: &str = "##";

/// One group of adjacent same-type tokens.
///
/// `word` may still start with [`CONTINUATION_MARKER`] when a group begins in the
/// middle of a word; callers merge those fragments into whole words.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedFragment {
    /// Decoded surface form of the group.
    pub word: String,
    /// Entity type without the `B-`/`I-` prefix.
    pub entity_group: String,
    /// Mean token probability over the group.
    pub score: f32,
}

impl TaggedFragment {
    /// Build a fragment from its parts.
    pub fn new(word: impl Into<String>, entity_group: impl Into<String>, score: f32) -> Self {
        Self {
            word: word.into(),
            entity_group: entity_group.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Boundary {
    Begin,
    Inside,
}

/// Split a tag into its boundary marker and entity type.
///
/// Tags without a `B-`/`I-` prefix (such as `O`) are treated as inside tags of their own name.
pub(crate) fn parse_tag(label: &str) -> (Boundary, &str) {
    if let Some(kind) = label.strip_prefix("B-") {
        (Boundary::Begin, kind)
    } else if let Some(kind) = label.strip_prefix("I-") {
        (Boundary::Inside, kind)
    } else {
        (Boundary::Inside, label)
    }
}

/// Join WordPiece tokens with the WordPiece decoder, cleanup included.
///
/// A leading continuation marker on the first token is kept.
pub(crate) fn decode_wordpiece<S: AsRef<str>>(tokens: &[S]) -> Result<String> {
    let tokens = tokens.iter().map(|t| t.as_ref().to_string()).collect();
    WordPiece::default()
        .decode(tokens)
        .map_err(|e| PipelineError::Tokenization(format!("Failed to decode entity tokens: {e}")))
}

/// Group adjacent tokens of one type, starting a new group on every `B-` tag.
/// Groups tagged `O` are dropped.
pub fn aggregate_simple(tokens: &[TokenPrediction]) -> Result<Vec<TaggedFragment>> {
    let mut fragments = Vec::new();
    let mut group: Vec<&TokenPrediction> = Vec::new();

    for token in tokens {
        if let Some(last) = group.last() {
            let (boundary, kind) = parse_tag(&token.label);
            let (_, last_kind) = parse_tag(&last.label);
            if kind != last_kind || boundary == Boundary::Begin {
                fragments.extend(close_group(&group)?);
                group.clear();
            }
        }
        group.push(token);
    }
    fragments.extend(close_group(&group)?);

    Ok(fragments)
}

fn close_group(group: &[&TokenPrediction]) -> Result<Option<TaggedFragment>> {
    let Some(first) = group.first() else {
        return Ok(None);
    };
    let (_, kind) = parse_tag(&first.label);
    if kind == "O" {
        return Ok(None);
    }

    let words: Vec<&str> = group.iter().map(|t| t.token.as_str()).collect();
    let score = group.iter().map(|t| t.score).sum::<f32>() / group.len() as f32;

    Ok(Some(TaggedFragment {
        word: decode_wordpiece(&words)?,
        entity_group: kind.to_string(),
        score,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(token: &str, label: &str, score: f32) -> TokenPrediction {
        TokenPrediction {
            token: token.into(),
            label: label.into(),
            score,
        }
    }

    #[test]
    fn parse_tag_prefixes() {
        assert_eq!(parse_tag("B-PER"), (Boundary::Begin, "PER"));
        assert_eq!(parse_tag("I-LOC"), (Boundary::Inside, "LOC"));
        assert_eq!(parse_tag("O"), (Boundary::Inside, "O"));
    }

    #[test]
    fn decode_joins_subwords() {
        assert_eq!(decode_wordpiece(&["Space", "##X"]).unwrap(), "SpaceX");
        assert_eq!(decode_wordpiece(&["Elon", "Musk"]).unwrap(), "Elon Musk");
        assert_eq!(decode_wordpiece(&["##X"]).unwrap(), "##X");
    }

    #[test]
    fn decode_cleans_up_punctuation() {
        assert_eq!(decode_wordpiece(&["St", ".", "Louis"]).unwrap(), "St. Louis");
        assert_eq!(
            decode_wordpiece(&["Washington", ",", "D", ".", "C", "."]).unwrap(),
            "Washington, D. C."
        );
    }

    #[test]
    fn punctuation_inside_an_entity_group() {
        let tokens = vec![
            tok("St", "B-LOC", 0.9),
            tok(".", "I-LOC", 0.8),
            tok("Louis", "I-LOC", 0.7),
            tok("is", "O", 0.99),
        ];

        let fragments = aggregate_simple(&tokens).unwrap();

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].word, "St. Louis");
        assert_eq!(fragments[0].entity_group, "LOC");
    }

    #[test]
    fn groups_contiguous_entity_tokens() {
        let tokens = vec![
            tok("Elon", "B-PER", 0.99),
            tok("Musk", "I-PER", 0.97),
            tok("announced", "O", 0.99),
            tok("Texas", "B-LOC", 0.98),
            tok(".", "O", 0.99),
        ];

        let fragments = aggregate_simple(&tokens).unwrap();

        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].word, "Elon Musk");
        assert_eq!(fragments[0].entity_group, "PER");
        assert!((fragments[0].score - 0.98).abs() < 1e-6);
        assert_eq!(fragments[1].word, "Texas");
        assert_eq!(fragments[1].entity_group, "LOC");
    }

    #[test]
    fn begin_tag_splits_same_type() {
        let tokens = vec![
            tok("Space", "B-ORG", 0.9),
            tok("##X", "B-ORG", 0.6),
        ];

        let fragments = aggregate_simple(&tokens).unwrap();

        assert_eq!(
            fragments,
            vec![
                TaggedFragment::new("Space", "ORG", 0.9),
                TaggedFragment::new("##X", "ORG", 0.6),
            ]
        );
    }

    #[test]
    fn inside_subwords_stay_in_group() {
        let tokens = vec![tok("Space", "B-ORG", 0.8), tok("##X", "I-ORG", 0.6)];
        let fragments = aggregate_simple(&tokens).unwrap();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].word, "SpaceX");
    }

    #[test]
    fn only_outside_tokens_yield_nothing() {
        let tokens = vec![tok("hello", "O", 0.99), tok("world", "O", 0.99)];
        assert!(aggregate_simple(&tokens).unwrap().is_empty());
        assert!(aggregate_simple(&[]).unwrap().is_empty());
    }
}
