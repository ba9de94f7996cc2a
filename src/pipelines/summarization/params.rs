/// Decoding limits for abstractive summarization.
///
/// Lengths count generated tokens, excluding the decoder start token and EOS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizationParams {
    /// Hard cap on generated tokens.
    pub max_length: usize,
    /// EOS is suppressed until this many tokens have been generated.
    pub min_length: usize,
    /// Forbid repeating any n-gram of this size. 0 disables the check.
    pub no_repeat_ngram_size: usize,
}

impl Default for SummarizationParams {
    fn default() -> Self {
        Self {
            max_length: 130,
            min_length: 30,
            no_repeat_ngram_size: 3,
        }
    }
}

impl SummarizationParams {
    /// Set the token cap.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the minimum summary length.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Tokens that would complete an n-gram already present in `generated`.
    pub(crate) fn banned_tokens(&self, generated: &[u32]) -> Vec<u32> {
        let n = self.no_repeat_ngram_size;
        if n == 0 || generated.len() < n {
            return Vec::new();
        }

        let prefix = &generated[generated.len() - (n - 1)..];
        generated
            .windows(n)
            .filter(|window| &window[..n - 1] == prefix)
            .map(|window| window[n - 1])
            .collect()
    }

    /// Greedy choice over `logits` after applying the length and n-gram rules.
    ///
    /// Returns `None` when every token is excluded.
    pub(crate) fn next_token(
        &self,
        logits: &mut [f32],
        generated: &[u32],
        eos_token_id: u32,
    ) -> Option<u32> {
        if generated.len() < self.min_length {
            if let Some(eos) = logits.get_mut(eos_token_id as usize) {
                *eos = f32::NEG_INFINITY;
            }
        }
        for token in self.banned_tokens(generated) {
            if let Some(logit) = logits.get_mut(token as usize) {
                *logit = f32::NEG_INFINITY;
            }
        }

        logits
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_finite())
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(id, _)| id as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EOS: u32 = 1;

    #[test]
    fn defaults_match_summary_limits() {
        let params = SummarizationParams::default();
        assert_eq!(params.max_length, 130);
        assert_eq!(params.min_length, 30);
    }

    #[test]
    fn eos_suppressed_below_min_length() {
        let params = SummarizationParams::default().with_min_length(2);
        let mut logits = vec![0.0, 5.0, 1.0];

        assert_eq!(params.next_token(&mut logits, &[7], EOS), Some(2));
    }

    #[test]
    fn eos_allowed_once_min_length_reached() {
        let params = SummarizationParams::default().with_min_length(2);
        let mut logits = vec![0.0, 5.0, 1.0];

        assert_eq!(params.next_token(&mut logits, &[7, 8], EOS), Some(EOS));
    }

    #[test]
    fn repeated_trigram_is_banned() {
        let params = SummarizationParams::default().with_min_length(0);
        // "4 5 6 ... 4 5" must not continue with 6.
        let generated = [4, 5, 6, 9, 4, 5];
        assert_eq!(params.banned_tokens(&generated), vec![6]);

        let mut logits = vec![0.0; 10];
        logits[6] = 3.0;
        logits[8] = 2.0;
        assert_eq!(params.next_token(&mut logits, &generated, EOS), Some(8));
    }

    #[test]
    fn ngram_check_can_be_disabled() {
        let params = SummarizationParams {
            no_repeat_ngram_size: 0,
            ..Default::default()
        };
        assert!(params.banned_tokens(&[4, 5, 4, 5]).is_empty());
    }

    #[test]
    fn everything_excluded_yields_none() {
        let params = SummarizationParams::default();
        let mut logits = vec![f32::NEG_INFINITY, 0.0];
        assert_eq!(params.next_token(&mut logits, &[], EOS), None);
    }
}
