//! Scoring configuration.

use serde::{Deserialize, Serialize};

/// Tunables for [`compare_with`](crate::compare_with).
///
/// Cheap to clone and serde-friendly so it can ride inside higher-level
/// engine configs. The defaults match the documented scoring scheme; change
/// them only when recalibrating against a reference corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Sliding-window width for CJK token grams.
    #[serde(default = "SimilarityConfig::default_token_window")]
    pub token_window: usize,
    /// Character n-gram width.
    #[serde(default = "SimilarityConfig::default_ngram_size")]
    pub ngram_size: usize,
    /// Minimum character length for a matched block to be reported as a
    /// span.
    #[serde(default = "SimilarityConfig::default_min_span_chars")]
    pub min_span_chars: usize,
    /// Maximum number of spans reported, left to right.
    #[serde(default = "SimilarityConfig::default_max_spans")]
    pub max_spans: usize,
}

impl SimilarityConfig {
    pub(crate) fn default_token_window() -> usize {
        2
    }

    pub(crate) fn default_ngram_size() -> usize {
        3
    }

    pub(crate) fn default_min_span_chars() -> usize {
        10
    }

    pub(crate) fn default_max_spans() -> usize {
        10
    }

    pub fn with_token_window(mut self, window: usize) -> Self {
        self.token_window = window;
        self
    }

    pub fn with_ngram_size(mut self, size: usize) -> Self {
        self.ngram_size = size;
        self
    }

    pub fn with_min_span_chars(mut self, chars: usize) -> Self {
        self.min_span_chars = chars;
        self
    }

    pub fn with_max_spans(mut self, max: usize) -> Self {
        self.max_spans = max;
        self
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        SimilarityConfig {
            token_window: Self::default_token_window(),
            ngram_size: Self::default_ngram_size(),
            min_span_chars: Self::default_min_span_chars(),
            max_spans: Self::default_max_spans(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_scheme() {
        let cfg = SimilarityConfig::default();
        assert_eq!(cfg.token_window, 2);
        assert_eq!(cfg.ngram_size, 3);
        assert_eq!(cfg.min_span_chars, 10);
        assert_eq!(cfg.max_spans, 10);
    }

    #[test]
    fn builders_override_fields() {
        let cfg = SimilarityConfig::default()
            .with_min_span_chars(20)
            .with_max_spans(3);
        assert_eq!(cfg.min_span_chars, 20);
        assert_eq!(cfg.max_spans, 3);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let cfg: SimilarityConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SimilarityConfig::default());
    }
}
