//! Similarity report types.

use serde::{Deserialize, Serialize};

/// A long verbatim stretch shared by both texts. Offsets and length are in
/// characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingSpan {
    /// Character offset of the span in the first text.
    pub a_start: usize,
    /// Character offset of the span in the second text.
    pub b_start: usize,
    /// Span length in characters.
    pub len: usize,
    /// The shared text itself.
    pub text: String,
}

/// Full scoring output of [`compare`](crate::compare). All scores live in
/// `[0.0, 1.0]`; `overall` is the weighted blend of the three metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    pub char_score: f64,
    pub token_score: f64,
    pub ngram_score: f64,
    pub overall: f64,
    /// Verbatim spans at least `min_span_chars` long, left to right,
    /// capped at `max_spans`.
    pub matching_spans: Vec<MatchingSpan>,
}

impl SimilarityReport {
    /// The degenerate report for empty or whitespace-only input.
    pub(crate) fn zero() -> Self {
        SimilarityReport {
            char_score: 0.0,
            token_score: 0.0,
            ngram_score: 0.0,
            overall: 0.0,
            matching_spans: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_report_is_all_zeroes() {
        let report = SimilarityReport::zero();
        assert_eq!(report.overall, 0.0);
        assert!(report.matching_spans.is_empty());
    }

    #[test]
    fn report_serializes_with_spans() {
        let report = SimilarityReport {
            char_score: 0.5,
            token_score: 0.25,
            ngram_score: 0.75,
            overall: 0.5,
            matching_spans: vec![MatchingSpan {
                a_start: 0,
                b_start: 4,
                len: 12,
                text: "完全相同的十二个字符啊".into(),
            }],
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: SimilarityReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
