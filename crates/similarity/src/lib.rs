//! # Text Similarity Scoring
//!
//! Pairwise similarity between an original passage and a rewrite, blended
//! from three complementary metrics so that neither pure character overlap
//! nor pure vocabulary overlap dominates:
//!
//! 1. **Character alignment** ([`SimilarityReport::char_score`]): the
//!    classic `2 * M / T` ratio over an optimal contiguous block matching
//!    of the two character sequences.
//! 2. **Token overlap** ([`SimilarityReport::token_score`]): Jaccard over
//!    script-aware token sets; CJK runs become sliding bigrams, Latin runs
//!    split on whitespace.
//! 3. **N-gram overlap** ([`SimilarityReport::ngram_score`]): Jaccard over
//!    character trigrams of the whitespace-stripped text.
//!
//! The blended [`SimilarityReport::overall`] uses the [`CHAR_WEIGHT`] /
//! [`TOKEN_WEIGHT`] / [`NGRAM_WEIGHT`] constants; [`quick_ratio`] offers the
//! cheaper [`QUICK_CHAR_WEIGHT`] / [`QUICK_TOKEN_WEIGHT`] blend used by
//! revision reports. The char-level alignment also yields the long verbatim
//! [`MatchingSpan`]s a reviewer would flag.
//!
//! ## Invariants worth knowing
//!
//! - `compare(s, s).overall == 1.0` for every non-empty `s`.
//! - An empty or whitespace-only side short-circuits to an all-zero report;
//!   no input panics.
//! - Spans are reported left-to-right as they occur in the first text.

mod config;
mod matcher;
mod report;
mod tokenize;

pub use config::SimilarityConfig;
pub use report::{MatchingSpan, SimilarityReport};

/// Version of the scoring scheme; bump when weights or metrics change.
pub const SIMILARITY_VERSION: u16 = 1;
/// Human-readable identifier of the blended algorithm.
pub const SIMILARITY_ALGORITHM: &str = "char-token-ngram-v1";

/// Weight of the character-alignment score in [`compare`].
pub const CHAR_WEIGHT: f64 = 0.3;
/// Weight of the token-overlap score in [`compare`].
pub const TOKEN_WEIGHT: f64 = 0.4;
/// Weight of the n-gram score in [`compare`].
pub const NGRAM_WEIGHT: f64 = 0.3;

/// Character weight of the two-metric [`quick_ratio`] blend.
pub const QUICK_CHAR_WEIGHT: f64 = 0.6;
/// Token weight of the two-metric [`quick_ratio`] blend.
pub const QUICK_TOKEN_WEIGHT: f64 = 0.4;

/// Compares two texts with the default configuration.
pub fn compare(a: &str, b: &str) -> SimilarityReport {
    compare_with(a, b, &SimilarityConfig::default())
}

/// Compares two texts, producing the full three-metric report plus the
/// long matching spans.
pub fn compare_with(a: &str, b: &str, cfg: &SimilarityConfig) -> SimilarityReport {
    if a.trim().is_empty() || b.trim().is_empty() {
        return SimilarityReport::zero();
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Stage 1: optimal contiguous block alignment over characters.
    let blocks = matcher::matching_blocks(&a_chars, &b_chars);
    let matched: usize = blocks.iter().map(|blk| blk.len).sum();
    let char_score = 2.0 * matched as f64 / (a_chars.len() + b_chars.len()) as f64;

    // Stage 2: script-aware token overlap.
    let token_score = tokenize::jaccard(
        &tokenize::token_set(a, cfg.token_window),
        &tokenize::token_set(b, cfg.token_window),
    );

    // Stage 3: character n-gram overlap over whitespace-stripped text.
    let ngram_score = tokenize::jaccard(
        &tokenize::ngram_set(a, cfg.ngram_size),
        &tokenize::ngram_set(b, cfg.ngram_size),
    );

    // Stage 4: weighted blend.
    let overall = CHAR_WEIGHT * char_score + TOKEN_WEIGHT * token_score + NGRAM_WEIGHT * ngram_score;

    // Stage 5: surface the long verbatim spans, left to right.
    let matching_spans = blocks
        .iter()
        .filter(|blk| blk.len >= cfg.min_span_chars)
        .take(cfg.max_spans)
        .map(|blk| MatchingSpan {
            a_start: blk.a,
            b_start: blk.b,
            len: blk.len,
            text: a_chars[blk.a..blk.a + blk.len].iter().collect(),
        })
        .collect();

    SimilarityReport {
        char_score,
        token_score,
        ngram_score,
        overall,
        matching_spans,
    }
}

/// The cheap two-metric blend (`0.6 * char + 0.4 * token`) used by the
/// orchestrators when classifying how a rewrite changed a passage. Skips
/// n-gram extraction and span bookkeeping.
pub fn quick_ratio(a: &str, b: &str) -> f64 {
    if a.trim().is_empty() || b.trim().is_empty() {
        return 0.0;
    }
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let blocks = matcher::matching_blocks(&a_chars, &b_chars);
    let matched: usize = blocks.iter().map(|blk| blk.len).sum();
    let char_score = 2.0 * matched as f64 / (a_chars.len() + b_chars.len()) as f64;
    let cfg = SimilarityConfig::default();
    let token_score = tokenize::jaccard(
        &tokenize::token_set(a, cfg.token_window),
        &tokenize::token_set(b, cfg.token_window),
    );
    QUICK_CHAR_WEIGHT * char_score + QUICK_TOKEN_WEIGHT * token_score
}

/// Scores `text` against every document in `corpus`, in corpus order.
pub fn compare_many<S: AsRef<str>>(text: &str, corpus: &[S]) -> Vec<SimilarityReport> {
    corpus
        .iter()
        .map(|doc| compare(text, doc.as_ref()))
        .collect()
}

/// The highest overall similarity between `text` and any corpus document;
/// 0.0 for an empty corpus.
pub fn max_overall<S: AsRef<str>>(text: &str, corpus: &[S]) -> f64 {
    compare_many(text, corpus)
        .iter()
        .map(|report| report.overall)
        .fold(0.0, f64::max)
}
