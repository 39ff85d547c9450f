//! Umbrella crate for the Redraft manuscript revision toolkit.
//!
//! Stitches the stage crates together behind one import: segmentation,
//! protected-term tracking, similarity and style scoring, the rule
//! transformer, the generation collaborator, and the two rewrite engines.
//! Library consumers depend on this crate alone; the one-shot [`dedup`] and
//! [`destyle`] helpers cover the common case of a single document with
//! default configuration.

pub use engine::{
    DedupEngine, DestyleEngine, EngineConfig, EngineError, RewriteKind, RewriteResult, Strategy,
};
pub use lexicon::{
    Lexicon, PatternRule, ProtectedTermSet, Substitution, SynonymEntry, TermGuard,
};
pub use llm::{
    execute_with_retry, is_retryable_error, FailingGenerator, GenerateError, GenerationConfig,
    GenerationRequest, OpenAiGenerator, RetryConfig, RetryResult, StaticGenerator, TextGenerator,
};
pub use segment::{
    count_words, is_cjk, is_terminal, join_paragraphs, segment, split_paragraphs, TextUnit,
    PARAGRAPH_SEPARATOR, TERMINAL_MARKS,
};
pub use similarity::{
    compare, compare_many, compare_with, max_overall, quick_ratio, MatchingSpan, SimilarityConfig,
    SimilarityReport, SIMILARITY_ALGORITHM, SIMILARITY_VERSION,
};
pub use style::{
    detect_features, detect_features_with, score, score_with, FeatureCategory, StyleConfig,
    StyleScore,
};
pub use transform::{RuleTransformer, TransformError, EXPANSION_PROBABILITY_SCALE};

/// Rewrites `text` once with a default similarity-reduction engine.
///
/// Builds a [`DedupEngine`] over the built-in lexicon without a generator,
/// so every strength runs the rule tier. Callers that process many
/// documents or attach a generator should construct the engine themselves
/// and reuse it.
pub fn dedup(
    text: &str,
    strength: u8,
    extra_terms: &[String],
) -> Result<RewriteResult, EngineError> {
    DedupEngine::new(EngineConfig::default())?.process(text, strength, extra_terms)
}

/// Rewrites `text` once with a default style-reduction engine.
///
/// Same convenience trade-off as [`dedup`]: the engine is rebuilt per call
/// and runs the rule tier only.
pub fn destyle(text: &str) -> Result<RewriteResult, EngineError> {
    Ok(DestyleEngine::new(EngineConfig::default())?.process(text))
}
