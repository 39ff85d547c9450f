//! Similarity-reduction pipeline.

use std::sync::Arc;
use std::time::Instant;

use lexicon::{Lexicon, TermGuard};
use llm::TextGenerator;
use tracing::{debug, info, span, Level};
use transform::RuleTransformer;

use crate::dispatch::Dispatch;
use crate::prompt;
use crate::report::identify_changes;
use crate::strategy::Strategy;
use crate::types::{RewriteKind, RewriteResult};
use crate::{EngineConfig, EngineError};

/// Rewrites manuscripts to lower their pairwise similarity against the
/// original while keeping protected terminology intact.
///
/// The engine is generator-optional: without one, every strength runs the
/// rule tier; with one, strengths 3 and up bring generation into play and
/// fall back to rules whenever a call fails or misbehaves.
pub struct DedupEngine {
    transformer: RuleTransformer,
    guard: TermGuard,
    generator: Option<Arc<dyn TextGenerator>>,
    config: EngineConfig,
}

impl DedupEngine {
    /// An engine over the built-in lexicon.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_lexicon(Lexicon::built_in(), config)
    }

    /// An engine over a caller-supplied lexicon.
    pub fn with_lexicon(lexicon: &Lexicon, config: EngineConfig) -> Result<Self, EngineError> {
        Ok(DedupEngine {
            transformer: RuleTransformer::new(lexicon)?,
            guard: lexicon.term_guard(),
            generator: None,
            config,
        })
    }

    /// Attaches a text generator, enabling the hybrid and deep tiers.
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Rewrites `text` at the given strength.
    ///
    /// `strength` must lie in `1..=5`; anything else is a contract error,
    /// not a clamp. `extra_terms` join the lexicon's protected vocabulary
    /// for this run only.
    pub fn process(
        &self,
        text: &str,
        strength: u8,
        extra_terms: &[String],
    ) -> Result<RewriteResult, EngineError> {
        if !(1..=5).contains(&strength) {
            return Err(EngineError::InvalidStrength(strength));
        }
        if text.trim().is_empty() {
            return Ok(RewriteResult::empty_input(text, RewriteKind::Dedup));
        }

        let run = span!(Level::INFO, "engine.dedup", strength);
        let _guard = run.enter();
        let started = Instant::now();

        let mut strategy = Strategy::for_strength(strength);
        if strategy.uses_generator() && self.generator.is_none() {
            debug!(requested = ?strategy, "no_generator_downgrading_to_rule_only");
            strategy = Strategy::RuleOnly;
        }

        let protected = self.guard.observe(text, extra_terms);
        let intensity = f64::from(strength) / 5.0;
        let mut rng = self.config.rng();

        let dispatch = Dispatch {
            transformer: &self.transformer,
            generator: self.generator.as_deref(),
            system: prompt::DEDUP_SYSTEM,
            intensity,
            min_paragraph_chars: self.config.min_paragraph_chars,
            deep_batch_size: self.config.deep_batch_size,
        };
        let rewritten = dispatch.rewrite(
            text,
            strategy,
            &protected,
            |unit| prompt::dedup_prompt(unit, strength, &protected),
            &mut rng,
        );

        let after = similarity::compare_with(text, &rewritten, &self.config.similarity);
        let changes = identify_changes(text, &rewritten);
        let sentence_count = segment::segment(&rewritten).len();

        info!(
            ?strategy,
            similarity_after = after.overall,
            elapsed_micros = started.elapsed().as_micros(),
            "dedup_complete"
        );

        Ok(RewriteResult {
            original: text.to_string(),
            rewritten,
            before_score: 1.0,
            after_score: after.overall,
            preserved_terms: protected.to_vec(),
            changes,
            sentence_count,
            kind: RewriteKind::Dedup,
        })
    }
}
