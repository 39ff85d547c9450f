//! Generative-style reduction pipeline.

use std::sync::Arc;
use std::time::Instant;

use lexicon::{Lexicon, TermGuard};
use llm::TextGenerator;
use tracing::{info, span, Level};
use transform::RuleTransformer;

use crate::dispatch::Dispatch;
use crate::prompt;
use crate::report::identify_changes;
use crate::strategy::Strategy;
use crate::types::{RewriteKind, RewriteResult};
use crate::{EngineConfig, EngineError};

/// Rewrites manuscripts to dampen the marker signals that make prose read
/// as machine-generated.
///
/// Unlike the similarity pipeline there is no strength dial: the rule tier
/// always runs at [`EngineConfig::destyle_intensity`], and a configured
/// generator upgrades the run to the hybrid tier.
pub struct DestyleEngine {
    transformer: RuleTransformer,
    guard: TermGuard,
    generator: Option<Arc<dyn TextGenerator>>,
    config: EngineConfig,
}

impl DestyleEngine {
    /// An engine over the built-in lexicon.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_lexicon(Lexicon::built_in(), config)
    }

    /// An engine over a caller-supplied lexicon.
    pub fn with_lexicon(lexicon: &Lexicon, config: EngineConfig) -> Result<Self, EngineError> {
        Ok(DestyleEngine {
            transformer: RuleTransformer::new(lexicon)?,
            guard: lexicon.term_guard(),
            generator: None,
            config,
        })
    }

    /// Attaches a text generator, enabling the hybrid tier.
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Rewrites `text`, scoring its style likelihood before and after.
    ///
    /// Infallible by construction: there is no strength contract to
    /// violate, and generation failures fall back to the rule tier.
    pub fn process(&self, text: &str) -> RewriteResult {
        if text.trim().is_empty() {
            return RewriteResult::empty_input(text, RewriteKind::Destyle);
        }

        let run = span!(Level::INFO, "engine.destyle");
        let _guard = run.enter();
        let started = Instant::now();

        let strategy = if self.generator.is_some() {
            Strategy::Hybrid
        } else {
            Strategy::RuleOnly
        };
        let protected = self.guard.observe(text, &[]);
        let before = style::score_with(text, &self.config.style).overall;
        let mut rng = self.config.rng();

        let dispatch = Dispatch {
            transformer: &self.transformer,
            generator: self.generator.as_deref(),
            system: prompt::DESTYLE_SYSTEM,
            intensity: self.config.destyle_intensity,
            min_paragraph_chars: self.config.min_paragraph_chars,
            deep_batch_size: self.config.deep_batch_size,
        };
        let rewritten = dispatch.rewrite(
            text,
            strategy,
            &protected,
            |unit| prompt::destyle_prompt(unit, &protected),
            &mut rng,
        );

        let after = style::score_with(&rewritten, &self.config.style).overall;
        let changes = identify_changes(text, &rewritten);
        let sentence_count = segment::segment(&rewritten).len();

        info!(
            ?strategy,
            score_before = before,
            score_after = after,
            elapsed_micros = started.elapsed().as_micros(),
            "destyle_complete"
        );

        RewriteResult {
            original: text.to_string(),
            rewritten,
            before_score: before,
            after_score: after,
            preserved_terms: protected.to_vec(),
            changes,
            sentence_count,
            kind: RewriteKind::Destyle,
        }
    }
}
