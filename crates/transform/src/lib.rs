//! # Rule-Based Rewriting
//!
//! The deterministic half of the revision engine: five rewrite stages
//! driven entirely by [`lexicon`] tables, applied in a fixed order.
//!
//! ## The stages
//!
//! 1. **Filler removal**: boilerplate openers deleted or softened, every
//!    occurrence once.
//! 2. **Lexical substitution**: roughly half of the occurrences of each
//!    table word (never fewer than one) swapped for a drawn synonym.
//! 3. **Verb expansion**: first occurrence of a concise verb stretched
//!    into a longer periphrasis, gated by rewrite intensity.
//! 4. **Structural patterns**: declarative regex rules, first match each,
//!    each rule gated by its own probability.
//! 5. **Sequencing softening**: first occurrence of each enumerative
//!    marker replaced with a transitional phrase, deterministically.
//!
//! ## Invariants worth knowing
//!
//! - No stage ever edits inside a protected-term occurrence; the term set
//!   wins over every table.
//! - Randomness comes only from the caller's [`fastrand::Rng`], so a seeded
//!   run replays exactly.
//! - Stage order is part of the contract; reordering changes results.

mod error;
mod subst;

pub use error::TransformError;

use lexicon::{Lexicon, ProtectedTermSet, Substitution, SynonymEntry};
use regex::Regex;

/// Scale applied to intensity when gating verb expansion: at full intensity
/// an eligible verb expands with this probability.
pub const EXPANSION_PROBABILITY_SCALE: f64 = 0.6;

#[derive(Debug)]
struct CompiledPattern {
    regex: Regex,
    replacement: String,
    probability: f64,
}

/// Applies the five rewrite stages to text.
///
/// Construction compiles the lexicon's structural patterns once; the
/// transformer itself is immutable and cheap to share.
#[derive(Debug)]
pub struct RuleTransformer {
    fillers: Vec<Substitution>,
    synonyms: Vec<SynonymEntry>,
    verb_expansions: Vec<Substitution>,
    patterns: Vec<CompiledPattern>,
    softeners: Vec<Substitution>,
}

impl RuleTransformer {
    /// Builds a transformer from lexicon tables.
    ///
    /// Fails with [`TransformError::InvalidPattern`] when a structural rule
    /// carries a pattern the regex engine rejects.
    pub fn new(lexicon: &Lexicon) -> Result<Self, TransformError> {
        let patterns = lexicon
            .patterns
            .iter()
            .map(|rule| {
                Regex::new(&rule.pattern)
                    .map(|regex| CompiledPattern {
                        regex,
                        replacement: rule.replacement.clone(),
                        probability: rule.probability,
                    })
                    .map_err(|e| TransformError::InvalidPattern {
                        pattern: rule.pattern.clone(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RuleTransformer {
            fillers: lexicon.fillers.clone(),
            synonyms: lexicon.synonyms.clone(),
            verb_expansions: lexicon.verb_expansions.clone(),
            patterns,
            softeners: lexicon.softeners.clone(),
        })
    }

    /// Rewrites `text` at the given intensity (clamped to `[0, 1]`),
    /// leaving every occurrence of a protected term untouched.
    pub fn apply(
        &self,
        text: &str,
        intensity: f64,
        protected: &ProtectedTermSet,
        rng: &mut fastrand::Rng,
    ) -> String {
        let intensity = intensity.clamp(0.0, 1.0);

        // Stage 1: filler phrases.
        let mut result = self.apply_fillers(text, protected);
        // Stage 2: synonym substitution.
        result = self.apply_synonyms(&result, protected, rng);
        // Stage 3: intensity-gated verb expansion.
        result = self.apply_expansions(&result, intensity, protected, rng);
        // Stage 4: structural patterns.
        result = self.apply_patterns(&result, protected, rng);
        // Stage 5: sequencing softeners.
        self.apply_softeners(&result, protected)
    }

    fn apply_fillers(&self, text: &str, protected: &ProtectedTermSet) -> String {
        let mut result = text.to_string();
        for rule in &self.fillers {
            let spans = protected.spans(&result);
            let occurrences = subst::eligible_occurrences(&result, &rule.find, &spans);
            if occurrences.is_empty() {
                continue;
            }
            result = subst::replace_at(&result, rule.find.len(), &occurrences, &rule.replace);
        }
        result
    }

    fn apply_synonyms(
        &self,
        text: &str,
        protected: &ProtectedTermSet,
        rng: &mut fastrand::Rng,
    ) -> String {
        let mut result = text.to_string();
        for entry in &self.synonyms {
            if entry.options.is_empty() || protected.contains(&entry.word) {
                continue;
            }
            let spans = protected.spans(&result);
            let occurrences = subst::eligible_occurrences(&result, &entry.word, &spans);
            if occurrences.is_empty() {
                continue;
            }
            // Swap about half of the occurrences, always at least one.
            let budget = (occurrences.len() / 2).max(1);
            let choice = &entry.options[rng.usize(0..entry.options.len())];
            result = subst::replace_at(&result, entry.word.len(), &occurrences[..budget], choice);
        }
        result
    }

    fn apply_expansions(
        &self,
        text: &str,
        intensity: f64,
        protected: &ProtectedTermSet,
        rng: &mut fastrand::Rng,
    ) -> String {
        let mut result = text.to_string();
        let fire_probability = intensity * EXPANSION_PROBABILITY_SCALE;
        for rule in &self.verb_expansions {
            let spans = protected.spans(&result);
            let occurrences = subst::eligible_occurrences(&result, &rule.find, &spans);
            if occurrences.is_empty() {
                continue;
            }
            if rng.f64() >= fire_probability {
                continue;
            }
            result = subst::replace_at(&result, rule.find.len(), &occurrences[..1], &rule.replace);
        }
        result
    }

    fn apply_patterns(
        &self,
        text: &str,
        protected: &ProtectedTermSet,
        rng: &mut fastrand::Rng,
    ) -> String {
        let mut result = text.to_string();
        for rule in &self.patterns {
            // One gate draw per rule, match or not, so a seeded run replays
            // the same decisions on different inputs of the same shape.
            if rng.f64() >= rule.probability {
                continue;
            }
            let spans = protected.spans(&result);
            let Some(found) = rule.regex.find(&result) else {
                continue;
            };
            if subst::overlaps(&spans, found.start(), found.end()) {
                continue;
            }
            result = rule
                .regex
                .replace(&result, rule.replacement.as_str())
                .into_owned();
        }
        result
    }

    fn apply_softeners(&self, text: &str, protected: &ProtectedTermSet) -> String {
        let mut result = text.to_string();
        for rule in &self.softeners {
            let spans = protected.spans(&result);
            let occurrences = subst::eligible_occurrences(&result, &rule.find, &spans);
            if let Some(&first) = occurrences.first() {
                result = subst::replace_at(&result, rule.find.len(), &[first], &rule.replace);
            }
        }
        result
    }
}
