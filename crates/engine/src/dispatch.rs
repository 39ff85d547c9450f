//! Strategy dispatch shared by the two rewrite pipelines.
//!
//! A [`Dispatch`] walks the input paragraph by paragraph and rewrites each
//! one according to the active [`Strategy`]. Generation failures never
//! surface to the caller; the affected unit falls back to the rule pass and
//! the run continues.

use lexicon::ProtectedTermSet;
use llm::{GenerationRequest, TextGenerator};
use tracing::{debug, warn};
use transform::RuleTransformer;

use crate::strategy::Strategy;

/// Per-run rewrite context. Borrowed from the owning engine so that one
/// engine can serve concurrent runs without cloning its tables.
pub(crate) struct Dispatch<'a> {
    pub transformer: &'a RuleTransformer,
    pub generator: Option<&'a dyn TextGenerator>,
    pub system: &'static str,
    pub intensity: f64,
    pub min_paragraph_chars: usize,
    pub deep_batch_size: usize,
}

impl Dispatch<'_> {
    /// Rewrites `text` under `strategy`, paragraph by paragraph.
    ///
    /// `build_prompt` renders the user prompt for one unit of text; the
    /// pipelines differ only in that closure and in the system prompt.
    pub(crate) fn rewrite<F>(
        &self,
        text: &str,
        strategy: Strategy,
        protected: &ProtectedTermSet,
        build_prompt: F,
        rng: &mut fastrand::Rng,
    ) -> String
    where
        F: Fn(&str) -> String,
    {
        let paragraphs = segment::split_paragraphs(text);
        // A short paragraph amid others is structural (a heading, a list
        // item) and passes through untouched. A sole paragraph is the whole
        // document and is always rewritten.
        let gate = paragraphs.len() > 1;
        let mut rewritten: Vec<String> = Vec::with_capacity(paragraphs.len());

        for para in paragraphs {
            if gate && para.trim().chars().count() < self.min_paragraph_chars {
                rewritten.push(para.to_string());
                continue;
            }
            let unit = match strategy {
                Strategy::RuleOnly => self.rule_unit(para, protected, rng),
                Strategy::Hybrid => self.hybrid_unit(para, protected, &build_prompt, rng),
                Strategy::Deep => self.deep_unit(para, protected, &build_prompt, rng),
            };
            rewritten.push(unit);
        }

        segment::join_paragraphs(&rewritten)
    }

    fn rule_unit(
        &self,
        unit: &str,
        protected: &ProtectedTermSet,
        rng: &mut fastrand::Rng,
    ) -> String {
        self.transformer.apply(unit, self.intensity, protected, rng)
    }

    fn hybrid_unit<F>(
        &self,
        unit: &str,
        protected: &ProtectedTermSet,
        build_prompt: &F,
        rng: &mut fastrand::Rng,
    ) -> String
    where
        F: Fn(&str) -> String,
    {
        match self.external_unit(unit, protected, build_prompt) {
            Some(reply) => reply,
            None => self.rule_unit(unit, protected, rng),
        }
    }

    /// Deep rewriting: sentence batches go through generation one at a
    /// time, so a failure costs one batch rather than the paragraph.
    fn deep_unit<F>(
        &self,
        unit: &str,
        protected: &ProtectedTermSet,
        build_prompt: &F,
        rng: &mut fastrand::Rng,
    ) -> String
    where
        F: Fn(&str) -> String,
    {
        let sentences = segment::segment(unit).into_sentences();
        if sentences.is_empty() {
            return unit.to_string();
        }

        let mut parts: Vec<String> = Vec::new();
        for batch in sentences.chunks(self.deep_batch_size.max(1)) {
            let batch_text = batch.concat();
            match self.external_unit(&batch_text, protected, build_prompt) {
                Some(reply) => {
                    // Re-segment to normalize a dangling whitespace tail.
                    // When the reply's sentence count diverges from the
                    // batch beyond splitting or merging one sentence, the
                    // generator restructured the text; keep it whole.
                    let resplit = segment::segment(&reply);
                    if resplit.len().abs_diff(batch.len()) > 1 {
                        debug!(
                            batch_sentences = batch.len(),
                            reply_sentences = resplit.len(),
                            "deep_batch_kept_opaque"
                        );
                        parts.push(reply);
                    } else {
                        parts.push(resplit.reassemble());
                    }
                }
                None => parts.push(self.rule_unit(&batch_text, protected, rng)),
            }
        }
        parts.concat()
    }

    /// One generation round trip for `unit`. `None` means the caller must
    /// fall back to the rule pass: no generator is configured, generation
    /// errored out, or the reply dropped a protected term the unit carried.
    fn external_unit<F>(
        &self,
        unit: &str,
        protected: &ProtectedTermSet,
        build_prompt: &F,
    ) -> Option<String>
    where
        F: Fn(&str) -> String,
    {
        let generator = self.generator?;
        let request = GenerationRequest::new(self.system, build_prompt(unit));
        let reply = match generator.generate(&request) {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "generation_failed");
                return None;
            }
        };

        // Only terms this unit actually carries can be dropped by its
        // rewrite; terms living in other paragraphs are not its business.
        let dropped: Vec<&str> = protected
            .iter()
            .filter(|term| unit.contains(*term) && !reply.contains(*term))
            .collect();
        if !dropped.is_empty() {
            warn!(?dropped, "generated_text_dropped_protected_terms");
            return None;
        }

        Some(reply)
    }
}
