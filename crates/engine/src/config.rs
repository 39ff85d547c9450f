//! Orchestrator configuration.

use serde::{Deserialize, Serialize};
use similarity::SimilarityConfig;
use style::StyleConfig;

fn default_min_paragraph_chars() -> usize {
    50
}

fn default_deep_batch_size() -> usize {
    3
}

fn default_destyle_intensity() -> f64 {
    0.5
}

/// Tunables shared by the dedup and destyle orchestrators.
///
/// Injected at engine construction and immutable afterwards; nothing here is
/// read from the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Paragraphs of a multi-paragraph input shorter than this (trimmed
    /// chars) pass through untouched. A sole paragraph is always rewritten.
    #[serde(default = "default_min_paragraph_chars")]
    pub min_paragraph_chars: usize,
    /// Sentences per external call in the deep tier.
    #[serde(default = "default_deep_batch_size")]
    pub deep_batch_size: usize,
    /// Rule intensity used by the destyle engine (dedup derives intensity
    /// from strength).
    #[serde(default = "default_destyle_intensity")]
    pub destyle_intensity: f64,
    /// Seed for the rule transformer's random draws. `None` draws a fresh
    /// seed per run; `Some` makes full runs reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Scoring knobs handed to the similarity scorer.
    #[serde(default)]
    pub similarity: SimilarityConfig,
    /// Scoring knobs handed to the style detector.
    #[serde(default)]
    pub style: StyleConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            min_paragraph_chars: default_min_paragraph_chars(),
            deep_batch_size: default_deep_batch_size(),
            destyle_intensity: default_destyle_intensity(),
            seed: None,
            similarity: SimilarityConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_min_paragraph_chars(mut self, chars: usize) -> Self {
        self.min_paragraph_chars = chars;
        self
    }

    pub fn with_deep_batch_size(mut self, size: usize) -> Self {
        self.deep_batch_size = size;
        self
    }

    pub fn with_destyle_intensity(mut self, intensity: f64) -> Self {
        self.destyle_intensity = intensity;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_similarity(mut self, similarity: SimilarityConfig) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// The random source for one run, seeded when configured.
    pub(crate) fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.min_paragraph_chars, 50);
        assert_eq!(cfg.deep_batch_size, 3);
        assert!((cfg.destyle_intensity - 0.5).abs() < 1e-9);
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn builders_override_fields() {
        let cfg = EngineConfig::default()
            .with_min_paragraph_chars(20)
            .with_deep_batch_size(5)
            .with_seed(7);
        assert_eq!(cfg.min_paragraph_chars, 20);
        assert_eq!(cfg.deep_batch_size, 5);
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let cfg: EngineConfig = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.min_paragraph_chars, 50);
        assert_eq!(cfg.deep_batch_size, 3);
    }

    #[test]
    fn seeded_rngs_repeat() {
        let cfg = EngineConfig::default().with_seed(11);
        let mut a = cfg.rng();
        let mut b = cfg.rng();
        assert_eq!(a.u64(..), b.u64(..));
    }
}
