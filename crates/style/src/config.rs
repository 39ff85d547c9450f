//! Detector tunables.
//!
//! The multipliers and weights were calibrated against a hand-labeled set
//! of generated and human-written manuscript excerpts; treat them as one
//! package rather than tweaking a single knob.

use serde::{Deserialize, Serialize};

/// Hyperparameters of the style detector.
///
/// Multipliers scale a length-normalized marker count into a 0-100
/// sub-score; weights blend the sub-scores into the overall score and are
/// renormalized over whichever sub-scores were computable for the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Inputs shorter than this (in chars) score 0.0; detection is not
    /// reliable on fragments.
    pub min_chars: usize,

    pub sequencing_multiplier: f64,
    pub filler_multiplier: f64,
    pub vague_multiplier: f64,
    pub formal_multiplier: f64,
    pub connector_multiplier: f64,

    pub sequencing_weight: f64,
    pub filler_weight: f64,
    pub vague_weight: f64,
    pub uniformity_weight: f64,
    pub formal_weight: f64,
    pub connector_weight: f64,

    /// Minimum sentence count before length uniformity is considered.
    pub min_sentences_for_uniformity: usize,
    /// Sentences at or below this char length are excluded from the
    /// uniformity measurement.
    pub min_sentence_chars: usize,
    /// Cap on example markers reported per signal.
    pub max_examples: usize,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            min_chars: 30,
            sequencing_multiplier: 12.0,
            filler_multiplier: 20.0,
            vague_multiplier: 15.0,
            formal_multiplier: 18.0,
            connector_multiplier: 8.0,
            sequencing_weight: 0.20,
            filler_weight: 0.25,
            vague_weight: 0.15,
            uniformity_weight: 0.20,
            formal_weight: 0.10,
            connector_weight: 0.10,
            min_sentences_for_uniformity: 3,
            min_sentence_chars: 5,
            max_examples: 3,
        }
    }
}
