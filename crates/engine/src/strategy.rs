use serde::{Deserialize, Serialize};

/// How a run splits work between the rule transformer and the external
/// generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Rule tables only; no external calls.
    RuleOnly,
    /// Whole-paragraph external rewrites, rule fallback per paragraph.
    Hybrid,
    /// Sentence-batch external rewrites, rule fallback per batch.
    Deep,
}

impl Strategy {
    /// Tier for a validated dedup strength.
    pub(crate) fn for_strength(strength: u8) -> Strategy {
        match strength {
            1 | 2 => Strategy::RuleOnly,
            3 | 4 => Strategy::Hybrid,
            _ => Strategy::Deep,
        }
    }

    /// True when the tier dispatches to the external generator.
    pub fn uses_generator(self) -> bool {
        !matches!(self, Strategy::RuleOnly)
    }
}
