use thiserror::Error;

/// Contract errors surfaced by the orchestrators.
///
/// Collaborator trouble never appears here; it is absorbed by the rule-only
/// fallback. These variants mean the caller (or its rule tables) broke the
/// contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Dedup strength must lie in 1..=5.
    #[error("invalid strength {0}: expected a value in 1..=5")]
    InvalidStrength(u8),
    /// A rule table carried a pattern the regex engine rejects.
    #[error(transparent)]
    Transform(#[from] transform::TransformError),
}
