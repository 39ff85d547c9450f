use thiserror::Error;

/// Errors surfaced while building a transformer from lexicon data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A structural rewrite rule carried a pattern the regex engine
    /// rejected. The lexicon is data, so this is a configuration bug.
    #[error("invalid rewrite pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
}
