use thiserror::Error;

/// Errors surfaced by a [`crate::TextGenerator`].
///
/// Orchestrators treat every variant the same way (fall back to rule-only
/// rewriting); the distinctions exist for logs and retry classification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The endpoint could not be reached or the request never completed.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The provider answered with a non-success HTTP status.
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },
    /// The response body did not have the chat-completions shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// The provider returned success with no usable text.
    #[error("empty response from provider")]
    EmptyResponse,
    /// Generator configuration is inconsistent.
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_transport() {
        let err = GenerateError::Transport("connection refused".into());
        assert!(err.to_string().contains("transport failure"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn error_api_carries_status() {
        let err = GenerateError::Api {
            status: 429,
            message: "rate limit".into(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("rate limit"));
    }

    #[test]
    fn error_empty_response() {
        let err = GenerateError::EmptyResponse;
        assert!(err.to_string().contains("empty response"));
    }

    #[test]
    fn error_clone_and_compare() {
        let err = GenerateError::MalformedResponse("missing choices".into());
        assert_eq!(err.clone(), err);
    }
}
