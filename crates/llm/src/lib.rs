//! # Text-Generation Collaborator
//!
//! The optional external half of the revision engine: a small synchronous
//! client for OpenAI-compatible chat-completions endpoints, plus the retry
//! machinery that keeps transient API failures from surfacing.
//!
//! ## What we do
//!
//! - Define [`TextGenerator`], the seam the orchestrators call through; any
//!   implementation can stand in for the real API.
//! - Ship [`OpenAiGenerator`] for providers speaking the chat-completions
//!   shape (OpenAI, DeepSeek, SiliconFlow, Ollama, compatible gateways).
//! - Retry transient failures with exponential backoff and jitter; contract
//!   failures such as a rejected key fail fast.
//!
//! ## Invariants worth knowing
//!
//! - Everything is synchronous and bounded: one call blocks for at most
//!   `request_timeout` per attempt, `max_retries + 1` attempts.
//! - Generators never panic on API trouble; every failure is a
//!   [`GenerateError`] value the caller can fall back from.

mod client;
mod config;
mod error;
mod retry;
mod stub;

pub use client::OpenAiGenerator;
pub use config::{GenerationConfig, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
pub use error::GenerateError;
pub use retry::{execute_with_retry, is_retryable_error, RetryConfig, RetryResult};
pub use stub::{FailingGenerator, StaticGenerator};

/// One generation request: a system role, a user prompt, and the sampling
/// caps the provider should honor.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenerationRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl GenerationRequest {
    /// A request with the default sampling parameters.
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        GenerationRequest {
            system: system.into(),
            prompt: prompt.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// The seam between the orchestrators and any external rewriting service.
///
/// Implementations must be cheap to share; the engine holds one behind an
/// `Arc` for the lifetime of a run and may call it from any thread.
pub trait TextGenerator: Send + Sync {
    /// Produces the rewritten text for `req`, or the failure the caller
    /// should fall back from.
    fn generate(&self, req: &GenerationRequest) -> Result<String, GenerateError>;
}
