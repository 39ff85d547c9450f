//! Offline generators for tests and generator-less deployments.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::{GenerateError, GenerationRequest, TextGenerator};

/// Always answers with the same fixed reply.
///
/// Useful for deterministic tests of the orchestrators: craft a reply that
/// keeps (or drops) protected terms and assert on the path taken.
pub struct StaticGenerator {
    reply: String,
    calls: AtomicU32,
}

impl StaticGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        StaticGenerator {
            reply: reply.into(),
            calls: AtomicU32::new(0),
        }
    }

    /// How many times `generate` has been called.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl TextGenerator for StaticGenerator {
    fn generate(&self, _req: &GenerationRequest) -> Result<String, GenerateError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.reply.clone())
    }
}

/// Always fails with a transport error; exercises fallback paths.
#[derive(Debug, Default)]
pub struct FailingGenerator;

impl TextGenerator for FailingGenerator {
    fn generate(&self, _req: &GenerationRequest) -> Result<String, GenerateError> {
        Err(GenerateError::Transport("connection refused".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn static_generator_repeats_its_reply() {
        let generator = StaticGenerator::new("固定回复");
        let req = GenerationRequest::new("system", "prompt");
        assert_eq!(generator.generate(&req).unwrap(), "固定回复");
        assert_eq!(generator.generate(&req).unwrap(), "固定回复");
        assert_eq!(generator.calls(), 2);
    }

    #[test]
    fn failing_generator_always_errors() {
        let generator = FailingGenerator;
        let req = GenerationRequest::new("system", "prompt");
        let err = generator.generate(&req).unwrap_err();
        assert!(matches!(err, GenerateError::Transport(_)));
    }

    #[test]
    fn generators_work_behind_trait_objects() {
        let shared: Arc<dyn TextGenerator> = Arc::new(StaticGenerator::new("ok"));
        let req = GenerationRequest::new("s", "p");
        assert_eq!(shared.generate(&req).unwrap(), "ok");
    }
}
