//! OpenAI-compatible chat-completions client.

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::retry::execute_with_retry;
use crate::{GenerateError, GenerationConfig, GenerationRequest, TextGenerator};

/// Synchronous client for any endpoint speaking the OpenAI chat-completions
/// shape (OpenAI, DeepSeek, SiliconFlow, Ollama, and compatible gateways).
///
/// The HTTP client is built once at construction with the configured
/// timeouts and pools connections across calls.
#[derive(Debug)]
pub struct OpenAiGenerator {
    config: GenerationConfig,
    client: reqwest::blocking::Client,
}

impl OpenAiGenerator {
    /// Builds the generator and its pooled HTTP client.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerateError> {
        if config.api_key.trim().is_empty() {
            return Err(GenerateError::InvalidConfig("api_key is required".into()));
        }
        if config.api_url.trim().is_empty() {
            return Err(GenerateError::InvalidConfig("api_url is required".into()));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| GenerateError::InvalidConfig(format!("http client: {e}")))?;

        Ok(OpenAiGenerator { config, client })
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        let base = self.config.api_url.trim_end_matches('/');
        format!("{base}/chat/completions")
    }

    fn send_once(&self, req: &GenerationRequest) -> Result<String, GenerateError> {
        let payload = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": req.system },
                { "role": "user", "content": req.prompt },
            ],
            "temperature": req.temperature,
            "max_tokens": req.max_tokens,
        });

        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&payload)
            .send()
            .map_err(|e| GenerateError::Transport(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response
            .json()
            .map_err(|e| GenerateError::MalformedResponse(format!("invalid json: {e}")))?;

        extract_content(&body)
    }
}

impl TextGenerator for OpenAiGenerator {
    fn generate(&self, req: &GenerationRequest) -> Result<String, GenerateError> {
        debug!(
            model = %self.config.model,
            prompt_chars = req.prompt.chars().count(),
            "generation_request"
        );

        let mut last: Option<GenerateError> = None;
        let outcome = execute_with_retry(&self.config.retry, |attempt| {
            if attempt > 0 {
                warn!(attempt, model = %self.config.model, "generation_retry");
            }
            match self.send_once(req) {
                Ok(text) => Ok(text),
                Err(e) => {
                    let message = e.to_string();
                    last = Some(e);
                    Err(message)
                }
            }
        });

        let attempts = outcome.attempts;
        match outcome.into_result() {
            Ok(text) => {
                debug!(attempts, reply_chars = text.chars().count(), "generation_success");
                Ok(text)
            }
            Err(message) => {
                let err = last.unwrap_or(GenerateError::Transport(message));
                warn!(attempts, error = %err, "generation_failed");
                Err(err)
            }
        }
    }
}

/// Pulls `choices[0].message.content` out of a chat-completions body.
fn extract_content(body: &Value) -> Result<String, GenerateError> {
    let content = body
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            GenerateError::MalformedResponse("missing choices[0].message.content".into())
        })?;

    if content.trim().is_empty() {
        return Err(GenerateError::EmptyResponse);
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GenerationConfig {
        GenerationConfig::default().with_api_key("sk-test")
    }

    // ==================== Construction Tests ====================

    #[test]
    fn rejects_missing_api_key() {
        let err = OpenAiGenerator::new(GenerationConfig::default()).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_blank_api_url() {
        let cfg = test_config().with_api_url("   ");
        let err = OpenAiGenerator::new(cfg).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidConfig(_)));
    }

    #[test]
    fn endpoint_appends_chat_completions() {
        let generator = OpenAiGenerator::new(test_config()).unwrap();
        assert_eq!(
            generator.endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let generator =
            OpenAiGenerator::new(test_config().with_api_url("http://localhost:11434/v1/"))
                .unwrap();
        assert_eq!(
            generator.endpoint(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    // ==================== Response Parsing Tests ====================

    #[test]
    fn extracts_first_choice_content() {
        let body = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "改写后的文本。" } }
            ],
            "usage": { "total_tokens": 42 }
        });
        assert_eq!(extract_content(&body).unwrap(), "改写后的文本。");
    }

    #[test]
    fn missing_choices_is_malformed() {
        let body = json!({ "id": "chatcmpl-1" });
        let err = extract_content(&body).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedResponse(_)));
    }

    #[test]
    fn empty_choice_list_is_malformed() {
        let body = json!({ "choices": [] });
        let err = extract_content(&body).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedResponse(_)));
    }

    #[test]
    fn null_content_is_malformed() {
        let body = json!({ "choices": [{ "message": { "content": null } }] });
        let err = extract_content(&body).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedResponse(_)));
    }

    #[test]
    fn blank_content_is_empty_response() {
        let body = json!({ "choices": [{ "message": { "content": "  \n " } }] });
        let err = extract_content(&body).unwrap_err();
        assert!(matches!(err, GenerateError::EmptyResponse));
    }
}
