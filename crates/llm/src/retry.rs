//! Retry logic with exponential backoff for transient failures.
//!
//! Failed generation attempts are retried with increasing delays to ride out
//! temporary trouble like network hiccups or rate limiting. Failures that
//! cannot succeed on a second try (bad key, bad request) stop the loop
//! immediately.

use std::time::Duration;

/// Configuration for retry behavior.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Base delay between retries (exponentially increased).
    pub base_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Whether to add random jitter to delays.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }
}

/// Result of a retry operation.
#[derive(Debug, Clone)]
pub struct RetryResult<T> {
    /// The final result (Ok if succeeded, Err if the loop gave up).
    pub result: Result<T, String>,
    /// Number of attempts made (1 = no retries needed).
    pub attempts: u32,
    /// Total duration spent on all attempts.
    pub total_duration: Duration,
    /// Whether the operation ultimately succeeded.
    pub succeeded: bool,
}

impl<T> RetryResult<T> {
    /// Convert to a standard Result.
    pub fn into_result(self) -> Result<T, String> {
        self.result
    }
}

/// Execute an operation with retry logic.
///
/// The operation receives the zero-based attempt number. An `Err` whose
/// message [`is_retryable_error`] rejects ends the loop at once; otherwise
/// the loop sleeps an exponentially growing delay and tries again, up to
/// `max_retries` extra attempts.
///
/// # Example
///
/// ```
/// use llm::{execute_with_retry, RetryConfig};
/// use std::time::Duration;
///
/// let config = RetryConfig::default().with_base_delay(Duration::from_millis(1));
/// let result = execute_with_retry(&config, |attempt| {
///     if attempt < 2 {
///         Err("timeout".to_string())
///     } else {
///         Ok("success")
///     }
/// });
/// assert!(result.succeeded);
/// assert_eq!(result.attempts, 3);
/// ```
pub fn execute_with_retry<T, F>(config: &RetryConfig, mut operation: F) -> RetryResult<T>
where
    F: FnMut(u32) -> Result<T, String>,
{
    let start = std::time::Instant::now();
    let mut attempts = 0;
    let mut last_error = None;

    for attempt in 0..=config.max_retries {
        attempts = attempt + 1;
        match operation(attempt) {
            Ok(value) => {
                return RetryResult {
                    result: Ok(value),
                    attempts,
                    total_duration: start.elapsed(),
                    succeeded: true,
                };
            }
            Err(error) => {
                let retryable = is_retryable_error(&error);
                last_error = Some(error);

                if !retryable || attempt == config.max_retries {
                    break;
                }
                std::thread::sleep(calculate_delay(config, attempt));
            }
        }
    }

    RetryResult {
        result: Err(last_error.unwrap_or_else(|| "all retries failed".to_string())),
        attempts,
        total_duration: start.elapsed(),
        succeeded: false,
    }
}

/// Calculate delay for a retry attempt with exponential backoff.
fn calculate_delay(config: &RetryConfig, attempt: u32) -> Duration {
    let base = config.base_delay.as_millis() as u64;
    let exponential = base.saturating_mul(2_u64.saturating_pow(attempt));
    let delay = exponential.min(config.max_delay.as_millis() as u64);

    if config.jitter {
        // Add 0-50% random jitter
        let jitter = fastrand::u64(0..=delay / 2);
        Duration::from_millis(delay + jitter)
    } else {
        Duration::from_millis(delay)
    }
}

/// Check if an error is retryable (transient).
///
/// Non-retryable errors return immediately without wasting retries.
pub fn is_retryable_error(error: &str) -> bool {
    let error_lower = error.to_lowercase();

    // Retryable errors
    if error_lower.contains("timeout")
        || error_lower.contains("connection")
        || error_lower.contains("reset")
        || error_lower.contains("temporarily")
        || error_lower.contains("unavailable")
        || error_lower.contains("rate limit")
        || error_lower.contains("too many requests")
        || error_lower.contains("overloaded")
        || error_lower.contains("capacity")
        || error_lower.contains("503") // Service Unavailable
        || error_lower.contains("502") // Bad Gateway
        || error_lower.contains("429") // Too Many Requests
        || error_lower.contains("504") // Gateway Timeout
        || error_lower.contains("408")
    // Request Timeout
    {
        return true;
    }

    // Non-retryable errors
    if error_lower.contains("401") // Unauthorized
        || error_lower.contains("403") // Forbidden
        || error_lower.contains("404") // Not Found
        || error_lower.contains("400") // Bad Request
        || error_lower.contains("invalid")
        || error_lower.contains("not found")
    {
        return false;
    }

    // Default to retryable for unknown errors
    true
}
