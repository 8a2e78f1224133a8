//! LLM request/response types for gemterm.
//!
//! These types model the single operation the console needs from a
//! chat-completion provider: submit prompt text, receive completed text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single stateless, non-streaming completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
        }
    }
}

/// Response from a provider for a completed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
    pub finish_reason: FinishReason,
    pub usage: Usage,
}

/// Reason why the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Recitation,
    Other(String),
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinishReason::Stop => write!(f, "stop"),
            FinishReason::MaxTokens => write!(f, "max_tokens"),
            FinishReason::Safety => write!(f, "safety"),
            FinishReason::Recitation => write!(f, "recitation"),
            FinishReason::Other(other) => write!(f, "{other}"),
        }
    }
}

impl FromStr for FinishReason {
    type Err = std::convert::Infallible;

    /// Accepts both the snake_case names above and Gemini's
    /// SCREAMING_CASE values (`STOP`, `MAX_TOKENS`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "stop" => FinishReason::Stop,
            "max_tokens" => FinishReason::MaxTokens,
            "safety" => FinishReason::Safety,
            "recitation" => FinishReason::Recitation,
            _ => FinishReason::Other(s.to_string()),
        })
    }
}

/// Token usage reported for a completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Errors from chat-completion provider operations.
///
/// The `Display` output of every variant is what the session prints after
/// `Error during API call:`, so variants that originate from the provider
/// keep its message text.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("provider overloaded: {0}")]
    Overloaded(String),

    #[error("authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("prompt blocked by provider: {reason}")]
    Blocked { reason: String },

    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("client configuration error: {0}")]
    Configuration(String),
}
