//! GeminiProvider -- concrete [`LlmProvider`] for the Google Gemini API.
//!
//! Sends single-turn, non-streaming requests to
//! `/v1beta/models/{model}:generateContent`, authenticated with the
//! `x-goog-api-key` header.
//!
//! The key is converted to a sensitive [`HeaderValue`] once, at construction,
//! and never appears in `Debug` output or logs.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use gemterm_core::llm::provider::LlmProvider;
use gemterm_types::llm::{CompletionRequest, CompletionResponse, FinishReason, LlmError, Usage};

use super::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Google Gemini chat-completion provider.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: HeaderValue,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl GeminiProvider {
    /// Create a provider for `model`.
    ///
    /// Validates the key and builds the HTTP client; no request is sent.
    ///
    /// # Errors
    ///
    /// [`LlmError::Configuration`] if the key is blank, cannot be sent as a
    /// header value, or the HTTP client cannot be built.
    pub fn new(api_key: SecretString, model: String, timeout: Duration) -> Result<Self, LlmError> {
        let raw = api_key.expose_secret().trim();
        if raw.is_empty() {
            return Err(LlmError::Configuration("API key is empty".to_string()));
        }

        let mut header = HeaderValue::from_str(raw).map_err(|_| {
            LlmError::Configuration("API key contains characters not allowed in an HTTP header".to_string())
        })?;
        header.set_sensitive(true);

        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: header,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
            timeout,
        })
    }

    /// Override the base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    fn transport_error(&self, err: reqwest::Error) -> LlmError {
        if err.is_timeout() {
            LlmError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            LlmError::Provider {
                message: format!("HTTP request failed: {err}"),
            }
        }
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Map a non-success response to an [`LlmError`], keeping the provider's
/// message text.
fn status_error(status: StatusCode, headers: &HeaderMap, body: &str) -> LlmError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();
    let message = envelope
        .as_ref()
        .map(|e| e.error.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string());

    let invalid_key = envelope.as_ref().is_some_and(|e| {
        e.error.status == "INVALID_ARGUMENT" && e.error.has_reason("API_KEY_INVALID")
    });

    match status.as_u16() {
        401 | 403 => LlmError::AuthenticationFailed { message },
        400 if invalid_key => LlmError::AuthenticationFailed { message },
        429 => LlmError::RateLimited {
            retry_after_ms: headers
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .and_then(|secs| secs.checked_mul(1000)),
        },
        503 => LlmError::Overloaded(message),
        _ => LlmError::Provider {
            message: format!("HTTP {status}: {message}"),
        },
    }
}

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = GenerateContentRequest::user_prompt(&request.prompt);
        let url = self.url(&request.model);
        debug!(model = %request.model, prompt_len = request.prompt.len(), "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let error_body = response.text().await.map_err(|e| {
                warn!(%status, "failed to read error response body: {e}");
                self.transport_error(e)
            })?;
            return Err(status_error(status, &headers, &error_body));
        }

        let bytes = response.bytes().await.map_err(|e| self.transport_error(e))?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        if parsed.candidates.is_empty() {
            return Err(match parsed.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => LlmError::Blocked { reason },
                None => LlmError::Deserialization("response contained no candidates".to_string()),
            });
        }

        let content = parsed.text().unwrap_or_default();
        let finish_reason = parsed
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .and_then(|r| r.parse().ok())
            .unwrap_or(FinishReason::Stop);
        let usage = parsed
            .usage_metadata
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        debug!(
            finish_reason = %finish_reason,
            output_tokens = usage.output_tokens,
            "generateContent completed"
        );

        Ok(CompletionResponse {
            content,
            model: parsed.model_version.unwrap_or_else(|| request.model.clone()),
            finish_reason,
            usage,
        })
    }
}
