//! Typed chat settings resolved from layered configuration.

use std::time::Duration;

use secrecy::SecretString;
use tracing::debug;

use gemterm_types::error::SettingsError;

use crate::config::LayeredConfig;

/// Configuration key holding the Gemini API key.
pub const API_KEY_SETTING: &str = "Gemini:ApiKey";

/// Optional per-request timeout, in whole seconds.
pub const TIMEOUT_SETTING: &str = "Gemini:TimeoutSeconds";

/// The model every request is sent to.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Timeout applied when `Gemini:TimeoutSeconds` is not set.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Everything needed to construct the chat-completion client.
pub struct ChatSettings {
    pub api_key: SecretString,
    pub model: String,
    pub request_timeout: Duration,
}

impl ChatSettings {
    /// Resolve settings from configuration.
    ///
    /// The API key must be present and contain something other than
    /// whitespace. The timeout, when given, must be a positive integer.
    pub fn resolve(config: &LayeredConfig) -> Result<Self, SettingsError> {
        let api_key = config
            .get(API_KEY_SETTING)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| SettingsError::MissingCredential {
                key: API_KEY_SETTING.to_string(),
            })?;

        debug!(
            source = config.source_of(API_KEY_SETTING).unwrap_or("unknown"),
            "resolved {API_KEY_SETTING}"
        );

        let request_timeout = match config.get(TIMEOUT_SETTING) {
            None => DEFAULT_TIMEOUT,
            Some(raw) => parse_timeout(&raw)?,
        };

        Ok(Self {
            api_key: SecretString::from(api_key),
            model: DEFAULT_MODEL.to_string(),
            request_timeout,
        })
    }
}

impl std::fmt::Debug for ChatSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSettings")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, SettingsError> {
    let invalid = || SettingsError::InvalidValue {
        key: TIMEOUT_SETTING.to_string(),
        value: raw.to_string(),
        reason: "expected a positive whole number of seconds".to_string(),
    };

    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(secs) => Ok(Duration::from_secs(secs)),
    }
}
