//! Session startup: resolve settings, then construct the provider handle.

use tracing::info;

use gemterm_types::error::StartupError;
use gemterm_types::llm::LlmError;

use crate::config::LayeredConfig;
use crate::llm::BoxLlmProvider;
use crate::settings::ChatSettings;

/// Resolve chat settings from `config` and build the session's provider.
///
/// `connect` is only called once the credential has been resolved, so a
/// missing key never reaches the provider. A `connect` failure is fatal to
/// startup and is returned as [`StartupError::Connect`].
pub fn open_session<F>(config: &LayeredConfig, connect: F) -> Result<super::SessionLoop, StartupError>
where
    F: FnOnce(ChatSettings) -> Result<BoxLlmProvider, LlmError>,
{
    let settings = ChatSettings::resolve(config)?;
    let model = settings.model.clone();

    let provider = connect(settings).map_err(StartupError::Connect)?;
    info!(provider = provider.name(), model = %model, "chat client ready");

    Ok(super::SessionLoop::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;

    use secrecy::ExposeSecret;

    use crate::config::MemorySource;
    use crate::session::testing::{MockProvider, RecordingOutput, ScriptedInput};

    fn config(key: Option<&str>) -> LayeredConfig {
        let mut source = MemorySource::new("test");
        if let Some(key) = key {
            source.insert("Gemini:ApiKey", key);
        }
        LayeredConfig::new().with_source(source)
    }

    #[test]
    fn test_missing_credential_never_connects() {
        for key in [None, Some(""), Some("   ")] {
            let connected = Cell::new(false);
            let result = open_session(&config(key), |_| {
                connected.set(true);
                Ok(BoxLlmProvider::new(MockProvider::new()))
            });

            assert!(matches!(result, Err(StartupError::MissingCredential { .. })));
            assert!(!connected.get(), "key {key:?}");
        }
    }

    #[tokio::test]
    async fn test_empty_credential_makes_zero_requests() {
        let provider = MockProvider::new();
        let handle = provider.clone();
        let result = open_session(&config(Some("")), move |_| Ok(BoxLlmProvider::new(handle)));

        assert!(result.is_err());
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_connect_receives_resolved_settings() {
        let layered = config(Some("AIza-123"))
            .with_source(MemorySource::new("env").with("Gemini:TimeoutSeconds", "15"));

        let session = open_session(&layered, |settings| {
            assert_eq!(settings.api_key.expose_secret(), "AIza-123");
            assert_eq!(settings.model, "gemini-2.5-flash");
            assert_eq!(settings.request_timeout, Duration::from_secs(15));
            Ok(BoxLlmProvider::new(MockProvider::new()))
        })
        .unwrap();

        assert_eq!(session.provider().name(), "mock");
    }

    #[test]
    fn test_connect_failure_is_fatal() {
        let result = open_session(&config(Some("key with spaces")), |_| {
            Err(LlmError::Configuration("invalid API key format".to_string()))
        });

        match result {
            Err(StartupError::Connect(LlmError::Configuration(msg))) => {
                assert_eq!(msg, "invalid API key format")
            }
            _ => panic!("expected a connect error"),
        }
    }

    #[test]
    fn test_invalid_timeout_is_reported_before_connecting() {
        let layered = config(Some("k"))
            .with_source(MemorySource::new("env").with("Gemini:TimeoutSeconds", "never"));
        let connected = Cell::new(false);

        let result = open_session(&layered, |_| {
            connected.set(true);
            Ok(BoxLlmProvider::new(MockProvider::new()))
        });

        assert!(matches!(result, Err(StartupError::InvalidSetting(_))));
        assert!(!connected.get());
    }

    #[tokio::test]
    async fn test_opened_session_runs() {
        let provider = MockProvider::new().respond("hi there");
        let handle = provider.clone();
        let mut session =
            open_session(&config(Some("k")), move |_| Ok(BoxLlmProvider::new(handle))).unwrap();

        let mut output = RecordingOutput::default();
        let summary = session
            .run(&mut ScriptedInput::lines(["hello", ""]), &mut output)
            .await
            .unwrap();

        assert_eq!(summary.completed_turns, 1);
        assert_eq!(provider.prompts(), vec!["hello".to_string()]);
    }
}
