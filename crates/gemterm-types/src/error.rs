use std::path::PathBuf;

use thiserror::Error;

use crate::llm::LlmError;

/// Errors from loading or writing configuration sources.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("{path} must contain a JSON object at its root")]
    InvalidRoot { path: PathBuf },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from resolving typed settings out of layered configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("the '{key}' setting was not found")]
    MissingCredential { key: String },

    #[error("invalid value '{value}' for '{key}': {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Errors related to secret store operations.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret '{0}' not found")]
    NotFound(String),

    #[error("secret key must not be empty")]
    EmptyKey,

    #[error(transparent)]
    Storage(#[from] ConfigError),
}

/// Errors that prevent a chat session from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("the '{key}' setting was not found")]
    MissingCredential { key: String },

    #[error(transparent)]
    InvalidSetting(SettingsError),

    #[error("failed to initialize the chat client: {0}")]
    Connect(#[source] LlmError),
}

impl From<SettingsError> for StartupError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::MissingCredential { key } => StartupError::MissingCredential { key },
            other => StartupError::InvalidSetting(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_error_display() {
        let err = ConfigError::Parse {
            path: PathBuf::from("appsettings.json"),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse appsettings.json: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_missing_credential_maps_to_startup_variant() {
        let err: StartupError = SettingsError::MissingCredential {
            key: "Gemini:ApiKey".to_string(),
        }
        .into();
        assert!(matches!(err, StartupError::MissingCredential { ref key } if key == "Gemini:ApiKey"));
    }

    #[test]
    fn test_invalid_value_maps_to_invalid_setting() {
        let err: StartupError = SettingsError::InvalidValue {
            key: "Gemini:TimeoutSeconds".to_string(),
            value: "soon".to_string(),
            reason: "expected a positive whole number of seconds".to_string(),
        }
        .into();
        assert!(matches!(err, StartupError::InvalidSetting(_)));
        assert!(err.to_string().contains("soon"));
    }

    #[test]
    fn test_connect_error_display() {
        let err = StartupError::Connect(LlmError::Configuration("bad key".to_string()));
        assert_eq!(
            err.to_string(),
            "failed to initialize the chat client: client configuration error: bad key"
        );
    }
}
