//! Configuration sources and the default chain.
//!
//! Precedence, lowest to highest: settings file, user secrets, environment.

pub mod env;
pub mod json_file;

use std::path::Path;

use tracing::debug;

use gemterm_core::config::{ConfigSource, LayeredConfig};
use gemterm_types::error::ConfigError;

use crate::secret::UserSecretsStore;

pub use env::EnvSource;
pub use json_file::JsonFileSource;

/// Stack the three standard sources in precedence order.
pub fn build_config_chain<F, S, E>(settings: F, secrets: S, env: E) -> LayeredConfig
where
    F: ConfigSource + 'static,
    S: ConfigSource + 'static,
    E: ConfigSource + 'static,
{
    LayeredConfig::new()
        .with_source(settings)
        .with_source(secrets)
        .with_source(env)
}

/// Load the settings file and user secrets from disk and snapshot the
/// environment.
///
/// Missing files are empty layers. A file that exists but cannot be read or
/// parsed is an error.
pub async fn load_default_config(
    settings_path: &Path,
    secrets_path: &Path,
) -> Result<LayeredConfig, ConfigError> {
    let settings = JsonFileSource::load(settings_path).await?;
    let secrets = UserSecretsStore::open(secrets_path).await?;
    debug!(
        settings_entries = settings.len(),
        secret_entries = secrets.len(),
        "configuration files loaded"
    );

    Ok(build_config_chain(settings, secrets, EnvSource::new()))
}
