//! Per-user secrets file.
//!
//! Stores secrets as a flat JSON object (`{"Gemini:ApiKey": "..."}`) outside
//! the project directory, so keys never end up next to the settings file.
//! Nested objects written by hand are accepted and flattened on load.
//!
//! Every change writes a fresh temporary file next to the store and renames
//! it into place. On Unix the file is created with mode `0600` and is never
//! readable by other users, even briefly.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use gemterm_core::config::{ConfigSource, MemorySource};
use gemterm_core::secret::SecretStore;
use gemterm_types::error::{ConfigError, SecretError};
use gemterm_types::secret::{Redacted, SecretEntry};

use crate::config::json_file::{parse_json_object, read_optional};
use crate::paths::resolve_user_secrets_path;

const SOURCE_NAME: &str = "user secrets";

/// File-backed per-user secret store.
pub struct UserSecretsStore {
    path: PathBuf,
    values: MemorySource,
}

impl UserSecretsStore {
    /// Open the store at the default per-user location.
    pub async fn open_default() -> Result<Self, ConfigError> {
        Self::open(resolve_user_secrets_path()).await
    }

    /// Open the store at `path`. A missing file is an empty store; the file
    /// is only created on the first write.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let pairs = match read_optional(&path).await? {
            Some(content) => parse_json_object(&path, &content)?,
            None => Vec::new(),
        };

        Ok(Self {
            values: MemorySource::from_pairs(SOURCE_NAME, pairs),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    async fn persist(&self) -> Result<(), ConfigError> {
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&parent).await.map_err(write_err)?;

        let flat: BTreeMap<&str, &str> = self.values.iter().collect();
        let mut json = serde_json::to_string_pretty(&flat)
            .map_err(|e| write_err(std::io::Error::other(e)))?;
        json.push('\n');

        let target = self.path.clone();
        tokio::task::spawn_blocking(move || replace_file(&parent, &target, json.as_bytes()))
            .await
            .map_err(|e| write_err(std::io::Error::other(e)))?
            .map_err(write_err)?;

        debug!(path = %self.path.display(), entries = self.values.len(), "user secrets saved");
        Ok(())
    }
}

/// Write `contents` to a private temporary file in `dir`, then rename it
/// over `target`. Readers see either the old file or the new one.
fn replace_file(dir: &Path, target: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(target).map_err(|e| e.error)?;
    Ok(())
}

impl ConfigSource for UserSecretsStore {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key)
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys()
    }
}

impl SecretStore for UserSecretsStore {
    async fn set(&mut self, key: &str, value: &str) -> Result<(), SecretError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(SecretError::EmptyKey);
        }
        self.values.insert(key, value);
        self.persist().await?;
        Ok(())
    }

    async fn remove(&mut self, key: &str) -> Result<(), SecretError> {
        if self.values.remove(key).is_none() {
            return Err(SecretError::NotFound(key.to_string()));
        }
        self.persist().await?;
        Ok(())
    }

    async fn clear(&mut self) -> Result<(), SecretError> {
        self.values.clear();
        self.persist().await?;
        Ok(())
    }

    fn list(&self) -> Vec<SecretEntry> {
        self.values
            .iter()
            .map(|(key, value)| SecretEntry {
                key: key.to_string(),
                value: Redacted::new(value),
            })
            .collect()
    }
}
