//! Optional JSON settings file source.
//!
//! Reads `appsettings.json` (or the path given with `--settings`) once and
//! flattens it into `Parent:Child` keys. A missing file is an empty source;
//! a file that exists but does not hold a JSON object is an error.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use gemterm_core::config::key::flatten_json;
use gemterm_core::config::{ConfigSource, MemorySource};
use gemterm_types::error::ConfigError;

/// Parse JSON text into flattened `(key, value)` pairs.
///
/// Whitespace-only content is treated as an empty object, and a leading
/// UTF-8 byte-order mark is ignored.
pub(crate) fn parse_json_object(path: &Path, content: &str) -> Result<Vec<(String, String)>, ConfigError> {
    let content = content.trim_start_matches('\u{feff}');
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if !value.is_object() {
        return Err(ConfigError::InvalidRoot {
            path: path.to_path_buf(),
        });
    }

    Ok(flatten_json(&value))
}

/// Read a file, mapping "not found" to `None`.
pub(crate) async fn read_optional(path: &Path) -> Result<Option<String>, ConfigError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!("No file found at {}, treating as empty", path.display());
            Ok(None)
        }
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Settings file layer (lowest precedence).
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
    values: MemorySource,
}

impl JsonFileSource {
    /// Load the settings file at `path`; a missing file yields an empty source.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = read_optional(&path).await?.unwrap_or_default();
        Self::from_content(path, &content)
    }

    /// Build a source from already-read file content.
    pub fn from_content(path: impl Into<PathBuf>, content: &str) -> Result<Self, ConfigError> {
        let path = path.into();
        let pairs = parse_json_object(&path, content)?;
        let name = format!("settings file ({})", path.display());

        Ok(Self {
            values: MemorySource::from_pairs(name.clone(), pairs),
            name,
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
}

impl ConfigSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key)
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys()
    }
}
