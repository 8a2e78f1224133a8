//! LayeredConfig -- an ordered stack of configuration sources.
//!
//! Sources are added lowest-precedence first. A lookup walks the stack from
//! the most recently added source downwards and returns the first source that
//! defines the key, so later sources override earlier ones on collision.

use std::sync::Arc;

use super::source::{ConfigSource, DynConfigSource};

/// Configuration assembled from multiple sources, last-added wins.
///
/// Default stack built by the infra layer:
/// `[JsonFileSource, UserSecretsStore, EnvSource]`
#[derive(Clone, Default)]
pub struct LayeredConfig {
    sources: Vec<DynConfigSource>,
}

impl LayeredConfig {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Builder-style: add a source on top of the existing ones.
    pub fn with_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.push(Arc::new(source));
        self
    }

    /// Add an already shared source on top of the existing ones.
    pub fn push(&mut self, source: DynConfigSource) {
        self.sources.push(source);
    }

    /// Resolve a key. The topmost source that defines it wins, even when
    /// the value it defines is empty.
    pub fn get(&self, key: &str) -> Option<String> {
        self.winning(key).map(|(_, value)| value)
    }

    /// Name of the source that supplies `key`, if any.
    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.winning(key).map(|(source, _)| source.name())
    }

    /// Source names, lowest precedence first.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    fn winning(&self, key: &str) -> Option<(&DynConfigSource, String)> {
        self.sources
            .iter()
            .rev()
            .find_map(|source| source.get(key).map(|value| (source, value)))
    }
}

impl std::fmt::Debug for LayeredConfig {
    // Values may be secrets; only the stack shape is shown.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredConfig")
            .field("sources", &self.source_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::memory::MemorySource;

    fn three_layers() -> LayeredConfig {
        LayeredConfig::new()
            .with_source(
                MemorySource::new("file")
                    .with("Gemini:ApiKey", "file-key")
                    .with("Only:InFile", "f"),
            )
            .with_source(MemorySource::new("secrets").with("Gemini:ApiKey", "secret-key"))
            .with_source(MemorySource::new("environment").with("Only:InEnv", "e"))
    }

    #[test]
    fn test_later_source_overrides_earlier() {
        let config = three_layers();
        assert_eq!(config.get("Gemini:ApiKey"), Some("secret-key".to_string()));
        assert_eq!(config.source_of("Gemini:ApiKey"), Some("secrets"));
    }

    #[test]
    fn test_environment_overrides_everything() {
        let config = three_layers()
            .with_source(MemorySource::new("environment-2").with("GEMINI:APIKEY", "env-key"));
        assert_eq!(config.get("gemini:apikey"), Some("env-key".to_string()));
    }

    #[test]
    fn test_falls_through_to_lower_sources() {
        let config = three_layers();
        assert_eq!(config.get("Only:InFile"), Some("f".to_string()));
        assert_eq!(config.get("Only:InEnv"), Some("e".to_string()));
    }

    #[test]
    fn test_missing_key() {
        let config = three_layers();
        assert_eq!(config.get("Nope"), None);
        assert_eq!(config.source_of("Nope"), None);
    }

    #[test]
    fn test_empty_value_in_top_layer_still_wins() {
        let config = three_layers()
            .with_source(MemorySource::new("environment").with("Gemini:ApiKey", ""));
        assert_eq!(config.get("Gemini:ApiKey"), Some(String::new()));
    }

    #[test]
    fn test_empty_stack() {
        let config = LayeredConfig::new();
        assert!(config.is_empty());
        assert_eq!(config.get("Gemini:ApiKey"), None);
    }

    #[test]
    fn test_debug_hides_values() {
        let debug = format!("{:?}", three_layers());
        assert!(debug.contains("secrets"));
        assert!(!debug.contains("secret-key"));
    }
}
