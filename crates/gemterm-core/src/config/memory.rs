//! In-memory configuration source.

use std::collections::BTreeMap;

use super::key;
use super::source::ConfigSource;

/// A configuration source backed by a map held in memory.
///
/// Entries are keyed by their normalized form; the original spelling is kept
/// for `keys()`. Inserting a key that differs only in case replaces the
/// earlier entry.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    entries: BTreeMap<String, (String, String)>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Build a source from `(key, value)` pairs. Later pairs win on collision.
    pub fn from_pairs<K, V>(name: impl Into<String>, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut source = Self::new(name);
        for (k, v) in pairs {
            source.insert(k, v);
        }
        source
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.entries
            .insert(key::normalize(&key), (key, value.into()));
    }

    /// Remove a key. Returns the removed value, if any.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(&key::normalize(key)).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(original key, value)` pairs in normalized-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl ConfigSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .get(&key::normalize(key))
            .map(|(_, v)| v.clone())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.values().map(|(k, _)| k.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_is_case_insensitive() {
        let source = MemorySource::new("test").with("Gemini:ApiKey", "abc");
        assert_eq!(source.get("gemini:apikey"), Some("abc".to_string()));
        assert_eq!(source.get("GEMINI:APIKEY"), Some("abc".to_string()));
    }

    #[test]
    fn test_insert_replaces_differently_cased_key() {
        let mut source = MemorySource::new("test");
        source.insert("Gemini:ApiKey", "old");
        source.insert("GEMINI:APIKEY", "new");
        assert_eq!(source.len(), 1);
        assert_eq!(source.get("Gemini:ApiKey"), Some("new".to_string()));
        assert_eq!(source.keys(), vec!["GEMINI:APIKEY".to_string()]);
    }

    #[test]
    fn test_empty_value_is_present() {
        let source = MemorySource::new("test").with("Gemini:ApiKey", "");
        assert_eq!(source.get("Gemini:ApiKey"), Some(String::new()));
    }

    #[test]
    fn test_remove() {
        let mut source = MemorySource::from_pairs("test", [("A", "1"), ("B", "2")]);
        assert_eq!(source.remove("a"), Some("1".to_string()));
        assert_eq!(source.remove("a"), None);
        assert_eq!(source.len(), 1);
    }
}
