//! Environment variable configuration source.
//!
//! The highest-precedence layer. Variable names map to configuration keys by
//! replacing `__` with `:` (`Gemini__ApiKey` -> `Gemini:ApiKey`); matching is
//! case-insensitive, so `GEMINI__APIKEY` works as well.

use gemterm_core::config::key;
use gemterm_core::config::{ConfigSource, MemorySource};

/// Snapshot of the process environment taken at construction.
pub struct EnvSource {
    name: String,
    values: MemorySource,
}

impl EnvSource {
    /// Snapshot every environment variable.
    pub fn new() -> Self {
        Self::from_vars(process_vars(), None)
    }

    /// Snapshot only variables starting with `prefix` (case-insensitive),
    /// with the prefix removed.
    pub fn with_prefix(prefix: &str) -> Self {
        Self::from_vars(process_vars(), Some(prefix))
    }

    /// Build from explicit `(name, value)` pairs.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>, prefix: Option<&str>) -> Self {
        let name = match prefix {
            Some(p) => format!("environment ({p}*)"),
            None => "environment".to_string(),
        };
        let mut values = MemorySource::new(name.clone());
        for (var, value) in vars {
            let stripped = match prefix {
                Some(p) => match var.get(..p.len()) {
                    Some(head) if head.eq_ignore_ascii_case(p) => &var[p.len()..],
                    _ => continue,
                },
                None => var.as_str(),
            };
            if stripped.is_empty() {
                continue;
            }
            values.insert(key::from_env_name(stripped), value);
        }

        Self { name, values }
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variables whose names and values are valid Unicode.
///
/// Other variables are skipped rather than treated as errors, since
/// configuration values must be valid strings.
fn process_vars() -> impl Iterator<Item = (String, String)> {
    std::env::vars_os().filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
}

impl ConfigSource for EnvSource {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_double_underscore_maps_to_section() {
        let source = EnvSource::from_vars(vars(&[("Gemini__ApiKey", "env-key")]), None);
        assert_eq!(source.get("Gemini:ApiKey"), Some("env-key".to_string()));
    }

    #[test]
    fn test_uppercase_variable_matches() {
        let source = EnvSource::from_vars(vars(&[("GEMINI__APIKEY", "env-key")]), None);
        assert_eq!(source.get("Gemini:ApiKey"), Some("env-key".to_string()));
    }

    #[test]
    fn test_prefix_is_stripped_and_filters() {
        let source = EnvSource::from_vars(
            vars(&[
                ("GEMTERM_Gemini__ApiKey", "prefixed"),
                ("Gemini__ApiKey", "unprefixed"),
                ("GEMTERM_", "nothing after prefix"),
            ]),
            Some("gemterm_"),
        );
        assert_eq!(source.get("Gemini:ApiKey"), Some("prefixed".to_string()));
        assert_eq!(source.keys().len(), 1);
        assert!(source.name().contains("gemterm_"));
    }

    #[test]
    fn test_process_environment_snapshot() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("GEMTERM_TEST_ENV__SNAPSHOT", "present") };

        let source = EnvSource::new();
        assert_eq!(
            source.get("GEMTERM_TEST_ENV:SNAPSHOT"),
            Some("present".to_string())
        );

        // SAFETY: the variable was just set above.
        unsafe { std::env::remove_var("GEMTERM_TEST_ENV__SNAPSHOT") };
    }
}
