//! ConfigSource trait definition.

use std::sync::Arc;

/// A single layer of configuration (settings file, user secrets, environment).
///
/// Sources load their values once when they are constructed; lookups are
/// served from that snapshot and never touch IO. Keys are matched
/// case-insensitively (see [`super::key::normalize`]).
pub trait ConfigSource: Send + Sync {
    /// Human-readable source name used in diagnostics (e.g., "environment").
    fn name(&self) -> &str;

    /// Look up a key. Returns `None` if this source does not define it.
    ///
    /// A key defined with an empty value returns `Some("")`.
    fn get(&self, key: &str) -> Option<String>;

    /// All keys this source defines, in their original spelling.
    fn keys(&self) -> Vec<String>;
}

/// Shared, type-erased configuration source.
pub type DynConfigSource = Arc<dyn ConfigSource>;
