//! Secret store trait definition.

use gemterm_types::error::SecretError;
use gemterm_types::secret::SecretEntry;

/// Trait for writable per-user secret storage.
///
/// The read side of a store is its [`ConfigSource`](crate::config::ConfigSource)
/// implementation; this trait covers management from the `secrets` commands.
/// Keys are case-insensitive: writing a key that differs only in case from an
/// existing one replaces it.
pub trait SecretStore: Send + Sync {
    /// Store a secret value, persisting the store.
    fn set(
        &mut self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), SecretError>> + Send;

    /// Delete a secret. Returns `SecretError::NotFound` if it does not exist.
    fn remove(
        &mut self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), SecretError>> + Send;

    /// Delete every secret.
    fn clear(&mut self) -> impl std::future::Future<Output = Result<(), SecretError>> + Send;

    /// All stored secrets, values wrapped in [`Redacted`](gemterm_types::secret::Redacted).
    fn list(&self) -> Vec<SecretEntry>;
}
