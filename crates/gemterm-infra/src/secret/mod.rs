//! Secret store implementations.
//!
//! - `user_secrets`: per-user JSON secrets file, readable as a configuration
//!   layer and writable through the `secrets` commands

pub mod user_secrets;

pub use user_secrets::UserSecretsStore;
