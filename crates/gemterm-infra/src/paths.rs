//! Per-user file locations.

use std::path::PathBuf;

/// Identifier the per-user secret store is keyed to.
pub const USER_SECRETS_ID: &str = "gemterm";

/// File name of the optional settings file.
pub const SETTINGS_FILE_NAME: &str = "appsettings.json";

/// Overrides the directory holding `secrets.json`.
pub const USER_SECRETS_DIR_ENV: &str = "GEMTERM_USER_SECRETS_DIR";

const SECRETS_FILE_NAME: &str = "secrets.json";

/// Resolve the path of the per-user secrets file.
///
/// Priority:
/// 1. `GEMTERM_USER_SECRETS_DIR/secrets.json`
/// 2. `<config dir>/gemterm/user-secrets/secrets.json` (e.g. `~/.config` on Linux)
/// 3. `~/.gemterm/user-secrets/secrets.json`
/// 4. `.gemterm/user-secrets/secrets.json` relative to the current directory
pub fn resolve_user_secrets_path() -> PathBuf {
    if let Some(dir) = std::env::var_os(USER_SECRETS_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir).join(SECRETS_FILE_NAME);
    }

    let base = dirs::config_dir()
        .map(|dir| dir.join(USER_SECRETS_ID))
        .or_else(|| dirs::home_dir().map(|home| home.join(format!(".{USER_SECRETS_ID}"))))
        .unwrap_or_else(|| PathBuf::from(format!(".{USER_SECRETS_ID}")));

    base.join("user-secrets").join(SECRETS_FILE_NAME)
}

/// Default settings file: `appsettings.json` in the current directory.
pub fn default_settings_path() -> PathBuf {
    PathBuf::from(SETTINGS_FILE_NAME)
}
