//! Configuration management for popfavs.
//!
//! Configuration values come from environment variables, optionally seeded
//! from a `.env` file in the local data directory. Every value has a default,
//! so running without any configuration works.
//!
//! Priority:
//! 1. Command-line flags (`--profile-dir`, handled by the binary)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Built-in defaults

use std::{env, path::PathBuf};

/// Name of the JSON file holding the favourites, inside the profile directory.
pub const FAVOURITES_FILE_NAME: &str = "favourites.json";

/// Title shown on notifications when `POPFAVS_ADDON_NAME` is not set.
pub const DEFAULT_ADDON_NAME: &str = "Popcorn Time";

const APP_DIR: &str = "popfavs";
const PROFILE_DIR_VAR: &str = "POPFAVS_PROFILE_DIR";
const ADDON_NAME_VAR: &str = "POPFAVS_ADDON_NAME";

/// Platform-specific local data directory for popfavs.
///
/// - Linux: `~/.local/share/popfavs`
/// - macOS: `~/Library/Application Support/popfavs`
/// - Windows: `%LOCALAPPDATA%/popfavs`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Loads environment variables from `<data_dir>/.env`.
///
/// A missing `.env` file is not an error. Variables already present in the
/// environment are not overridden.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or the `.env`
/// file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(format!("{}: {}", path.display(), e)),
    }
}

/// Resolves the directory where the favourites file lives.
///
/// Reads `POPFAVS_PROFILE_DIR`, falling back to [`data_dir`].
pub fn profile_dir() -> PathBuf {
    env::var_os(PROFILE_DIR_VAR)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(data_dir)
}

/// Full path of the favourites file.
pub fn favourites_path() -> PathBuf {
    profile_dir().join(FAVOURITES_FILE_NAME)
}

/// Title used for user notifications, from `POPFAVS_ADDON_NAME`.
pub fn addon_name() -> String {
    env::var(ADDON_NAME_VAR)
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ADDON_NAME.to_string())
}
