use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use super::paths::get_cache_dir;
use crate::kernel::services::ports::Settings;

pub const SETTINGS_ENV: &str = "DECISION_COIN_SETTINGS";
const SETTINGS_DIR: &str = ".decision-coin";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: io::Error },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "failed to read settings {}: {}", path.display(), source)
            }
            SettingsError::Parse { path, source } => {
                write!(f, "invalid settings {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
        }
    }
}

/// `$DECISION_COIN_SETTINGS` when set, otherwise `<cache dir>/.decision-coin/settings.json`.
pub fn get_settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(SETTINGS_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn load_settings() -> Result<Settings, SettingsError> {
    match get_settings_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(Settings::default()),
    }
}

/// A missing file is not an error: defaults apply.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if data.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_json::from_str(&data).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
