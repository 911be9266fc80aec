//! Per-user directories.
//!
//! | purpose         | macOS                           | Linux                                     | Windows          |
//! |-----------------|---------------------------------|-------------------------------------------|------------------|
//! | data (logs)     | `~/Library/Application Support` | `$XDG_DATA_HOME` or `~/.local/share`      | `%APPDATA%`      |
//! | cache (settings)| `~/Library/Caches`              | `$XDG_CACHE_HOME` or `~/.cache`           | `%LOCALAPPDATA%` |
//!
//! Data paths get a `decision-coin/` suffix; the settings loader adds its own
//! directory under the cache root.

use std::io;
use std::path::PathBuf;

const APP_NAME: &str = "decision-coin";
const LOG_DIR: &str = "logs";

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn home_join(rel: &str) -> Option<PathBuf> {
    env_path("HOME").map(|home| home.join(rel))
}

fn data_root() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        home_join("Library/Application Support")
    } else if cfg!(target_os = "windows") {
        env_path("APPDATA")
    } else if cfg!(unix) {
        env_path("XDG_DATA_HOME").or_else(|| home_join(".local/share"))
    } else {
        None
    }
}

/// Root of the per-user cache; settings live below it.
pub fn get_cache_dir() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        home_join("Library/Caches")
    } else if cfg!(target_os = "windows") {
        env_path("LOCALAPPDATA").or_else(|| env_path("APPDATA"))
    } else if cfg!(unix) {
        env_path("XDG_CACHE_HOME").or_else(|| home_join(".cache"))
    } else {
        None
    }
}

pub fn get_log_dir() -> Option<PathBuf> {
    data_root().map(|root| root.join(APP_NAME).join(LOG_DIR))
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = get_log_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no per-user data directory"))?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
