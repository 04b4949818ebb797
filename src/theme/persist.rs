//! Theme persistence.
//!
//! One TOML file holding the last chosen mode under a fixed key. The
//! store treats every failure here as best-effort: a broken or read-only
//! config directory must never take the theme system down.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::ThemeMode;

/// Key within the file; the value is the literal string `"light"` or
/// `"dark"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeFile {
    theme: String,
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to access theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize theme file: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Default storage location: `<config_dir>/crabkit/theme.toml`.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crabkit")
        .join("theme.toml")
}

/// Read the persisted mode. `Ok(None)` when no file exists or the stored
/// value is not a recognized mode.
pub fn load(path: &Path) -> Result<Option<ThemeMode>, PersistError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    let file: ThemeFile = toml::from_str(&contents)?;
    Ok(file.theme.parse().ok())
}

/// Write the mode, creating parent directories as needed.
pub fn save(path: &Path, mode: ThemeMode) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = ThemeFile {
        theme: mode.as_str().to_string(),
    };
    let contents = toml::to_string_pretty(&file)?;
    std::fs::write(path, contents)?;
    Ok(())
}
