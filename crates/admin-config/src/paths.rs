//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/admin-console/`, `~/.cache/admin-console/`
//! - macOS: `~/Library/Application Support/admin-console/`, `~/Library/Caches/admin-console/`
//! - Windows: `%APPDATA%\admin-console\`, `%LOCALAPPDATA%\admin-console\`

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::APP_NAME;

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the persisted session file
pub fn session_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("session.toml"))
}
