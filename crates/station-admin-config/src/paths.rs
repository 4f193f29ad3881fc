//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/station-admin/`, `~/.cache/station-admin/`
//! - macOS: `~/Library/Application Support/station-admin/`, `~/Library/Caches/station-admin/`
//! - Windows: `%APPDATA%\station-admin\`, `%LOCALAPPDATA%\station-admin\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "station-admin";
const SESSION_FILE: &str = "session.json";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    Ok(dir)
}

/// Get the application cache directory
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {:?}", dir))?;
    Ok(dir)
}

/// Get path to the persisted session (signed-in user)
pub fn session_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(SESSION_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_path_lives_in_config_dir() {
        let path = session_path().unwrap();
        assert!(path.ends_with(SESSION_FILE));
        assert!(path.parent().unwrap().ends_with(APP_NAME));
    }
}
