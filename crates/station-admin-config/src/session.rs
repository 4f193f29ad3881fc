//! Session persistence
//!
//! The signed-in user record is the only state that survives a restart. It is
//! written as JSON under the `user` key when the user logs in and the file is
//! removed on logout. Entity collections are never persisted.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use station_admin_client::User;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

const SESSION_VERSION: u32 = 1;

/// Session metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// On-disk session document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    pub meta: SessionMeta,
    pub user: User,
}

/// Key-value store for the signed-in user, backed by a single file
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform config location
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(paths::session_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted user, `None` when nobody is signed in
    pub fn load(&self) -> Result<Option<User>> {
        if !self.path.exists() {
            log::info!("No existing session found at {:?}", self.path);
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file: {:?}", self.path))?;
        let session: PersistedSession = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {:?}", self.path))?;

        log::info!("Loaded session from {:?}", self.path);
        Ok(Some(session.user))
    }

    /// Persist `user`, replacing any previous session
    pub fn save(&self, user: &User) -> Result<()> {
        let session = PersistedSession {
            meta: SessionMeta {
                last_modified: Utc::now(),
                version: SESSION_VERSION,
            },
            user: user.clone(),
        };
        let content =
            serde_json::to_string_pretty(&session).context("Failed to serialize session")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write session file: {:?}", self.path))?;

        log::info!("Saved session to {:?}", self.path);
        Ok(())
    }

    /// Forget the persisted user. Removing a missing session is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("Removed session {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove session file: {:?}", self.path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            email: Some("a@b.com".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_session_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));

        store.save(&user()).unwrap();
        assert_eq!(store.load().unwrap(), Some(user()));

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"user\""));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        store.save(&user()).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_session_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert!(SessionStore::new(path).load().is_err());
    }
}
