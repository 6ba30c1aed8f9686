use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::{io::Write, os::unix::fs::OpenOptionsExt};

use kharcha_client::Identity;

const SESSION_FILE: &str = "session.json";

/// The persisted session. Identity and token live in one record so logout
/// clears both with a single file removal, never leaving one behind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionRecord {
    pub identity: Option<Identity>,
    pub token: Option<String>,
}

impl SessionRecord {
    pub fn is_complete(&self) -> bool {
        self.identity.is_some() && self.token.is_some()
    }
}

/// File-backed session persistence, scoped to this application's config
/// directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    pub fn open() -> Result<Self> {
        Ok(Self {
            root: dirs::config_dir()
                .context("Cannot determine config directory")?
                .join("kharcha"),
        })
    }

    /// A store rooted at an arbitrary directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn session_path(&self) -> PathBuf {
        self.root.join(SESSION_FILE)
    }

    /// Load the persisted record. Any failure — missing file, storage
    /// unavailable, corrupt contents — reads as "never logged in".
    pub fn load(&self) -> Option<SessionRecord> {
        let raw = std::fs::read_to_string(self.session_path()).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Persist the record. Durable once this returns.
    pub fn save(&self, record: &SessionRecord) -> Result<()> {
        let raw = serde_json::to_string(record)?;
        secure_write(&self.session_path(), &raw)
    }

    /// Remove the record. Idempotent; an absent file is not an error.
    pub fn clear(&self) -> Result<()> {
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

fn secure_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?
            .write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: "u1".to_string(),
            name: "Asha Rao".to_string(),
            mobile: "9999999999".to_string(),
        }
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_root(dir.path());

        store
            .save(&SessionRecord {
                identity: Some(identity()),
                token: Some("abc123".to_string()),
            })
            .unwrap();

        let record = store.load().unwrap();
        assert!(record.is_complete());
        assert_eq!(record.identity.unwrap().name, "Asha Rao");
        assert_eq!(record.token.unwrap(), "abc123");
    }

    #[test]
    fn missing_record_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_root(dir.path());
        assert!(store.load().is_none());
    }

    #[test]
    fn corrupt_record_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_root(dir.path());
        std::fs::write(store.session_path(), "{not json").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_root(dir.path());

        store.save(&SessionRecord::default()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());
    }
}
