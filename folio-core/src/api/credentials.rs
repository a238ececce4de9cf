//! Bearer-token storage.
//!
//! The token is the single piece of state that outlives the process. It
//! lives in a plain token file read once at construction; every gateway
//! reads the in-memory copy, and only login/logout write it.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

/// Owns the bearer credential: an in-memory copy plus an optional
/// file-backed persistent copy.
#[derive(Debug)]
pub struct CredentialStore {
    path: Option<PathBuf>,
    token: RwLock<Option<String>>,
}

impl CredentialStore {
    /// Opens a store backed by `path`, loading any previously saved token.
    pub fn new(path: PathBuf) -> Self {
        let token = fs::read_to_string(&path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            path: Some(path),
            token: RwLock::new(token),
        }
    }

    /// A store with no persistence, for tests and one-shot use.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            token: RwLock::new(None),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().expect("credential lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().expect("credential lock poisoned").is_some()
    }

    /// Saves a new token in memory and on disk.
    pub fn store(&self, token: &str) -> io::Result<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, token)?;
        }
        *self.token.write().expect("credential lock poisoned") = Some(token.to_string());
        Ok(())
    }

    /// Removes the token from memory and disk. Clearing an already-empty
    /// store is fine.
    pub fn clear(&self) -> io::Result<()> {
        if let Some(path) = &self.path {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }
        *self.token.write().expect("credential lock poisoned") = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_store_and_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("token");

        let store = CredentialStore::new(path.clone());
        assert!(!store.is_authenticated());

        store.store("tok123").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok123"));

        // A fresh instance sees the persisted token.
        let reloaded = CredentialStore::new(path);
        assert_eq!(reloaded.token().as_deref(), Some("tok123"));
    }

    #[test]
    fn test_clear_removes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("token");

        let store = CredentialStore::new(path.clone());
        store.store("tok123").unwrap();
        store.clear().unwrap();

        assert!(!store.is_authenticated());
        assert!(!path.exists());

        // Clearing again is a no-op, not an error.
        store.clear().unwrap();
    }

    #[test]
    fn test_whitespace_only_file_is_not_a_token() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("token");
        std::fs::write(&path, "\n  \n").unwrap();

        let store = CredentialStore::new(path);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_in_memory_store() {
        let store = CredentialStore::in_memory();
        store.store("tok").unwrap();
        assert!(store.is_authenticated());
        store.clear().unwrap();
        assert!(store.token().is_none());
    }
}
