//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each key
//! as a small file. It is used on desktop to keep the session across app
//! restarts, the way the browser build relies on `localStorage`.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── access_token      # bearer token
//! └── user              # cached user record (JSON)
//! ```
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) joined with `shoptft` to obtain a
//! platform-appropriate base directory.

use std::path::PathBuf;

use crate::session::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.base.join(safe)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            tracing::warn!("Failed to write session key {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};
    use crate::session::SessionStore;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("shoptft_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let session = SessionStore::new(FileStore::new(dir.clone()));
        let user = User {
            id: "u1".into(),
            name: "An".into(),
            email: "an@example.com".into(),
            role: Role::Customer,
            balance: 20_000,
            avatar: None,
        };
        session.save_login("tok", &user);

        // Re-open from same directory
        let reopened = SessionStore::new(FileStore::new(dir.clone()));
        assert_eq!(reopened.token().as_deref(), Some("tok"));
        assert_eq!(reopened.cached_user(), Some(user));

        reopened.clear();
        assert!(reopened.token().is_none());
        assert!(reopened.cached_user().is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_keys_are_sanitised() {
        let store = FileStore::new(PathBuf::from("/tmp/base"));
        assert_eq!(store.entry_path("../evil"), PathBuf::from("/tmp/base/___evil"));
    }
}
