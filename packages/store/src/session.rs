//! # Session persistence
//!
//! The client keeps two entries in persistent storage: the bearer token under
//! [`TOKEN_KEY`] and a JSON copy of the signed-in [`User`] under [`USER_KEY`].
//! [`SessionStore`] wraps any [`KeyValueStore`] backend and exposes typed
//! accessors for both.
//!
//! Backends live in sibling modules ([`crate::MemoryStore`],
//! [`crate::FileStore`] and, in the browser, `LocalStorageStore`).

use crate::models::User;

pub const TOKEN_KEY: &str = "access_token";
pub const USER_KEY: &str = "user";

/// Minimal string key/value storage.
///
/// Implementations swallow backend errors: reads return `None`, writes are best effort.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Typed access to the stored session (token + cached user).
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    backend: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The stored bearer token, if any. Blank values count as absent.
    pub fn token(&self) -> Option<String> {
        self.backend
            .get(TOKEN_KEY)
            .filter(|t| !t.trim().is_empty())
    }

    /// The cached user record. A corrupted entry is treated as absent.
    pub fn cached_user(&self) -> Option<User> {
        let raw = self.backend.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding unreadable cached user: {}", e);
                None
            }
        }
    }

    /// Persist a fresh login: token and user together.
    pub fn save_login(&self, token: &str, user: &User) {
        self.backend.set(TOKEN_KEY, token);
        self.save_user(user);
    }

    /// Overwrite the cached user record.
    pub fn save_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.backend.set(USER_KEY, &json),
            Err(e) => tracing::error!("Failed to serialise user: {}", e),
        }
    }

    /// Remove every stored session entry.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::MemoryStore;

    fn sample_user() -> User {
        User {
            id: "u1".into(),
            name: "An".into(),
            email: "an@example.com".into(),
            role: Role::Admin,
            balance: 75_000,
            avatar: Some("https://cdn.example/a.png".into()),
        }
    }

    #[test]
    fn test_empty_session() {
        let session = SessionStore::new(MemoryStore::new());
        assert!(session.token().is_none());
        assert!(session.cached_user().is_none());
    }

    #[test]
    fn test_save_login_and_clear() {
        let backend = MemoryStore::new();
        let session = SessionStore::new(backend.clone());

        session.save_login("token-123", &sample_user());
        assert_eq!(session.token().as_deref(), Some("token-123"));
        assert_eq!(session.cached_user(), Some(sample_user()));
        assert_eq!(backend.len(), 2);

        session.clear();
        assert!(session.token().is_none());
        assert!(session.cached_user().is_none());
        assert!(backend.is_empty());
    }

    #[test]
    fn test_save_user_updates_cache_only() {
        let session = SessionStore::new(MemoryStore::new());
        session.save_login("t", &sample_user());

        let mut user = sample_user();
        user.debit(25_000);
        session.save_user(&user);

        assert_eq!(session.token().as_deref(), Some("t"));
        assert_eq!(session.cached_user().map(|u| u.balance), Some(50_000));
    }

    #[test]
    fn test_corrupted_user_is_absent() {
        let backend = MemoryStore::new();
        backend.set(USER_KEY, "{not json");
        backend.set(TOKEN_KEY, "  ");
        let session = SessionStore::new(backend);
        assert!(session.cached_user().is_none());
        assert!(session.token().is_none());
    }
}
