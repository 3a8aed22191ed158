//! # Persisted session: `token` + `user`
//!
//! The browser keeps the bearer token and the cached user object in
//! `localStorage` under two keys, [`TOKEN_KEY`] and [`USER_KEY`]. Nothing
//! else is persisted on the client.
//!
//! [`KeyValueStore`] abstracts the storage so the same [`SessionVault`] logic
//! runs against `localStorage` in the browser and against [`crate::MemoryStore`]
//! natively and in tests.
//!
//! A session is only considered present when both keys are set and the user
//! record decodes. A half-written or corrupted session is cleared on load so
//! the next request goes out anonymous.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the JSON-encoded user.
pub const USER_KEY: &str = "user";

/// Minimal string key/value storage.
pub trait KeyValueStore: Clone + 'static {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// An authenticated session: opaque bearer token plus the cached user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Reads and writes the session through a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionVault<S> {
    store: S,
}

impl<S: KeyValueStore> SessionVault<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Load the full session. Inconsistent leftovers are cleared.
    pub fn load(&self) -> Option<Session> {
        let token = self.token();
        let user = self
            .store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());

        match (token, user) {
            (Some(token), Some(user)) => Some(Session { token, user }),
            (None, None) if self.store.get(USER_KEY).is_none() => None,
            _ => {
                self.clear();
                None
            }
        }
    }

    pub fn save(&self, session: &Session) {
        self.store.set(TOKEN_KEY, &session.token);
        self.update_user(&session.user);
    }

    /// Replace the cached user, keeping the token.
    pub fn update_user(&self, user: &User) {
        if let Ok(json) = serde_json::to_string(user) {
            self.store.set(USER_KEY, &json);
        }
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::MemoryStore;

    fn user() -> User {
        User {
            id: 7,
            name: "Lakshmi".to_string(),
            email: "lakshmi@example.com".to_string(),
            role: Role::Admin,
            created_at: None,
        }
    }

    #[test]
    fn test_save_load_clear() {
        let vault = SessionVault::new(MemoryStore::new());
        assert!(vault.load().is_none());
        assert!(vault.token().is_none());

        let session = Session {
            token: "abc.def".to_string(),
            user: user(),
        };
        vault.save(&session);

        assert_eq!(vault.token().as_deref(), Some("abc.def"));
        assert_eq!(vault.load(), Some(session));

        vault.clear();
        assert!(vault.load().is_none());
        assert!(vault.store().get(TOKEN_KEY).is_none());
        assert!(vault.store().get(USER_KEY).is_none());
    }

    #[test]
    fn test_token_without_user_is_cleared() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "orphan");
        let vault = SessionVault::new(store.clone());

        assert!(vault.load().is_none());
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_corrupted_user_is_cleared() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        store.set(USER_KEY, "{not json");
        let vault = SessionVault::new(store.clone());

        assert!(vault.load().is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[test]
    fn test_update_user_keeps_token() {
        let vault = SessionVault::new(MemoryStore::new());
        vault.save(&Session {
            token: "tok".to_string(),
            user: user(),
        });

        let mut renamed = user();
        renamed.name = "Lakshmi Devi".to_string();
        vault.update_user(&renamed);

        let session = vault.load().unwrap();
        assert_eq!(session.token, "tok");
        assert_eq!(session.user.name, "Lakshmi Devi");
    }
}
